pub const HOME_STYLES: &str = r#"
/* Landing Page Styles */

section {
  padding: var(--space-16) 0;
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-8);
  text-align: center;
}

.accent-text {
  color: var(--accent);
}

/* Hero Section */
.hero {
  min-height: calc(100vh - var(--header-height));
  display: flex;
  align-items: center;
  text-align: center;
}

.hero-content {
  max-width: 820px;
  margin: 0 auto;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 800;
  letter-spacing: -0.02em;
  margin-bottom: var(--space-4);
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
  flex-wrap: wrap;
}

/* Services */
.services-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: var(--space-6);
}

.service-card {
  padding: var(--space-8);
}

.service-card h3 {
  margin-bottom: var(--space-2);
}

.service-card p {
  color: var(--text-secondary);
}

/* Stats */
.stats-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: var(--space-6);
}

.stat-card {
  padding: var(--space-8);
  text-align: center;
}

.stat-value {
  font-size: 2.75rem;
  font-weight: 800;
  color: var(--accent);
}

.stat-label {
  color: var(--text-secondary);
}

/* Portfolio */
.portfolio-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: var(--space-6);
}

.portfolio-card {
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.portfolio-card:hover {
  transform: translateY(-4px);
  box-shadow: var(--accent-glow);
}

.portfolio-card img {
  width: 100%;
  aspect-ratio: 3 / 2;
  object-fit: cover;
  display: block;
}

.portfolio-card-info {
  padding: var(--space-4) var(--space-6);
}

.portfolio-card-info p {
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

/* Contact */
.contact-form {
  max-width: 640px;
  margin: 0 auto;
  padding: var(--space-8);
}

.site-footer {
  padding: var(--space-8) 0;
  text-align: center;
  color: var(--text-tertiary);
  border-top: 1px solid var(--border);
}
"#;

pub const MODAL_STYLES: &str = r#"
/* Portfolio modal */
.portfolio-modal {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-6);
  background-color: var(--overlay);
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.portfolio-modal.active {
  opacity: 1;
  pointer-events: auto;
}

.portfolio-modal .modal-content {
  position: relative;
  width: 100%;
  max-width: 960px;
  max-height: 90vh;
  overflow-y: auto;
  padding: var(--space-6);
}

.modal-close {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  z-index: 2;
}

.modal-title {
  font-size: 1.75rem;
  font-weight: 700;
  margin-top: var(--space-6);
}

.modal-description {
  color: var(--text-secondary);
  margin-top: var(--space-2);
}

/* Carousel */
.carousel {
  position: relative;
}

.carousel-slides {
  position: relative;
  aspect-ratio: 3 / 2;
  border-radius: var(--radius-2xl);
  overflow: hidden;
}

.carousel-slide {
  position: absolute;
  inset: 0;
  opacity: 0;
  transition: opacity var(--transition-slow) var(--easing-standard);
}

.carousel-slide.active {
  opacity: 1;
  z-index: 1;
}

.carousel-slide img,
.carousel-slide video {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: var(--radius-2xl);
}

.carousel-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  z-index: 2;
}

.carousel-prev {
  left: var(--space-4);
}

.carousel-next {
  right: var(--space-4);
}

.carousel-indicators {
  display: flex;
  justify-content: center;
  gap: var(--space-2);
  margin-top: var(--space-4);
}

.carousel-indicator {
  width: 10px;
  height: 10px;
  border-radius: var(--radius-full);
  background-color: var(--border);
  cursor: pointer;
  transition: width var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.carousel-indicator.active {
  width: 28px;
  background-color: var(--accent);
}
"#;
