pub const NAV_STYLES: &str = r#"
/* Header and navigation */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  border-radius: 0;
  border-width: 0 0 1px 0;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.logo {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-weight: 700;
  font-size: 1.25rem;
}

.logo img {
  height: 36px;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--accent);
}

.nav-mobile-controls {
  display: none;
  gap: var(--space-2);
}

.mobile-menu {
  flex-direction: column;
  gap: var(--space-4);
  padding: var(--space-6);
}

.mobile-menu.flex {
  display: flex;
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .nav-mobile-controls {
    display: flex;
  }

  .hero-title {
    font-size: 2.5rem;
  }
}
"#;
