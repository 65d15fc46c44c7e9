// color tokens for both themes
//
// dark is the default, body.light-mode swaps the surfaces and text.  the
// accent hue is rewritten every frame by the hue animation through
// --current-hue on the document root.
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Hue animation */
  --hue-start: 180;
  --hue-end: 300;
  --current-hue: var(--hue-start);

  /* Accent, derived from the animated hue */
  --accent: hsl(var(--current-hue), 100%, 50%);
  --accent-soft: hsla(var(--current-hue), 100%, 50%, 0.15);
  --accent-glow: 0 0 24px hsla(var(--current-hue), 100%, 50%, 0.35);

  /* Dark theme surfaces */
  --background: #070707;
  --surface: rgba(255, 255, 255, 0.05);
  --surface-strong: rgba(255, 255, 255, 0.1);
  --border: rgba(255, 255, 255, 0.12);
  --overlay: rgba(0, 0, 0, 0.85);

  /* Text Colors */
  --text-primary: #FFFFFF;
  --text-secondary: rgba(255, 255, 255, 0.7);
  --text-tertiary: rgba(255, 255, 255, 0.5);

  /* Layout */
  --header-height: 72px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-xl: 16px;
  --radius-2xl: 24px;
  --radius-full: 9999px;

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --transition-slow: 400ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

body.light-mode {
  --background: #F5F5F7;
  --surface: rgba(255, 255, 255, 0.7);
  --surface-strong: rgba(255, 255, 255, 0.9);
  --border: rgba(7, 7, 7, 0.1);
  --overlay: rgba(245, 245, 247, 0.9);

  --accent: hsl(var(--current-hue), 80%, 40%);
  --accent-soft: hsla(var(--current-hue), 80%, 40%, 0.12);

  --text-primary: #070707;
  --text-secondary: rgba(7, 7, 7, 0.7);
  --text-tertiary: rgba(7, 7, 7, 0.5);
}"#;
