use constcat::concat;

mod components;
mod home;
mod nav;
mod variables;

use components::BASE_COMPONENTS;
use home::{HOME_STYLES, MODAL_STYLES};
use nav::NAV_STYLES;
use variables::CSS_VARIABLES;

// everything the page needs, injected once by the App component
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    NAV_STYLES,
    HOME_STYLES,
    MODAL_STYLES
);
