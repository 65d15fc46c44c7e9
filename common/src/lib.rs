// site logic
//
// everything here is independent of the browser so it can be exercised with
// plain unit tests.  the web app supplies the page through the RenderSurface
// and PreferenceStore traits.
pub mod catalog;
pub mod config;
pub mod counter;
pub mod hue;
pub mod media;
pub mod menu;
pub mod portfolio;
pub mod theme;
