use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

/// Browser-local key/value storage for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&mut self, key: &str, value: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    // stored flag wins, anything unrecognised falls through to the system setting
    pub fn resolve(stored: Option<&str>, prefers_light: bool) -> Self {
        match stored.and_then(Theme::from_flag) {
            Some(theme) => theme,
            None if prefers_light => Theme::Light,
            None => Theme::Dark,
        }
    }

    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    /// Icon shown on the toggle, which points at the theme you would switch to.
    pub fn toggle_icon(self) -> ToggleIcon {
        match self {
            Theme::Light => ToggleIcon::Moon,
            Theme::Dark => ToggleIcon::Sun,
        }
    }

    // stroke color for the chevron drawn inside styled select inputs
    pub fn arrow_color(self) -> &'static str {
        match self {
            Theme::Light => "#070707",
            Theme::Dark => "#FFFFFF",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

// select arrow
//
// the chevron is an inline data url and only its stroke color follows the
// theme.  the color is escaped the way encodeURIComponent would escape it.
pub fn select_arrow_background(theme: Theme) -> String {
    let color = theme.arrow_color().replace('#', "%23");

    format!(
        "url('data:image/svg+xml;utf8,<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"{color}\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\"><path d=\"m6 9 6 6 6-6\"/></svg>')"
    )
}

/// Logo URLs, one per theme.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Logos {
    pub light: String,
    pub dark: String,
}

impl Logos {
    pub fn for_theme(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => self.light.as_str(),
            Theme::Dark => self.dark.as_str(),
        }
    }
}

// theme switcher
//
// keeps the current theme and writes every change through to the preference
// store.  the page side effects (body class, logo, icon) are derived from the
// returned theme by the caller.
#[derive(Debug)]
pub struct ThemeSwitcher<P: PreferenceStore> {
    key: String,
    current: Theme,
    store: P,
}

impl<P: PreferenceStore> ThemeSwitcher<P> {
    #[instrument(level=Level::DEBUG, skip(store))]
    pub fn initialize(key: &str, store: P, prefers_light: bool) -> Self {
        let stored = store.load(key);
        let current = Theme::resolve(stored.as_deref(), prefers_light);

        debug!(?stored, %current, "resolved theme");

        let mut switcher = ThemeSwitcher {
            key: key.to_owned(),
            current,
            store,
        };

        // the resolved theme is persisted even when it came from the system setting
        switcher.apply(current);
        switcher
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn apply(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.store.save(&self.key, theme.flag());
        theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.apply(self.current.toggled())
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStore {
        values: HashMap<String, String>,
        writes: usize,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn save(&mut self, key: &str, value: &str) {
            self.writes += 1;
            self.values.insert(key.to_owned(), value.to_owned());
        }
    }

    // a browser with storage switched off: nothing reads back, writes vanish
    #[derive(Debug, Default)]
    struct UnavailableStore;

    impl PreferenceStore for UnavailableStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&mut self, _key: &str, _value: &str) {}
    }

    fn store_with(flag: &str) -> MemoryStore {
        let mut store = MemoryStore::default();
        store.values.insert("theme".to_owned(), flag.to_owned());
        store
    }

    #[test]
    fn stored_flag_beats_system_preference() {
        assert_eq!(Theme::resolve(Some("light"), false), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), true), Theme::Dark);
    }

    #[test]
    fn missing_or_garbage_flag_uses_system_preference() {
        assert_eq!(Theme::resolve(None, true), Theme::Light);
        assert_eq!(Theme::resolve(None, false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("LIGHT"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some(""), true), Theme::Light);
    }

    #[test]
    fn initialize_persists_resolved_theme() {
        let switcher = ThemeSwitcher::initialize("theme", MemoryStore::default(), true);

        assert_eq!(switcher.current(), Theme::Light);
        assert_eq!(switcher.store().load("theme").as_deref(), Some("light"));
        assert_eq!(switcher.store().writes, 1);
    }

    #[test]
    fn initialize_reads_existing_flag() {
        let switcher = ThemeSwitcher::initialize("theme", store_with("dark"), true);
        assert_eq!(switcher.current(), Theme::Dark);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut switcher = ThemeSwitcher::initialize("theme", store_with("light"), false);

        assert_eq!(switcher.toggle(), Theme::Dark);
        assert_eq!(switcher.store().load("theme").as_deref(), Some("dark"));

        assert_eq!(switcher.toggle(), Theme::Light);
        assert_eq!(switcher.store().load("theme").as_deref(), Some("light"));
        assert_eq!(switcher.store().writes, 3);
    }

    #[test]
    fn unavailable_storage_still_themes_the_page() {
        let mut switcher = ThemeSwitcher::initialize("theme", UnavailableStore, true);
        assert_eq!(switcher.current(), Theme::Light);

        assert_eq!(switcher.toggle(), Theme::Dark);
        assert_eq!(switcher.toggle(), Theme::Light);

        let switcher = ThemeSwitcher::initialize("theme", UnavailableStore, false);
        assert_eq!(switcher.current(), Theme::Dark);
    }

    #[test]
    fn icon_and_logo_follow_theme() {
        let logos = Logos {
            light: "/assets/SS_LOGO_S.PNG".to_owned(),
            dark: "/assets/hh.png".to_owned(),
        };

        assert_eq!(Theme::Light.toggle_icon(), ToggleIcon::Moon);
        assert_eq!(Theme::Dark.toggle_icon(), ToggleIcon::Sun);
        assert_eq!(logos.for_theme(Theme::Light), "/assets/SS_LOGO_S.PNG");
        assert_eq!(logos.for_theme(Theme::Dark), "/assets/hh.png");
    }

    #[test]
    fn select_arrow_encodes_theme_color() {
        let light = select_arrow_background(Theme::Light);
        let dark = select_arrow_background(Theme::Dark);

        assert!(light.contains("stroke=\"%23070707\""));
        assert!(dark.contains("stroke=\"%23FFFFFF\""));
        assert!(!light.contains('#'));
        assert!(light.starts_with("url('data:image/svg+xml;utf8,"));
    }
}
