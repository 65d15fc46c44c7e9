use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    catalog::{Catalog, ProjectEntry},
    counter::Stat,
    hue::HueCycle,
    theme::Logos,
};

// the configuration the web app ships with
pub const EMBEDDED_CONFIG: &str = include_str!("../config/site.toml");

// site configuration
//
// everything the page needs that is not markup: branding, animation tuning,
// the headline stats and the portfolio projects
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    pub brand: String,

    // local storage key for the light/dark flag
    #[serde(default = "default_theme_key")]
    pub theme_key: String,

    pub logos: Logos,

    #[serde(default)]
    pub hue: HueCycle,

    #[serde(default)]
    pub counters: CounterConfig,

    #[serde(default)]
    pub stats: Vec<Stat>,

    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct CounterConfig {
    // frames needed to count up to the target
    pub speed: u32,

    // visible fraction of a counter that starts it
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            speed: 200,
            threshold: 0.5,
        }
    }
}

fn default_theme_key() -> String {
    String::from("theme")
}

// as with the server config, the table lives under [config] so the file can
// carry other tables without confusing the parser
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

/// Parsed configuration plus the catalog built from it.
#[derive(Debug)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Arc<Catalog>,
}

#[instrument(level=Level::DEBUG, skip_all)]
pub fn read_config(doc: &str) -> Result<Site> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    let catalog =
        Catalog::new(data.config.projects.clone()).context("invalid portfolio projects")?;

    debug!(
        projects = catalog.len(),
        stats = data.config.stats.len(),
        "successfully parsed site config"
    );

    Ok(Site {
        config: data.config,
        catalog: Arc::new(catalog),
    })
}

pub fn embedded_site() -> Result<Site> {
    read_config(EMBEDDED_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let site = embedded_site().expect("embedded config");

        assert_eq!(site.config.brand, "SocialSphere");
        assert_eq!(site.config.theme_key, "theme");
        assert_eq!(site.config.hue.period_ms, 15000.0);
        assert_eq!(site.config.counters.speed, 200);
        assert_eq!(site.config.stats.len(), 4);

        let ids: Vec<&str> = site.catalog.iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![
                "video-campaign",
                "redesign",
                "ugc-sample",
                "ad-creative",
                "reel-series",
                "visual-identity",
            ]
        );

        let reels = site.catalog.get("reel-series").expect("reel-series");
        assert_eq!(reels.title, "Reel Series");
        assert_eq!(reels.media.len(), 3);
    }

    #[test]
    fn optional_tables_fall_back_to_defaults() {
        let site = read_config(
            r#"
            [config]
            brand = "Tiny"

            [config.logos]
            light = "l.png"
            dark = "d.png"
            "#,
        )
        .expect("minimal config");

        assert_eq!(site.config.theme_key, "theme");
        assert_eq!(site.config.hue, HueCycle::default());
        assert_eq!(site.config.counters, CounterConfig::default());
        assert!(site.catalog.is_empty());
        assert!(site.config.stats.is_empty());
    }

    #[test]
    fn stat_suffix_is_optional() {
        let site = read_config(
            r#"
            [config]
            brand = "Tiny"

            [config.logos]
            light = "l.png"
            dark = "d.png"

            [[config.stats]]
            label = "Clients"
            target = 12
            "#,
        )
        .expect("config with stat");

        assert_eq!(site.config.stats[0].suffix, "");
        assert_eq!(site.config.stats[0].target, 12);
    }

    #[test]
    fn rejects_project_without_media() {
        let err = read_config(
            r#"
            [config]
            brand = "Tiny"

            [config.logos]
            light = "l.png"
            dark = "d.png"

            [[config.projects]]
            id = "empty"
            title = "Empty"
            description = "nothing here"
            media = []
            "#,
        )
        .unwrap_err();

        assert!(format!("{err:#}").contains("has no media"));
    }

    #[test]
    fn rejects_malformed_document() {
        let err = read_config("[config\nbrand = ").unwrap_err();
        assert!(err.to_string().contains("failed to parse site config"));
    }
}
