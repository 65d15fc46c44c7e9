use std::collections::HashMap;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

/// A single portfolio entry as shown in the modal.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub media: Vec<String>,
}

// entry as written in the site config, where the id lives next to the record
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ProjectEntry {
    pub id: String,
    #[serde(flatten)]
    pub project: Project,
}

// portfolio catalog
//
// built once at startup and never mutated afterwards.  the declaration order
// is kept so the grid on the page matches the config file, while lookups by
// id go through the index.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<ProjectEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    #[instrument(level=Level::DEBUG, skip_all)]
    pub fn new(entries: Vec<ProjectEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (pos, entry) in entries.iter().enumerate() {
            // the carousel wraps modulo the media count, which must never be zero
            if entry.project.media.is_empty() {
                bail!("project {} has no media", entry.id);
            }

            if index.insert(entry.id.clone(), pos).is_some() {
                bail!("duplicate project id {}", entry.id);
            }
        }

        debug!(projects = entries.len(), "built portfolio catalog");

        Ok(Catalog { entries, index })
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.index.get(id).map(|pos| &self.entries[*pos].project)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Projects in declaration order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Project)> {
        self.entries
            .iter()
            .map(|entry| (entry.id.as_str(), &entry.project))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, media: &[&str]) -> ProjectEntry {
        ProjectEntry {
            id: id.to_owned(),
            project: Project {
                title: id.to_uppercase(),
                description: format!("about {id}"),
                media: media.iter().map(|m| m.to_string()).collect(),
            },
        }
    }

    #[test]
    fn looks_up_projects_by_id() {
        let catalog = Catalog::new(vec![entry("redesign", &["a.png", "b.png"]), entry("reel-series", &["r.mp4"])])
            .expect("valid catalog");

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("redesign"));
        assert_eq!(catalog.get("reel-series").map(|p| p.media.len()), Some(1));
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn keeps_declaration_order() {
        let catalog = Catalog::new(vec![entry("zeta", &["z.png"]), entry("alpha", &["a.png"]), entry("mid", &["m.png"])])
            .expect("valid catalog");

        let ids: Vec<&str> = catalog.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn rejects_project_without_media() {
        let err = Catalog::new(vec![entry("empty", &[])]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![entry("twice", &["a.png"]), entry("twice", &["b.png"])]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).expect("empty catalog");
        assert!(catalog.is_empty());
    }
}
