use std::sync::Arc;

use tracing::{Level, debug, instrument};

use crate::{
    catalog::{Catalog, Project},
    media::Slide,
};

// render surface
//
// everything the controller needs from the page.  implementations skip any
// call whose target is missing instead of failing, so every method here is
// infallible.
pub trait RenderSurface {
    fn set_text(&mut self, title: &str, description: &str);

    // replaces whatever slides (and their indicators) were shown before
    fn set_slides(&mut self, slides: Vec<Slide>);

    // marks one slide and the indicator at the same position as active
    fn set_active(&mut self, index: usize);

    fn set_visible(&mut self, visible: bool);

    fn set_scroll_locked(&mut self, locked: bool);
}

/// The part of the controller that changes while the page is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub active: Option<String>,
    pub cursor: usize,
}

impl Session {
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}

// portfolio modal controller
//
// owns the session for one modal.  the active project is tracked by id and
// resolved against the catalog on demand, and the cursor is always a valid
// index into that project's media while the modal is open.
#[derive(Debug)]
pub struct PortfolioController<S: RenderSurface> {
    catalog: Arc<Catalog>,
    session: Session,
    surface: S,
}

impl<S: RenderSurface> PortfolioController<S> {
    pub fn new(catalog: Arc<Catalog>, surface: S) -> Self {
        PortfolioController {
            catalog,
            session: Session::default(),
            surface,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn active_project(&self) -> Option<&Project> {
        self.session
            .active
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    pub fn cursor(&self) -> usize {
        self.session.cursor
    }

    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn open(&mut self, project_id: &str) {
        let Some(project) = self.catalog.get(project_id) else {
            debug!("ignoring unknown project");
            return;
        };

        let slides = project
            .media
            .iter()
            .enumerate()
            .map(|(index, url)| Slide::new(&project.title, index, url))
            .collect();

        self.surface.set_text(&project.title, &project.description);
        self.surface.set_slides(slides);

        self.session = Session {
            active: Some(project_id.to_owned()),
            cursor: 0,
        };

        self.surface.set_active(0);
        self.surface.set_visible(true);
        self.surface.set_scroll_locked(true);
    }

    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn close(&mut self) {
        if !self.session.is_open() {
            return;
        }

        self.session = Session::default();

        self.surface.set_visible(false);
        self.surface.set_scroll_locked(false);
    }

    // a click that reached the overlay.  the page lets it keep bubbling, so
    // the caller reports whether it started inside the modal content, and
    // only clicks on the dark background close the modal
    pub fn overlay_click(&mut self, on_content: bool) {
        if !on_content {
            self.close();
        }
    }

    pub fn next(&mut self) {
        let Some(len) = self.media_len() else {
            return;
        };

        self.show((self.session.cursor + 1) % len);
    }

    pub fn prev(&mut self) {
        let Some(len) = self.media_len() else {
            return;
        };

        self.show((self.session.cursor + len - 1) % len);
    }

    // indices come from the rendered indicators, so anything out of range
    // means the caller is out of sync with the session and is dropped
    pub fn go_to(&mut self, index: usize) {
        let Some(len) = self.media_len() else {
            return;
        };

        if index >= len {
            debug!(index, len, "ignoring out of range slide");
            return;
        }

        self.show(index);
    }

    fn media_len(&self) -> Option<usize> {
        self.active_project().map(|project| project.media.len())
    }

    fn show(&mut self, index: usize) {
        self.session.cursor = index;
        self.surface.set_active(index);
    }
}
