/// Open/closed state of the collapsible navigation shown on small screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    // clicks on the menu itself or its button are handled by those elements
    pub fn document_click(&mut self, in_menu: bool, on_button: bool) {
        if !in_menu && !on_button {
            self.close();
        }
    }

    pub fn class(&self) -> &'static str {
        if self.open { "mobile-menu flex" } else { "mobile-menu hidden" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_toggles() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.class(), "mobile-menu flex");

        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.class(), "mobile-menu hidden");
    }

    #[test]
    fn outside_click_closes() {
        let mut menu = MobileMenu::default();
        menu.toggle();

        menu.document_click(true, false);
        assert!(menu.is_open());
        menu.document_click(false, true);
        assert!(menu.is_open());

        menu.document_click(false, false);
        assert!(!menu.is_open());
    }

    #[test]
    fn closing_twice_is_fine() {
        let mut menu = MobileMenu::default();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
