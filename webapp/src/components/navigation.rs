use std::sync::Arc;

use dioxus::prelude::*;

use sphere_common::{config::Site, menu::MobileMenu, theme::ThemeSwitcher};

use crate::{
    common::storage::LocalPreferences,
    components::icons::{MenuIcon, ThemeIcon},
};

pub type Themes = Signal<ThemeSwitcher<LocalPreferences>>;

// where the last click started, relative to the mobile menu
//
// the menu and its button mark the click on the way up, the page root reads
// and clears the marks once the click reaches it
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuClick {
    pub in_menu: bool,
    pub on_button: bool,
}

const SECTIONS: [(&str, &str); 5] = [
    ("Services", "#services"),
    ("Results", "#stats"),
    ("Portfolio", "#portfolio"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

#[component]
fn ThemeToggle(id: &'static str) -> Element {
    let mut themes = use_context::<Themes>();
    let icon = themes.read().current().toggle_icon();

    rsx! {
        button {
            id,
            class: "icon-button",
            "aria-label": "Toggle theme",
            onclick: move |_| {
                themes.with_mut(|t| t.toggle());
            },
            ThemeIcon { icon }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let site = use_context::<Arc<Site>>();
    let themes = use_context::<Themes>();
    let mut menu = use_context::<Signal<MobileMenu>>();
    let mut click = use_context::<Signal<MenuClick>>();

    let theme = themes.read().current();
    let logo = site.config.logos.for_theme(theme).to_owned();

    rsx! {
        header { class: "site-header glass",
            div { class: "container nav-container",
                a { class: "logo", href: "#home",
                    img { id: "image", src: "{logo}", alt: "{site.config.brand}" }
                    span { "{site.config.brand}" }
                }

                nav { class: "nav-links",
                    for (name, href) in SECTIONS {
                        a { class: "nav-link", href, "{name}" }
                    }
                    ThemeToggle { id: "theme-toggle-desktop" }
                }

                div { class: "nav-mobile-controls",
                    ThemeToggle { id: "theme-toggle-mobile" }
                    button {
                        id: "mobile-menu-btn",
                        class: "icon-button",
                        "aria-label": "Menu",
                        onclick: move |_| {
                            click.with_mut(|c| c.on_button = true);
                            menu.with_mut(|m| m.toggle());
                        },
                        MenuIcon {}
                    }
                }
            }

            div {
                id: "mobile-menu",
                class: "{menu.read().class()}",
                onclick: move |_| click.with_mut(|c| c.in_menu = true),
                for (name, href) in SECTIONS {
                    a {
                        class: "nav-link mobile-link",
                        href,
                        onclick: move |_| menu.with_mut(|m| m.close()),
                        "{name}"
                    }
                }
            }
        }
    }
}
