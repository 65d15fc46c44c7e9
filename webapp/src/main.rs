#![allow(non_snake_case)]
use std::{rc::Rc, sync::Arc};

use dioxus::prelude::*;
use gloo_console::error as console_error;
use gloo_timers::future::TimeoutFuture;
use tracing::{Level, info};
use wasm_bindgen::{JsCast, closure::Closure};

use sphere_common::{
    config::{Site, embedded_site},
    hue::HueClock,
    menu::MobileMenu,
    portfolio::PortfolioController,
    theme::ThemeSwitcher,
};

mod common;
use common::{FRAME_MS, dom, storage::LocalPreferences, style};

mod components;
use components::{
    modal::{ModalView, Portfolio, PortfolioModal, SignalSurface},
    navigation::{MenuClick, NavBar, Themes},
};

mod home;
use home::Home;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    let site = embedded_site().expect("failed to load site config");
    info!(
        brand = %site.config.brand,
        projects = site.catalog.len(),
        "starting site"
    );

    dioxus::LaunchBuilder::new().with_context(Arc::new(site)).launch(App);
}

// the color sweep runs for the lifetime of the page and never touches the
// modal; its only output is --current-hue on the document root
fn use_hue_animation(site: &Site) {
    let cycle = site.config.hue;

    use_future(move || async move {
        let mut clock = HueClock::default();
        loop {
            if let Some(now) = dom::now_ms() {
                let hue = cycle.hue_at(clock.elapsed(now));
                dom::set_root_property("--current-hue", &hue.to_string());
            }
            TimeoutFuture::new(FRAME_MS).await;
        }
    });
}

type KeyListener = Closure<dyn FnMut(web_sys::KeyboardEvent)>;

// escape closes the portfolio modal from anywhere on the page
fn use_escape_to_close(mut portfolio: Portfolio) {
    let listener = use_hook(move || {
        let closure = KeyListener::new(
            move |evt: web_sys::KeyboardEvent| {
                if evt.key() == "Escape" && portfolio.peek().session().is_open() {
                    portfolio.with_mut(|ctl| ctl.close());
                }
            },
        );

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .unwrap_or_else(|err| console_error!(format!("Failed to add keydown listener: {err:?}")));
        }

        Rc::new(closure)
    });

    use_drop(move || {
        let closure: &KeyListener = &listener;
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document
                .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .unwrap_or_else(|err| console_error!(format!("Failed to remove keydown listener: {err:?}")));
        }
    });
}

#[component]
pub fn App() -> Element {
    let site = use_context::<Arc<Site>>();

    let view = use_signal(ModalView::default);
    let portfolio: Portfolio = use_context_provider({
        let catalog = site.catalog.clone();
        move || Signal::new(PortfolioController::new(catalog, SignalSurface::new(view)))
    });

    let themes: Themes = use_context_provider({
        let key = site.config.theme_key.clone();
        move || Signal::new(ThemeSwitcher::initialize(&key, LocalPreferences, dom::prefers_light()))
    });

    let mut menu = use_context_provider(|| Signal::new(MobileMenu::default()));
    let mut click = use_context_provider(|| Signal::new(MenuClick::default()));

    // body class follows the theme, including the one resolved at startup
    use_effect(move || dom::set_light_mode(themes.read().current().is_light()));

    use_hue_animation(&site);
    use_escape_to_close(portfolio);

    rsx! {
        style { "{style::SITE_STYLES}" }
        div {
            class: "site",
            onclick: move |_| {
                let origin = std::mem::take(&mut *click.write());
                menu.with_mut(|m| m.document_click(origin.in_menu, origin.on_button));
            },
            NavBar {}
            Home {}
            PortfolioModal { view }
        }
    }
}
