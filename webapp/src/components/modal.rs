use dioxus::prelude::*;

use sphere_common::{
    media::{MediaKind, Slide},
    portfolio::{PortfolioController, RenderSurface},
};

use crate::{
    common::dom,
    components::icons::{ChevronLeftIcon, ChevronRightIcon, CloseIcon},
};

pub type Portfolio = Signal<PortfolioController<SignalSurface>>;

// modal view
//
// what the modal currently shows.  this is written only by the controller
// through SignalSurface and read only by PortfolioModal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalView {
    pub title: String,
    pub description: String,
    pub slides: Vec<Slide>,
    pub active: usize,
    pub visible: bool,
}

// render surface backed by a signal, plus the body element for scroll locking
pub struct SignalSurface {
    view: Signal<ModalView>,
}

impl SignalSurface {
    pub fn new(view: Signal<ModalView>) -> Self {
        SignalSurface { view }
    }
}

impl RenderSurface for SignalSurface {
    fn set_text(&mut self, title: &str, description: &str) {
        self.view.with_mut(|v| {
            v.title = title.to_owned();
            v.description = description.to_owned();
        });
    }

    fn set_slides(&mut self, slides: Vec<Slide>) {
        self.view.with_mut(|v| v.slides = slides);
    }

    fn set_active(&mut self, index: usize) {
        self.view.with_mut(|v| v.active = index);
    }

    fn set_visible(&mut self, visible: bool) {
        self.view.with_mut(|v| v.visible = visible);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        dom::set_scroll_locked(locked);
    }
}

#[derive(Clone, PartialEq, Props)]
struct CarouselSlideProps {
    slide: Slide,
    active: bool,
}

#[component]
fn CarouselSlide(props: CarouselSlideProps) -> Element {
    let slide = props.slide;

    rsx! {
        div { class: if props.active { "carousel-slide active" } else { "carousel-slide" },
            match slide.kind {
                MediaKind::Video(format) => rsx! {
                    video { controls: true,
                        source { src: "{slide.url}", r#type: format.mime_type() }
                        "Your browser does not support the video tag."
                    }
                },
                MediaKind::Image => rsx! {
                    img { src: "{slide.url}", alt: "{slide.alt}" }
                },
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PortfolioModalProps {
    view: Signal<ModalView>,
}

// PortfolioModal
//
// the overlay is always in the tree and only toggles its active class, so the
// fade transition runs both ways.  clicks on the dark background close the
// modal, clicks on the content do not.  neither stops propagation, since the
// page root still has to see the click to close the mobile menu.
#[component]
pub fn PortfolioModal(props: PortfolioModalProps) -> Element {
    let mut portfolio = use_context::<Portfolio>();
    let mut on_content = use_signal(|| false);
    let view = props.view.read();

    rsx! {
        div {
            id: "portfolio-modal",
            class: if view.visible { "portfolio-modal active" } else { "portfolio-modal" },
            onclick: move |_| {
                let inside = std::mem::take(&mut *on_content.write());
                portfolio.with_mut(|ctl| ctl.overlay_click(inside));
            },

            div {
                class: "modal-content glass",
                onclick: move |_| on_content.set(true),

                button {
                    id: "modal-close",
                    class: "icon-button modal-close",
                    "aria-label": "Close",
                    onclick: move |_| portfolio.with_mut(|ctl| ctl.close()),
                    CloseIcon {}
                }

                div { class: "carousel",
                    div { id: "carousel-slides", class: "carousel-slides",
                        for (index, slide) in view.slides.iter().enumerate() {
                            CarouselSlide {
                                key: "{slide.key(index)}",
                                slide: slide.clone(),
                                active: index == view.active,
                            }
                        }
                    }

                    button {
                        id: "carousel-prev",
                        class: "icon-button carousel-nav carousel-prev",
                        "aria-label": "Previous",
                        onclick: move |_| portfolio.with_mut(|ctl| ctl.prev()),
                        ChevronLeftIcon {}
                    }
                    button {
                        id: "carousel-next",
                        class: "icon-button carousel-nav carousel-next",
                        "aria-label": "Next",
                        onclick: move |_| portfolio.with_mut(|ctl| ctl.next()),
                        ChevronRightIcon {}
                    }

                    div { id: "carousel-indicators", class: "carousel-indicators",
                        for (index, slide) in view.slides.iter().enumerate() {
                            div {
                                key: "{slide.key(index)}",
                                class: if index == view.active { "carousel-indicator active" } else { "carousel-indicator" },
                                onclick: move |_| portfolio.with_mut(|ctl| ctl.go_to(index)),
                            }
                        }
                    }
                }

                h3 { id: "modal-title", class: "modal-title", "{view.title}" }
                p { id: "modal-description", class: "modal-description", "{view.description}" }
            }
        }
    }
}
