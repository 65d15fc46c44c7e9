use std::sync::Arc;

use dioxus::prelude::*;

use sphere_common::{catalog::Project, config::Site, theme::select_arrow_background};

use crate::components::{
    counter::StatCounter,
    modal::Portfolio,
    navigation::Themes,
};

const SERVICES: [(&str, &str); 4] = [
    (
        "Social Strategy",
        "Channel plans, content calendars and audience research built around your goals.",
    ),
    (
        "Video Production",
        "Short-form reels, long-form campaigns and everything in between, shot and edited in house.",
    ),
    (
        "Paid Creative",
        "Ad concepts tested and iterated for Meta and TikTok until the numbers move.",
    ),
    (
        "Brand Identity",
        "Logos, palettes and guidelines that keep every post recognisably yours.",
    ),
];

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    id: String,
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let mut portfolio = use_context::<Portfolio>();

    let id = props.id.clone();
    let project = props.project;
    let cover = project.media.first().cloned().unwrap_or_default();

    rsx! {
        div {
            class: "portfolio-card glass",
            "data-project-id": "{props.id}",
            onclick: move |_| portfolio.with_mut(|ctl| ctl.open(&id)),
            img { src: "{cover}", alt: "{project.title}", loading: "lazy" }
            div { class: "portfolio-card-info",
                h3 { "{project.title}" }
                p { "{project.media.len()} items" }
            }
        }
    }
}

#[component]
fn ContactForm() -> Element {
    let themes = use_context::<Themes>();
    let arrow = select_arrow_background(themes.read().current());

    rsx! {
        form {
            class: "contact-form glass",
            onsubmit: move |evt| evt.prevent_default(),
            div { class: "form-group",
                label { class: "form-label", r#for: "contact-name", "Name" }
                input {
                    id: "contact-name",
                    class: "glass-input",
                    r#type: "text",
                    name: "name",
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "contact-email", "Email" }
                input {
                    id: "contact-email",
                    class: "glass-input",
                    r#type: "email",
                    name: "email",
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "contact-service", "Service" }
                select {
                    id: "contact-service",
                    class: "glass-input",
                    name: "service",
                    style: "background-image: {arrow};",
                    for (name, _) in SERVICES {
                        option { value: name, "{name}" }
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "contact-message", "Message" }
                textarea {
                    id: "contact-message",
                    class: "glass-input",
                    name: "message",
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "Send Message" }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let site = use_context::<Arc<Site>>();
    let counters = site.config.counters;

    rsx! {
        main {
            // Hero section
            section { id: "home", class: "hero",
                div { class: "container hero-content",
                    h1 { class: "hero-title",
                        "Grow your brand with "
                        span { class: "accent-text", "{site.config.brand}" }
                    }
                    p { class: "hero-subtitle",
                        "Content, campaigns and creative that turn scrolling into results."
                    }
                    div { class: "hero-actions",
                        a { class: "btn btn-primary", href: "#portfolio", "View Our Work" }
                        a { class: "btn btn-secondary", href: "#contact", "Get In Touch" }
                    }
                }
            }

            section { id: "services",
                div { class: "container",
                    h2 { class: "section-title", "Services" }
                    div { class: "services-grid",
                        for (name, blurb) in SERVICES {
                            div { class: "service-card glass",
                                h3 { "{name}" }
                                p { "{blurb}" }
                            }
                        }
                    }
                }
            }

            section { id: "stats",
                div { class: "container",
                    h2 { class: "section-title", "Results" }
                    div { class: "stats-grid",
                        for stat in site.config.stats.iter() {
                            StatCounter {
                                key: "{stat.label}",
                                stat: stat.clone(),
                                speed: counters.speed,
                                threshold: counters.threshold,
                            }
                        }
                    }
                }
            }

            section { id: "portfolio",
                div { class: "container",
                    h2 { class: "section-title", "Portfolio" }
                    div { class: "portfolio-grid",
                        for (id, project) in site.catalog.iter() {
                            ProjectCard {
                                key: "{id}",
                                id: id.to_owned(),
                                project: project.clone(),
                            }
                        }
                    }
                }
            }

            section { id: "about",
                div { class: "container",
                    h2 { class: "section-title", "About" }
                    p { class: "hero-subtitle",
                        "{site.config.brand} is a small team of strategists, editors and designers who live on social platforms so your brand does not have to."
                    }
                }
            }

            section { id: "contact",
                div { class: "container",
                    h2 { class: "section-title", "Contact" }
                    ContactForm {}
                }
            }
        }

        footer { class: "site-footer",
            div { class: "container",
                p { "© {site.config.brand}. All rights reserved." }
            }
        }
    }
}
