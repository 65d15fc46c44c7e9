use dioxus::prelude::*;

use sphere_common::theme::ToggleIcon;

// inline svg icons, drawn with the current text color

#[derive(Clone, PartialEq, Props)]
struct IconProps {
    children: Element,
}

#[component]
fn Icon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "icon",
            "xmlns": "http://www.w3.org/2000/svg",
            "viewBox": "0 0 24 24",
            "fill": "none",
            "stroke": "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            {props.children}
        }
    }
}

#[component]
pub fn ThemeIcon(icon: ToggleIcon) -> Element {
    match icon {
        ToggleIcon::Moon => rsx! {
            Icon {
                path { "d": "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
            }
        },
        ToggleIcon::Sun => rsx! {
            Icon {
                circle { "cx": "12", "cy": "12", "r": "4" }
                path { "d": "M12 2v2M12 20v2m-7.07-14.07 1.41 1.41m11.32 11.32 1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" }
            }
        },
    }
}

#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        Icon {
            path { "d": "M4 6h16M4 12h16M4 18h16" }
        }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        Icon {
            path { "d": "M18 6 6 18M6 6l12 12" }
        }
    }
}

#[component]
pub fn ChevronLeftIcon() -> Element {
    rsx! {
        Icon {
            path { "d": "m15 18-6-6 6-6" }
        }
    }
}

#[component]
pub fn ChevronRightIcon() -> Element {
    rsx! {
        Icon {
            path { "d": "m9 18 6-6-6-6" }
        }
    }
}
