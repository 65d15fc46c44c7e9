use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;

use sphere_common::counter::{CounterAnimation, Stat, visible_fraction};

use crate::common::{FRAME_MS, dom};

// how often a counter that has not started checks whether it is on screen
const VISIBILITY_POLL_MS: u32 = 200;

#[derive(Clone, PartialEq, Props)]
pub struct StatCounterProps {
    stat: Stat,
    speed: u32,
    threshold: f64,
}

// StatCounter
//
// shows 0 until enough of the card is on screen, then counts up to the
// target once.  the task is dropped with the component, so a counter that
// leaves the page stops polling.
#[component]
pub fn StatCounter(props: StatCounterProps) -> Element {
    let mut shown = use_signal(|| 0u64);
    let mut node = use_signal(|| None::<Rc<MountedData>>);

    let goal = props.stat.target;
    let speed = props.speed;
    let threshold = props.threshold;

    use_future(move || async move {
        loop {
            let mounted = node.peek().clone();
            if let Some(mounted) = mounted {
                if let Ok(rect) = mounted.get_client_rect().await {
                    let fraction =
                        visible_fraction(rect.min_y(), rect.max_y(), dom::viewport_height());
                    if fraction >= threshold {
                        break;
                    }
                }
            }
            TimeoutFuture::new(VISIBILITY_POLL_MS).await;
        }

        debug!(goal, "starting counter");

        let mut counter = CounterAnimation::new(goal, speed);
        while !counter.is_finished() {
            shown.set(counter.tick());
            TimeoutFuture::new(FRAME_MS).await;
        }
    });

    rsx! {
        div {
            class: "stat-card glass",
            onmounted: move |evt| node.set(Some(evt.data())),
            h3 { class: "stat-value",
                span { class: "counter", "data-target": "{goal}", "{shown}" }
                "{props.stat.suffix}"
            }
            p { class: "stat-label", "{props.stat.label}" }
        }
    }
}
