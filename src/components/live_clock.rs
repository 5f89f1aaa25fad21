//! Live Clock - current time and date, refreshed by the App's ticker.

use dioxus::prelude::*;
use homepage_core::Pointer;

use crate::context::use_page;

/// Clock widget showing `HH:MM:SS` and the long-form date.
///
/// Renders nothing when the page has no clock.
#[component]
pub fn LiveClock() -> Element {
    let mut page = use_page();

    let view = page.read();
    let Some(widget) = view.clock_widget.as_ref() else {
        return rsx! {};
    };
    let style = widget.to_css();
    let time = view.clock.time.clone();
    let date = view.clock.date.clone();
    drop(view);

    rsx! {
        section {
            class: "live-clock",
            style: "{style}",
            onmouseenter: move |_| page.write().hover_clock(Pointer::Enter),
            onmouseleave: move |_| page.write().hover_clock(Pointer::Leave),

            if let Some(time) = time {
                div { id: "liveTime", class: "clock-time", "{time}" }
            }
            if let Some(date) = date {
                div { id: "liveDate", class: "clock-date", "{date}" }
            }
        }
    }
}
