use dioxus::prelude::*;
use homepage_core::{run_clock, startup, ClockReading, PageView};

use crate::components::{ContactSection, FamilySection, Gallery, LiveClock, MusicPlayer, ProfileHeader};
use crate::context::get_site_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Builds the page from the site config, wires every component once the
/// page is mounted and keeps the clock ticking for the lifetime of the
/// window.
#[component]
pub fn App() -> Element {
    let mut page: Signal<PageView> = use_signal(|| PageView::from_config(&get_site_config()));

    use_context_provider(|| page);

    // Startup on mount
    use_effect(move || {
        let report = startup(&mut page.write(), &ClockReading::now());

        if report.clock.is_attached() {
            spawn(run_clock(move || page.write().clock.render_now()));
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "homepage",
            ProfileHeader {}
            LiveClock {}
            FamilySection {}
            Gallery {}
            MusicPlayer {}
            ContactSection {}
        }
    }
}
