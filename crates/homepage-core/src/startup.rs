//! Page startup: render the clock and wire every component.

use crate::clock::{update_clock, ClockReading};
use crate::page::PageView;

/// Whether a component found its elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wiring {
    /// Elements found; handlers are live
    Attached,
    /// Elements missing; the component is inert
    Absent,
}

impl Wiring {
    fn when(present: bool) -> Self {
        if present {
            Wiring::Attached
        } else {
            Wiring::Absent
        }
    }

    pub fn is_attached(&self) -> bool {
        matches!(self, Wiring::Attached)
    }
}

/// Outcome of startup, one entry per component in wiring order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupReport {
    pub clock: Wiring,
    pub clock_hover: Wiring,
    pub contact_form: Wiring,
    pub music_player: Wiring,
    pub gallery_hover: Wiring,
    pub family_cards: Wiring,
    pub profile_image: Wiring,
}

impl StartupReport {
    /// `(component, wiring)` pairs in wiring order
    pub fn entries(&self) -> [(&'static str, Wiring); 7] {
        [
            ("clock", self.clock),
            ("clock_hover", self.clock_hover),
            ("contact_form", self.contact_form),
            ("music_player", self.music_player),
            ("gallery_hover", self.gallery_hover),
            ("family_cards", self.family_cards),
            ("profile_image", self.profile_image),
        ]
    }

    pub fn attached_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|(_, wiring)| wiring.is_attached())
            .count()
    }
}

/// Initialize every component once the page structure is ready.
///
/// Renders `reading` into the clock slots straight away; the host is
/// responsible for re-rendering every [`crate::TICK_INTERVAL`] afterwards.
/// A component with missing elements is reported as [`Wiring::Absent`] and
/// does not affect the others.
pub fn startup(page: &mut PageView, reading: &ClockReading) -> StartupReport {
    update_clock(&mut page.clock, reading);

    let report = StartupReport {
        clock: Wiring::when(page.clock.is_present()),
        clock_hover: Wiring::when(page.clock_widget.is_some()),
        contact_form: Wiring::when(page.contact.is_some()),
        music_player: page.music.init(),
        gallery_hover: Wiring::when(!page.gallery.is_empty()),
        family_cards: Wiring::when(!page.family.is_empty()),
        profile_image: Wiring::when(page.profile_image.is_some()),
    };

    for (component, wiring) in report.entries() {
        tracing::debug!(component, ?wiring, "Component wired");
    }
    tracing::info!(
        attached = report.attached_count(),
        "Website initialized successfully"
    );

    report
}
