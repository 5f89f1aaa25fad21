//! Live clock rendering.

use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use tokio::time::{interval_at, Instant};

/// Interval between clock renders
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// One formatted clock value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    /// 24-hour `HH:MM:SS`
    pub time: String,
    /// Long en-US date, e.g. `Friday, October 16, 2026`
    pub date: String,
}

impl ClockReading {
    /// Format the given instant in its own time zone
    pub fn at<Tz>(instant: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            time: instant.format("%H:%M:%S").to_string(),
            date: instant.format("%A, %B %-d, %Y").to_string(),
        }
    }

    /// Current local time
    pub fn now() -> Self {
        Self::at(&Local::now())
    }
}

/// The two text slots the clock writes into.
///
/// A `None` slot does not exist on the page and is never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClockSlots {
    pub time: Option<String>,
    pub date: Option<String>,
}

impl ClockSlots {
    /// Slots for a page that has both clock elements, initially blank
    pub fn present() -> Self {
        Self {
            time: Some(String::new()),
            date: Some(String::new()),
        }
    }

    pub fn is_present(&self) -> bool {
        self.time.is_some() || self.date.is_some()
    }

    /// Render the current local time
    pub fn render_now(&mut self) {
        update_clock(self, &ClockReading::now());
    }
}

/// Write a reading into whichever slots exist
pub fn update_clock(slots: &mut ClockSlots, reading: &ClockReading) {
    if let Some(time) = slots.time.as_mut() {
        time.clone_from(&reading.time);
    }
    if let Some(date) = slots.date.as_mut() {
        date.clone_from(&reading.date);
    }
}

/// Re-render the clock every [`TICK_INTERVAL`] for as long as the future is
/// polled.
///
/// The first call comes one interval from now; the startup render is the
/// caller's. Never returns.
pub async fn run_clock<F>(mut render: F)
where
    F: FnMut(),
{
    let mut ticker = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
    loop {
        ticker.tick().await;
        render();
    }
}
