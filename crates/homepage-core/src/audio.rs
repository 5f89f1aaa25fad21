//! Background music: default volume and a fade-in after the track loads.
//!
//! The fade-in is a small state machine. Each [`RAMP_INTERVAL`] the host
//! calls [`AudioElement::tick`], which raises the volume by one step until
//! [`VOLUME_TARGET`] is reached and then stops on its own.

use std::time::Duration;

use tokio::time::{interval_at, Instant};

use crate::startup::Wiring;

/// Volume the player starts at and the fade-in settles on
pub const VOLUME_TARGET: f64 = 0.5;

/// Volume added per ramp step
pub const VOLUME_STEP: f64 = 0.05;

/// Number of steps from silence to [`VOLUME_TARGET`]
pub const RAMP_STEPS: u32 = 10;

/// Time between ramp steps
pub const RAMP_INTERVAL: Duration = Duration::from_millis(100);

/// Fade-in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeRamp {
    /// Track data has not loaded yet
    #[default]
    Idle,
    /// Fading in; `step` steps applied so far
    Ramping { step: u32 },
    /// Target volume reached
    Done,
}

/// One `<audio>` element on the page
#[derive(Debug, Clone, PartialEq)]
pub struct AudioElement {
    /// Track URL
    pub source: String,
    /// Playback volume in `[0.0, 1.0]`
    pub volume: f64,
    pub ramp: VolumeRamp,
}

impl AudioElement {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            volume: 1.0,
            ramp: VolumeRamp::Idle,
        }
    }

    /// React to the track's data becoming available.
    ///
    /// Silences the track and starts the ramp. Returns `false` if a ramp was
    /// already started by an earlier notification.
    pub fn on_data_loaded(&mut self) -> bool {
        if self.ramp != VolumeRamp::Idle {
            return false;
        }
        self.volume = 0.0;
        self.ramp = VolumeRamp::Ramping { step: 0 };
        tracing::debug!(source = %self.source, "Audio loaded, starting fade-in");
        true
    }

    /// Advance the ramp by one step.
    ///
    /// Returns the new volume, or `None` once the ramp is finished (or never
    /// started), in which case nothing changes.
    pub fn tick(&mut self) -> Option<f64> {
        let VolumeRamp::Ramping { step } = self.ramp else {
            return None;
        };

        let step = step + 1;
        // From the step count rather than accumulated, capped at the target.
        let volume = (VOLUME_STEP * f64::from(step)).min(VOLUME_TARGET);
        self.volume = volume;

        self.ramp = if step >= RAMP_STEPS {
            tracing::debug!(source = %self.source, "Fade-in complete");
            VolumeRamp::Done
        } else {
            VolumeRamp::Ramping { step }
        };
        Some(volume)
    }
}

/// The page's audio elements; only the first is controlled
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MusicPlayer {
    pub elements: Vec<AudioElement>,
}

impl MusicPlayer {
    pub fn new(elements: Vec<AudioElement>) -> Self {
        Self { elements }
    }

    /// The controlled element
    pub fn primary(&self) -> Option<&AudioElement> {
        self.elements.first()
    }

    pub fn primary_mut(&mut self) -> Option<&mut AudioElement> {
        self.elements.first_mut()
    }

    /// Set the default volume on the first element
    pub fn init(&mut self) -> Wiring {
        match self.primary_mut() {
            Some(element) => {
                element.volume = VOLUME_TARGET;
                Wiring::Attached
            }
            None => Wiring::Absent,
        }
    }

    /// Forward a data-loaded notification to the first element
    pub fn on_data_loaded(&mut self) -> bool {
        self.primary_mut()
            .map(AudioElement::on_data_loaded)
            .unwrap_or(false)
    }

    /// Advance the first element's ramp
    pub fn tick(&mut self) -> Option<f64> {
        self.primary_mut().and_then(AudioElement::tick)
    }
}

/// Drive a fade-in on a repeating [`RAMP_INTERVAL`] timer.
///
/// `step` is called once per interval (first call one interval from now) and
/// should advance a ramp and return the new volume. The timer stops the first
/// time it returns `None`. Returns the number of volume changes applied.
pub async fn fade_in<F>(mut step: F) -> u32
where
    F: FnMut() -> Option<f64>,
{
    let mut timer = interval_at(Instant::now() + RAMP_INTERVAL, RAMP_INTERVAL);
    let mut applied = 0;
    loop {
        timer.tick().await;
        match step() {
            Some(_) => applied += 1,
            None => return applied,
        }
    }
}
