//! Family Homepage Core Library
//!
//! Page view-state and the small interactive behaviors of a personal
//! family website.
//!
//! ## Overview
//!
//! The page is modelled as an explicit, mutable [`PageView`]. Every
//! behavior is a synchronous function over that view, invoked by the host
//! (the desktop shell) when a timer fires or the user gestures:
//!
//! - **Gallery**: category filtering with a single featured item
//! - **Hover effects**: gallery items, clock widget, family cards, profile image
//! - **Contact form**: required-field validation and a simulated acknowledgment
//! - **Live clock**: `HH:MM:SS` and long-form en-US date, once per second
//! - **Music player**: initial volume and a self-cancelling fade-in ramp
//!
//! Components share nothing but the view. A component whose elements are
//! missing reports [`Wiring::Absent`] instead of failing.
//!
//! ## Quick Start
//!
//! ```ignore
//! use homepage_core::{startup, ClockReading, PageView, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let mut page = PageView::from_config(&config);
//! let report = startup(&mut page, &ClockReading::now());
//!
//! page.gallery.filter("family");
//! assert_eq!(page.gallery.featured_items().count(), 1);
//! ```

pub mod audio;
pub mod clock;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod hover;
pub mod logging;
pub mod page;
pub mod startup;
pub mod style;

// Re-exports
pub use audio::{fade_in, AudioElement, MusicPlayer, VolumeRamp};
pub use clock::{run_clock, update_clock, ClockReading, ClockSlots, TICK_INTERVAL};
pub use config::{FamilyMemberConfig, GalleryItemConfig, SiteConfig};
pub use contact::{Acknowledgment, ContactField, ContactForm, Notification, NotificationLevel};
pub use error::{ConfigError, ContactError, HomepageError, HomepageResult};
pub use gallery::{CategoryTab, Gallery, GalleryItem, ALL_CATEGORIES};
pub use hover::{HoverEffect, Pointer};
pub use page::{FamilyCard, FamilyImage, PageView, ProfileImage};
pub use startup::{startup, StartupReport, Wiring};
pub use style::{Display, GridColumn, StyleState};
