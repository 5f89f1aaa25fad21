//! UI Components for the family homepage.
//!
//! Each component renders one section of the page from the shared
//! view-state and forwards its gestures back into it.

mod contact_form;
mod family_cards;
mod gallery;
mod live_clock;
mod music_player;
mod profile_header;

pub use contact_form::ContactSection;
pub use family_cards::FamilySection;
pub use gallery::Gallery;
pub use live_clock::LiveClock;
pub use music_player::MusicPlayer;
pub use profile_header::ProfileHeader;
