//! Visual theme for the family homepage.

mod styles;

pub use styles::GLOBAL_STYLES;
