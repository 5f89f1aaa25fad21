//! Page context provider for the family homepage.
//!
//! Provides the page view-state to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| page);
//!
//! // In child components
//! let mut page = use_page();
//! page.write().hover_clock(Pointer::Enter);
//! ```

use dioxus::prelude::*;
use homepage_core::{PageView, SiteConfig};

/// Get the site content the page was built from.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Hook to access the page view-state from context.
///
/// Handlers run one at a time on the UI thread, so components write to the
/// signal directly.
pub fn use_page() -> Signal<PageView> {
    use_context::<Signal<PageView>>()
}
