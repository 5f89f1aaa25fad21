//! Photo gallery: category tabs, filtering and the featured item.
//!
//! Filtering shows the items of one category and marks exactly one of them
//! as featured, which renders it across the full grid row. The `"all"`
//! category shows every item.

use serde::{Deserialize, Serialize};

use crate::hover::{HoverEffect, Pointer};
use crate::style::{Display, GridColumn, StyleState};

/// Category value that selects every gallery item
pub const ALL_CATEGORIES: &str = "all";

/// A selectable tab above the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTab {
    /// Visible label text, e.g. "Family Moments"
    pub label: String,
    /// Whether the tab is highlighted
    #[serde(default)]
    pub active: bool,
}

impl CategoryTab {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
        }
    }

    /// The filter value this tab selects: its label in lowercase
    pub fn category(&self) -> String {
        self.label.to_lowercase()
    }

    /// Case-insensitive substring match against the tab label
    pub fn matches(&self, category: &str) -> bool {
        self.label
            .to_lowercase()
            .contains(&category.to_lowercase())
    }
}

/// A single photo in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub title: String,
    /// Image URL or asset path
    pub image: String,
    /// Category attribute, compared exactly against the filter value
    pub category: String,
    /// The `main-featured` marker
    pub featured: bool,
    pub style: StyleState,
}

impl GalleryItem {
    pub fn new(
        title: impl Into<String>,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            category: category.into(),
            featured: false,
            style: StyleState::new(),
        }
    }

    fn show(&mut self) {
        self.style.display = Display::Block;
    }

    fn hide(&mut self) {
        self.style.display = Display::None;
    }

    fn set_featured(&mut self, featured: bool) {
        self.featured = featured;
        self.style.grid_column = if featured {
            GridColumn::FullWidth
        } else {
            GridColumn::Unset
        };
    }

    pub fn is_visible(&self) -> bool {
        self.style.is_visible()
    }

    /// CSS classes for rendering
    pub fn class(&self) -> &'static str {
        if self.featured {
            "gallery-item main-featured"
        } else {
            "gallery-item"
        }
    }
}

/// Tabs plus items, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    pub tabs: Vec<CategoryTab>,
    pub items: Vec<GalleryItem>,
}

impl Gallery {
    pub fn new(tabs: Vec<CategoryTab>, items: Vec<GalleryItem>) -> Self {
        Self { tabs, items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Show the items of `category` and feature the first of them.
    ///
    /// Tabs whose label contains `category` become active, all others
    /// inactive. With [`ALL_CATEGORIES`] every item is shown and items still
    /// carrying the featured marker are re-spanned, but the marker itself is
    /// kept. Otherwise items outside the category are hidden and lose the
    /// marker, and exactly one item of the category (the first in document
    /// order) ends up featured.
    pub fn filter(&mut self, category: &str) {
        for tab in &mut self.tabs {
            tab.active = tab.matches(category);
        }

        if category == ALL_CATEGORIES {
            for item in &mut self.items {
                item.show();
                if item.featured {
                    item.style.grid_column = GridColumn::FullWidth;
                }
            }
            tracing::debug!(items = self.items.len(), "Gallery showing all categories");
            return;
        }

        for index in 0..self.items.len() {
            if self.items[index].category != category {
                let item = &mut self.items[index];
                item.hide();
                item.set_featured(false);
                continue;
            }

            let sibling_featured = self
                .items
                .iter()
                .enumerate()
                .any(|(other, item)| other != index && item.category == category && item.featured);

            let item = &mut self.items[index];
            item.show();
            item.set_featured(!sibling_featured);
        }

        // Final pass: the first item of the category wins the marker.
        if let Some(first) = self.items.iter().position(|item| item.category == category) {
            for (index, item) in self.items.iter_mut().enumerate() {
                if item.category == category {
                    item.set_featured(index == first);
                }
            }
        }

        tracing::debug!(
            category,
            visible = self.visible_items().count(),
            "Gallery filtered"
        );
    }

    /// Apply the gallery hover effect to the item at `index`.
    ///
    /// Out-of-range indices are ignored.
    pub fn hover_item(&mut self, index: usize, pointer: Pointer) {
        if let Some(item) = self.items.get_mut(index) {
            HoverEffect::GALLERY_ITEM.apply(&mut item.style, pointer);
        }
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter().filter(|item| item.is_visible())
    }

    pub fn featured_items(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter().filter(|item| item.featured)
    }

    /// The first active tab, if any
    pub fn active_tab(&self) -> Option<&CategoryTab> {
        self.tabs.iter().find(|tab| tab.active)
    }
}
