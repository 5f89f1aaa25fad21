//! Photo Gallery - category tabs over a grid of photos.
//!
//! Clicking a tab filters the grid; the first photo of the category is
//! featured across the full row.

use dioxus::prelude::*;
use homepage_core::{CategoryTab, GalleryItem, Pointer};

use crate::context::use_page;

/// Gallery section with its tab strip.
#[component]
pub fn Gallery() -> Element {
    let page = use_page();
    // Only gallery changes re-render, not clock ticks
    let gallery = use_memo(move || page.read().gallery.clone());

    let view = gallery.read();
    let tabs: Vec<CategoryTab> = view.tabs.clone();
    let items: Vec<GalleryItem> = view.items.clone();
    drop(view);

    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "gallery-section",
            h2 { class: "section-header", "Gallery" }
            div { class: "category-tabs", role: "tablist",
                for (position, tab) in tabs.into_iter().enumerate() {
                    CategoryTabButton { key: "{position}", tab }
                }
            }
            div { class: "gallery-grid",
                for (index, item) in items.into_iter().enumerate() {
                    GalleryTile { key: "{index}", index, item }
                }
            }
        }
    }
}

#[component]
fn CategoryTabButton(tab: CategoryTab) -> Element {
    let mut page = use_page();
    let category = tab.category();

    rsx! {
        button {
            class: if tab.active { "category-tab active" } else { "category-tab" },
            role: "tab",
            "aria-selected": if tab.active { "true" } else { "false" },
            onclick: move |_| page.write().gallery.filter(&category),
            "{tab.label}"
        }
    }
}

#[component]
fn GalleryTile(index: usize, item: GalleryItem) -> Element {
    let mut page = use_page();

    rsx! {
        figure {
            class: item.class(),
            "data-category": "{item.category}",
            style: item.style.to_css(),
            onmouseenter: move |_| page.write().gallery.hover_item(index, Pointer::Enter),
            onmouseleave: move |_| page.write().gallery.hover_item(index, Pointer::Leave),

            img { src: "{item.image}", alt: "{item.title}" }
            figcaption { "{item.title}" }
        }
    }
}
