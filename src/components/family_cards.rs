//! Family Cards - one card per family member.

use dioxus::prelude::*;
use homepage_core::{FamilyCard, Pointer};

use crate::context::use_page;

/// Grid of family member cards.
///
/// Hovering a card lifts the image inside it.
#[component]
pub fn FamilySection() -> Element {
    let page = use_page();
    let family = use_memo(move || page.read().family.clone());
    let cards: Vec<FamilyCard> = family();

    if cards.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "family-section",
            h2 { class: "section-header", "Our Family" }
            div { class: "family-grid",
                for (index, card) in cards.into_iter().enumerate() {
                    FamilyCardView { key: "{index}", index, card }
                }
            }
        }
    }
}

#[component]
fn FamilyCardView(index: usize, card: FamilyCard) -> Element {
    let mut page = use_page();

    rsx! {
        div {
            class: "family-card",
            onmouseenter: move |_| page.write().hover_family_card(index, Pointer::Enter),
            onmouseleave: move |_| page.write().hover_family_card(index, Pointer::Leave),

            if let Some(image) = card.image {
                img {
                    class: "family-image",
                    src: "{image.src}",
                    alt: "{card.name}",
                    style: image.style.to_css(),
                }
            }
            h3 { class: "family-name", "{card.name}" }
            p { class: "family-relation", "{card.relation}" }
        }
    }
}
