//! The page view-state shared by every component.
//!
//! Each component owns a field of [`PageView`]. Optional fields model page
//! elements that may be missing from the markup; a handler aimed at a
//! missing element does nothing.

use crate::audio::{AudioElement, MusicPlayer};
use crate::clock::ClockSlots;
use crate::config::SiteConfig;
use crate::contact::{ContactForm, Notification};
use crate::gallery::{CategoryTab, Gallery, GalleryItem};
use crate::hover::{HoverEffect, Pointer};
use crate::style::StyleState;

/// A family member's image inside a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyImage {
    pub src: String,
    pub style: StyleState,
}

/// A family member card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyCard {
    pub name: String,
    pub relation: String,
    pub image: Option<FamilyImage>,
}

impl FamilyCard {
    /// Hovering a card emphasises its nested image, if it has one
    pub fn hover(&mut self, pointer: Pointer) {
        if let Some(image) = self.image.as_mut() {
            HoverEffect::FAMILY_IMAGE.apply(&mut image.style, pointer);
        }
    }
}

/// A profile photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileImage {
    pub src: String,
    pub style: StyleState,
}

/// Everything on the page the behaviors read or write
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub owner: String,
    pub tagline: String,
    pub gallery: Gallery,
    pub contact: Option<ContactForm>,
    pub clock: ClockSlots,
    /// Style of the clock container; `None` when the widget is missing
    pub clock_widget: Option<StyleState>,
    pub music: MusicPlayer,
    pub family: Vec<FamilyCard>,
    pub profile_image: Option<ProfileImage>,
}

impl PageView {
    /// A page with none of the interactive elements
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the page described by `config`
    pub fn from_config(config: &SiteConfig) -> Self {
        let gallery = Gallery::new(
            config.tabs.iter().map(CategoryTab::new).collect(),
            config
                .gallery
                .iter()
                .map(|item| GalleryItem::new(&item.title, &item.image, &item.category))
                .collect(),
        );

        let family = config
            .family
            .iter()
            .map(|member| FamilyCard {
                name: member.name.clone(),
                relation: member.relation.clone(),
                image: member.image.as_ref().map(|src| FamilyImage {
                    src: src.clone(),
                    style: StyleState::new(),
                }),
            })
            .collect();

        Self {
            owner: config.owner.clone(),
            tagline: config.tagline.clone(),
            gallery,
            contact: config.contact_form.then(ContactForm::default),
            clock: if config.clock {
                ClockSlots::present()
            } else {
                ClockSlots::default()
            },
            clock_widget: config.clock.then(StyleState::new),
            music: MusicPlayer::new(config.audio.iter().map(AudioElement::new).collect()),
            family,
            profile_image: config.profile_image.as_ref().map(|src| ProfileImage {
                src: src.clone(),
                style: StyleState::new(),
            }),
        }
    }

    pub fn hover_clock(&mut self, pointer: Pointer) {
        if let Some(style) = self.clock_widget.as_mut() {
            HoverEffect::CLOCK.apply(style, pointer);
        }
    }

    pub fn hover_family_card(&mut self, index: usize, pointer: Pointer) {
        if let Some(card) = self.family.get_mut(index) {
            card.hover(pointer);
        }
    }

    pub fn hover_profile_image(&mut self, pointer: Pointer) {
        if let Some(image) = self.profile_image.as_mut() {
            HoverEffect::PROFILE_IMAGE.apply(&mut image.style, pointer);
        }
    }

    /// Handle a contact form submission.
    ///
    /// Returns the notification to show, or `None` if the page has no form.
    pub fn submit_contact(&mut self) -> Option<Notification> {
        let form = self.contact.as_mut()?;
        Some(Notification::from_submission(&form.submit()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::NotificationLevel;

    #[test]
    fn from_default_config_has_every_component() {
        let page = PageView::from_config(&SiteConfig::default());
        assert_eq!(page.gallery.items.len(), 6);
        assert_eq!(page.gallery.tabs.len(), 4);
        assert!(page.contact.is_some());
        assert!(page.clock.is_present());
        assert!(page.clock_widget.is_some());
        assert_eq!(page.music.elements.len(), 1);
        assert_eq!(page.family.len(), 3);
        assert!(page.profile_image.is_some());
    }

    #[test]
    fn empty_page_handlers_are_noops() {
        let mut page = PageView::empty();
        page.hover_clock(Pointer::Enter);
        page.hover_family_card(0, Pointer::Enter);
        page.hover_profile_image(Pointer::Enter);
        assert_eq!(page.submit_contact(), None);
        assert_eq!(page, PageView::empty());
    }

    #[test]
    fn family_hover_styles_nested_image() {
        let mut page = PageView::from_config(&SiteConfig::default());
        page.hover_family_card(1, Pointer::Enter);

        let image = page.family[1].image.as_ref().unwrap();
        assert_eq!(image.style.transform, Some("scale(1.05)"));
        assert_eq!(image.style.box_shadow, Some("0 10px 25px rgba(0,0,0,0.15)"));
        assert_eq!(page.family[0].image.as_ref().unwrap().style, StyleState::new());
    }

    #[test]
    fn family_card_without_image_ignores_hover() {
        let mut card = FamilyCard {
            name: "Rex".to_string(),
            relation: "Dog".to_string(),
            image: None,
        };
        card.hover(Pointer::Enter);
        assert!(card.image.is_none());
    }

    #[test]
    fn clock_hover_round_trip() {
        let mut page = PageView::from_config(&SiteConfig::default());
        page.hover_clock(Pointer::Enter);
        assert_eq!(page.clock_widget.as_ref().unwrap().transform, Some("translateY(-5px)"));
        page.hover_clock(Pointer::Leave);
        assert_eq!(page.clock_widget.as_ref().unwrap().transform, Some("translateY(0)"));
    }

    #[test]
    fn clock_render_leaves_other_sections_unchanged() {
        let mut page = PageView::from_config(&SiteConfig::default());
        page.gallery.filter("travel");
        let before = page.clone();

        page.clock.render_now();

        assert!(page.clock.time.as_deref().is_some_and(|t| !t.is_empty()));
        assert_eq!(page.gallery, before.gallery);
        assert_eq!(page.family, before.family);
        assert_eq!(page.contact, before.contact);
        assert_eq!(page.profile_image, before.profile_image);
        assert_eq!(page.music, before.music);
        assert_eq!(page.owner, before.owner);
    }

    #[test]
    fn submit_contact_produces_notification() {
        let mut page = PageView::from_config(&SiteConfig::default());
        let warning = page.submit_contact().unwrap();
        assert_eq!(warning.level, NotificationLevel::Warning);

        page.contact = Some(ContactForm::new("Ana", "ana@example.com", "Hi", "Hello"));
        let info = page.submit_contact().unwrap();
        assert_eq!(info.level, NotificationLevel::Info);
        assert_eq!(page.contact, Some(ContactForm::default()));
    }
}
