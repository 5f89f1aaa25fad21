//! Profile Header - owner name, tagline and the tilting profile photo.

use dioxus::prelude::*;
use homepage_core::Pointer;

use crate::context::use_page;

/// Page header with the profile image.
///
/// Hovering the image scales and tilts it.
#[component]
pub fn ProfileHeader() -> Element {
    let mut page = use_page();
    let header = use_memo(move || {
        let view = page.read();
        let image = view
            .profile_image
            .as_ref()
            .map(|image| (image.src.clone(), image.style.to_css()));
        (view.owner.clone(), view.tagline.clone(), image)
    });

    let (owner, tagline, image) = header();

    rsx! {
        header { class: "profile-header",
            if let Some((src, style)) = image {
                img {
                    class: "profile-image",
                    src: "{src}",
                    alt: "{owner}",
                    style: "{style}",
                    onmouseenter: move |_| page.write().hover_profile_image(Pointer::Enter),
                    onmouseleave: move |_| page.write().hover_profile_image(Pointer::Leave),
                }
            }
            h1 { class: "page-title", "{owner}" }
            if !tagline.is_empty() {
                p { class: "tagline", "{tagline}" }
            }
        }
    }
}
