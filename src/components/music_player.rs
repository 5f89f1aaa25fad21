//! Music Player - background track with a gentle fade-in.

use dioxus::document;
use dioxus::prelude::*;
use homepage_core::fade_in;

use crate::context::use_page;

const AUDIO_ID: &str = "background-music";

/// Audio player for the site's background track.
///
/// The view-state owns the volume; every change is pushed to the `<audio>`
/// element. Once the track's data loads, the volume ramps up from silence.
#[component]
pub fn MusicPlayer() -> Element {
    let mut page = use_page();

    let volume = use_memo(move || page.read().music.primary().map(|audio| audio.volume));

    // Mirror the modelled volume onto the element
    use_effect(move || {
        if let Some(volume) = volume() {
            let _ = document::eval(&format!(
                "const audio = document.getElementById('{AUDIO_ID}'); if (audio) {{ audio.volume = {volume}; }}"
            ));
        }
    });

    let on_loaded = move |_| {
        if !page.write().music.on_data_loaded() {
            return;
        }
        spawn(async move {
            let steps = fade_in(move || page.write().music.tick()).await;
            tracing::debug!(steps, "Music fade-in finished");
        });
    };

    let source = use_memo(move || page.read().music.primary().map(|audio| audio.source.clone()));

    let Some(source) = source() else {
        return rsx! {};
    };

    rsx! {
        section { class: "music-player",
            h2 { class: "section-header", "Our Song" }
            audio {
                id: AUDIO_ID,
                src: "{source}",
                controls: true,
                preload: "auto",
                onloadeddata: on_loaded,
            }
        }
    }
}
