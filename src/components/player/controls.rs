use crate::components::Icon;
use crate::store::JukeboxStore;
use dioxus::prelude::*;

/// Play/Pause toggle for the current queue entry
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut store = use_context::<Signal<JukeboxStore>>();
    let playing = store.read().is_playing();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "skeuo-button-primary flex items-center gap-2",
            onclick: move |_| {
                let current = store.peek().is_playing();
                store.write().set_is_playing(!current);
            },
            if playing {
                Icon { name: "pause".to_string(), class: "w-4 h-4".to_string() }
                "Pause"
            } else {
                Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                "Play"
            }
        }
    }
}

/// Skip to the next queue entry
#[component]
pub(super) fn NextButton() -> Element {
    let mut store = use_context::<Signal<JukeboxStore>>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "skeuo-button flex items-center gap-2",
            onclick: move |_| store.write().next_video(),
            Icon { name: "next".to_string(), class: "w-4 h-4".to_string() }
            "Next"
        }
    }
}
