use crate::components::{NoticeController, PendingAction};
use crate::config::{APP_NAME, APP_VERSION};
use crate::db::AspectRatio;
use crate::store::{JukeboxStore, SettingsUpdate};
use dioxus::prelude::*;

const QUEUE_EMPTY: &str = "Your queue is already empty.";

/// `<select>` value for the default playlist. The empty string means none.
fn default_playlist_choice(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[component]
pub fn SettingsView() -> Element {
    let mut store = use_context::<Signal<JukeboxStore>>();
    let notices = use_context::<NoticeController>();

    let settings = store.read().settings().clone();
    let playlists = store.read().playlists().to_vec();
    let queue_len = store.read().queue().len();
    let selected_default = settings.default_playlist_id.clone().unwrap_or_default();

    let on_clear_queue = move |_| {
        if store.peek().queue().is_empty() {
            notices.notify(QUEUE_EMPTY);
            return;
        }
        notices.confirm(PendingAction::ClearQueue);
    };

    rsx! {
        div { class: "flex flex-col h-full p-4 overflow-auto",
            h2 { class: "text-2xl font-bold mb-6 skeuo-text", "Settings" }

            div { class: "space-y-6",
                section { class: "skeuo-panel",
                    h3 { class: "text-lg font-semibold mb-3", "Display Aspect Ratio" }
                    p { class: "text-sm text-gray-400 mb-3",
                        "Choose the aspect ratio for the jukebox display. This affects the layout and number of videos shown."
                    }
                    div { class: "flex gap-4",
                        for ratio in [AspectRatio::Classic, AspectRatio::Widescreen] {
                            button {
                                key: "{ratio.label()}",
                                class: if settings.aspect_ratio == ratio { "skeuo-button skeuo-button-primary flex-1 py-3" } else { "skeuo-button flex-1 py-3" },
                                onclick: move |_| {
                                    store.write().update_settings(SettingsUpdate {
                                        aspect_ratio: Some(ratio),
                                        ..Default::default()
                                    });
                                },
                                "{ratio.display_name()}"
                            }
                        }
                    }
                    ul { class: "mt-3 pt-3 border-t border-gray-700 text-sm text-gray-400",
                        for ratio in [AspectRatio::Classic, AspectRatio::Widescreen] {
                            li { key: "{ratio.label()}", class: "mb-1",
                                "• {ratio.label()}: Shows {ratio.columns()} videos per row ({ratio.videos_per_page()} total)"
                            }
                        }
                    }
                }

                section { class: "skeuo-panel",
                    h3 { class: "text-lg font-semibold mb-3", "Playback Settings" }
                    div { class: "mb-4",
                        label { class: "flex items-center gap-2 mb-1",
                            input {
                                r#type: "checkbox",
                                checked: settings.random_play,
                                class: "skeuo-input h-4 w-4",
                                onchange: move |e| {
                                    store.write().update_settings(SettingsUpdate {
                                        random_play: Some(e.checked()),
                                        ..Default::default()
                                    });
                                },
                            }
                            span { "Random Play" }
                        }
                        p { class: "text-sm text-gray-400 ml-6",
                            "Play videos in random order rather than sequential."
                        }
                    }
                    div {
                        label { class: "block mb-2", "Default Playlist" }
                        select {
                            class: "skeuo-input w-full",
                            value: "{selected_default}",
                            onchange: move |e| {
                                store.write().update_settings(SettingsUpdate {
                                    default_playlist_id: Some(default_playlist_choice(&e.value())),
                                    ..Default::default()
                                });
                            },
                            option { value: "", selected: selected_default.is_empty(), "None" }
                            for playlist in playlists {
                                option {
                                    key: "{playlist.id}",
                                    value: "{playlist.id}",
                                    selected: playlist.id == selected_default,
                                    "{playlist.name}"
                                }
                            }
                        }
                        p { class: "text-sm text-gray-400 mt-1",
                            "This playlist will be selected by default when you open the jukebox."
                        }
                    }
                }

                section { class: "skeuo-panel",
                    h3 { class: "text-lg font-semibold mb-3", "Queue Management" }
                    div { class: "flex justify-between items-center",
                        div {
                            p { class: "mb-1", "Current Queue Length: {queue_len} videos" }
                            p { class: "text-sm text-gray-400", "Clear your queue to start fresh." }
                        }
                        button {
                            class: "skeuo-button",
                            onclick: on_clear_queue,
                            "Clear Queue"
                        }
                    }
                }

                section { class: "skeuo-panel",
                    h3 { class: "text-lg font-semibold mb-2", "About {APP_NAME}" }
                    p { class: "text-sm mb-2", "Version {APP_VERSION}" }
                    p { class: "text-sm text-gray-400",
                        "{APP_NAME} is a retro arcade-style jukebox for YouTube videos. Create your music library by adding YouTube playlists and enjoy your favorite music videos with a nostalgic interface."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_choice_clears_the_default() {
        assert_eq!(default_playlist_choice(""), None);
        assert_eq!(default_playlist_choice("abc"), Some("abc".to_string()));
    }
}
