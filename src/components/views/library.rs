use crate::api::{extract_playlist_id, YoutubeClient};
use crate::catalog::validate_playlist_url;
use crate::components::{Icon, NoticeController, PendingAction};
use crate::library::{
    add_playlist_from_url, reload_playlist_videos, AddPlaylistError, AddedPlaylist,
};
use crate::store::{JukeboxStore, PlaylistUpdate};
use dioxus::prelude::*;

const EXAMPLE_URL: &str =
    "https://www.youtube.com/playlist?list=PLw-VjHDlEOgvtnnnqWlTqByAtC7tXBg6D";

/// Load a playlist's videos in the background, tracking which playlist is busy.
fn spawn_video_load(
    store: Signal<JukeboxStore>,
    mut loading: Signal<Option<String>>,
    mut progress: Signal<u32>,
    target: AddedPlaylist,
) {
    loading.set(Some(target.id.clone()));
    progress.set(0);

    spawn(async move {
        let mut library = store;
        let result = match YoutubeClient::from_env() {
            Ok(client) => {
                reload_playlist_videos(
                    &client,
                    &mut library,
                    &target.id,
                    &target.source_id,
                    |percent| progress.set(percent),
                )
                .await
            }
            Err(err) => Err(err),
        };

        if let Err(err) = result {
            tracing::error!(playlist_id = %target.id, error = %err, "error loading playlist videos");
        }

        loading.set(None);
        progress.set(0);
    });
}

#[component]
pub fn LibraryView() -> Element {
    let mut store = use_context::<Signal<JukeboxStore>>();
    let notices = use_context::<NoticeController>();

    let mut playlist_url = use_signal(String::new);
    let mut url_error = use_signal(|| None::<String>);
    let mut adding = use_signal(|| false);
    let loading = use_signal(|| None::<String>);
    let progress = use_signal(|| 0u32);
    let mut editing = use_signal(|| None::<String>);
    let mut edit_name = use_signal(String::new);

    let busy = adding() || loading().is_some();

    let on_add = move |_| {
        if adding() || loading().is_some() {
            return;
        }

        let input = playlist_url();
        if let Err(err) = validate_playlist_url(store.read().playlists(), &input) {
            url_error.set(Some(err.to_string()));
            return;
        }

        url_error.set(None);
        adding.set(true);

        spawn(async move {
            let mut library = store;
            let result = match YoutubeClient::from_env() {
                Ok(client) => add_playlist_from_url(&client, &mut library, &input).await,
                Err(err) => {
                    tracing::error!(error = %err, "error adding playlist");
                    Err(AddPlaylistError::Details(err))
                }
            };
            adding.set(false);

            match result {
                Ok(added) => {
                    playlist_url.set(String::new());
                    spawn_video_load(store, loading, progress, added);
                }
                Err(err) => url_error.set(Some(err.to_string())),
            }
        });
    };

    let playlists = store.read().playlists().to_vec();
    let can_add = !playlist_url().trim().is_empty() && !busy;

    rsx! {
        div { class: "flex flex-col h-full p-4 overflow-hidden",
            h2 { class: "text-2xl font-bold mb-6 skeuo-text", "Your Music Library" }

            div { class: "skeuo-panel mb-6",
                h3 { class: "text-lg font-semibold mb-3", "Add YouTube Playlist" }
                label { class: "block text-sm mb-1", "YouTube Playlist URL" }
                div { class: "flex gap-2",
                    input {
                        r#type: "text",
                        value: "{playlist_url}",
                        placeholder: "https://www.youtube.com/playlist?list=...",
                        class: if url_error().is_some() { "skeuo-input flex-1 border-red-500" } else { "skeuo-input flex-1" },
                        oninput: move |e| {
                            playlist_url.set(e.value());
                            url_error.set(None);
                        },
                    }
                    button {
                        class: "skeuo-button-primary flex items-center gap-1",
                        disabled: !can_add,
                        onclick: on_add,
                        if adding() {
                            Icon { name: "loader".to_string(), class: "w-4 h-4".to_string() }
                        } else {
                            Icon { name: "plus".to_string(), class: "w-4 h-4".to_string() }
                        }
                        "Add"
                    }
                }
                if let Some(error) = url_error() {
                    p { class: "text-red-500 text-sm mt-1 flex items-center gap-1",
                        Icon { name: "alert".to_string(), class: "w-4 h-4".to_string() }
                        "{error}"
                    }
                }
                p { class: "text-gray-400 text-xs mt-1", "Example: {EXAMPLE_URL}" }
            }

            div { class: "flex-1 overflow-auto",
                h3 { class: "text-lg font-semibold mb-3", "Your Playlists" }

                if playlists.is_empty() {
                    div { class: "skeuo-panel text-center py-10",
                        p { class: "text-gray-400", "You don't have any playlists yet." }
                        p { class: "text-gray-400 text-sm mt-1", "Add a YouTube playlist to get started." }
                    }
                } else {
                    div { class: "space-y-4",
                        for playlist in playlists {
                            div { key: "{playlist.id}", class: "skeuo-panel flex flex-col",
                                div { class: "flex justify-between items-center",
                                    if editing().as_deref() == Some(playlist.id.as_str()) {
                                        div { class: "flex-1 flex gap-2 items-center",
                                            input {
                                                r#type: "text",
                                                value: "{edit_name}",
                                                class: "skeuo-input flex-1",
                                                autofocus: true,
                                                oninput: move |e| edit_name.set(e.value()),
                                            }
                                            button {
                                                class: "skeuo-button p-2",
                                                title: "Save",
                                                onclick: {
                                                    let id = playlist.id.clone();
                                                    move |_| {
                                                        store.write().update_playlist(&id, PlaylistUpdate::rename(edit_name()));
                                                        editing.set(None);
                                                    }
                                                },
                                                Icon { name: "check".to_string(), class: "w-4 h-4".to_string() }
                                            }
                                            button {
                                                class: "skeuo-button p-2",
                                                title: "Cancel",
                                                onclick: move |_| editing.set(None),
                                                Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                                            }
                                        }
                                    } else {
                                        div { class: "flex-1",
                                            div { class: "flex items-center gap-2",
                                                input {
                                                    r#type: "checkbox",
                                                    checked: playlist.enabled,
                                                    class: "skeuo-input h-4 w-4",
                                                    onchange: {
                                                        let id = playlist.id.clone();
                                                        let enabled = playlist.enabled;
                                                        move |_| {
                                                            store.write().update_playlist(&id, PlaylistUpdate::enabled(!enabled));
                                                        }
                                                    },
                                                }
                                                h4 { class: "font-semibold", "{playlist.name}" }
                                            }
                                            p { class: "text-sm text-gray-400 mt-1 break-all", "{playlist.url}" }
                                        }
                                        div { class: "flex gap-2 ml-4",
                                            button {
                                                class: "skeuo-button p-2",
                                                title: "Edit Playlist",
                                                onclick: {
                                                    let id = playlist.id.clone();
                                                    let name = playlist.name.clone();
                                                    move |_| {
                                                        editing.set(Some(id.clone()));
                                                        edit_name.set(name.clone());
                                                    }
                                                },
                                                Icon { name: "edit".to_string(), class: "w-4 h-4".to_string() }
                                            }
                                            button {
                                                class: "skeuo-button p-2",
                                                title: "Remove Playlist",
                                                onclick: {
                                                    let id = playlist.id.clone();
                                                    move |_| notices.confirm(PendingAction::RemovePlaylist { id: id.clone() })
                                                },
                                                Icon { name: "trash".to_string(), class: "w-4 h-4".to_string() }
                                            }
                                        }
                                    }
                                }

                                div { class: "mt-3 pt-3 border-t border-gray-700 flex justify-between items-center",
                                    p { class: "text-sm",
                                        span { class: "text-gray-400", "Videos: " }
                                        span { "{playlist.video_count}" }
                                    }
                                    if loading().as_deref() == Some(playlist.id.as_str()) {
                                        div { class: "flex items-center gap-2",
                                            Icon { name: "loader".to_string(), class: "w-4 h-4".to_string() }
                                            span { class: "text-sm", "Loading... {progress}%" }
                                        }
                                    } else {
                                        button {
                                            class: "skeuo-button text-sm py-1",
                                            disabled: busy,
                                            onclick: {
                                                let id = playlist.id.clone();
                                                let url = playlist.url.clone();
                                                move |_| {
                                                    if loading.peek().is_some() {
                                                        return;
                                                    }
                                                    match extract_playlist_id(&url) {
                                                        Some(source_id) => spawn_video_load(
                                                            store,
                                                            loading,
                                                            progress,
                                                            AddedPlaylist { id: id.clone(), source_id },
                                                        ),
                                                        None => tracing::warn!(url = %url, "stored playlist url no longer parses"),
                                                    }
                                                }
                                            },
                                            "Reload Videos"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
