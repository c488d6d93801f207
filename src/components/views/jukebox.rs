use crate::api::{VideoItem, ALL_CATEGORY, DEFAULT_CATEGORIES};
use crate::catalog::{catalog_page, check_selection, owning_playlist_id};
use crate::components::{Icon, NoticeController, NowPlaying, VideoThumbnail};
use crate::config::APP_NAME;
use crate::db::AspectRatio;
use crate::store::JukeboxStore;
use dioxus::prelude::*;

fn grid_class(aspect_ratio: AspectRatio) -> &'static str {
    match aspect_ratio {
        AspectRatio::Classic => "grid grid-cols-6 gap-4",
        AspectRatio::Widescreen => "grid grid-cols-8 gap-4",
    }
}

/// Reject videos that are playing or queued, otherwise open the add-to-queue dialog.
fn select_video(
    store: Signal<JukeboxStore>,
    notices: NoticeController,
    mut selected: Signal<Option<VideoItem>>,
    video: VideoItem,
) {
    let selection = check_selection(&store.read(), &video);
    match selection.notice() {
        Some(text) => notices.notify(text),
        None => selected.set(Some(video)),
    }
}

#[component]
pub fn JukeboxView(on_ended: EventHandler<()>) -> Element {
    let mut store = use_context::<Signal<JukeboxStore>>();
    let notices = use_context::<NoticeController>();
    let mut active_category = use_signal(|| ALL_CATEGORY.to_string());
    let mut current_page = use_signal(|| 1usize);
    let mut selected = use_signal(|| None::<VideoItem>);

    let page = use_memo(move || {
        let store = store.read();
        catalog_page(
            store.playlists(),
            &active_category(),
            store.search_query(),
            current_page(),
            store.settings().aspect_ratio,
        )
    });

    // Keep the page signal in step when filtering shrank the catalog.
    use_effect(move || {
        let shown = page().page;
        if shown != *current_page.peek() {
            current_page.set(shown);
        }
    });

    let on_confirm_add = move |_| {
        let Some(video) = selected() else {
            return;
        };
        let owner =
            owning_playlist_id(store.read().playlists(), &video.youtube_id).map(str::to_string);
        if let Some(playlist_id) = owner {
            store.write().add_to_queue(video, &playlist_id);
            selected.set(None);
        }
    };

    let search_query = store.read().search_query().to_string();
    let aspect_ratio = store.read().settings().aspect_ratio;
    let page = page();
    let page_number = page.page;
    let total_pages = page.total_pages;

    rsx! {
        div { class: "flex flex-col h-full",
            // Header with search
            div { class: "p-4 border-b border-gray-700 bg-gray-800",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold skeuo-text", "{APP_NAME}" }
                    div { class: "relative w-64",
                        input {
                            r#type: "text",
                            placeholder: "Search...",
                            value: "{search_query}",
                            class: "skeuo-input w-full pl-10",
                            oninput: move |e| store.write().set_search_query(e.value()),
                        }
                        Icon {
                            name: "search".to_string(),
                            class: "absolute top-2.5 left-3 h-5 w-5 text-gray-400".to_string(),
                        }
                    }
                }
            }

            div { class: "flex flex-col flex-1 overflow-hidden",
                div { class: "flex-1 overflow-auto p-4",
                    NowPlaying { on_ended }

                    div { class: grid_class(aspect_ratio),
                        for (index, video) in page.videos.into_iter().enumerate() {
                            div {
                                key: "{video.youtube_id}-{index}",
                                class: "skeuo-panel cursor-pointer hover:shadow-lg transition-all video-card",
                                onclick: {
                                    let video = video.clone();
                                    move |_| select_video(store, notices, selected, video.clone())
                                },
                                div { class: "p-3",
                                    VideoThumbnail {
                                        src: video.thumbnail.clone(),
                                        alt: video.title.clone(),
                                        class: "mb-3 thumbnail-wide".to_string(),
                                        duration: video.duration.clone(),
                                    }
                                    h3 { class: "text-sm font-semibold line-clamp-1", "{video.title}" }
                                    p { class: "text-xs text-gray-400 line-clamp-1", "{video.artist}" }
                                }
                            }
                        }
                    }

                    if total_pages > 1 {
                        div { class: "mt-6 pt-4 border-t border-gray-700 flex justify-center",
                            div { class: "flex gap-2",
                                button {
                                    class: if page_number == 1 { "skeuo-button opacity-50 cursor-not-allowed" } else { "skeuo-button" },
                                    disabled: page_number == 1,
                                    onclick: move |_| current_page.set(page_number.saturating_sub(1).max(1)),
                                    "Previous"
                                }
                                for number in 1..=total_pages {
                                    button {
                                        key: "{number}",
                                        class: if number == page_number { "skeuo-button skeuo-button-primary min-w-[40px]" } else { "skeuo-button min-w-[40px]" },
                                        onclick: move |_| current_page.set(number),
                                        "{number}"
                                    }
                                }
                                button {
                                    class: if page_number == total_pages { "skeuo-button opacity-50 cursor-not-allowed" } else { "skeuo-button" },
                                    disabled: page_number == total_pages,
                                    onclick: move |_| current_page.set((page_number + 1).min(total_pages)),
                                    "Next"
                                }
                            }
                        }
                    }
                }

                // Categories footer
                div { class: "p-4 bg-gray-800 border-t border-gray-700",
                    h3 { class: "text-sm uppercase text-gray-400 mb-2 skeuo-text", "Categories" }
                    div { class: "flex flex-wrap justify-center gap-2",
                        for category in DEFAULT_CATEGORIES {
                            button {
                                key: "{category.id}",
                                class: if active_category() == category.id { "skeuo-button-primary flex items-center gap-2 px-3 py-2" } else { "skeuo-button flex items-center gap-2 px-3 py-2" },
                                onclick: move |_| active_category.set(category.id.to_string()),
                                Icon { name: category.icon.to_string(), class: "w-4 h-4".to_string() }
                                span { "{category.name}" }
                            }
                        }
                    }
                }
            }

            if let Some(video) = selected() {
                div { class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
                    div { class: "skeuo-panel max-w-md w-full",
                        h3 { class: "text-xl mb-4", "Add to Queue" }
                        div { class: "flex items-start gap-4 mb-4",
                            VideoThumbnail {
                                src: video.thumbnail.clone(),
                                alt: video.title.clone(),
                                class: "w-24".to_string(),
                            }
                            div {
                                h4 { class: "font-semibold", "{video.title}" }
                                p { class: "text-sm text-gray-400", "{video.artist}" }
                            }
                        }
                        div { class: "flex justify-end gap-2",
                            button {
                                class: "skeuo-button",
                                onclick: move |_| selected.set(None),
                                "Cancel"
                            }
                            button {
                                class: "skeuo-button-primary",
                                onclick: on_confirm_add,
                                "Add to Queue"
                            }
                        }
                    }
                }
            }
        }
    }
}
