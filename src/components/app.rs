use crate::components::views::{JukeboxView, LibraryView, SettingsView};
use crate::components::{
    startup_tab, ConfirmDialog, NoticeBanner, NoticeController, TabBar, TabType,
};
use crate::config::APP_NAME;
use crate::db::{default_storage, AspectRatio};
use crate::store::JukeboxStore;
use dioxus::prelude::*;

const SPLASH_MILLIS: u32 = 1000;

fn container_class(aspect_ratio: AspectRatio) -> &'static str {
    match aspect_ratio {
        AspectRatio::Classic => "skeuo-container mx-auto aspect-4/3",
        AspectRatio::Widescreen => "skeuo-container mx-auto aspect-16/9",
    }
}

/// Inactive tabs stay mounted so the player keeps running behind them.
fn tab_class(active: TabType, tab: TabType) -> &'static str {
    if active == tab {
        "block h-full"
    } else {
        "hidden"
    }
}

/// What the startup-tab effect reacts to. The default playlist is tracked by id so
/// switching between two defaults counts as a change.
fn library_shape(store: &JukeboxStore) -> (usize, usize, Option<String>) {
    (
        store.playlists().len(),
        store.queue().len(),
        store.settings().default_playlist_id.clone(),
    )
}

/// Resolves once the splash screen has been shown long enough.
pub async fn splash_delay() {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::future::TimeoutFuture;
        TimeoutFuture::new(SPLASH_MILLIS).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(u64::from(SPLASH_MILLIS))).await;
    }
}

#[component]
pub fn SplashScreen() -> Element {
    rsx! {
        div { class: "fixed inset-0 flex items-center justify-center bg-background",
            div { class: "text-center",
                h1 { class: "text-4xl font-bold mb-4 text-primary animate-pulse skeuo-text",
                    "{APP_NAME}"
                }
                div { class: "w-16 h-16 border-4 border-primary border-t-transparent rounded-full animate-spin mx-auto" }
            }
        }
    }
}

#[component]
pub fn AppShell() -> Element {
    let mut store = use_signal(|| JukeboxStore::new(default_storage()));
    let notice = use_signal(|| None::<String>);
    let pending = use_signal(|| None);
    let notices = NoticeController::new(notice, pending);

    // Provide state via context
    use_context_provider(|| store);
    use_context_provider(|| notices);

    // Steer to the library or jukebox whenever the library, queue or default playlist changes
    let shape = use_memo(move || library_shape(&store.read()));
    use_effect(move || {
        let (playlists, queued, default_playlist) = shape();
        if let Some(tab) = startup_tab(playlists, queued, default_playlist.is_some()) {
            store.write().set_active_tab(tab);
        }
    });

    let active = store.read().active_tab();
    let aspect_ratio = store.read().settings().aspect_ratio;

    rsx! {
        div { class: "flex flex-col h-screen overflow-hidden bg-background text-foreground",
            main { class: "flex-1 flex flex-col overflow-hidden p-4",
                div { class: container_class(aspect_ratio),
                    div { class: "h-full flex flex-col bg-gradient-to-b from-gray-800 to-gray-900",
                        div { class: "flex-1 overflow-hidden",
                            div { class: tab_class(active, TabType::Jukebox),
                                JukeboxView { on_ended: move |_| store.write().next_video() }
                            }
                            div { class: tab_class(active, TabType::Library),
                                LibraryView {}
                            }
                            div { class: tab_class(active, TabType::Settings),
                                SettingsView {}
                            }
                        }

                        TabBar {}
                    }
                }
            }

            NoticeBanner {}
            ConfirmDialog {}
        }
    }
}
