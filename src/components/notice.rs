use dioxus::prelude::*;

use crate::components::Icon;
use crate::store::JukeboxStore;

const CONFIRM_REMOVE: &str = "Are you sure you want to remove this playlist from your library?";
const CONFIRM_CLEAR: &str = "Are you sure you want to clear your queue?";
const LAST_PLAYLIST: &str = "Cannot remove the last playlist from your library.";

/// A destructive store change waiting on the user's answer in [`ConfirmDialog`].
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    RemovePlaylist { id: String },
    ClearQueue,
}

impl PendingAction {
    pub fn title(&self) -> &'static str {
        match self {
            Self::RemovePlaylist { .. } => "Remove Playlist",
            Self::ClearQueue => "Clear Queue",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            Self::RemovePlaylist { .. } => CONFIRM_REMOVE,
            Self::ClearQueue => CONFIRM_CLEAR,
        }
    }

    /// Run the accepted action. Returns a notice when the store rejected it.
    pub fn apply(&self, store: &mut JukeboxStore) -> Option<&'static str> {
        match self {
            Self::RemovePlaylist { id } => (!store.remove_playlist(id)).then_some(LAST_PLAYLIST),
            Self::ClearQueue => {
                store.clear_queue();
                None
            }
        }
    }
}

/// User-facing notices and confirmations, rendered in-app by [`NoticeBanner`]
/// and [`ConfirmDialog`].
#[derive(Clone, Copy)]
pub struct NoticeController {
    message: Signal<Option<String>>,
    pending: Signal<Option<PendingAction>>,
}

impl NoticeController {
    pub fn new(message: Signal<Option<String>>, pending: Signal<Option<PendingAction>>) -> Self {
        Self { message, pending }
    }

    pub fn current(&self) -> Option<String> {
        (self.message)()
    }

    pub fn pending(&self) -> Option<PendingAction> {
        (self.pending)()
    }

    pub fn notify(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(notice = %text, "showing notice");
        let mut message = self.message;
        message.set(Some(text));
    }

    /// Ask before running `action`. Nothing changes until the user accepts.
    pub fn confirm(&self, action: PendingAction) {
        tracing::debug!(?action, "awaiting confirmation");
        let mut pending = self.pending;
        pending.set(Some(action));
    }

    /// Apply the pending action, if any, and surface a rejection notice.
    pub fn accept(&self, store: &mut JukeboxStore) {
        let mut pending = self.pending;
        let Some(action) = pending.peek().clone() else {
            return;
        };
        pending.set(None);
        if let Some(notice) = action.apply(store) {
            self.notify(notice);
        }
    }

    pub fn cancel(&self) {
        let mut pending = self.pending;
        pending.set(None);
    }

    pub fn dismiss(&self) {
        let mut message = self.message;
        message.set(None);
    }
}

#[component]
pub fn NoticeBanner() -> Element {
    let notices = use_context::<NoticeController>();

    let Some(text) = notices.current() else {
        return rsx! {};
    };

    rsx! {
        div { class: "fixed top-4 left-1/2 -translate-x-1/2 z-50 skeuo-panel flex items-center gap-3 max-w-md",
            Icon { name: "alert".to_string(), class: "w-5 h-5 text-amber-400".to_string() }
            span { class: "text-sm flex-1", "{text}" }
            button {
                class: "skeuo-button p-1",
                title: "Dismiss",
                onclick: move |_| notices.dismiss(),
                Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
            }
        }
    }
}

#[component]
pub fn ConfirmDialog() -> Element {
    let mut store = use_context::<Signal<JukeboxStore>>();
    let notices = use_context::<NoticeController>();

    let Some(action) = notices.pending() else {
        return rsx! {};
    };

    rsx! {
        div { class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50",
            div { class: "skeuo-panel max-w-md w-full mx-4",
                h3 { class: "text-xl mb-4", "{action.title()}" }
                p { class: "text-gray-300 mb-6", "{action.prompt()}" }
                div { class: "flex gap-3 justify-end",
                    button {
                        class: "skeuo-button",
                        onclick: move |_| notices.cancel(),
                        "Cancel"
                    }
                    button {
                        class: "skeuo-button skeuo-button-primary",
                        onclick: move |_| notices.accept(&mut store.write()),
                        "{action.title()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{LibraryPlaylist, VideoItem};
    use crate::db::MemoryStorage;

    fn store_with_playlists(count: usize) -> JukeboxStore {
        let mut store = JukeboxStore::new(Box::new(MemoryStorage::default()));
        for i in 0..count {
            store.add_playlist(LibraryPlaylist::new(
                format!("Mix {i}"),
                format!("https://www.youtube.com/playlist?list=PLmix{i}"),
                0,
            ));
        }
        store
    }

    fn video(youtube_id: &str) -> VideoItem {
        VideoItem {
            id: format!("item-{youtube_id}"),
            youtube_id: youtube_id.to_string(),
            artist: String::new(),
            title: youtube_id.to_string(),
            thumbnail: String::new(),
            duration: None,
            category_id: None,
        }
    }

    #[test]
    fn removing_a_playlist_runs_only_when_applied() {
        let mut store = store_with_playlists(2);
        let id = store.playlists()[0].id.clone();
        let action = PendingAction::RemovePlaylist { id: id.clone() };

        assert_eq!(action.prompt(), CONFIRM_REMOVE);
        assert_eq!(store.playlists().len(), 2);

        assert_eq!(action.apply(&mut store), None);
        assert!(store.playlist(&id).is_none());
    }

    #[test]
    fn removing_the_last_playlist_yields_a_notice() {
        let mut store = store_with_playlists(1);
        let id = store.playlists()[0].id.clone();

        let notice = PendingAction::RemovePlaylist { id }.apply(&mut store);
        assert_eq!(notice, Some(LAST_PLAYLIST));
        assert_eq!(store.playlists().len(), 1);
    }

    #[test]
    fn clearing_the_queue_empties_it() {
        let mut store = store_with_playlists(1);
        assert!(store.add_to_queue(video("a"), "pl"));
        assert!(store.add_to_queue(video("b"), "pl"));

        assert_eq!(PendingAction::ClearQueue.prompt(), CONFIRM_CLEAR);
        assert_eq!(PendingAction::ClearQueue.apply(&mut store), None);
        assert!(store.queue().is_empty());
        assert_eq!(store.current_video_index(), None);
    }
}
