//! The single source of truth for library, queue, cursor and settings.
//!
//! Every mutator runs to completion synchronously and writes the persisted subset
//! (playlists, queue, settings) through its [`StateStorage`] before returning.
//! Surfaces hold the store in a `Signal` and call mutators through it.

use crate::api::models::{LibraryPlaylist, QueueItem, VideoItem};
use crate::components::TabType;
use crate::db::{AspectRatio, PersistedState, Settings, StateStorage};
use rand::Rng;

/// Partial update for a library playlist; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub enabled: Option<bool>,
    pub video_count: Option<u32>,
}

impl PlaylistUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Default::default()
        }
    }
}

/// Shallow settings merge. `default_playlist_id: Some(None)` clears the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsUpdate {
    pub default_playlist_id: Option<Option<String>>,
    pub random_play: Option<bool>,
    pub aspect_ratio: Option<AspectRatio>,
}

pub struct JukeboxStore {
    playlists: Vec<LibraryPlaylist>,
    queue: Vec<QueueItem>,
    current_video_index: Option<usize>,
    is_playing: bool,
    settings: Settings,
    active_tab: TabType,
    search_query: String,
    storage: Box<dyn StateStorage>,
}

impl JukeboxStore {
    /// Hydrate from storage. Unreadable state falls back to defaults.
    pub fn new(storage: Box<dyn StateStorage>) -> Self {
        let persisted = match storage.load() {
            Ok(state) => state.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "stored state unreadable, starting fresh");
                PersistedState::default()
            }
        };

        tracing::info!(
            playlists = persisted.playlists.len(),
            queued = persisted.queue.len(),
            "store hydrated"
        );

        Self {
            current_video_index: if persisted.queue.is_empty() { None } else { Some(0) },
            playlists: persisted.playlists,
            queue: persisted.queue,
            is_playing: false,
            settings: persisted.settings,
            active_tab: TabType::default(),
            search_query: String::new(),
            storage,
        }
    }

    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            playlists: self.playlists.clone(),
            queue: self.queue.clone(),
            settings: self.settings.clone(),
        }
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.snapshot()) {
            tracing::warn!(error = %err, "failed to persist state");
        }
    }

    pub fn playlists(&self) -> &[LibraryPlaylist] {
        &self.playlists
    }

    pub fn playlist(&self, id: &str) -> Option<&LibraryPlaylist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    pub fn queue(&self) -> &[QueueItem] {
        &self.queue
    }

    pub fn current_video_index(&self) -> Option<usize> {
        self.current_video_index
    }

    pub fn current_video(&self) -> Option<&QueueItem> {
        self.current_video_index.and_then(|idx| self.queue.get(idx))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn active_tab(&self) -> TabType {
        self.active_tab
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    // Playlist management

    pub fn add_playlist(&mut self, playlist: LibraryPlaylist) {
        tracing::info!(id = %playlist.id, name = %playlist.name, "playlist added");
        self.playlists.push(playlist);
        self.persist();
    }

    /// Returns `false` when no playlist has `id`.
    pub fn update_playlist(&mut self, id: &str, update: PlaylistUpdate) -> bool {
        let Some(playlist) = self.playlists.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        if let Some(name) = update.name {
            playlist.name = name;
        }
        if let Some(url) = update.url {
            playlist.url = url;
        }
        if let Some(enabled) = update.enabled {
            playlist.enabled = enabled;
        }
        if let Some(video_count) = update.video_count {
            playlist.video_count = video_count;
        }

        self.persist();
        true
    }

    /// Replace a playlist's videos and recompute its count.
    pub fn set_playlist_videos(&mut self, id: &str, videos: Vec<VideoItem>) -> bool {
        let Some(playlist) = self.playlists.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        playlist.video_count = videos.len() as u32;
        playlist.videos = videos;
        self.persist();
        true
    }

    /// Rejected when it would empty the library.
    pub fn remove_playlist(&mut self, id: &str) -> bool {
        if self.playlists.len() <= 1 {
            return false;
        }

        self.playlists.retain(|p| p.id != id);
        if self.settings.default_playlist_id.as_deref() == Some(id) {
            self.settings.default_playlist_id = None;
        }

        tracing::info!(id, "playlist removed");
        self.persist();
        true
    }

    // Queue management

    /// Append a video unless one with the same `youtube_id` is already queued.
    pub fn add_to_queue(&mut self, video: VideoItem, playlist_id: &str) -> bool {
        if self.is_queued(&video.youtube_id) {
            return false;
        }

        if self.queue.is_empty() {
            self.current_video_index = Some(0);
        }
        self.queue.push(QueueItem::new(video, playlist_id));
        self.persist();
        true
    }

    pub fn is_queued(&self, youtube_id: &str) -> bool {
        self.queue.iter().any(|item| item.youtube_id == youtube_id)
    }

    /// Remove a queue entry, keeping the cursor on a valid item.
    ///
    /// Removing before the cursor shifts it down; removing the current item leaves
    /// the cursor on whatever slid into its slot, wrapping to 0 past the end.
    pub fn remove_from_queue(&mut self, index: usize) -> bool {
        if index >= self.queue.len() {
            return false;
        }

        self.queue.remove(index);

        let mut cursor = self.current_video_index;
        if let Some(current) = cursor {
            if index < current {
                cursor = Some(current.saturating_sub(1));
            }
        }

        if self.queue.is_empty() {
            cursor = None;
            self.is_playing = false;
        } else if cursor.map_or(true, |c| c >= self.queue.len()) {
            cursor = Some(0);
        }

        self.current_video_index = cursor;
        self.persist();
        true
    }

    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.current_video_index = None;
        self.is_playing = false;
        self.persist();
    }

    pub fn next_video(&mut self) {
        self.step(|current, len| match current {
            Some(idx) => (idx + 1) % len,
            None => 0,
        });
    }

    pub fn previous_video(&mut self) {
        self.step(|current, len| match current {
            Some(0) | None => len - 1,
            Some(idx) => idx - 1,
        });
    }

    fn step(&mut self, sequential: impl FnOnce(Option<usize>, usize) -> usize) {
        let len = self.queue.len();
        if len == 0 {
            self.current_video_index = None;
            self.is_playing = false;
        } else if self.settings.random_play {
            // May land on the current track again.
            self.current_video_index = Some(rand::thread_rng().gen_range(0..len));
        } else {
            self.current_video_index = Some(sequential(self.current_video_index, len));
        }
        self.persist();
    }

    /// Jump to a queue entry. Out-of-range indices are rejected.
    pub fn set_current_video_index(&mut self, index: usize) -> bool {
        if index >= self.queue.len() {
            return false;
        }
        self.current_video_index = Some(index);
        self.persist();
        true
    }

    pub fn set_is_playing(&mut self, is_playing: bool) {
        self.is_playing = is_playing && !self.queue.is_empty();
        self.persist();
    }

    // Settings

    pub fn update_settings(&mut self, update: SettingsUpdate) {
        if let Some(default_playlist_id) = update.default_playlist_id {
            self.settings.default_playlist_id = default_playlist_id;
        }
        if let Some(random_play) = update.random_play {
            self.settings.random_play = random_play;
        }
        if let Some(aspect_ratio) = update.aspect_ratio {
            self.settings.aspect_ratio = aspect_ratio;
        }
        self.persist();
    }

    // Transient UI state

    pub fn set_active_tab(&mut self, tab: TabType) {
        self.active_tab = tab;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStorage;

    fn video(youtube_id: &str) -> VideoItem {
        VideoItem {
            id: format!("item-{youtube_id}"),
            youtube_id: youtube_id.to_string(),
            artist: "Artist".to_string(),
            title: format!("Song {youtube_id}"),
            thumbnail: String::new(),
            duration: None,
            category_id: None,
        }
    }

    fn playlist(name: &str) -> LibraryPlaylist {
        LibraryPlaylist::new(
            name.to_string(),
            format!("https://www.youtube.com/playlist?list=PL{name}"),
            0,
        )
    }

    fn store() -> (JukeboxStore, MemoryStorage) {
        let storage = MemoryStorage::default();
        (JukeboxStore::new(Box::new(storage.clone())), storage)
    }

    fn store_with_queue(len: usize) -> (JukeboxStore, MemoryStorage) {
        let (mut store, storage) = store();
        for i in 0..len {
            assert!(store.add_to_queue(video(&format!("v{i}")), "pl"));
        }
        (store, storage)
    }

    fn queued_ids(store: &JukeboxStore) -> Vec<String> {
        store.queue().iter().map(|q| q.youtube_id.clone()).collect()
    }

    #[test]
    fn starts_empty_with_defaults() {
        let (store, storage) = store();
        assert!(store.playlists().is_empty());
        assert!(store.queue().is_empty());
        assert_eq!(store.current_video_index(), None);
        assert!(!store.is_playing());
        assert_eq!(store.settings(), &Settings::default());
        assert_eq!(store.active_tab(), TabType::Jukebox);
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn hydrates_persisted_state_and_positions_cursor() {
        let pl = playlist("A");
        let storage = MemoryStorage::with_state(PersistedState {
            queue: vec![
                QueueItem::new(video("a"), pl.id.clone()),
                QueueItem::new(video("b"), pl.id.clone()),
            ],
            playlists: vec![pl],
            settings: Settings {
                random_play: true,
                ..Default::default()
            },
        });

        let store = JukeboxStore::new(Box::new(storage));
        assert_eq!(store.playlists().len(), 1);
        assert_eq!(store.current_video_index(), Some(0));
        assert_eq!(store.current_video().map(|q| q.youtube_id.as_str()), Some("a"));
        assert!(!store.is_playing());
        assert!(store.settings().random_play);
    }

    #[test]
    fn every_mutation_is_persisted() {
        let (mut store, storage) = store();
        let pl = playlist("A");
        let id = pl.id.clone();

        store.add_playlist(pl);
        assert_eq!(storage.save_count(), 1);
        store.set_playlist_videos(&id, vec![video("a"), video("b")]);
        store.add_to_queue(video("a"), &id);
        store.update_settings(SettingsUpdate {
            random_play: Some(true),
            ..Default::default()
        });
        assert_eq!(storage.save_count(), 4);

        let saved = storage.snapshot().unwrap();
        assert_eq!(saved.playlists[0].video_count, 2);
        assert_eq!(saved.queue.len(), 1);
        assert!(saved.settings.random_play);

        store.set_search_query("queen");
        store.set_active_tab(TabType::Settings);
        assert_eq!(storage.save_count(), 4);
    }

    #[test]
    fn update_playlist_merges_fields() {
        let (mut store, _) = store();
        let pl = playlist("A");
        let id = pl.id.clone();
        store.add_playlist(pl);

        assert!(store.update_playlist(&id, PlaylistUpdate::rename("Chill")));
        assert!(store.update_playlist(&id, PlaylistUpdate::enabled(false)));
        let updated = store.playlist(&id).unwrap();
        assert_eq!(updated.name, "Chill");
        assert!(!updated.enabled);
        assert!(updated.url.ends_with("PLA"));

        assert!(!store.update_playlist("missing", PlaylistUpdate::rename("x")));
    }

    #[test]
    fn set_playlist_videos_recomputes_count() {
        let (mut store, _) = store();
        let mut pl = playlist("A");
        pl.video_count = 10;
        let id = pl.id.clone();
        store.add_playlist(pl);

        assert!(store.set_playlist_videos(&id, vec![video("a"), video("b"), video("c")]));
        assert_eq!(store.playlist(&id).unwrap().video_count, 3);
    }

    #[test]
    fn last_playlist_cannot_be_removed() {
        let (mut store, storage) = store();
        let pl = playlist("Only");
        let id = pl.id.clone();
        store.add_playlist(pl);
        store.update_settings(SettingsUpdate {
            default_playlist_id: Some(Some(id.clone())),
            ..Default::default()
        });
        let saves = storage.save_count();

        assert!(!store.remove_playlist(&id));
        assert_eq!(store.playlists().len(), 1);
        assert_eq!(store.settings().default_playlist_id.as_deref(), Some(id.as_str()));
        assert_eq!(storage.save_count(), saves);
    }

    #[test]
    fn removing_the_default_playlist_clears_the_default() {
        let (mut store, _) = store();
        let a = playlist("A");
        let b = playlist("B");
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        store.add_playlist(a);
        store.add_playlist(b);

        store.update_settings(SettingsUpdate {
            default_playlist_id: Some(Some(a_id.clone())),
            ..Default::default()
        });
        assert!(store.remove_playlist(&b_id));
        assert_eq!(store.settings().default_playlist_id.as_deref(), Some(a_id.as_str()));

        store.add_playlist(playlist("C"));
        assert!(store.remove_playlist(&a_id));
        assert_eq!(store.settings().default_playlist_id, None);
        assert_eq!(store.playlists().len(), 1);
    }

    #[test]
    fn duplicate_videos_are_rejected() {
        let (mut store, storage) = store();
        assert!(store.add_to_queue(video("a"), "pl"));
        let saves = storage.save_count();

        assert!(!store.add_to_queue(video("a"), "other"));
        assert_eq!(queued_ids(&store), vec!["a"]);
        assert_eq!(storage.save_count(), saves);
    }

    #[test]
    fn first_enqueue_positions_the_cursor() {
        let (mut store, _) = store();
        assert_eq!(store.current_video_index(), None);
        store.add_to_queue(video("a"), "pl");
        assert_eq!(store.current_video_index(), Some(0));
        store.set_current_video_index(0);
        store.add_to_queue(video("b"), "pl");
        assert_eq!(store.current_video_index(), Some(0));
        assert_eq!(store.queue()[0].playlist_id, "pl");
    }

    #[test]
    fn removing_before_the_cursor_shifts_it_down() {
        let (mut store, _) = store_with_queue(4);
        store.set_current_video_index(2);

        assert!(store.remove_from_queue(0));
        assert_eq!(store.current_video_index(), Some(1));
        assert_eq!(store.current_video().unwrap().youtube_id, "v2");
    }

    #[test]
    fn removing_the_current_item_advances_to_the_next() {
        let (mut store, _) = store_with_queue(3);
        store.set_current_video_index(1);
        store.set_is_playing(true);

        assert!(store.remove_from_queue(1));
        assert_eq!(store.current_video_index(), Some(1));
        assert_eq!(store.current_video().unwrap().youtube_id, "v2");
        assert!(store.is_playing());
    }

    #[test]
    fn removing_the_last_current_item_wraps_to_start() {
        let (mut store, _) = store_with_queue(3);
        store.set_current_video_index(2);

        assert!(store.remove_from_queue(2));
        assert_eq!(store.current_video_index(), Some(0));
    }

    #[test]
    fn removing_after_the_cursor_keeps_it() {
        let (mut store, _) = store_with_queue(3);
        store.set_current_video_index(1);

        assert!(store.remove_from_queue(2));
        assert_eq!(store.current_video_index(), Some(1));
    }

    #[test]
    fn emptying_the_queue_stops_playback() {
        let (mut store, _) = store_with_queue(1);
        store.set_is_playing(true);

        assert!(store.remove_from_queue(0));
        assert!(store.queue().is_empty());
        assert_eq!(store.current_video_index(), None);
        assert!(!store.is_playing());

        assert!(!store.remove_from_queue(0));
    }

    #[test]
    fn cursor_stays_in_bounds_for_every_removal() {
        for len in 1..=5 {
            for cursor in 0..len {
                for removed in 0..len {
                    let (mut store, _) = store_with_queue(len);
                    store.set_current_video_index(cursor);
                    store.remove_from_queue(removed);

                    let new_len = len - 1;
                    match store.current_video_index() {
                        None => assert_eq!(new_len, 0),
                        Some(idx) => {
                            assert!(idx < new_len);
                            let expected = if removed < cursor {
                                cursor - 1
                            } else if cursor >= new_len {
                                0
                            } else {
                                cursor
                            };
                            assert_eq!(idx, expected, "len {len} cursor {cursor} removed {removed}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn clear_queue_resets_cursor_and_playback() {
        let (mut store, _) = store_with_queue(3);
        store.set_is_playing(true);

        store.clear_queue();
        assert!(store.queue().is_empty());
        assert_eq!(store.current_video_index(), None);
        assert!(!store.is_playing());
    }

    #[test]
    fn sequential_navigation_wraps_both_ways() {
        let (mut store, _) = store_with_queue(3);

        let mut forward = Vec::new();
        for _ in 0..4 {
            store.next_video();
            forward.push(store.current_video_index().unwrap());
        }
        assert_eq!(forward, vec![1, 2, 0, 1]);

        let mut backward = Vec::new();
        for _ in 0..4 {
            store.previous_video();
            backward.push(store.current_video_index().unwrap());
        }
        assert_eq!(backward, vec![0, 2, 1, 0]);
    }

    #[test]
    fn navigation_on_an_empty_queue_stops() {
        let (mut store, _) = store();
        store.next_video();
        assert_eq!(store.current_video_index(), None);
        store.previous_video();
        assert_eq!(store.current_video_index(), None);
        assert!(!store.is_playing());
    }

    #[test]
    fn random_navigation_stays_in_range() {
        let (mut store, _) = store_with_queue(5);
        store.update_settings(SettingsUpdate {
            random_play: Some(true),
            ..Default::default()
        });

        for _ in 0..200 {
            store.next_video();
            assert!(store.current_video_index().unwrap() < 5);
            store.previous_video();
            assert!(store.current_video_index().unwrap() < 5);
        }
    }

    #[test]
    fn playing_requires_a_queue() {
        let (mut store, _) = store();
        store.set_is_playing(true);
        assert!(!store.is_playing());

        assert!(!store.set_current_video_index(0));
    }

    #[test]
    fn settings_merge_shallowly() {
        let (mut store, _) = store();
        store.update_settings(SettingsUpdate {
            aspect_ratio: Some(AspectRatio::Classic),
            ..Default::default()
        });
        store.update_settings(SettingsUpdate {
            default_playlist_id: Some(Some("pl-1".to_string())),
            ..Default::default()
        });
        assert_eq!(store.settings().aspect_ratio, AspectRatio::Classic);
        assert_eq!(store.settings().default_playlist_id.as_deref(), Some("pl-1"));

        store.update_settings(SettingsUpdate {
            default_playlist_id: Some(None),
            ..Default::default()
        });
        assert_eq!(store.settings().default_playlist_id, None);
        assert_eq!(store.settings().aspect_ratio, AspectRatio::Classic);
    }
}
