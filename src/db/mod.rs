use crate::api::models::{LibraryPlaylist, QueueItem};
use crate::config::STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

/// Error type for persistence operations
#[derive(Debug, Clone, PartialEq)]
pub struct StorageError(String);

impl StorageError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid stored state: {}", err))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_storage::errors::StorageError> for StorageError {
    fn from(err: gloo_storage::errors::StorageError) -> Self {
        Self::new(err.to_string())
    }
}

/// Catalog grid density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AspectRatio {
    #[serde(rename = "4:3")]
    Classic,
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
}

/// Rows in the jukebox grid, regardless of aspect ratio.
pub const GRID_ROWS: usize = 4;

impl AspectRatio {
    pub fn columns(self) -> usize {
        match self {
            Self::Classic => 6,
            Self::Widescreen => 8,
        }
    }

    pub fn videos_per_page(self) -> usize {
        self.columns() * GRID_ROWS
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "4:3",
            Self::Widescreen => "16:9",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "4:3 (Classic)",
            Self::Widescreen => "16:9 (Widescreen)",
        }
    }

    pub fn player_height(self) -> u32 {
        match self {
            Self::Classic => 300,
            Self::Widescreen => 360,
        }
    }
}

/// User settings stored alongside the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default, rename = "defaultPlaylistId")]
    pub default_playlist_id: Option<String>,
    #[serde(default, rename = "randomPlay")]
    pub random_play: bool,
    #[serde(default, rename = "aspectRatio")]
    pub aspect_ratio: AspectRatio,
}

/// The persisted subset of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersistedState {
    #[serde(default)]
    pub playlists: Vec<LibraryPlaylist>,
    #[serde(default)]
    pub queue: Vec<QueueItem>,
    #[serde(default)]
    pub settings: Settings,
}

/// Durable home of the persisted record. Both calls are synchronous so a store
/// mutation has hit storage by the time it returns.
pub trait StateStorage {
    fn load(&self) -> Result<Option<PersistedState>, StorageError>;
    fn save(&self, state: &PersistedState) -> Result<(), StorageError>;
}

/// Browser localStorage under a single key.
#[cfg(target_arch = "wasm32")]
pub struct LocalStateStorage;

#[cfg(target_arch = "wasm32")]
impl StateStorage for LocalStateStorage {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        match LocalStorage::raw().get_item(STORAGE_KEY) {
            Ok(Some(json)) => Ok(Some(serde_json::from_str(&json)?)),
            Ok(None) => Ok(None),
            Err(_) => Err(StorageError::new("localStorage is unavailable")),
        }
    }

    fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        LocalStorage::set(STORAGE_KEY, state)?;
        Ok(())
    }
}

/// SQLite key/value table for desktop and mobile builds.
#[cfg(not(target_arch = "wasm32"))]
pub struct SqliteStateStorage {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl SqliteStateStorage {
    pub fn open(path: impl Into<std::path::PathBuf>) -> Result<Self, StorageError> {
        let storage = Self { path: path.into() };
        let conn = storage.connection()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(storage)
    }

    pub fn open_default() -> Result<Self, StorageError> {
        let data_dir = dirs::data_dir()
            .map(|dir| dir.join("jukebox-tempo"))
            .unwrap_or_else(|| std::path::PathBuf::from(".jukebox-tempo"));
        std::fs::create_dir_all(&data_dir)
            .map_err(|e| StorageError::new(format!("Failed to create data dir: {}", e)))?;
        Self::open(data_dir.join("jukebox.db"))
    }

    fn connection(&self) -> Result<rusqlite::Connection, StorageError> {
        rusqlite::Connection::open(&self.path)
            .map_err(|e| StorageError::new(format!("Failed to open database: {}", e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StateStorage for SqliteStateStorage {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        use rusqlite::OptionalExtension;

        let conn = self.connection()?;
        let json: Option<String> = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [STORAGE_KEY],
                |row: &rusqlite::Row| row.get(0),
            )
            .optional()?;

        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        let conn = self.connection()?;
        let json = serde_json::to_string(state)?;
        conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            [STORAGE_KEY, json.as_str()],
        )?;
        Ok(())
    }
}

/// Process-local storage. Used when no durable backend can be opened, and in tests.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<Option<PersistedState>>>,
    saves: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn with_state(state: PersistedState) -> Self {
        let storage = Self::default();
        storage.state.replace(Some(state));
        storage
    }

    pub fn snapshot(&self) -> Option<PersistedState> {
        self.state.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        Ok(self.snapshot())
    }

    fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        self.state.replace(Some(state.clone()));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// The platform's durable backend.
#[cfg(target_arch = "wasm32")]
pub fn default_storage() -> Box<dyn StateStorage> {
    Box::new(LocalStateStorage)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage() -> Box<dyn StateStorage> {
    match SqliteStateStorage::open_default() {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            tracing::error!(error = %err, "failed to open database, state will not survive a restart");
            Box::new(MemoryStorage::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::VideoItem;

    fn sample_state() -> PersistedState {
        let mut playlist = LibraryPlaylist::new(
            "Road Trip".to_string(),
            "https://www.youtube.com/playlist?list=PLroadtrip".to_string(),
            1,
        );
        let video = VideoItem {
            id: "pi-1".to_string(),
            youtube_id: "vid1".to_string(),
            artist: "Toto".to_string(),
            title: "Africa".to_string(),
            thumbnail: String::new(),
            duration: Some("4:55".to_string()),
            category_id: None,
        };
        playlist.videos.push(video.clone());
        PersistedState {
            queue: vec![QueueItem::new(video, playlist.id.clone())],
            settings: Settings {
                default_playlist_id: Some(playlist.id.clone()),
                random_play: true,
                aspect_ratio: AspectRatio::Classic,
            },
            playlists: vec![playlist],
        }
    }

    #[test]
    fn settings_use_the_stored_wire_names() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "defaultPlaylistId": null,
                "randomPlay": false,
                "aspectRatio": "16:9"
            })
        );

        let classic: Settings = serde_json::from_str(r#"{"aspectRatio":"4:3"}"#).unwrap();
        assert_eq!(classic.aspect_ratio, AspectRatio::Classic);
        assert!(!classic.random_play);
    }

    #[test]
    fn grid_density_follows_aspect_ratio() {
        assert_eq!(AspectRatio::Classic.videos_per_page(), 24);
        assert_eq!(AspectRatio::Widescreen.videos_per_page(), 32);
    }

    #[test]
    fn memory_storage_counts_saves() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.load().unwrap(), None);

        let state = sample_state();
        storage.save(&state).unwrap();
        storage.save(&state).unwrap();
        assert_eq!(storage.save_count(), 2);
        assert_eq!(storage.load().unwrap(), Some(state));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn sqlite_storage_overwrites_the_single_record() {
        let dir = tempfile::tempdir().unwrap();
        let storage = SqliteStateStorage::open(dir.path().join("jukebox.db")).unwrap();
        assert_eq!(storage.load().unwrap(), None);

        let mut state = sample_state();
        storage.save(&state).unwrap();
        state.settings.random_play = false;
        storage.save(&state).unwrap();

        let reopened = SqliteStateStorage::open(dir.path().join("jukebox.db")).unwrap();
        assert_eq!(reopened.load().unwrap(), Some(state));
    }
}
