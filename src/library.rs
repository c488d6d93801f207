//! Adding playlists to the library and loading their videos.
//!
//! Both flows commit to the store only after the provider answered successfully,
//! so a failed add or reload leaves the library exactly as it was.

use crate::api::models::LibraryPlaylist;
use crate::api::youtube::{progress_percent, IngestError, Transport, YoutubeClient};
use crate::catalog::{validate_playlist_url, UrlError};
use crate::store::JukeboxStore;
use dioxus::prelude::*;

const DETAILS_FAILED: &str = "Could not fetch playlist details. Please check the URL and try again.";

/// Short-lived access to the store. No borrow is held across an `.await`.
pub trait PlaylistLibrary {
    fn with_store<R>(&mut self, f: impl FnOnce(&mut JukeboxStore) -> R) -> R;
}

impl PlaylistLibrary for JukeboxStore {
    fn with_store<R>(&mut self, f: impl FnOnce(&mut JukeboxStore) -> R) -> R {
        f(self)
    }
}

impl PlaylistLibrary for Signal<JukeboxStore> {
    fn with_store<R>(&mut self, f: impl FnOnce(&mut JukeboxStore) -> R) -> R {
        f(&mut *self.write())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddPlaylistError {
    /// Rejected before any request was made.
    Url(UrlError),
    Details(IngestError),
}

impl std::fmt::Display for AddPlaylistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(err) => write!(f, "{}", err),
            Self::Details(_) => write!(f, "{}", DETAILS_FAILED),
        }
    }
}

impl std::error::Error for AddPlaylistError {}

/// A playlist committed to the library, still without its videos.
#[derive(Debug, Clone, PartialEq)]
pub struct AddedPlaylist {
    pub id: String,
    /// Provider-side playlist id used to load the videos.
    pub source_id: String,
}

/// Validate `input`, fetch the playlist's details and commit it with the
/// provider-reported count.
pub async fn add_playlist_from_url<T: Transport>(
    client: &YoutubeClient<T>,
    library: &mut impl PlaylistLibrary,
    input: &str,
) -> Result<AddedPlaylist, AddPlaylistError> {
    let source_id = library
        .with_store(|store| validate_playlist_url(store.playlists(), input))
        .map_err(AddPlaylistError::Url)?;

    let details = client
        .fetch_playlist_details(&source_id)
        .await
        .map_err(|err| {
            tracing::error!(source_id, error = %err, "error adding playlist");
            AddPlaylistError::Details(err)
        })?;

    let playlist = LibraryPlaylist::new(details.title, input.to_string(), details.count);
    let id = playlist.id.clone();
    library.with_store(|store| store.add_playlist(playlist));

    Ok(AddedPlaylist { id, source_id })
}

/// Fetch every video of `source_id` and store them on `playlist_id`, reporting
/// progress as a percentage. Returns how many videos were stored.
pub async fn reload_playlist_videos<T: Transport>(
    client: &YoutubeClient<T>,
    library: &mut impl PlaylistLibrary,
    playlist_id: &str,
    source_id: &str,
    mut on_progress: impl FnMut(u32),
) -> Result<usize, IngestError> {
    let videos = client
        .fetch_playlist_videos(source_id, |loaded, total| {
            on_progress(progress_percent(loaded, total));
        })
        .await?;

    let count = videos.len();
    if !library.with_store(|store| store.set_playlist_videos(playlist_id, videos)) {
        tracing::warn!(playlist_id, "playlist removed while its videos were loading");
    }
    Ok(count)
}
