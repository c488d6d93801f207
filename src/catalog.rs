//! Client-side catalog logic behind the jukebox and library surfaces:
//! filtering, pagination, selection checks and playlist URL validation.

use crate::api::models::{LibraryPlaylist, VideoItem, ALL_CATEGORY};
use crate::api::youtube::extract_playlist_id;
use crate::db::AspectRatio;
use crate::store::JukeboxStore;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub videos: Vec<VideoItem>,
    /// 1-based page actually shown.
    pub page: usize,
    /// Always at least 1.
    pub total_pages: usize,
}

/// Videos of enabled playlists, narrowed by category and a case-insensitive
/// substring match over title and artist.
pub fn filter_videos(
    playlists: &[LibraryPlaylist],
    category: &str,
    search_query: &str,
) -> Vec<VideoItem> {
    let query = search_query.to_lowercase();

    playlists
        .iter()
        .filter(|p| p.enabled)
        .flat_map(|p| p.videos.iter())
        .filter(|v| category == ALL_CATEGORY || v.category_id.as_deref() == Some(category))
        .filter(|v| {
            query.is_empty()
                || v.title.to_lowercase().contains(&query)
                || v.artist.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Slice one page out of `videos`. Pages past the end fall back to the first.
pub fn paginate(videos: Vec<VideoItem>, page: usize, per_page: usize) -> CatalogPage {
    let per_page = per_page.max(1);
    let pages = videos.len().div_ceil(per_page);
    let page = if page == 0 || page > pages { 1 } else { page };

    let start = (page - 1) * per_page;
    let videos = videos.into_iter().skip(start).take(per_page).collect();

    CatalogPage {
        videos,
        page,
        total_pages: pages.max(1),
    }
}

pub fn catalog_page(
    playlists: &[LibraryPlaylist],
    category: &str,
    search_query: &str,
    page: usize,
    aspect_ratio: AspectRatio,
) -> CatalogPage {
    paginate(
        filter_videos(playlists, category, search_query),
        page,
        aspect_ratio.videos_per_page(),
    )
}

/// What happens when a catalog video is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    NowPlaying,
    AlreadyQueued,
    Available,
}

impl Selection {
    pub fn notice(self) -> Option<&'static str> {
        match self {
            Self::NowPlaying => Some("This video is currently playing!"),
            Self::AlreadyQueued => Some("This video is already in the queue!"),
            Self::Available => None,
        }
    }
}

pub fn check_selection(store: &JukeboxStore, video: &VideoItem) -> Selection {
    if store
        .current_video()
        .is_some_and(|current| current.youtube_id == video.youtube_id)
    {
        Selection::NowPlaying
    } else if store.is_queued(&video.youtube_id) {
        Selection::AlreadyQueued
    } else {
        Selection::Available
    }
}

/// The first playlist in library order holding the video.
pub fn owning_playlist_id<'a>(
    playlists: &'a [LibraryPlaylist],
    youtube_id: &str,
) -> Option<&'a str> {
    playlists
        .iter()
        .find(|p| p.contains(youtube_id))
        .map(|p| p.id.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlError {
    Invalid,
    Duplicate,
}

impl std::fmt::Display for UrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid => write!(f, "Invalid YouTube playlist URL"),
            Self::Duplicate => write!(f, "This playlist is already in your library"),
        }
    }
}

impl std::error::Error for UrlError {}

/// Resolve a user-entered playlist reference without touching the network.
pub fn validate_playlist_url(
    playlists: &[LibraryPlaylist],
    input: &str,
) -> Result<String, UrlError> {
    let playlist_id = extract_playlist_id(input.trim()).ok_or(UrlError::Invalid)?;

    let exists = playlists
        .iter()
        .any(|p| extract_playlist_id(&p.url).as_deref() == Some(playlist_id.as_str()));
    if exists {
        return Err(UrlError::Duplicate);
    }

    Ok(playlist_id)
}
