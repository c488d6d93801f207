//! YouTube playlist ingestion.
//!
//! Resolves playlist references to ids, fetches playlist metadata and the paginated
//! item listing, and normalizes every entry into a [`VideoItem`]. All network access
//! goes through [`Transport`] so the pipeline can run against canned payloads.

mod response_models;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod fake;

use crate::api::models::VideoItem;
use crate::config::{youtube_api_key, YOUTUBE_API_BASE};
use once_cell::sync::Lazy;
use regex::Regex;
use response_models::*;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

static PLAYLIST_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtube\.com/playlist\?list=([^&]+)").expect("valid regex"));
static WATCH_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtube\.com/watch\?v=.+&list=([^&]+)").expect("valid regex"));
static SHORT_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtu\.be/.+\?list=([^&]+)").expect("valid regex"));
static BARE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{13,}$").expect("valid regex"));
static ISO_DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("valid regex")
});

/// Maximum page size the playlistItems endpoint accepts.
pub const PAGE_SIZE: u32 = 50;

const TITLE_SEPARATORS: [&str; 3] = [" - ", ": ", " | "];
const UNAVAILABLE_TITLES: [&str; 2] = ["Deleted video", "Private video"];

#[derive(Debug, Clone, PartialEq)]
pub enum IngestError {
    /// The request never produced a response.
    Network(String),
    /// The provider answered with a non-success status.
    Status(u16),
    NotFound,
    Decode(String),
    MissingApiKey,
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status(status) => write!(f, "API Error: {}", status),
            Self::NotFound => write!(f, "Playlist not found"),
            Self::Decode(msg) => write!(f, "Unexpected API response: {}", msg),
            Self::MissingApiKey => write!(f, "No YouTube API key configured"),
        }
    }
}

impl std::error::Error for IngestError {}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A GET against one endpoint of the Data API, relative to its base URL.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, endpoint: &str, params: &[(&str, String)])
        -> Result<ApiResponse, IngestError>;
}

pub struct HttpTransport {
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: YOUTUBE_API_BASE.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn from_env() -> Result<Self, IngestError> {
        youtube_api_key()
            .map(Self::new)
            .ok_or(IngestError::MissingApiKey)
    }
}

impl Transport for HttpTransport {
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<ApiResponse, IngestError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("key", self.api_key.as_str()));

        let response = HTTP_CLIENT
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| IngestError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| IngestError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistDetails {
    pub title: String,
    pub count: u32,
}

pub struct YoutubeClient<T = HttpTransport> {
    transport: T,
}

impl YoutubeClient<HttpTransport> {
    pub fn from_env() -> Result<Self, IngestError> {
        Ok(Self::with_transport(HttpTransport::from_env()?))
    }
}

impl<T: Transport> YoutubeClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    async fn get_json<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<R, IngestError> {
        let response = self.transport.get(endpoint, params).await?;
        if !response.is_success() {
            return Err(IngestError::Status(response.status));
        }
        serde_json::from_str(&response.body).map_err(|e| IngestError::Decode(e.to_string()))
    }

    pub async fn fetch_playlist_details(
        &self,
        playlist_id: &str,
    ) -> Result<PlaylistDetails, IngestError> {
        let result = self
            .get_json::<PlaylistListResponse>(
                "playlists",
                &[
                    ("part", "snippet,contentDetails".to_string()),
                    ("id", playlist_id.to_string()),
                ],
            )
            .await
            .and_then(|response| {
                response
                    .items
                    .into_iter()
                    .next()
                    .map(|item| PlaylistDetails {
                        title: item.snippet.title,
                        count: item.content_details.item_count,
                    })
                    .ok_or(IngestError::NotFound)
            });

        if let Err(err) = &result {
            tracing::warn!(playlist_id, error = %err, "failed to fetch playlist details");
        }
        result
    }

    /// Fetch every video in a playlist, one page at a time.
    ///
    /// `on_progress(loaded, total)` runs after each page; `total` is the count the
    /// provider reported for the playlist. Any failed request aborts the whole fetch.
    pub async fn fetch_playlist_videos(
        &self,
        playlist_id: &str,
        mut on_progress: impl FnMut(usize, u32),
    ) -> Result<Vec<VideoItem>, IngestError> {
        let result = self.collect_playlist_videos(playlist_id, &mut on_progress).await;
        match &result {
            Ok(videos) => {
                tracing::info!(playlist_id, videos = videos.len(), "playlist ingested");
            }
            Err(err) => {
                tracing::warn!(playlist_id, error = %err, "failed to fetch playlist videos");
            }
        }
        result
    }

    async fn collect_playlist_videos(
        &self,
        playlist_id: &str,
        on_progress: &mut impl FnMut(usize, u32),
    ) -> Result<Vec<VideoItem>, IngestError> {
        let total = self.fetch_playlist_details(playlist_id).await?.count;
        let mut videos = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut params = vec![
                ("part", "snippet,contentDetails".to_string()),
                ("maxResults", PAGE_SIZE.to_string()),
                ("playlistId", playlist_id.to_string()),
            ];
            if let Some(token) = &page_token {
                params.push(("pageToken", token.clone()));
            }

            let page: PlaylistItemListResponse = self.get_json("playlistItems", &params).await?;
            if page.items.is_empty() {
                break;
            }

            let durations = self.fetch_durations(&page.items).await?;
            let page_videos: Vec<VideoItem> = page
                .items
                .into_iter()
                .filter(|item| !UNAVAILABLE_TITLES.contains(&item.snippet.title.as_str()))
                .filter_map(|item| playlist_item_to_video(item, &durations))
                .collect();

            tracing::debug!(
                playlist_id,
                page_videos = page_videos.len(),
                "fetched playlist page"
            );
            videos.extend(page_videos);
            on_progress(videos.len(), total);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(videos)
    }

    async fn fetch_durations(
        &self,
        items: &[PlaylistItemResource],
    ) -> Result<HashMap<String, String>, IngestError> {
        let ids: Vec<&str> = items
            .iter()
            .filter_map(|item| item.snippet.video_id())
            .collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let details: VideoListResponse = self
            .get_json(
                "videos",
                &[
                    ("part", "contentDetails,snippet".to_string()),
                    ("id", ids.join(",")),
                ],
            )
            .await?;

        Ok(details
            .items
            .into_iter()
            .filter_map(|video| {
                let duration = video.content_details?.duration?;
                Some((video.id, duration))
            })
            .collect())
    }

    /// Look up a single video. Failures are logged and reported as `None`.
    pub async fn fetch_video_details(&self, video_id: &str) -> Option<VideoItem> {
        let response = self
            .get_json::<VideoListResponse>(
                "videos",
                &[
                    ("part", "snippet,contentDetails".to_string()),
                    ("id", video_id.to_string()),
                ],
            )
            .await;

        match response {
            Ok(list) => list.items.into_iter().next().map(|video| {
                let (artist, title) = split_title(&video.snippet.title);
                VideoItem {
                    id: video.id.clone(),
                    youtube_id: video.id,
                    artist,
                    title,
                    thumbnail: video
                        .snippet
                        .thumbnails
                        .as_ref()
                        .and_then(Thumbnails::best_url)
                        .unwrap_or_default()
                        .to_string(),
                    duration: video
                        .content_details
                        .and_then(|d| d.duration)
                        .and_then(|d| format_iso_duration(&d)),
                    category_id: None,
                }
            }),
            Err(err) => {
                tracing::warn!(video_id, error = %err, "failed to fetch video details");
                None
            }
        }
    }
}

fn playlist_item_to_video(
    item: PlaylistItemResource,
    durations: &HashMap<String, String>,
) -> Option<VideoItem> {
    let youtube_id = item.snippet.video_id()?.to_string();
    let (artist, title) = split_title(&item.snippet.title);
    let thumbnail = item
        .snippet
        .thumbnails
        .as_ref()
        .and_then(Thumbnails::best_url)
        .unwrap_or_default()
        .to_string();
    let duration = durations
        .get(&youtube_id)
        .and_then(|d| format_iso_duration(d));

    Some(VideoItem {
        id: item.id,
        youtube_id,
        artist,
        title,
        thumbnail,
        duration,
        category_id: None,
    })
}

/// Pull a playlist id out of a playlist, watch or youtu.be URL, or accept a bare id.
pub fn extract_playlist_id(input: &str) -> Option<String> {
    for re in [&*PLAYLIST_URL_RE, &*WATCH_URL_RE, &*SHORT_URL_RE] {
        if let Some(caps) = re.captures(input) {
            return caps.get(1).map(|m| m.as_str().to_string());
        }
    }

    if BARE_ID_RE.is_match(input) {
        return Some(input.to_string());
    }

    None
}

/// Split "Artist - Title" style video titles. Separators are tried in a fixed
/// order and only the first occurrence of the chosen one splits.
pub fn split_title(raw: &str) -> (String, String) {
    for separator in TITLE_SEPARATORS {
        if let Some((artist, title)) = raw.split_once(separator) {
            return (artist.trim().to_string(), title.trim().to_string());
        }
    }
    (String::new(), raw.to_string())
}

/// Convert an ISO-8601 duration such as `PT1H2M3S` to `1:02:03`.
pub fn format_iso_duration(iso: &str) -> Option<String> {
    let caps = ISO_DURATION_RE.captures(iso)?;
    let part = |idx: usize| -> u64 {
        caps.get(idx)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    let (hours, minutes, seconds) = (part(1), part(2), part(3));

    if hours > 0 {
        Some(format!("{}:{:02}:{:02}", hours, minutes, seconds))
    } else {
        Some(format!("{}:{:02}", minutes, seconds))
    }
}

/// Loading percentage shown while a playlist is ingested.
pub fn progress_percent(loaded: usize, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((loaded as f64 / total as f64) * 100.0).floor() as u32
}
