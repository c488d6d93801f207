// YouTube Data API v3 response model types used by playlist ingestion.
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlaylistListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistResource>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistResource {
    #[serde(default)]
    pub snippet: PlaylistSnippet,
    #[serde(default, alias = "contentDetails")]
    pub content_details: PlaylistContentDetails,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistSnippet {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistContentDetails {
    #[serde(default, alias = "itemCount")]
    pub item_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItemResource>,
    #[serde(default, alias = "nextPageToken")]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemResource {
    pub id: String,
    #[serde(default)]
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistItemSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
    #[serde(default, alias = "resourceId")]
    pub resource_id: Option<ResourceId>,
}

impl PlaylistItemSnippet {
    pub fn video_id(&self) -> Option<&str> {
        self.resource_id
            .as_ref()
            .and_then(|r| r.video_id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceId {
    #[serde(default, alias = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
    #[serde(default)]
    pub high: Option<Thumbnail>,
}

impl Thumbnails {
    /// Prefer the high resolution variant, falling back to the default one.
    pub fn best_url(&self) -> Option<&str> {
        self.high
            .as_ref()
            .or(self.default.as_ref())
            .map(|t| t.url.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

#[derive(Debug, Deserialize)]
pub struct VideoResource {
    pub id: String,
    #[serde(default)]
    pub snippet: VideoSnippet,
    #[serde(default, alias = "contentDetails")]
    pub content_details: Option<VideoContentDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VideoContentDetails {
    #[serde(default)]
    pub duration: Option<String>,
}
