use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VideoItem {
    pub id: String,
    #[serde(rename = "youtubeId")]
    pub youtube_id: String,
    #[serde(default)]
    pub artist: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryPlaylist {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default, rename = "videoCount")]
    pub video_count: u32,
    #[serde(default)]
    pub videos: Vec<VideoItem>,
}

fn default_enabled() -> bool {
    true
}

impl LibraryPlaylist {
    /// A freshly added playlist: enabled, with the provider-reported count and no videos yet.
    pub fn new(name: String, url: String, video_count: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            url: url.trim().to_string(),
            enabled: true,
            video_count,
            videos: Vec::new(),
        }
    }

    pub fn contains(&self, youtube_id: &str) -> bool {
        self.videos.iter().any(|v| v.youtube_id == youtube_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    #[serde(flatten)]
    pub video: VideoItem,
    #[serde(rename = "playlistId")]
    pub playlist_id: String,
}

impl QueueItem {
    pub fn new(video: VideoItem, playlist_id: impl Into<String>) -> Self {
        Self {
            video,
            playlist_id: playlist_id.into(),
        }
    }
}

impl std::ops::Deref for QueueItem {
    type Target = VideoItem;
    fn deref(&self) -> &Self::Target {
        &self.video
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub const ALL_CATEGORY: &str = "all";

pub const DEFAULT_CATEGORIES: [Category; 5] = [
    Category {
        id: ALL_CATEGORY,
        name: "All",
        icon: "music",
    },
    Category {
        id: "rock",
        name: "Rock",
        icon: "disc",
    },
    Category {
        id: "pop",
        name: "Pop",
        icon: "radio",
    },
    Category {
        id: "hiphop",
        name: "Hip Hop",
        icon: "mic",
    },
    Category {
        id: "other",
        name: "Other",
        icon: "film",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_item_serializes_flat_with_camel_case_keys() {
        let item = QueueItem::new(
            VideoItem {
                id: "item-1".to_string(),
                youtube_id: "dQw4w9WgXcQ".to_string(),
                artist: "Rick Astley".to_string(),
                title: "Never Gonna Give You Up".to_string(),
                thumbnail: "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg".to_string(),
                duration: Some("3:33".to_string()),
                category_id: None,
            },
            "pl-1",
        );

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["youtubeId"], "dQw4w9WgXcQ");
        assert_eq!(json["playlistId"], "pl-1");
        assert_eq!(json["duration"], "3:33");
        assert!(json.get("categoryId").is_none());

        let back: QueueItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn playlist_defaults_missing_fields() {
        let playlist: LibraryPlaylist = serde_json::from_str(
            r#"{"id":"a","name":"Mix","url":"https://www.youtube.com/playlist?list=PLx"}"#,
        )
        .unwrap();
        assert!(playlist.enabled);
        assert_eq!(playlist.video_count, 0);
        assert!(playlist.videos.is_empty());
    }
}
