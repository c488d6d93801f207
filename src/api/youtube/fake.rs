//! Canned Data API responses for exercising the ingestion pipeline offline.

use super::{ApiResponse, IngestError, Transport, YoutubeClient};
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;

/// Serves canned payloads keyed by endpoint and page token.
#[derive(Default)]
pub(crate) struct FakeTransport {
    pub(crate) playlist: Option<serde_json::Value>,
    pub(crate) pages: HashMap<String, serde_json::Value>,
    pub(crate) videos: serde_json::Value,
    pub(crate) fail_endpoint: Option<(&'static str, u16)>,
    pub(crate) requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeTransport {
    pub(crate) fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl<T> YoutubeClient<T> {
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }
}

impl Transport for FakeTransport {
    async fn get(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<ApiResponse, IngestError> {
        self.requests.borrow_mut().push((
            endpoint.to_string(),
            params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        ));

        if let Some((failing, status)) = self.fail_endpoint {
            if failing == endpoint {
                return Ok(ApiResponse {
                    status,
                    body: String::new(),
                });
            }
        }

        let param = |name: &str| {
            params
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.clone())
        };

        let body = match endpoint {
            "playlists" => self.playlist.clone().unwrap_or(json!({ "items": [] })),
            "playlistItems" => {
                let token = param("pageToken").unwrap_or_default();
                self.pages
                    .get(&token)
                    .cloned()
                    .unwrap_or(json!({ "items": [] }))
            }
            "videos" => self.videos.clone(),
            _ => json!({}),
        };

        Ok(ApiResponse {
            status: 200,
            body: body.to_string(),
        })
    }
}

pub(crate) fn playlist_item(id: &str, video_id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "snippet": {
            "title": title,
            "thumbnails": {
                "default": { "url": format!("https://i.ytimg.com/vi/{video_id}/default.jpg") },
                "high": { "url": format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg") }
            },
            "resourceId": { "kind": "youtube#video", "videoId": video_id }
        }
    })
}

pub(crate) fn two_page_transport() -> FakeTransport {
    let mut pages = HashMap::new();
    pages.insert(
        String::new(),
        json!({
            "items": [
                playlist_item("pi-1", "vid1", "Daft Punk - One More Time"),
                playlist_item("pi-2", "vid2", "Deleted video"),
                playlist_item("pi-3", "vid3", "Instrumental Jam"),
            ],
            "nextPageToken": "PAGE2"
        }),
    );
    pages.insert(
        "PAGE2".to_string(),
        json!({
            "items": [
                playlist_item("pi-4", "vid4", "Private video"),
                playlist_item("pi-5", "vid5", "Queen: Bohemian Rhapsody"),
            ]
        }),
    );

    FakeTransport {
        playlist: Some(json!({
            "items": [{
                "snippet": { "title": "Friday Mix" },
                "contentDetails": { "itemCount": 5 }
            }]
        })),
        pages,
        videos: json!({
            "items": [
                { "id": "vid1", "contentDetails": { "duration": "PT5M20S" } },
                { "id": "vid3", "contentDetails": { "duration": "PT1H2M3S" } },
                { "id": "vid5", "contentDetails": { "duration": "PT45S" } }
            ]
        }),
        ..Default::default()
    }
}
