pub mod models;
pub mod youtube;

pub use models::*;
pub use youtube::{
    extract_playlist_id, format_iso_duration, progress_percent, split_title, IngestError,
    PlaylistDetails, YoutubeClient,
};
