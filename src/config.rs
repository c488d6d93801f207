//! Build-time and runtime configuration.

pub const APP_NAME: &str = "JukeBox Tempo";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Name of the single persisted record holding playlists, queue and settings.
pub const STORAGE_KEY: &str = "jukebox-storage";

const API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Resolve the YouTube Data API key.
///
/// Browser builds can only see the key baked in at compile time. Native builds
/// prefer the runtime environment so a desktop binary can be rekeyed without a rebuild.
pub fn youtube_api_key() -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(key) = std::env::var(API_KEY_VAR)
            .ok()
            .and_then(|value| normalize_key(&value))
        {
            return Some(key);
        }
    }

    option_env!("YOUTUBE_API_KEY").and_then(normalize_key)
}

fn normalize_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Command line / environment configuration for the delivery shell.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "jukebox-server", version, about = "Serves the built JukeBox Tempo app")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, short, env = "PORT", default_value_t = 10000)]
    pub port: u16,

    /// Directory holding the built application (index.html and assets/).
    #[arg(long, env = "JUKEBOX_DIST_DIR", default_value = "dist")]
    pub dist_dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keys_are_ignored() {
        assert_eq!(normalize_key("   "), None);
        assert_eq!(normalize_key(" abc "), Some("abc".to_string()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn server_config_from_flags() {
        use clap::Parser;

        let config = ServerConfig::parse_from([
            "jukebox-server",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--dist-dir",
            "build/web",
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, std::path::PathBuf::from("build/web"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
