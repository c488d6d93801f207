//! Delivery shell for the built JukeBox Tempo web app.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use jukebox_tempo::config::ServerConfig;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let config = ServerConfig::parse();
    if let Err(err) = jukebox_tempo::server::serve(&config.bind_addr(), &config.dist_dir).await {
        tracing::error!(error = %err, "server startup error");
        return Err(err);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
