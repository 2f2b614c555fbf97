//! lingosaver server
//!
//! HTTP backend comparing English and target-language Bedrock generations

use anyhow::{Context, Result};
use lingosaver::utils::logging::init_logging;
use lingosaver::{create_router, version_info, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Settings first: the log level and format live there
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings.logging);
    info!("{}", version_info());
    info!("Bedrock region: {}", settings.bedrock.region);

    let addr = settings.listen_addr();
    let app = create_router(settings).await?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Server running on {}", addr);
    info!("📝 Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}
