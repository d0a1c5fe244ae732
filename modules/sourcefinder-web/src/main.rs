use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sourcefinder_common::Config;
use sourcefinder_sources::MatchMode;
use sourcefinder_web::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sourcefinder=info".parse()?))
        .init();

    let config = Config::web_from_env()?;

    let app = router(AppState {
        mode: MatchMode::Raw,
    });

    let addr = config.bind_addr();
    info!("Research sources web server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
