use backend::{api, RelayConfig, RelayState};

use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    dotenv::dotenv().ok();

    let config = RelayConfig::from_env()?;
    if config.api_key.is_none() {
        warn!("[RELAY] OPENAI_API_KEY is not set; every request will fail");
    }

    let app = api::router(RelayState::from(&config));
    let listener = TcpListener::bind(config.addr).await?;
    info!("[RELAY] Listening on {} (upstream {})", config.addr, config.upstream_url);
    axum::serve(listener, app).await?;

    Ok(())
}
