use std::sync::Arc;

use items_api::shared::infrastructure::item_store::in_memory::InMemoryItemStore;
use items_api::shell::config::Config;
use items_api::shell::state::AppState;
use items_api::shell::{http, logging};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init();

    let state = AppState::new(Arc::new(InMemoryItemStore::new()));
    let app = http::router(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
