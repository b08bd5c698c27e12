//! Binary entrypoint for the menu service

use std::sync::Arc;

use menu_rs::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_rs=info,tower_http=info".into()),
        )
        .init();

    let config = Arc::new(ServiceConfig::default());
    let store: Arc<dyn MenuStore> =
        Arc::new(InMemoryMenuStore::with_items(config.seed.clone()));

    let app = build_router(AppState::new(store, config.clone()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "menu service listening");

    axum::serve(listener, app).await?;

    Ok(())
}
