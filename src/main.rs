use std::{sync::Arc, time::Duration};

use tracing_subscriber::EnvFilter;

use movie_search::{
    api::{create_router, AppState},
    config::Config,
    services::{MovieProvider, OmdbProvider},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_search=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let provider: Arc<dyn MovieProvider> = Arc::new(OmdbProvider::with_timeout(
        config.api(),
        Duration::from_secs(config.request_timeout_secs),
    )?);

    tracing::info!(
        provider = provider.name(),
        api_url = %config.omdb_api_url,
        "Movie provider configured"
    );

    // Initialize application state
    let state = AppState::new(provider);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
