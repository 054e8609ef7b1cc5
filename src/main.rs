use anyhow::Context;
use personal_shopper::catalog::Catalog;
use personal_shopper::config::StorefrontConfig;
use personal_shopper::router::create_app_router;
use personal_shopper::session::{spawn_session_sweeper, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "personal_shopper=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StorefrontConfig::from_env().context("failed to load configuration")?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_file(path).context("failed to load catalog")?,
        None => Catalog::demo(),
    };
    tracing::info!(
        products = catalog.items().len(),
        hot = catalog.hot().len(),
        host_mode = ?config.host_mode,
        operator = %config.operator_handle,
        session_ttl_secs = config.session_ttl.as_secs(),
        "Catalog loaded"
    );

    // Initialize application state
    let addr = config.socket_addr();
    let state = Arc::new(AppState::new(config, catalog));
    let _sweeper = spawn_session_sweeper(state.clone());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    tracing::info!("personal shopper listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

/// Wait for Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
