//! Loopcast Server - accepts Loop remote commands and pushes them over APNs.

mod config;

use std::net::SocketAddr;

use axum::Router;
use color_eyre::eyre::WrapErr as _;
use loopcast_push::{ApnsConnector, Dispatcher};
use loopcast_storage::JsonProfileStore;
use tower_http::trace::TraceLayer;

use crate::config::Config;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("loopcast-server starting");

    let config = Config::load().wrap_err("failed to load configuration")?;
    tracing::info!(path = ?Config::config_path(), "configuration loaded");

    // Credentials are validated again on every dispatch; this only warns early.
    if let Err(e) = config.apns.credentials() {
        tracing::warn!(error = %e, "APNs settings incomplete, notifications will fail");
    }

    let profiles = JsonProfileStore::new(&config.profiles_path);
    let dispatcher = Dispatcher::new(config.apns.clone(), profiles, ApnsConnector);

    let app = Router::new()
        .merge(loopcast_http::loop_router(dispatcher))
        .layer(TraceLayer::new_for_http());

    tracing::info!(addr = %config.listen, "listening");

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .wrap_err("failed to bind")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .wrap_err("server error")?;

    Ok(())
}
