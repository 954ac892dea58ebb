//! Loop HTTP Layer
//!
//! Axum handlers that accept remote commands and dispatch them as
//! notifications.

mod handlers;

pub use handlers::*;

use axum::Router;
use loopcast_push::Notifier;

/// Path accepting Loop remote commands.
pub const NOTIFICATION_PATH: &str = "/api/v2/notifications/loop";

/// Create the notification router.
pub fn loop_router<N>(notifier: N) -> Router
where
    N: Notifier + Clone + 'static,
{
    use axum::routing::{get, post};

    Router::new()
        .route(NOTIFICATION_PATH, post(handlers::notification_handler::<N>))
        .route("/health", get(handlers::health_handler))
        .with_state(notifier)
}
