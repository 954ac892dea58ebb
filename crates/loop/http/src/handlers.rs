//! Notification HTTP handlers.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use loopcast_core::RawEvent;
use loopcast_push::{FALLBACK_FAILURE, Notifier};

/// Largest accepted request body.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Accept a remote command and report the dispatch outcome.
///
/// `200` with the success message, `500` with the failure message, `400` if
/// the body is not a JSON event.
pub async fn notification_handler<N>(State(notifier): State<N>, request: Request) -> Response
where
    N: Notifier,
{
    let remote_address = remote_address(&request);

    let body = match axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read notification body");
            return (StatusCode::BAD_REQUEST, "failed to read request body").into_response();
        }
    };

    let event: RawEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(error = %e, remote_address = %remote_address, "malformed notification event");
            return (StatusCode::BAD_REQUEST, format!("malformed event: {e}")).into_response();
        }
    };

    let (tx, rx) = tokio::sync::oneshot::channel();
    notifier
        .send_notification(&event, &remote_address, move |outcome| {
            let _ = tx.send(outcome);
        })
        .await;

    match rx.await {
        Ok(Ok(message)) => (StatusCode::OK, message).into_response(),
        Ok(Err(message)) => (StatusCode::INTERNAL_SERVER_ERROR, message).into_response(),
        Err(_) => {
            tracing::error!("notification completed without an outcome");
            (StatusCode::INTERNAL_SERVER_ERROR, FALLBACK_FAILURE).into_response()
        }
    }
}

/// Liveness probe.
pub async fn health_handler() -> &'static str {
    "ok"
}

/// Client address: first `X-Forwarded-For` hop, else the socket peer.
fn remote_address(request: &Request) -> String {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    if let Some(forwarded) = forwarded {
        return forwarded.to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
