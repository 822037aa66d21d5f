use super::handlers::{
    handle_health, handle_method_not_allowed, handle_not_found, handle_strain,
    json_transport_errors,
};
use super::{AppState, MAX_BODY_SIZE, REQUEST_TIMEOUT_SECS};

use crate::service::Strainer;
use anyhow::{Context, Result};
use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Routes and transport limits, without binding a socket.
pub fn router(strainer: Strainer) -> Router {
    let state = AppState { strainer };

    Router::new()
        .route("/health", get(handle_health))
        .route("/strainers", post(handle_strain))
        .fallback(handle_not_found)
        .method_not_allowed_fallback(handle_method_not_allowed)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
        .layer(middleware::map_response(json_transport_errors))
}

/// Run the HTTP gateway using axum with proper HTTP/1.1 compliance.
pub async fn run_gateway(host: &str, port: u16, strainer: Strainer) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context("parse gateway bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind gateway socket")?;

    run_gateway_with_listener(listener, strainer).await
}

/// Run the HTTP gateway from a pre-bound listener until Ctrl-C.
pub async fn run_gateway_with_listener(
    listener: tokio::net::TcpListener,
    strainer: Strainer,
) -> Result<()> {
    let local = listener.local_addr().context("read gateway local address")?;

    println!("◆ Strainer listening on http://{local}");
    println!("  POST /strainers  → mentions, emoticons, links");
    println!("  GET  /health     → status");
    println!("  Press Ctrl+C to stop.\n");
    tracing::info!(addr = %local, "gateway started");

    axum::serve(listener, router(strainer))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve gateway")?;

    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
