// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::generate_post::generate_post_handler;
use super::health::health_handler;
use crate::posts::{ImageMode, PostGenerator};

/// Shared handler state; cloned per request
#[derive(Clone)]
pub struct AppState {
    pub post_generator: PostGenerator,
    /// Server-wide image mode override; `None` derives it from the post style
    pub image_mode_override: Option<ImageMode>,
}

impl AppState {
    pub fn new(post_generator: PostGenerator, image_mode_override: Option<ImageMode>) -> Self {
        Self {
            post_generator,
            image_mode_override,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Post generation endpoint
        .route("/generate-post", post(generate_post_handler))
        .layer(TraceLayer::new_for_http())
        // Any origin, method and header, with credentials. Mirrors the
        // request origin since a wildcard cannot carry credentials.
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

pub async fn start_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
