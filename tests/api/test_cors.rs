// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for the cross-origin policy

use axum::body::Body;
use axum::http::{header, Request};
use fabstir_post_relay::api::{create_router, AppState};
use fabstir_post_relay::posts::{ImageMode, PostGenerator};
use tower::ServiceExt;

use crate::common::ScriptedGenerator;

fn app() -> axum::Router {
    create_router(AppState::new(
        PostGenerator::new(ScriptedGenerator::new(vec![])),
        Some(ImageMode::Carousel),
    ))
}

#[tokio::test]
async fn test_any_origin_allowed_with_credentials() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://frontend.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://frontend.example.com"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_preflight_allows_requested_method_and_headers() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/generate-post")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-custom")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
    let allowed_headers = headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(allowed_headers.contains("x-custom"));
}
