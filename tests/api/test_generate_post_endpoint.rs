// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for POST /generate-post through the full router

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use fabstir_post_relay::api::{create_router, AppState, ErrorResponse, GeneratePostResponse};
use fabstir_post_relay::generator::{ContentPart, GeneratedContent, ImagePayload};
use fabstir_post_relay::posts::{ImageMode, PostGenerator};
use std::sync::Arc;
use tower::ServiceExt;

use crate::common::{image, no_parts, text, upstream_error, ScriptedGenerator};

fn router(provider: Arc<ScriptedGenerator>, image_mode_override: Option<ImageMode>) -> Router {
    create_router(AppState::new(PostGenerator::new(provider), image_mode_override))
}

async fn post_json(app: Router, body: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/generate-post")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_text_only_returns_post_and_empty_images() {
    let provider = ScriptedGenerator::new(vec![text("Exciting times at Acme!")]);
    let app = router(provider.clone(), None);

    let (status, body) = post_json(
        app,
        r#"{"company_name": "Acme", "event": "new CEO", "generate_image": false}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: GeneratePostResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.post, "Exciting times at Acme!");
    assert!(response.images.is_empty());
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_generate_image_defaults_to_true() {
    let provider = ScriptedGenerator::new(vec![text("post"), image(b"png-bytes", "image/png")]);
    let app = router(provider.clone(), Some(ImageMode::Single));

    let (status, body) =
        post_json(app, r#"{"company_name": "Acme", "event": "new CEO"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["post"], "post");
    assert_eq!(json["images"][0]["mime_type"], "image/png");
    // base64 of "png-bytes"
    assert_eq!(json["images"][0]["data"], "cG5nLWJ5dGVz");
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_linkedin_post_type_reaches_provider() {
    let provider = ScriptedGenerator::new(vec![text("post")]);
    let app = router(provider.clone(), None);

    let (status, _) = post_json(
        app,
        r#"{"company_name": "Acme", "event": "opened in Lisbon", "post_type": "linkedin", "generate_image": false}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let prompt = &provider.prompts()[0];
    assert!(prompt.contains("LinkedIn"));
    assert!(prompt.contains("Acme"));
    assert!(prompt.contains("opened in Lisbon"));
}

#[tokio::test]
async fn test_instagram_carousel_skips_slide_without_image() {
    let provider = ScriptedGenerator::new(vec![
        text("caption"),
        image(&[1], "image/png"),
        no_parts(),
        image(&[3], "image/png"),
    ]);
    let app = router(provider.clone(), Some(ImageMode::Single));

    let (status, body) = post_json(
        app,
        r#"{"company_name": "Acme", "event": "summer sale", "post_type": "instagram", "image_mode": "carousel"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: GeneratePostResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.images.len(), 2);
    assert_eq!(response.images[0].data, "AQ==");
    assert_eq!(response.images[1].data, "Aw==");
    assert_eq!(provider.call_count(), 4);
    assert!(provider.prompts()[0].contains("Instagram"));
}

#[tokio::test]
async fn test_single_image_ignores_later_binary_parts() {
    let provider = ScriptedGenerator::new(vec![
        text("post"),
        Ok(GeneratedContent::new(vec![
            ContentPart::InlineData(ImagePayload {
                data: vec![1],
                mime_type: "image/png".to_string(),
            }),
            ContentPart::InlineData(ImagePayload {
                data: vec![2],
                mime_type: "image/webp".to_string(),
            }),
        ])),
    ]);
    let app = router(provider, None);

    let (_, body) = post_json(app, r#"{"company_name": "Acme", "event": "launch"}"#).await;
    let response: GeneratePostResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.images.len(), 1);
    assert_eq!(response.images[0].mime_type, "image/png");
}

#[tokio::test]
async fn test_text_stage_failure_is_500_with_detail() {
    let provider = ScriptedGenerator::new(vec![upstream_error("model overloaded")]);
    let app = router(provider.clone(), None);

    let (status, body) =
        post_json(app, r#"{"company_name": "Acme", "event": "launch"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert!(error.detail.contains("model overloaded"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_no_text_part_is_500() {
    let provider = ScriptedGenerator::new(vec![image(&[1], "image/png")]);
    let app = router(provider.clone(), None);

    let (status, body) =
        post_json(app, r#"{"company_name": "Acme", "event": "launch"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.detail, "Failed to generate post text");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_empty_event_still_generates() {
    let provider = ScriptedGenerator::new(vec![text("post")]);
    let app = router(provider.clone(), None);

    let (status, body) = post_json(
        app,
        r#"{"company_name": "Acme", "event": "", "generate_image": false}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: GeneratePostResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.post, "post");
    assert_eq!(provider.call_count(), 1);
    assert!(provider.prompts()[0].contains("Event: \n"));
}

#[tokio::test]
async fn test_default_request_makes_text_and_one_image_call() {
    let provider = ScriptedGenerator::new(vec![text("post"), image(&[7], "image/png")]);
    let app = router(provider.clone(), None);

    let (status, body) =
        post_json(app, r#"{"company_name": "Acme", "event": "launch"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let response: GeneratePostResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.images.len(), 1);
    assert_eq!(provider.call_count(), 2);
    let prompts = provider.prompts();
    assert!(prompts[0].contains("LinkedIn"));
    assert!(prompts[1].contains("promotional image for Acme about launch"));
}

#[tokio::test]
async fn test_instagram_without_image_mode_uses_carousel() {
    let provider = ScriptedGenerator::new(vec![
        text("caption"),
        image(&[1], "image/png"),
        image(&[2], "image/png"),
        image(&[3], "image/png"),
    ]);
    let app = router(provider.clone(), None);

    let (status, body) = post_json(
        app,
        r#"{"company_name": "Acme", "event": "launch", "post_type": "instagram"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: GeneratePostResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.images.len(), 3);
    assert_eq!(provider.call_count(), 4);
}

#[tokio::test]
async fn test_server_override_forces_carousel_for_linkedin() {
    let provider = ScriptedGenerator::new(vec![
        text("post"),
        image(&[1], "image/png"),
        image(&[2], "image/png"),
        image(&[3], "image/png"),
    ]);
    let app = router(provider.clone(), Some(ImageMode::Carousel));

    let (status, _) = post_json(app, r#"{"company_name": "Acme", "event": "launch"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.call_count(), 4);
}

#[tokio::test]
async fn test_missing_field_is_422_with_detail() {
    let provider = ScriptedGenerator::new(vec![]);
    let app = router(provider.clone(), None);

    let (status, body) = post_json(app, r#"{"company_name": "Acme"}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert!(error.detail.contains("event"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let provider = ScriptedGenerator::new(vec![]);
    let app = router(provider.clone(), None);

    let (status, body) = post_json(app, "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert!(!error.detail.is_empty());
    assert_eq!(provider.call_count(), 0);
}
