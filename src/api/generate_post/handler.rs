// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Post generation endpoint handler

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use tracing::{debug, error, info, warn};

use super::request::GeneratePostRequest;
use super::response::GeneratePostResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /generate-post - Generate post text and optional images
///
/// Pipeline:
/// 1. Extract the request body (field presence and types only)
/// 2. Resolve post style and image mode
/// 3. Run the text stage (failure -> 500, no image calls)
/// 4. Run the image stage if requested (per-slide failures are dropped)
/// 5. Build and return GeneratePostResponse
pub async fn generate_post_handler(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePostRequest>, JsonRejection>,
) -> Result<Json<GeneratePostResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected generate-post body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    debug!(
        "Post generation request received: company_len={}, event_len={}, post_type={:?}, generate_image={}",
        request.company_name.len(),
        request.event.len(),
        request.post_type,
        request.generate_image
    );

    let post_request = request.into_post_request(state.image_mode_override);
    info!(
        "Generating post: style={}, generate_image={}, image_mode={}",
        post_request.style, post_request.generate_image, post_request.image_mode
    );

    let post = state
        .post_generator
        .generate(&post_request)
        .await
        .map_err(|e| {
            error!("Post generation failed: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(GeneratePostResponse::from(post)))
}
