// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Post generation response types

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::posts::GeneratedPost;

/// Response from post generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratePostResponse {
    /// Generated post text
    pub post: String,
    /// Generated images in call order; empty when none were produced
    pub images: Vec<ImageData>,
}

/// One generated image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageData {
    /// Base64-encoded image bytes
    pub data: String,
    /// Media type (e.g. "image/png")
    pub mime_type: String,
}

impl From<GeneratedPost> for GeneratePostResponse {
    fn from(post: GeneratedPost) -> Self {
        Self {
            post: post.text,
            images: post
                .images
                .into_iter()
                .map(|image| ImageData {
                    data: BASE64.encode(&image.data),
                    mime_type: image.mime_type,
                })
                .collect(),
        }
    }
}
