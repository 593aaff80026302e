// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Post generation request types and validation

use serde::{Deserialize, Serialize};

use crate::posts::{ImageMode, PostRequest, PostStyle};

fn default_generate_image() -> bool {
    true
}

/// Request for post generation via POST /generate-post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePostRequest {
    /// Company the post is about
    pub company_name: String,

    /// Event or announcement to write about
    pub event: String,

    /// "linkedin"/"professional" or anything else for the casual template
    #[serde(default)]
    pub post_type: Option<String>,

    /// Whether to generate images alongside the text
    #[serde(default = "default_generate_image")]
    pub generate_image: bool,

    /// Image mode; falls back to the server override, then the post style
    #[serde(default)]
    pub image_mode: Option<ImageMode>,
}

impl GeneratePostRequest {
    /// Resolve optional fields into a pipeline request.
    ///
    /// Image mode precedence: request field, server override, post style.
    pub fn into_post_request(self, image_mode_override: Option<ImageMode>) -> PostRequest {
        let style = PostStyle::from_post_type(self.post_type.as_deref());
        PostRequest {
            style,
            image_mode: self
                .image_mode
                .or(image_mode_override)
                .unwrap_or_else(|| style.default_image_mode()),
            company_name: self.company_name,
            event: self.event,
            generate_image: self.generate_image,
        }
    }
}
