// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Provider response model and error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A binary image returned by the provider, already base64-decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Raw image bytes
    pub data: Vec<u8>,
    /// Declared media type (e.g. "image/png")
    pub mime_type: String,
}

/// One unit of a provider response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPart {
    /// A text fragment
    Text(String),
    /// An inline binary blob with its declared media type
    InlineData(ImagePayload),
}

/// Ordered content parts from a single provider call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedContent {
    pub parts: Vec<ContentPart>,
}

impl GeneratedContent {
    pub fn new(parts: Vec<ContentPart>) -> Self {
        Self { parts }
    }

    /// First text part in response order, if any
    pub fn first_text(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            ContentPart::Text(text) => Some(text.as_str()),
            ContentPart::InlineData(_) => None,
        })
    }

    /// First inline binary part in response order, if any.
    /// Later binary parts in the same response are ignored.
    pub fn into_first_image(self) -> Option<ImagePayload> {
        self.parts.into_iter().find_map(|part| match part {
            ContentPart::InlineData(image) => Some(image),
            ContentPart::Text(_) => None,
        })
    }
}

/// Errors raised while talking to the generative provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("Provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Provider API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or error message
        message: String,
    },

    /// Response body could not be interpreted
    #[error("Failed to decode provider response: {0}")]
    Decode(String),
}
