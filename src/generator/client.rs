// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gemini `generateContent` REST client

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use super::provider::ContentGenerator;
use super::types::{ContentPart, GeneratedContent, ImagePayload, ProviderError};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Client for the Gemini generative language API
///
/// Built once during startup and shared by every request handler.
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model_name: String,
    api_key: String,
}

// --- Gemini wire types ---

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

impl GeminiClient {
    /// Create a new GeminiClient
    ///
    /// `timeout` of `None` leaves provider calls unbounded.
    pub fn new(
        api_key: &str,
        model_name: &str,
        api_base: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let api_base = api_base.trim_end_matches('/').to_string();
        info!(
            "Gemini client configured: api_base={}, model={}, timeout={:?}",
            api_base, model_name, timeout
        );

        Ok(Self {
            client,
            api_base,
            model_name: model_name.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Get the model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Full `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        let model = self.model_name.trim();
        let model_path = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        };
        format!("{}/{}:generateContent", self.api_base, model_path)
    }
}

/// Request body for a single-prompt call that may yield text and images
pub fn build_request_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }],
        }],
        "generationConfig": {
            "responseModalities": ["TEXT", "IMAGE"],
        },
    })
}

/// Convert a raw `generateContent` body into ordered content parts.
///
/// Only the first candidate is read. Parts carrying neither text nor inline
/// data are dropped.
pub fn parse_response_body(body: &str) -> Result<GeneratedContent, ProviderError> {
    let response: GeminiResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Decode(format!("JSON parse error: {}", e)))?;

    let parts = match response.candidates.into_iter().next() {
        Some(GeminiCandidate {
            content: Some(content),
        }) => content.parts,
        _ => Vec::new(),
    };

    let mut out = Vec::with_capacity(parts.len());
    for part in parts {
        if let Some(text) = part.text {
            out.push(ContentPart::Text(text));
        } else if let Some(inline) = part.inline_data {
            let data = BASE64
                .decode(inline.data.as_bytes())
                .map_err(|e| ProviderError::Decode(format!("inline data base64: {}", e)))?;
            out.push(ContentPart::InlineData(ImagePayload {
                data,
                mime_type: inline.mime_type,
            }));
        }
    }

    Ok(GeneratedContent::new(out))
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedContent, ProviderError> {
        let url = self.endpoint();
        debug!("Gemini generateContent POST {} (prompt_len={})", url, prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let content = parse_response_body(&body)?;
        debug!("Gemini returned {} content part(s)", content.parts.len());
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
