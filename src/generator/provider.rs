// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content generator trait definition

use async_trait::async_trait;

use super::types::{GeneratedContent, ProviderError};

/// Trait for generative content providers
///
/// A provider takes a single prompt and returns an ordered sequence of
/// content parts, each either text or an inline binary blob. Implementations
/// are shared across concurrent requests and must hold no per-request state.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Issue one generation call with `prompt` as the sole input
    async fn generate(&self, prompt: &str) -> Result<GeneratedContent, ProviderError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;
}
