// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Generative content provider boundary
//!
//! The rest of the service only sees [`ContentGenerator`]; [`GeminiClient`]
//! is the production implementation built once at startup.

pub mod client;
pub mod provider;
pub mod types;

pub use client::GeminiClient;
pub use provider::ContentGenerator;
pub use types::{ContentPart, GeneratedContent, ImagePayload, ProviderError};
