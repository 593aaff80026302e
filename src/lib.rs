// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod generator;
pub mod posts;
pub mod version;

pub use api::{create_router, start_server, AppState};
pub use config::{ConfigError, RelayConfig};
pub use generator::{ContentGenerator, GeminiClient, GeneratedContent, ImagePayload, ProviderError};
pub use posts::{GeneratedPost, GenerationError, PostGenerator, PostRequest, PostStyle};
