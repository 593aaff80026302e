// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;

use crate::config::RelayConfig;
use crate::posts::ImageMode;

/// Fabstir post relay
#[derive(Parser, Debug, Default)]
#[command(name = "fabstir-post-relay")]
#[command(version)]
#[command(about = "HTTP relay that generates marketing posts and images via Gemini", long_about = None)]
pub struct Cli {
    /// Listen host (overrides API_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides API_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Provider model identifier (overrides GEMINI_MODEL)
    #[arg(long)]
    pub model: Option<String>,

    /// Default image mode: single or carousel (overrides IMAGE_MODE)
    #[arg(long)]
    pub image_mode: Option<ImageMode>,
}

impl Cli {
    /// Apply command-line overrides on top of environment configuration
    pub fn apply(&self, config: &mut RelayConfig) {
        if let Some(ref host) = self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(ref model) = self.model {
            config.model = model.clone();
        }
        if let Some(mode) = self.image_mode {
            config.image_mode = Some(mode);
        }
    }
}
