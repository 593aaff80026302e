// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::Parser;
use fabstir_post_relay::{
    api::{start_server, AppState},
    cli::Cli,
    config::RelayConfig,
    generator::GeminiClient,
    posts::PostGenerator,
    version,
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    tracing::info!(
        "Starting Fabstir post relay {} (built {}), features: {}",
        version::VERSION,
        version::BUILD_DATE,
        version::FEATURES.join(", ")
    );

    // Missing credentials stop the process before anything binds
    let mut config = RelayConfig::from_env().context("configuration error")?;
    cli.apply(&mut config);
    tracing::debug!("Loaded configuration: {:?}", config);

    let client = GeminiClient::new(
        &config.api_key,
        &config.model,
        &config.api_base,
        config.provider_timeout,
    )
    .context("failed to build provider client")?;

    let model_name = client.model_name().to_string();
    let post_generator = PostGenerator::new(Arc::new(client));
    match config.image_mode {
        Some(mode) => tracing::info!(
            "Provider ready: {} model={}, image mode forced to {}",
            post_generator.provider_name(),
            model_name,
            mode
        ),
        None => tracing::info!(
            "Provider ready: {} model={}, image mode follows post style",
            post_generator.provider_name(),
            model_name
        ),
    }

    let state = AppState::new(post_generator, config.image_mode);
    let addr = config.listen_addr()?;

    start_server(state, addr).await
}
