// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Post generation pipeline: text stage followed by an optional image stage

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::prompts::{single_image_prompt, CarouselSlide, ImageMode, PostStyle};
use crate::generator::{ContentGenerator, ImagePayload, ProviderError};

/// A resolved generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    pub company_name: String,
    pub event: String,
    pub style: PostStyle,
    pub generate_image: bool,
    pub image_mode: ImageMode,
}

/// Generated post text and its images in request order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPost {
    pub text: String,
    pub images: Vec<ImagePayload>,
}

/// Failures that abort the whole request
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The text call succeeded but carried no usable text part
    #[error("Failed to generate post text")]
    NoText,

    /// The provider call for the text stage failed
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Failure of a single image slot; never aborts the request
#[derive(Debug, Error)]
pub enum SlideError {
    #[error("slide {slide} returned no image data")]
    NoImage { slide: usize },

    #[error("slide {slide} generation failed: {source}")]
    Provider {
        slide: usize,
        #[source]
        source: ProviderError,
    },
}

/// Request handler core
///
/// Owns a shared provider handle injected at startup. Calls are issued
/// strictly in sequence: text first, then images in slide order.
#[derive(Clone)]
pub struct PostGenerator {
    generator: Arc<dyn ContentGenerator>,
}

impl PostGenerator {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Run the full pipeline for one request
    pub async fn generate(&self, request: &PostRequest) -> Result<GeneratedPost, GenerationError> {
        let text = self.generate_text(request).await?;

        let images = if request.generate_image {
            let results = self
                .generate_image_results(&request.company_name, &request.event, request.image_mode)
                .await;
            collect_images(results)
        } else {
            Vec::new()
        };

        info!(
            "Post generated: style={}, text_len={}, images={}",
            request.style,
            text.len(),
            images.len()
        );

        Ok(GeneratedPost { text, images })
    }

    /// Text stage: exactly one provider call, first text part wins
    pub async fn generate_text(&self, request: &PostRequest) -> Result<String, GenerationError> {
        let prompt = request
            .style
            .text_prompt(&request.company_name, &request.event);
        debug!(
            "Text stage: provider={}, style={}, prompt_len={}",
            self.generator.name(),
            request.style,
            prompt.len()
        );

        let content = self.generator.generate(&prompt).await?;
        match content.first_text() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(GenerationError::NoText),
        }
    }

    /// Image stage: one result per requested slot, in call order
    pub async fn generate_image_results(
        &self,
        company_name: &str,
        event: &str,
        mode: ImageMode,
    ) -> Vec<Result<ImagePayload, SlideError>> {
        match mode {
            ImageMode::Single => {
                let prompt = single_image_prompt(company_name, event);
                vec![self.generate_slide(1, &prompt).await]
            }
            ImageMode::Carousel => {
                let mut results = Vec::with_capacity(CarouselSlide::ALL.len());
                for slide in CarouselSlide::ALL {
                    debug!("Carousel slide {} ({})", slide.number(), slide);
                    let prompt = slide.prompt(company_name, event);
                    results.push(self.generate_slide(slide.number(), &prompt).await);
                }
                results
            }
        }
    }

    async fn generate_slide(&self, slide: usize, prompt: &str) -> Result<ImagePayload, SlideError> {
        let content = self
            .generator
            .generate(prompt)
            .await
            .map_err(|source| SlideError::Provider { slide, source })?;
        content
            .into_first_image()
            .ok_or(SlideError::NoImage { slide })
    }
}

/// Keep successful slides in order; failed slides are logged and dropped
pub fn collect_images(results: Vec<Result<ImagePayload, SlideError>>) -> Vec<ImagePayload> {
    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Skipping image: {}", e);
                None
            }
        })
        .collect()
}
