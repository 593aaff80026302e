// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Marketing post generation: prompt templates and the request pipeline

pub mod generator;
pub mod prompts;

pub use generator::{
    collect_images, GeneratedPost, GenerationError, PostGenerator, PostRequest, SlideError,
};
pub use prompts::{single_image_prompt, CarouselSlide, ImageMode, PostStyle, CAROUSEL_SLIDES};
