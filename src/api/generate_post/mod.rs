// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Post generation API endpoint module
//!
//! Provides POST /generate-post for text and image generation.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_post_handler;
pub use request::GeneratePostRequest;
pub use response::{GeneratePostResponse, ImageData};
