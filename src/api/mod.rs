// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod generate_post;
pub mod health;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse};
pub use generate_post::{
    generate_post_handler, GeneratePostRequest, GeneratePostResponse, ImageData,
};
pub use health::{health_handler, HealthResponse};
pub use http_server::{create_router, start_server, AppState};
