// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the Fabstir post relay

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-carousel-images-2025-10-18";

/// Build date
pub const BUILD_DATE: &str = "2025-10-18";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "linkedin-posts",
    "instagram-captions",
    "single-image",
    "image-carousel",
];
