// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prompt templates for post text and images
//!
//! Every template is a pure function of its inputs: the same company name
//! and event always produce byte-identical prompt text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of slides produced in carousel mode
pub const CAROUSEL_SLIDES: usize = 3;

/// Copy style used for the post text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStyle {
    /// Polished LinkedIn copy in an executive tone
    Professional,
    /// Short, slang-inflected Instagram carousel caption
    Casual,
}

impl PostStyle {
    /// Resolve the style from the request's `post_type`.
    ///
    /// Absent selects Professional. "linkedin" and "professional" (any case)
    /// select Professional; every other value falls back to Casual.
    pub fn from_post_type(post_type: Option<&str>) -> Self {
        match post_type.map(|s| s.trim().to_ascii_lowercase()) {
            None => PostStyle::Professional,
            Some(s) if s == "linkedin" || s == "professional" => PostStyle::Professional,
            Some(_) => PostStyle::Casual,
        }
    }

    /// Image mode used when neither the request nor the server picks one
    pub fn default_image_mode(&self) -> ImageMode {
        match self {
            PostStyle::Professional => ImageMode::Single,
            PostStyle::Casual => ImageMode::Carousel,
        }
    }

    /// Build the text prompt for this style
    pub fn text_prompt(&self, company_name: &str, event: &str) -> String {
        match self {
            PostStyle::Professional => professional_prompt(company_name, event),
            PostStyle::Casual => casual_prompt(company_name, event),
        }
    }
}

impl fmt::Display for PostStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostStyle::Professional => write!(f, "professional"),
            PostStyle::Casual => write!(f, "casual"),
        }
    }
}

/// How images are produced when image generation is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    /// One promotional image
    Single,
    /// Three visually consistent slides
    Carousel,
}

impl FromStr for ImageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(ImageMode::Single),
            "carousel" => Ok(ImageMode::Carousel),
            other => Err(format!(
                "invalid image mode '{}'; allowed: single, carousel",
                other
            )),
        }
    }
}

impl fmt::Display for ImageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageMode::Single => write!(f, "single"),
            ImageMode::Carousel => write!(f, "carousel"),
        }
    }
}

/// Position of a slide within the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselSlide {
    /// Slide 1: title and hook
    Hook,
    /// Slide 2: informational infographic
    Infographic,
    /// Slide 3: summary and call to action
    Summary,
}

impl CarouselSlide {
    /// Slides in the order they must be requested
    pub const ALL: [CarouselSlide; CAROUSEL_SLIDES] = [
        CarouselSlide::Hook,
        CarouselSlide::Infographic,
        CarouselSlide::Summary,
    ];

    /// 1-based slide number
    pub fn number(&self) -> usize {
        match self {
            CarouselSlide::Hook => 1,
            CarouselSlide::Infographic => 2,
            CarouselSlide::Summary => 3,
        }
    }

    /// Build the image prompt for this slide
    pub fn prompt(&self, company_name: &str, event: &str) -> String {
        match self {
            CarouselSlide::Hook => format!(
                "Create slide 1 of a 3-slide Instagram carousel for {company_name} about {event}.\n\
                 This is the TITLE / HOOK slide: a bold, eye-catching headline that makes people stop scrolling.\n\
                 Use a modern, vibrant design with large readable typography.\n\
                 Establish a clear visual style (color palette, typography, layout, brand elements) \
                 that the next two slides will reuse.\n\
                 Square 1:1 format."
            ),
            CarouselSlide::Infographic => format!(
                "Create slide 2 of a 3-slide Instagram carousel for {company_name} about {event}.\n\
                 This is the INFOGRAPHIC slide: present the key facts and highlights of the event \
                 with icons, short bullet points and simple data visuals.\n\
                 Stay visually consistent with slide 1: same color palette, typography, layout and brand elements.\n\
                 Square 1:1 format."
            ),
            CarouselSlide::Summary => format!(
                "Create slide 3 of a 3-slide Instagram carousel for {company_name} about {event}.\n\
                 This is the SUMMARY / CALL-TO-ACTION slide: recap the main takeaway and invite \
                 the audience to follow, comment or learn more.\n\
                 Stay visually consistent with slides 1 and 2: same color palette, typography, layout and brand elements.\n\
                 Square 1:1 format."
            ),
        }
    }
}

impl fmt::Display for CarouselSlide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselSlide::Hook => write!(f, "hook"),
            CarouselSlide::Infographic => write!(f, "infographic"),
            CarouselSlide::Summary => write!(f, "summary"),
        }
    }
}

fn professional_prompt(company_name: &str, event: &str) -> String {
    format!(
        "Create a professional LinkedIn post about:\n\
         Company: {company_name}\n\
         Event: {event}\n\
         \n\
         Requirements:\n\
         - Length: 150-300 words\n\
         - Tone: polished and executive, confident but approachable\n\
         - Open with a strong first line that frames why this event matters\n\
         - Highlight the impact for customers, partners and the wider industry\n\
         - Include 5-10 relevant hashtags\n\
         - End with a clear call to action\n\
         \n\
         Return only the post text."
    )
}

fn casual_prompt(company_name: &str, event: &str) -> String {
    format!(
        "Write an engaging Instagram carousel caption about:\n\
         Company: {company_name}\n\
         Event: {event}\n\
         \n\
         Requirements:\n\
         - Keep it under 1000 characters\n\
         - Casual, friendly voice with a little slang and emojis where they fit\n\
         - Make it emotionally engaging and relatable\n\
         - Structure: HOOK (grab attention in the first line) -> STORY (what happened) -> \
         VALUE (why it matters to the reader) -> ENGAGEMENT (end with a question or prompt to comment)\n\
         - Finish with 20-25 relevant hashtags\n\
         \n\
         Return only the caption text."
    )
}

/// Build the prompt for single-image mode
pub fn single_image_prompt(company_name: &str, event: &str) -> String {
    format!(
        "Create a professional promotional image for {} about {}",
        company_name, event
    )
}
