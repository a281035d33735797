//! Intents for the image generator.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageIntent {
    /// Backend returned an image URL.
    Generated { url: String },
    /// Backend call failed.
    Failed { message: String },
}

impl Intent for ImageIntent {}
