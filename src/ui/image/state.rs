//! State for the image generator.

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageState {
    /// Request in flight.
    #[default]
    Loading,
    Ready { url: String },
    Failed { message: String },
}

impl UiState for ImageState {}

impl ImageState {
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageState::Ready { url } => Some(url),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ImageState::Loading)
    }
}
