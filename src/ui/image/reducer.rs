//! Reducer for the image generator.

use crate::ui::mvi::Reducer;

use super::intent::ImageIntent;
use super::state::ImageState;

pub struct ImageReducer;

impl Reducer for ImageReducer {
    type State = ImageState;
    type Intent = ImageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Only the first result counts.
        if !state.is_loading() {
            return state;
        }
        match intent {
            ImageIntent::Generated { url } => ImageState::Ready { url },
            ImageIntent::Failed { message } => ImageState::Failed { message },
        }
    }
}
