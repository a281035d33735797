//! Image-generation widget: shows progress, calls an `ImageBackend`, then
//! renders the image and reports it to the host.

mod backend;
mod intent;
mod payload;
mod reducer;
mod state;
mod view;
mod widget;

pub use backend::{
    parse_generation_response, ImageBackend, ImageError, ImageRequest, UnavailableBackend,
};
pub use intent::ImageIntent;
pub use payload::{ImageConfig, ImagePayloadError, SecureString};
pub use reducer::ImageReducer;
pub use state::ImageState;
pub use view::{render, render_error};
pub use widget::{ImageGenerator, ImageWidget, IMAGE_GENERATION};
