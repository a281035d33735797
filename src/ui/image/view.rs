//! Projection of image-generator state.

use crate::ui::view::ViewNode;

use super::state::ImageState;

pub fn render(state: &ImageState, prompt: &str) -> ViewNode {
    let body = match state {
        ImageState::Loading => ViewNode::new("div")
            .class("loading-text")
            .text("Generating image..."),
        ImageState::Ready { url } => ViewNode::new("img")
            .attr("src", url.as_str())
            .attr("alt", prompt),
        ImageState::Failed { message } => error_text(format!("Error generating image: {}", message)),
    };
    container(body)
}

/// Static notice shown when the payload cannot start a generation.
pub fn render_error(message: impl Into<String>) -> ViewNode {
    container(error_text(message))
}

fn container(body: ViewNode) -> ViewNode {
    ViewNode::new("div")
        .class("image-generator-container")
        .child(body)
}

fn error_text(message: impl Into<String>) -> ViewNode {
    ViewNode::new("div").class("error-text").text(message)
}
