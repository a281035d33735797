//! Image-generator controller and its host extension.

use std::sync::Arc;

use serde_json::json;

use crate::host::{Extension, Host, HostEvent, SharedMount, Teardown, Trace};
use crate::ui::mvi::{dispatch_mvi, Reducer};

use super::backend::{ImageBackend, ImageRequest};
use super::intent::ImageIntent;
use super::payload::{ImageConfig, ImagePayloadError};
use super::reducer::ImageReducer;
use super::state::ImageState;
use super::view;

/// Payload name this widget answers to.
pub const IMAGE_GENERATION: &str = "image_generation";

/// One generation: shows progress, then the image or the failure.
pub struct ImageWidget {
    config: ImageConfig,
    state: ImageState,
    host: Arc<dyn Host>,
    mount: SharedMount,
}

impl ImageWidget {
    pub fn new(config: ImageConfig, host: Arc<dyn Host>, mount: SharedMount) -> Self {
        Self {
            config,
            state: ImageState::default(),
            host,
            mount,
        }
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: ImageIntent) {
        let was_loading = self.state.is_loading();
        dispatch_mvi!(self, state, ImageReducer, intent);
        self.render();

        if !was_loading {
            return;
        }
        match &self.state {
            ImageState::Ready { url } => self.emit(url),
            ImageState::Failed { message } => {
                tracing::error!(error = %message, "image generation failed");
            }
            ImageState::Loading => {}
        }
    }

    pub fn render(&self) {
        let tree = view::render(&self.state, &self.config.prompt);
        self.mount.lock().replace_children(vec![tree]);
    }

    /// Run the backend call and feed its outcome back through the reducer.
    pub fn generate(&mut self, backend: &dyn ImageBackend) {
        let request = ImageRequest::new(self.config.prompt.as_str(), self.config.model.as_str());
        tracing::debug!(model = %request.model, "requesting image");
        let intent = match backend.generate(&self.config.api_key, &request) {
            Ok(url) => ImageIntent::Generated { url },
            Err(err) => ImageIntent::Failed {
                message: err.to_string(),
            },
        };
        self.dispatch(intent);
    }

    fn emit(&self, url: &str) {
        let event = HostEvent {
            kind: self.config.submit_event.clone(),
            payload: json!({ "ok": true, "imageUrl": url }),
        };
        tracing::info!(event = %self.config.submit_event, "image generated");
        if let Err(err) = self.host.interact(event) {
            tracing::warn!(event = %self.config.submit_event, error = %err, "submit event failed");
        }
    }
}

/// Host extension for `image_generation` components.
pub struct ImageGenerator {
    backend: Arc<dyn ImageBackend>,
}

impl ImageGenerator {
    pub fn new(backend: Arc<dyn ImageBackend>) -> Self {
        Self { backend }
    }

    /// Build the widget, render its loading state, and run the generation.
    pub fn mount(
        &self,
        trace: &Trace,
        mount: &SharedMount,
        host: Arc<dyn Host>,
    ) -> Result<ImageWidget, ImagePayloadError> {
        let config = ImageConfig::from_payload(&trace.payload)?;
        tracing::info!(mount = %mount.lock().id(), model = %config.model, "mounting image generator");

        let mut widget = ImageWidget::new(config, host, Arc::clone(mount));
        widget.render();
        widget.generate(self.backend.as_ref());
        Ok(widget)
    }
}

impl Extension for ImageGenerator {
    fn name(&self) -> &'static str {
        "ImageGenerator"
    }

    fn matches(&self, trace: &Trace) -> bool {
        matches!(trace.kind.as_str(), "component" | "custom")
            && trace.payload_name() == Some(IMAGE_GENERATION)
    }

    fn render(&self, trace: &Trace, mount: &SharedMount, host: Arc<dyn Host>) -> Teardown {
        if let Err(err) = self.mount(trace, mount, host) {
            tracing::warn!(error = %err, "image generation payload rejected");
            mount
                .lock()
                .replace_children(vec![view::render_error(err.to_string())]);
        }
        Teardown::clear(mount)
    }
}
