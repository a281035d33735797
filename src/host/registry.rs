//! Extension trait and the registry that routes traces to widgets.

use std::sync::Arc;

use super::mount::{SharedMount, Teardown};
use super::trace::Trace;
use super::Host;
use crate::config::WidgetSettings;
use crate::ui::image::{ImageBackend, ImageGenerator};
use crate::ui::sortable::SortableList;

/// A widget the host can mount for matching traces.
pub trait Extension: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this extension handles `trace`. Must not panic on any input.
    fn matches(&self, trace: &Trace) -> bool;

    /// Render into `mount` and return the handle that undoes it.
    fn render(&self, trace: &Trace, mount: &SharedMount, host: Arc<dyn Host>) -> Teardown;
}

/// Ordered set of extensions; the first match wins.
#[derive(Default)]
pub struct Extensions {
    entries: Vec<Box<dyn Extension>>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both built-in widgets.
    pub fn with_defaults(settings: Arc<WidgetSettings>, backend: Arc<dyn ImageBackend>) -> Self {
        Self::new()
            .with(SortableList::new(settings))
            .with(ImageGenerator::new(backend))
    }

    pub fn with(mut self, extension: impl Extension + 'static) -> Self {
        self.entries.push(Box::new(extension));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, trace: &Trace) -> Option<&dyn Extension> {
        self.entries
            .iter()
            .map(|entry| entry.as_ref())
            .find(|extension| extension.matches(trace))
    }

    /// Mount the first matching extension. `None` when nothing matches.
    pub fn render(
        &self,
        trace: &Trace,
        mount: &SharedMount,
        host: Arc<dyn Host>,
    ) -> Option<Teardown> {
        let Some(extension) = self.find(trace) else {
            tracing::debug!(kind = %trace.kind, "no extension matches trace");
            return None;
        };
        tracing::debug!(extension = extension.name(), "rendering trace");
        Some(extension.render(trace, mount, host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::image::UnavailableBackend;
    use serde_json::json;

    fn registry() -> Extensions {
        Extensions::with_defaults(
            Arc::new(WidgetSettings::default()),
            Arc::new(UnavailableBackend),
        )
    }

    #[test]
    fn routes_by_type_and_payload_name() {
        let extensions = registry();
        assert_eq!(extensions.len(), 2);

        let sortable = Trace::new("sortable_list", json!({}));
        assert_eq!(extensions.find(&sortable).map(|e| e.name()), Some("SortableList"));

        let by_name = Trace::new("component", json!({ "name": "sortable_list" }));
        assert_eq!(extensions.find(&by_name).map(|e| e.name()), Some("SortableList"));

        let image = Trace::new("custom", json!({ "name": "image_generation" }));
        assert_eq!(extensions.find(&image).map(|e| e.name()), Some("ImageGenerator"));
    }

    #[test]
    fn unrelated_traces_match_nothing() {
        let extensions = registry();
        for trace in [
            Trace::new("text", json!("hello")),
            Trace::new("response", json!({ "name": "image_generation" })),
            Trace::new("", json!(null)),
        ] {
            assert!(extensions.find(&trace).is_none());
        }
    }
}
