//! Messages exchanged with the chat host.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ui::layout::Bounds;

/// Inbound message describing what the conversation wants rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl Trace {
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// `payload.name`, when the payload is an object carrying a string name.
    pub fn payload_name(&self) -> Option<&str> {
        self.payload.get("name").and_then(Value::as_str)
    }
}

/// Outbound interaction sent to the host once a widget completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: Value,
}

/// Pointer and form events the host forwards to a mounted widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomEventKind {
    DragStart,
    DragOver,
    DragLeave,
    Drop,
    DragEnd,
    Submit,
}

/// A host event targeted at a rendered node.
///
/// `target` is the `data-key` of the innermost keyed node under the pointer;
/// `None` means the event hit no keyed node (or, for `Submit`, the form).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomEvent {
    pub kind: DomEventKind,
    #[serde(default)]
    pub target: Option<String>,
    /// Pointer x in the same coordinate space as measured item bounds.
    #[serde(default, alias = "x")]
    pub client_x: f32,
    /// Bounds of the items in the container under the pointer, left to
    /// right, as measured by the host. Without them the widget falls back to
    /// its own flow layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Vec<Bounds>>,
}

impl DomEvent {
    pub fn new(kind: DomEventKind) -> Self {
        Self {
            kind,
            target: None,
            client_x: 0.0,
            bounds: None,
        }
    }

    pub fn on(kind: DomEventKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: Some(target.into()),
            client_x: 0.0,
            bounds: None,
        }
    }

    pub fn at(mut self, client_x: f32) -> Self {
        self.client_x = client_x;
        self
    }

    pub fn with_bounds(mut self, bounds: Vec<Bounds>) -> Self {
        self.bounds = Some(bounds);
        self
    }
}
