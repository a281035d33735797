//! Base trait for intents dispatched to a widget.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Pointer gestures translated from host events (drag start, drop, ...)
/// - Form actions (submit)
/// - Results reported by collaborators (an image backend finishing)
pub trait Intent: Send + 'static {}
