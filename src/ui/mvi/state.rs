//! Base trait for widget state in MVI architecture.

/// Marker trait for widget state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything the view projection needs)
/// - Comparable (PartialEq so callers can skip re-rendering unchanged state)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
