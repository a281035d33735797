//! Embeddable chat widgets: a drag-and-drop sortable list and an image
//! generator, mounted by a chat host from incoming traces.

pub mod config;
pub mod host;
pub mod ui;
