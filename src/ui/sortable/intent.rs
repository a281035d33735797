//! Intents for the sortable list.

use crate::ui::mvi::Intent;

use super::pool::Collection;
use super::resolve::DropZone;

/// Intents that can be dispatched to a sortable list.
#[derive(Debug, Clone, PartialEq)]
pub enum SortableIntent {
    /// Pointer picked up the element at `collection[index]`.
    DragStart { collection: Collection, index: usize },

    /// Dragging over a drop zone; updates the drop indicator only.
    DragOver { zone: DropZone },

    /// Pointer left the hovered zone.
    DragLeave,

    /// Released over a drop zone.
    Drop { zone: DropZone },

    /// Native drag finished, whether or not a drop happened.
    DragEnd,

    /// Submit button pressed.
    Submit,

    /// User acknowledged the validation notice.
    DismissNotice,
}

impl Intent for SortableIntent {}
