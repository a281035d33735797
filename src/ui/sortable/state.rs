//! State for the sortable list.

use crate::ui::mvi::UiState;

use super::gate::{SubmissionGate, SubmitRejected};
use super::pool::{Collection, ItemPool};
use super::resolve::DropZone;
use super::session::{DragSession, DragTracker};

/// Element currently showing the drop indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    Slot(usize),
    TargetItem(usize),
    TargetContainer,
    SourceContainer,
}

impl From<&DropZone> for HoverTarget {
    fn from(zone: &DropZone) -> Self {
        match zone {
            DropZone::Slot(index) => HoverTarget::Slot(*index),
            DropZone::TargetItem(index) => HoverTarget::TargetItem(*index),
            DropZone::TargetBackground(_) => HoverTarget::TargetContainer,
            DropZone::Source(_) => HoverTarget::SourceContainer,
        }
    }
}

/// Drop indicator shown while dragging over a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropIndicator {
    pub target: HoverTarget,
    /// Whether releasing here would change anything.
    pub accepted: bool,
}

/// Complete state of one mounted sortable list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortableState {
    pub pool: ItemPool,
    pub drag: DragTracker,
    pub hover: Option<DropIndicator>,
    pub gate: SubmissionGate,
}

impl UiState for SortableState {}

impl SortableState {
    pub fn new(pool: ItemPool) -> Self {
        Self {
            pool,
            ..Self::default()
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.gate.is_submitted()
    }

    pub fn notice(&self) -> Option<&SubmitRejected> {
        self.gate.notice()
    }

    /// The live session, if its item still sits where it was picked up.
    ///
    /// After a drop the session lingers until drag-end, but its origin index
    /// no longer describes the item.
    pub fn dragged(&self) -> Option<DragSession> {
        self.drag
            .current()
            .filter(|s| self.pool.item_at(s.origin, s.index) == Some(s.item))
    }

    /// Whether the element at `collection[index]` is the one being dragged.
    pub fn is_dragging(&self, collection: Collection, index: usize) -> bool {
        self.dragged()
            .is_some_and(|s| s.origin == collection && s.index == index)
    }
}
