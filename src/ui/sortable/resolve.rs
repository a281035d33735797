//! Drop resolution: turn a drop zone plus the live drag session into one
//! pool mutation.

use super::pool::{Collection, ItemPool};
use super::session::DragSession;
use super::target::{Landing, TargetZone};
use crate::ui::layout::Bounds;

/// Pointer position at drop time and the bounds of the items rendered in the
/// container under it, left to right.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub items: Vec<Bounds>,
}

impl Pointer {
    pub fn new(x: f32, items: Vec<Bounds>) -> Self {
        Self { x, items }
    }

    /// Index of the first item whose midpoint lies strictly right of the
    /// pointer, or `len` when there is none. An exact midpoint hit inserts
    /// before that item.
    pub fn insertion_index(&self, len: usize) -> usize {
        self.items
            .iter()
            .position(|bounds| self.x < bounds.mid_x())
            .unwrap_or(len)
            .min(len)
    }
}

/// Where a dragged item was released.
#[derive(Debug, Clone, PartialEq)]
pub enum DropZone {
    /// A numbered slot of a fixed target, empty or not.
    Slot(usize),
    /// A specific item of an open target.
    TargetItem(usize),
    /// Target container background.
    TargetBackground(Pointer),
    /// Anywhere over the source container, item or background.
    Source(Pointer),
}

impl DropZone {
    pub fn container(&self) -> Collection {
        match self {
            DropZone::Source(_) => Collection::Source,
            _ => Collection::Target,
        }
    }
}

/// One mutation of the item pool, in the pool's own index terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    ToTarget { from: usize, to: usize },
    WithinTarget { from: usize, to: usize },
    ToSource { from: usize, to: usize },
    WithinSource { from: usize, to: usize },
}

/// Resolve a drop, or `None` when it must be ignored.
///
/// Ignored drops: a session whose item no longer sits at its recorded origin
/// (stale index), an occupied fixed slot, and zones the mode has no notion of.
pub fn resolve(pool: &ItemPool, session: &DragSession, zone: &DropZone) -> Option<Move> {
    if pool.item_at(session.origin, session.index) != Some(session.item) {
        return None;
    }

    let from = session.index;
    let mv = match zone {
        DropZone::Source(pointer) => {
            let gap = pointer.insertion_index(pool.source().len());
            match session.origin {
                Collection::Source => Move::WithinSource {
                    from,
                    to: close_gap(from, gap),
                },
                Collection::Target => Move::ToSource { from, to: gap },
            }
        }
        DropZone::Slot(index) => target_move(pool, session, TargetZone::Slot(*index))?,
        DropZone::TargetItem(index) => target_move(pool, session, TargetZone::Item(*index))?,
        DropZone::TargetBackground(pointer) => {
            let gap = pointer.insertion_index(pool.target().len());
            target_move(pool, session, TargetZone::Background { gap })?
        }
    };

    is_effective(mv).then_some(mv)
}

/// Resolve and apply in one step. Returns whether the pool changed.
pub fn apply(pool: &mut ItemPool, session: &DragSession, zone: &DropZone) -> bool {
    match resolve(pool, session, zone) {
        Some(Move::ToTarget { from, to }) => pool.move_to_target(from, to),
        Some(Move::WithinTarget { from, to }) => pool.move_within_target(from, to),
        Some(Move::ToSource { from, to }) => pool.move_to_source(from, to),
        Some(Move::WithinSource { from, to }) => pool.move_within_source(from, to),
        None => false,
    }
}

fn target_move(pool: &ItemPool, session: &DragSession, zone: TargetZone) -> Option<Move> {
    let from = session.index;
    let landing = pool.target().landing(zone)?;
    Some(match (session.origin, landing) {
        (Collection::Source, Landing::Position(to) | Landing::Gap(to)) => {
            Move::ToTarget { from, to }
        }
        (Collection::Target, Landing::Position(to)) => Move::WithinTarget { from, to },
        (Collection::Target, Landing::Gap(gap)) => Move::WithinTarget {
            from,
            to: close_gap(from, gap),
        },
    })
}

/// A gap index names a position in the list *before* the dragged item is
/// lifted out. Once it is removed, every gap after it shifts left by one.
fn close_gap(from: usize, gap: usize) -> usize {
    if from < gap {
        gap - 1
    } else {
        gap
    }
}

fn is_effective(mv: Move) -> bool {
    match mv {
        Move::WithinTarget { from, to } | Move::WithinSource { from, to } => from != to,
        Move::ToTarget { .. } | Move::ToSource { .. } => true,
    }
}
