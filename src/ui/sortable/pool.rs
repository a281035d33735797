//! Item pool: the source pool, the target area, and the arena of labels
//! both index into.

use std::sync::Arc;

use super::gate::SubmitRejected;
use super::target::{Target, TargetArea};

/// Stable identity of one option, its position in the label arena.
///
/// Duplicate display strings get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    pub(crate) fn new(slot: usize) -> Self {
        Self(slot)
    }
}

/// Which container an item lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Source,
    Target,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Source => "source",
            Collection::Target => "target",
        }
    }
}

/// Operating mode of the target area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Exactly `slots` numbered slots; every one must be filled to submit.
    Fixed { slots: usize },
    /// A growable list that must hold at least `minimum` items to submit.
    Open { minimum: usize },
}

impl Mode {
    /// Mode for a payload's `requiredCount` / `allowMore` pair.
    pub fn resolve(required_count: usize, allow_more: bool) -> Self {
        if allow_more {
            Mode::Open {
                minimum: required_count,
            }
        } else {
            Mode::Fixed {
                slots: required_count,
            }
        }
    }
}

/// Read-only copy of both collections, labels resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub mode: Mode,
    pub source: Vec<String>,
    /// Target positions in order; `None` marks an empty fixed slot.
    pub target: Vec<Option<String>>,
}

/// Every option lives in exactly one of `source` or `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPool {
    labels: Arc<[String]>,
    source: Vec<ItemId>,
    target: Target,
}

impl Default for ItemPool {
    fn default() -> Self {
        Self::new(Vec::new(), Mode::Fixed { slots: 0 })
    }
}

impl ItemPool {
    /// All options start in the source pool, in input order.
    pub fn new(options: Vec<String>, mode: Mode) -> Self {
        let source = (0..options.len()).map(ItemId::new).collect();
        Self {
            labels: options.into(),
            source,
            target: Target::new(mode),
        }
    }

    pub fn mode(&self) -> Mode {
        self.target.area().mode()
    }

    /// Total number of options, wherever they currently are.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, item: ItemId) -> &str {
        self.labels.get(item.0).map(String::as_str).unwrap_or_default()
    }

    pub fn source(&self) -> &[ItemId] {
        &self.source
    }

    pub fn target(&self) -> &dyn TargetArea {
        self.target.area()
    }

    /// Number of positions in `collection` (slots count for fixed targets).
    pub fn collection_len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Source => self.source.len(),
            Collection::Target => self.target.area().len(),
        }
    }

    pub fn item_at(&self, collection: Collection, index: usize) -> Option<ItemId> {
        match collection {
            Collection::Source => self.source.get(index).copied(),
            Collection::Target => self.target.area().get(index),
        }
    }

    /// Move a source item into the target.
    ///
    /// Fixed: the slot must be empty. Open: inserted at `target_index`,
    /// shifting later items right.
    pub fn move_to_target(&mut self, source_index: usize, target_index: usize) -> bool {
        self.transact(|pool| {
            let item = pool.source.get(source_index).copied()?;
            pool.target
                .area_mut()
                .put(target_index, item)
                .then_some(())?;
            pool.source.remove(source_index);
            Some(())
        })
    }

    /// Reorder within the target.
    ///
    /// Fixed: clears `from` then fills `to`, which must be empty. Open:
    /// remove-then-insert, with `to` indexing the list after removal.
    pub fn move_within_target(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        self.transact(|pool| {
            let target = pool.target.area_mut();
            let item = target.take(from)?;
            target.put(to, item).then_some(())
        })
    }

    /// Move a target item back into the source pool at `insertion`.
    pub fn move_to_source(&mut self, origin: usize, insertion: usize) -> bool {
        self.transact(|pool| {
            let item = pool.target.area_mut().take(origin)?;
            if insertion > pool.source.len() {
                return None;
            }
            pool.source.insert(insertion, item);
            Some(())
        })
    }

    /// Reorder within the source pool; `insertion` indexes the pool after
    /// removal.
    pub fn move_within_source(&mut self, from: usize, insertion: usize) -> bool {
        if from == insertion {
            return false;
        }
        self.transact(|pool| {
            if from >= pool.source.len() || insertion >= pool.source.len() {
                return None;
            }
            let item = pool.source.remove(from);
            pool.source.insert(insertion, item);
            Some(())
        })
    }

    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            mode: self.mode(),
            source: self.labels_of(self.source.iter().copied()),
            target: self
                .target
                .area()
                .positions()
                .into_iter()
                .map(|slot| slot.map(|item| self.label(item).to_string()))
                .collect(),
        }
    }

    /// Placed target items followed by whatever is left in the source.
    pub fn ordering(&self) -> Vec<String> {
        let placed = self.target.area().placed();
        self.labels_of(placed.into_iter().chain(self.source.iter().copied()))
    }

    pub fn shortfall(&self) -> Option<SubmitRejected> {
        self.target.area().shortfall()
    }

    fn labels_of(&self, items: impl Iterator<Item = ItemId>) -> Vec<String> {
        items.map(|item| self.label(item).to_string()).collect()
    }

    /// Apply `change` to a scratch copy and keep it only if it completes, so
    /// a half-applied move can never drop or duplicate an item.
    fn transact(&mut self, change: impl FnOnce(&mut Self) -> Option<()>) -> bool {
        let mut next = self.clone();
        if change(&mut next).is_some() {
            *self = next;
            true
        } else {
            false
        }
    }
}
