//! Target area variants.
//!
//! The operating mode is picked once, when the pool is built, by choosing
//! which `TargetArea` implementation backs it. Everything mode-specific about
//! accepting drops, placing items, and deciding completeness lives here.

use super::gate::SubmitRejected;
use super::pool::{ItemId, Mode};

/// Where a drop onto the target lands, before the dragged item is removed
/// from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Take over this exact position (a slot, or an item's index).
    Position(usize),
    /// Insert into the gap before this index of the pre-removal list.
    Gap(usize),
}

/// The part of the target area a drop hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetZone {
    Slot(usize),
    Item(usize),
    /// Container background; `gap` comes from the midpoint scan.
    Background { gap: usize },
}

/// Behaviour shared by fixed slots and open lists.
pub trait TargetArea {
    fn mode(&self) -> Mode;

    /// Slot count for fixed areas, item count for open ones.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item at `index`; `None` for empty slots and out-of-range indices.
    fn get(&self, index: usize) -> Option<ItemId>;

    /// Placed items in display order, skipping empty slots.
    fn placed(&self) -> Vec<ItemId>;

    /// Every position in display order, `None` for empty slots.
    fn positions(&self) -> Vec<Option<ItemId>>;

    /// Removes the item at `index` (clearing its slot in fixed areas).
    fn take(&mut self, index: usize) -> Option<ItemId>;

    /// Places `item` at `index`. Returns false, leaving the area untouched,
    /// when the position cannot accept it.
    fn put(&mut self, index: usize, item: ItemId) -> bool;

    /// Resolve a drop zone to a landing position, or `None` if the zone is
    /// not a legal drop target in this mode.
    fn landing(&self, zone: TargetZone) -> Option<Landing>;

    /// Why submission is not yet allowed, if it isn't.
    fn shortfall(&self) -> Option<SubmitRejected>;
}

/// A fixed number of numbered slots, each empty or holding one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSlots {
    slots: Vec<Option<ItemId>>,
}

impl FixedSlots {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }
}

impl TargetArea for FixedSlots {
    fn mode(&self) -> Mode {
        Mode::Fixed {
            slots: self.slots.len(),
        }
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, index: usize) -> Option<ItemId> {
        self.slots.get(index).copied().flatten()
    }

    fn placed(&self) -> Vec<ItemId> {
        self.slots.iter().flatten().copied().collect()
    }

    fn positions(&self) -> Vec<Option<ItemId>> {
        self.slots.clone()
    }

    fn take(&mut self, index: usize) -> Option<ItemId> {
        self.slots.get_mut(index)?.take()
    }

    fn put(&mut self, index: usize, item: ItemId) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(item);
                true
            }
            _ => false,
        }
    }

    fn landing(&self, zone: TargetZone) -> Option<Landing> {
        match zone {
            // Occupied slots reject the drop outright; no swap.
            TargetZone::Slot(index) => match self.slots.get(index) {
                Some(None) => Some(Landing::Position(index)),
                _ => None,
            },
            TargetZone::Item(_) | TargetZone::Background { .. } => None,
        }
    }

    fn shortfall(&self) -> Option<SubmitRejected> {
        let empty = self.slots.iter().filter(|slot| slot.is_none()).count();
        (empty > 0).then_some(SubmitRejected::EmptySlots { empty })
    }
}

/// An open-ended ordered list with a minimum length for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenList {
    items: Vec<ItemId>,
    minimum: usize,
}

impl OpenList {
    pub fn new(minimum: usize) -> Self {
        Self {
            items: Vec::new(),
            minimum,
        }
    }
}

impl TargetArea for OpenList {
    fn mode(&self) -> Mode {
        Mode::Open {
            minimum: self.minimum,
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).copied()
    }

    fn placed(&self) -> Vec<ItemId> {
        self.items.clone()
    }

    fn positions(&self) -> Vec<Option<ItemId>> {
        self.items.iter().copied().map(Some).collect()
    }

    fn take(&mut self, index: usize) -> Option<ItemId> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    fn put(&mut self, index: usize, item: ItemId) -> bool {
        if index > self.items.len() {
            return false;
        }
        self.items.insert(index, item);
        true
    }

    fn landing(&self, zone: TargetZone) -> Option<Landing> {
        match zone {
            TargetZone::Item(index) if index < self.items.len() => Some(Landing::Position(index)),
            TargetZone::Background { gap } => Some(Landing::Gap(gap.min(self.items.len()))),
            TargetZone::Item(_) | TargetZone::Slot(_) => None,
        }
    }

    fn shortfall(&self) -> Option<SubmitRejected> {
        (self.items.len() < self.minimum).then_some(SubmitRejected::TooFew {
            required: self.minimum,
            selected: self.items.len(),
        })
    }
}

/// The target area of a pool, in whichever mode it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Fixed(FixedSlots),
    Open(OpenList),
}

impl Target {
    pub fn new(mode: Mode) -> Self {
        match mode {
            Mode::Fixed { slots } => Target::Fixed(FixedSlots::new(slots)),
            Mode::Open { minimum } => Target::Open(OpenList::new(minimum)),
        }
    }

    pub fn area(&self) -> &dyn TargetArea {
        match self {
            Target::Fixed(slots) => slots,
            Target::Open(list) => list,
        }
    }

    pub fn area_mut(&mut self) -> &mut dyn TargetArea {
        match self {
            Target::Fixed(slots) => slots,
            Target::Open(list) => list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: usize) -> ItemId {
        ItemId::new(n)
    }

    #[test]
    fn fixed_put_only_fills_empty_slots() {
        let mut slots = FixedSlots::new(2);
        assert!(slots.put(0, id(7)));
        assert!(!slots.put(0, id(8)));
        assert!(!slots.put(2, id(8)));
        assert_eq!(slots.positions(), vec![Some(id(7)), None]);
    }

    #[test]
    fn fixed_landing_rejects_occupied_slot() {
        let mut slots = FixedSlots::new(2);
        slots.put(1, id(0));
        assert_eq!(slots.landing(TargetZone::Slot(0)), Some(Landing::Position(0)));
        assert_eq!(slots.landing(TargetZone::Slot(1)), None);
        assert_eq!(slots.landing(TargetZone::Background { gap: 0 }), None);
    }

    #[test]
    fn fixed_shortfall_counts_empty_slots() {
        let mut slots = FixedSlots::new(3);
        slots.put(1, id(0));
        assert_eq!(
            slots.shortfall(),
            Some(SubmitRejected::EmptySlots { empty: 2 })
        );
    }

    #[test]
    fn open_put_inserts_and_shifts() {
        let mut list = OpenList::new(0);
        assert!(list.put(0, id(1)));
        assert!(list.put(0, id(2)));
        assert!(list.put(2, id(3)));
        assert!(!list.put(4, id(4)));
        assert_eq!(list.placed(), vec![id(2), id(1), id(3)]);
    }

    #[test]
    fn open_landing_clamps_gap_and_ignores_slots() {
        let mut list = OpenList::new(1);
        list.put(0, id(0));
        assert_eq!(list.landing(TargetZone::Background { gap: 9 }), Some(Landing::Gap(1)));
        assert_eq!(list.landing(TargetZone::Item(0)), Some(Landing::Position(0)));
        assert_eq!(list.landing(TargetZone::Item(1)), None);
        assert_eq!(list.landing(TargetZone::Slot(0)), None);
    }

    #[test]
    fn open_shortfall_until_minimum_reached() {
        let mut list = OpenList::new(2);
        list.put(0, id(0));
        assert_eq!(
            list.shortfall(),
            Some(SubmitRejected::TooFew {
                required: 2,
                selected: 1
            })
        );
        list.put(1, id(1));
        assert_eq!(list.shortfall(), None);
    }
}
