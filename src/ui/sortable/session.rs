//! Drag session tracking.

use super::pool::{Collection, ItemId};

/// What is being dragged and where it was picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub item: ItemId,
    pub origin: Collection,
    pub index: usize,
}

/// Holds at most one live drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragTracker {
    current: Option<DragSession>,
}

impl DragTracker {
    /// Start a session, replacing any session already in flight.
    pub fn begin(&mut self, session: DragSession) -> Option<DragSession> {
        self.current.replace(session)
    }

    /// Clear the session. Safe to call when no drag is active.
    pub fn end(&mut self) -> Option<DragSession> {
        self.current.take()
    }

    pub fn current(&self) -> Option<DragSession> {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(index: usize) -> DragSession {
        DragSession {
            item: ItemId::new(index),
            origin: Collection::Source,
            index,
        }
    }

    #[test]
    fn begin_overwrites_previous_session() {
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.begin(session(0)), None);
        assert_eq!(tracker.begin(session(1)), Some(session(0)));
        assert_eq!(tracker.current(), Some(session(1)));
    }

    #[test]
    fn end_clears_exactly_once() {
        let mut tracker = DragTracker::default();
        tracker.begin(session(2));
        assert_eq!(tracker.end(), Some(session(2)));
        assert_eq!(tracker.end(), None);
        assert!(!tracker.is_active());
    }
}
