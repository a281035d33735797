//! Reducer for the sortable list.

use crate::ui::mvi::Reducer;

use super::intent::SortableIntent;
use super::resolve;
use super::session::DragSession;
use super::state::{DropIndicator, HoverTarget, SortableState};

/// Reducer for sortable list state transitions.
///
/// Pure function: host dispatch on submit and re-rendering are handled by
/// the widget around the dispatch call.
pub struct SortableReducer;

impl Reducer for SortableReducer {
    type State = SortableState;
    type Intent = SortableIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        // Submission froze the list.
        if state.is_submitted() {
            return state;
        }

        match intent {
            SortableIntent::DragStart { collection, index } => {
                if let Some(item) = state.pool.item_at(collection, index) {
                    state.drag.begin(DragSession {
                        item,
                        origin: collection,
                        index,
                    });
                    state.gate = state.gate.dismiss_notice();
                }
                state
            }

            SortableIntent::DragOver { zone } => {
                let accepted = state
                    .drag
                    .current()
                    .is_some_and(|session| resolve::resolve(&state.pool, &session, &zone).is_some());
                state.hover = Some(DropIndicator {
                    target: HoverTarget::from(&zone),
                    accepted,
                });
                state
            }

            SortableIntent::DragLeave => {
                state.hover = None;
                state
            }

            SortableIntent::Drop { zone } => {
                state.hover = None;
                if let Some(session) = state.drag.current() {
                    resolve::apply(&mut state.pool, &session, &zone);
                }
                state
            }

            SortableIntent::DragEnd => {
                state.drag.end();
                state.hover = None;
                state
            }

            SortableIntent::Submit => {
                state.gate = state.gate.submit(&state.pool);
                if state.is_submitted() {
                    state.drag.end();
                    state.hover = None;
                }
                state
            }

            SortableIntent::DismissNotice => {
                state.gate = state.gate.dismiss_notice();
                state
            }
        }
    }
}
