//! Model-View-Intent (MVI) primitives shared by every widget.
//!
//! ```text
//! host event ──→ Intent ──→ Reducer ──→ State ──→ View
//!      ↑                                            │
//!      └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of a widget
//! - **Intent**: pointer gestures, submit clicks, backend results
//! - **Reducer**: pure `(State, Intent) -> State`; side effects live in the
//!   widget controller that owns the state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub(crate) use dispatch_mvi;
