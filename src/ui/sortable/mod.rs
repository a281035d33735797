//! Sortable-list widget: drag options from a source row into a target
//! (numbered slots or an open list), then submit the ordering.

mod gate;
mod intent;
mod payload;
mod pool;
mod preview;
mod reducer;
mod resolve;
mod session;
mod state;
mod target;
mod view;
mod widget;

pub use gate::{SubmissionGate, SubmitRejected};
pub use intent::SortableIntent;
pub use payload::{PayloadError, SortableConfig};
pub use pool::{Collection, ItemId, ItemPool, Mode, PoolSnapshot};
pub use preview::render_preview;
pub use reducer::SortableReducer;
pub use resolve::{apply, resolve, DropZone, Move, Pointer};
pub use session::{DragSession, DragTracker};
pub use state::{DropIndicator, HoverTarget, SortableState};
pub use target::{Landing, TargetArea, TargetZone};
pub use view::{measure, render, ItemLayout, NodeKey};
pub use widget::{deliver, MountedList, SortableList, SortableWidget, SORTABLE_LIST};
