//! Host contract: traces in, interactions out, and the mount/teardown
//! lifecycle every widget follows.

mod mount;
mod registry;
mod trace;

pub use mount::{dispatch, Listener, MountPoint, SharedMount, Teardown};
pub use registry::{Extension, Extensions};
pub use trace::{DomEvent, DomEventKind, HostEvent, Trace};

use thiserror::Error;

/// Failure reported by the host's interaction entry point.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Host rejected event '{event}': {reason}")]
    Rejected { event: String, reason: String },

    #[error("Host interaction channel is unavailable")]
    Unavailable,
}

/// The chat host's interaction entry point.
pub trait Host: Send + Sync {
    fn interact(&self, event: HostEvent) -> Result<(), HostError>;
}
