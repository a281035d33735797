//! Mount points, listeners, and teardown handles.

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use super::trace::DomEvent;
use crate::ui::view::ViewNode;

/// Callback registered by a widget to receive host events.
pub type Listener = Arc<dyn Fn(&DomEvent) + Send + Sync>;

/// Mount point shared between the host, the widget, and its teardown.
pub type SharedMount = Arc<Mutex<MountPoint>>;

/// Attachment point a widget renders into.
pub struct MountPoint {
    id: Uuid,
    children: Vec<ViewNode>,
    listeners: Vec<Listener>,
}

impl MountPoint {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn shared() -> SharedMount {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn children(&self) -> &[ViewNode] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.listeners.is_empty()
    }

    /// Swap the whole rendered subtree for `children`.
    pub fn replace_children(&mut self, children: Vec<ViewNode>) {
        self.children = children;
    }

    pub fn add_listener(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Removes every rendered node and listener.
    pub fn clear(&mut self) {
        self.children.clear();
        self.listeners.clear();
    }

    pub fn to_html(&self) -> String {
        self.children.iter().map(ViewNode::to_html).collect()
    }
}

impl Default for MountPoint {
    fn default() -> Self {
        Self::new()
    }
}

/// Deliver `event` to every listener on `mount`.
///
/// Listeners are cloned out first so a listener may re-render into the same
/// mount without deadlocking. Returns the number of listeners invoked.
pub fn dispatch(mount: &SharedMount, event: &DomEvent) -> usize {
    let listeners = mount.lock().listeners.clone();
    for listener in &listeners {
        listener(event);
    }
    listeners.len()
}

/// Cleanup handle returned by `Extension::render`.
///
/// The host runs it when the message is superseded or the turn ends. Running
/// consumes the handle. Dropping it unrun leaves the rendered subtree in place
/// but releases the widget, so later events reach no one.
#[must_use = "the host must keep the teardown handle and run it on unmount"]
pub struct Teardown {
    action: Box<dyn FnOnce() + Send>,
}

impl Teardown {
    pub fn new(action: impl FnOnce() + Send + 'static) -> Self {
        Self {
            action: Box::new(action),
        }
    }

    /// Teardown that only clears `mount`.
    pub fn clear(mount: &SharedMount) -> Self {
        let mount = Arc::clone(mount);
        Self::new(move || mount.lock().clear())
    }

    pub fn run(self) {
        (self.action)();
    }
}

impl std::fmt::Debug for Teardown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Teardown").finish_non_exhaustive()
    }
}
