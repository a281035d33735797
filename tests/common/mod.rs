//! Shared test utilities and mock hosts.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;

use trace_widgets::config::WidgetSettings;
use trace_widgets::host::{
    dispatch, DomEvent, DomEventKind, Host, HostError, HostEvent, MountPoint, SharedMount, Trace,
};
use trace_widgets::ui::sortable::{MountedList, SortableList};

/// Host that records every interaction.
#[derive(Default)]
pub struct RecordingHost {
    events: Mutex<Vec<HostEvent>>,
}

impl RecordingHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().clone()
    }
}

impl Host for RecordingHost {
    fn interact(&self, event: HostEvent) -> Result<(), HostError> {
        self.events.lock().push(event);
        Ok(())
    }
}

/// Host whose interaction entry point always fails.
pub struct FailingHost;

impl Host for FailingHost {
    fn interact(&self, _event: HostEvent) -> Result<(), HostError> {
        Err(HostError::Unavailable)
    }
}

/// `sortable_list` trace with `options`, `submitEvent = "order_done"`, and
/// any extra payload fields merged in.
pub fn sortable_trace(options: &[&str], extra: Value) -> Trace {
    let mut payload = json!({ "options": options, "submitEvent": "order_done" });
    if let (Some(target), Value::Object(extra)) = (payload.as_object_mut(), extra) {
        target.extend(extra);
    }
    Trace::new("sortable_list", payload)
}

/// Mount a sortable list with default settings.
pub fn mount_sortable(trace: &Trace, host: Arc<dyn Host>) -> (SharedMount, MountedList) {
    let mount = MountPoint::shared();
    let list = SortableList::new(Arc::new(WidgetSettings::default()));
    let mounted = list
        .mount(trace, &mount, host)
        .expect("payload should configure a sortable list");
    (mount, mounted)
}

/// Full pointer gesture: pick up `from`, release over `to` at `x`.
pub fn drag(mount: &SharedMount, from: &str, to: &str, x: f32) {
    dispatch(mount, &DomEvent::on(DomEventKind::DragStart, from));
    dispatch(mount, &DomEvent::on(DomEventKind::DragOver, to).at(x));
    dispatch(mount, &DomEvent::on(DomEventKind::Drop, to).at(x));
    dispatch(mount, &DomEvent::on(DomEventKind::DragEnd, from));
}

pub fn submit(mount: &SharedMount) {
    dispatch(mount, &DomEvent::new(DomEventKind::Submit));
}

pub fn html(mount: &SharedMount) -> String {
    mount.lock().to_html()
}
