//! Sortable-list controller and its host extension.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde_json::json;

use crate::config::WidgetSettings;
use crate::host::{
    DomEvent, DomEventKind, Extension, Host, HostEvent, SharedMount, Teardown, Trace,
};
use crate::ui::mvi::{dispatch_mvi, Reducer};
use crate::ui::view::ViewNode;

use super::intent::SortableIntent;
use super::payload::{PayloadError, SortableConfig};
use super::pool::{Collection, ItemPool};
use super::reducer::SortableReducer;
use super::resolve::{DropZone, Pointer};
use super::state::SortableState;
use super::view::{self, ItemLayout, NodeKey};

/// Trace type / payload name this widget answers to.
pub const SORTABLE_LIST: &str = "sortable_list";

/// Owns one mounted list: its state, the mount it renders into, and the
/// host it reports to.
pub struct SortableWidget {
    submit_event: String,
    settings: Arc<WidgetSettings>,
    state: SortableState,
    host: Arc<dyn Host>,
    mount: SharedMount,
    attached: bool,
}

impl SortableWidget {
    pub fn new(
        config: SortableConfig,
        settings: Arc<WidgetSettings>,
        host: Arc<dyn Host>,
        mount: SharedMount,
    ) -> Self {
        let pool = ItemPool::new(config.options, config.mode);
        Self {
            submit_event: config.submit_event,
            settings,
            state: SortableState::new(pool),
            host,
            mount,
            attached: true,
        }
    }

    pub fn state(&self) -> &SortableState {
        &self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Run one intent through the reducer and re-render.
    ///
    /// A fresh submission comes back as the event to report. The caller
    /// delivers it with [`deliver`] once it no longer holds the widget's
    /// lock, since the host may call back into the widget or tear it down.
    #[must_use = "a submission event must be delivered to the host"]
    pub fn dispatch(&mut self, intent: SortableIntent) -> Option<HostEvent> {
        if !self.attached {
            return None;
        }
        tracing::debug!(?intent, "sortable list intent");
        let was_submitted = self.state.is_submitted();
        let before = self.state.clone();

        dispatch_mvi!(self, state, SortableReducer, intent);

        let submitted = if was_submitted {
            None
        } else {
            self.state
                .gate
                .sorted_options()
                .map(|sorted| self.submission(sorted))
        };
        if let Some(notice) = self.state.notice() {
            tracing::debug!(%notice, "submit rejected");
        }
        if self.state != before {
            self.render();
        }
        submitted
    }

    /// Translate a host event into an intent and dispatch it. Events that
    /// name no known node are dropped.
    #[must_use = "a submission event must be delivered to the host"]
    pub fn handle(&mut self, event: &DomEvent) -> Option<HostEvent> {
        match self.intent_for(event) {
            Some(intent) => self.dispatch(intent),
            None => {
                tracing::trace!(?event, "event ignored");
                None
            }
        }
    }

    pub fn host(&self) -> Arc<dyn Host> {
        Arc::clone(&self.host)
    }

    /// Replace the mount's children with a fresh projection of the state.
    pub fn render(&self) {
        let tree = view::render(&self.state, &self.settings.labels);
        self.mount.lock().replace_children(vec![tree]);
    }

    /// Bounds of the currently rendered items, for hosts without a layout
    /// engine of their own.
    pub fn layout(&self) -> ItemLayout {
        view::measure(&self.state.pool.snapshot(), &self.settings.layout)
    }

    /// Stop reacting to events and clear the mount.
    pub fn detach(&mut self) {
        self.attached = false;
        self.mount.lock().clear();
    }

    fn intent_for(&self, event: &DomEvent) -> Option<SortableIntent> {
        let key = event.target.as_deref().and_then(NodeKey::parse);
        match event.kind {
            DomEventKind::DragStart => {
                let (collection, index) = key?.origin()?;
                Some(SortableIntent::DragStart { collection, index })
            }
            DomEventKind::DragOver => Some(SortableIntent::DragOver {
                zone: self.zone_for(key?, event),
            }),
            DomEventKind::DragLeave => Some(SortableIntent::DragLeave),
            DomEventKind::Drop => Some(match key {
                Some(key) => SortableIntent::Drop {
                    zone: self.zone_for(key, event),
                },
                // Released outside every zone: only the indicator goes.
                None => SortableIntent::DragLeave,
            }),
            DomEventKind::DragEnd => Some(SortableIntent::DragEnd),
            DomEventKind::Submit => Some(SortableIntent::Submit),
        }
    }

    /// Host-measured bounds win; the flow layout stands in for hosts that
    /// send none.
    fn zone_for(&self, key: NodeKey, event: &DomEvent) -> DropZone {
        let pointer = |collection: Collection| {
            let items = match &event.bounds {
                Some(bounds) => bounds.clone(),
                None => self.layout().container(collection).to_vec(),
            };
            Pointer::new(event.client_x, items)
        };
        match key {
            NodeKey::Slot(index) => DropZone::Slot(index),
            NodeKey::TargetItem(index) => DropZone::TargetItem(index),
            NodeKey::Target => DropZone::TargetBackground(pointer(Collection::Target)),
            NodeKey::Source | NodeKey::SourceItem(_) => DropZone::Source(pointer(Collection::Source)),
        }
    }

    fn submission(&self, sorted_options: &[String]) -> HostEvent {
        tracing::info!(event = %self.submit_event, "sortable list submitted");
        HostEvent {
            kind: self.submit_event.clone(),
            payload: json!({
                "sortedOptions": sorted_options,
                "confirmation": self.settings.confirmation,
            }),
        }
    }
}

/// Report a submission to the host. The list stays submitted whatever the
/// host does with it.
pub fn deliver(host: &dyn Host, event: HostEvent) {
    let kind = event.kind.clone();
    if let Err(err) = host.interact(event) {
        tracing::error!(event = %kind, error = %err, "host interaction failed");
    }
}

/// A list mounted by `SortableList::mount`.
pub struct MountedList {
    widget: Arc<Mutex<SortableWidget>>,
    teardown: Teardown,
}

impl MountedList {
    pub fn widget(&self) -> &Arc<Mutex<SortableWidget>> {
        &self.widget
    }

    pub fn state(&self) -> SortableState {
        self.widget.lock().state().clone()
    }

    pub fn into_teardown(self) -> Teardown {
        self.teardown
    }
}

/// Host extension for `sortable_list` traces.
pub struct SortableList {
    settings: Arc<WidgetSettings>,
}

impl SortableList {
    pub fn new(settings: Arc<WidgetSettings>) -> Self {
        Self { settings }
    }

    /// Build the list and attach it to `mount`.
    ///
    /// On a payload error nothing is rendered or registered; the caller
    /// decides what to show instead.
    pub fn mount(
        &self,
        trace: &Trace,
        mount: &SharedMount,
        host: Arc<dyn Host>,
    ) -> Result<MountedList, PayloadError> {
        let config = SortableConfig::from_payload(&trace.payload, &self.settings.sentinel)?;
        tracing::info!(
            mount = %mount.lock().id(),
            options = config.options.len(),
            mode = ?config.mode,
            "mounting sortable list"
        );

        let widget = SortableWidget::new(
            config,
            Arc::clone(&self.settings),
            host,
            Arc::clone(mount),
        );
        widget.render();
        let widget = Arc::new(Mutex::new(widget));

        let listener_target: Weak<Mutex<SortableWidget>> = Arc::downgrade(&widget);
        mount.lock().add_listener(Arc::new(move |event: &DomEvent| {
            let Some(widget) = listener_target.upgrade() else {
                return;
            };
            // Release the widget before the host sees the event.
            let outcome = {
                let mut widget = widget.lock();
                widget.handle(event).map(|submitted| (widget.host(), submitted))
            };
            if let Some((host, submitted)) = outcome {
                deliver(host.as_ref(), submitted);
            }
        }));

        let owned = Arc::clone(&widget);
        let teardown = Teardown::new(move || {
            tracing::debug!("tearing down sortable list");
            owned.lock().detach();
        });

        Ok(MountedList { widget, teardown })
    }
}

impl Extension for SortableList {
    fn name(&self) -> &'static str {
        "SortableList"
    }

    fn matches(&self, trace: &Trace) -> bool {
        trace.kind == SORTABLE_LIST || trace.payload_name() == Some(SORTABLE_LIST)
    }

    fn render(&self, trace: &Trace, mount: &SharedMount, host: Arc<dyn Host>) -> Teardown {
        match self.mount(trace, mount, host) {
            Ok(mounted) => mounted.into_teardown(),
            Err(err) => {
                tracing::warn!(error = %err, "sortable list payload rejected");
                mount.lock().replace_children(vec![ViewNode::new("div")
                    .class("sortable-error")
                    .attr("role", "alert")
                    .text(err.to_string())]);
                Teardown::clear(mount)
            }
        }
    }
}
