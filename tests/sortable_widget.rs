mod common;

use common::{drag, html, mount_sortable, sortable_trace, submit, FailingHost, RecordingHost};
use parking_lot::Mutex;
use serde_json::json;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use trace_widgets::config::WidgetSettings;
use trace_widgets::host::{
    dispatch, DomEvent, DomEventKind, Extensions, Host, HostError, HostEvent, MountPoint,
    Teardown, Trace,
};
use trace_widgets::ui::image::UnavailableBackend;
use trace_widgets::ui::layout::Bounds;
use trace_widgets::ui::sortable::{Mode, MountedList, SubmitRejected};

/// Host that ends the turn from inside `interact`, running the widget's
/// teardown before returning.
#[derive(Default)]
struct TeardownOnSubmitHost {
    teardown: Mutex<Option<Teardown>>,
    events: Mutex<Vec<HostEvent>>,
}

impl Host for TeardownOnSubmitHost {
    fn interact(&self, event: HostEvent) -> Result<(), HostError> {
        self.events.lock().push(event);
        let teardown = self.teardown.lock().take();
        if let Some(teardown) = teardown {
            teardown.run();
        }
        Ok(())
    }
}

fn target_labels(mounted: &MountedList) -> Vec<String> {
    mounted.state().pool.snapshot().target.into_iter().flatten().collect()
}

#[test]
fn scenario_fixed_slots_in_order() {
    let host = RecordingHost::new();
    let (mount, mounted) = mount_sortable(&sortable_trace(&["Red", "Green", "Blue"], json!({})), host.clone());
    assert_eq!(mounted.state().pool.mode(), Mode::Fixed { slots: 3 });

    // Each pick takes the current head of the source row.
    drag(&mount, "source-item-0", "slot-0", 0.0);
    drag(&mount, "source-item-0", "slot-1", 0.0);
    drag(&mount, "source-item-0", "slot-2", 0.0);
    submit(&mount);

    let events = host.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, "order_done");
    assert_eq!(
        events[0].payload,
        json!({
            "sortedOptions": ["Red", "Green", "Blue"],
            "confirmation": "Order submitted successfully"
        })
    );
}

#[test]
fn scenario_open_list_appends_unplaced_options() {
    let host = RecordingHost::new();
    let trace = sortable_trace(&["A", "B", "C", "D"], json!({ "requiredCount": 2, "allowMore": true }));
    let (mount, mounted) = mount_sortable(&trace, host.clone());
    assert_eq!(mounted.state().pool.mode(), Mode::Open { minimum: 2 });

    drag(&mount, "source-item-2", "target", 0.0);
    // Source is now [A, B, D]; drop A right of C.
    drag(&mount, "source-item-0", "target", 1000.0);
    submit(&mount);

    let events = host.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].payload["sortedOptions"], json!(["C", "A", "B", "D"]));
}

#[test]
fn scenario_sentinel_never_rendered_or_submitted() {
    let host = RecordingHost::new();
    let trace = sortable_trace(&["A", "None", "B"], json!({}));
    let (mount, mounted) = mount_sortable(&trace, host.clone());
    assert!(!html(&mount).contains(">None<"));
    assert_eq!(mounted.state().pool.len(), 2);

    drag(&mount, "source-item-0", "slot-0", 0.0);
    drag(&mount, "source-item-0", "slot-1", 0.0);
    submit(&mount);
    assert_eq!(host.events()[0].payload["sortedOptions"], json!(["A", "B"]));
}

#[test]
fn submit_with_empty_slot_shows_notice_and_emits_nothing() {
    let host = RecordingHost::new();
    let (mount, mounted) = mount_sortable(&sortable_trace(&["A", "B"], json!({})), host.clone());
    drag(&mount, "source-item-0", "slot-0", 0.0);
    submit(&mount);

    assert!(host.events().is_empty());
    assert_eq!(
        mounted.state().notice(),
        Some(&SubmitRejected::EmptySlots { empty: 1 })
    );
    assert!(html(&mount).contains("Please fill in all the placeholders before submitting!"));

    // Starting a new drag dismisses the notice.
    dispatch(&mount, &DomEvent::on(DomEventKind::DragStart, "source-item-0"));
    assert_eq!(mounted.state().notice(), None);
}

#[test]
fn open_list_below_minimum_is_rejected() {
    let host = RecordingHost::new();
    let trace = sortable_trace(&["A", "B", "C"], json!({ "requiredCount": 2, "allowMore": true }));
    let (mount, _mounted) = mount_sortable(&trace, host.clone());
    drag(&mount, "source-item-0", "target", 0.0);
    submit(&mount);

    assert!(host.events().is_empty());
    assert!(html(&mount).contains("Please select at least 2 options before submitting!"));
}

#[test]
fn occupied_slot_drop_changes_nothing() {
    let host = RecordingHost::new();
    let (mount, mounted) = mount_sortable(&sortable_trace(&["A", "B"], json!({})), host);
    drag(&mount, "source-item-0", "slot-0", 0.0);
    let before = mounted.state().pool.snapshot();

    drag(&mount, "source-item-0", "slot-0", 0.0);
    assert_eq!(mounted.state().pool.snapshot(), before);
}

#[test]
fn drag_over_marks_hovered_slot() {
    let host = RecordingHost::new();
    let (mount, _mounted) = mount_sortable(&sortable_trace(&["A", "B"], json!({})), host);
    dispatch(&mount, &DomEvent::on(DomEventKind::DragStart, "source-item-0"));
    dispatch(&mount, &DomEvent::on(DomEventKind::DragOver, "slot-1"));

    let rendered = html(&mount);
    assert!(rendered.contains("class=\"placeholder drop-indicator\" data-index=\"2\" data-key=\"slot-1\""));
    assert!(rendered.contains("class=\"option-btn dragging\""));

    dispatch(&mount, &DomEvent::on(DomEventKind::DragLeave, "slot-1"));
    assert!(!html(&mount).contains("drop-indicator"));
}

#[test]
fn reorder_within_source_row() {
    let host = RecordingHost::new();
    let (mount, mounted) = mount_sortable(&sortable_trace(&["Red", "Green", "Blue"], json!({})), host);
    // Default metrics: midpoints at 40 (Red), 139 (Green), 238 (Blue).
    drag(&mount, "source-item-0", "source-item-2", 200.0);
    assert_eq!(mounted.state().pool.snapshot().source, vec!["Green", "Red", "Blue"]);
}

#[test]
fn slot_item_returns_to_source() {
    let host = RecordingHost::new();
    let (mount, mounted) = mount_sortable(&sortable_trace(&["A", "B"], json!({})), host);
    drag(&mount, "source-item-0", "slot-1", 0.0);
    drag(&mount, "slot-1", "source", 0.0);

    let snapshot = mounted.state().pool.snapshot();
    assert_eq!(snapshot.source, vec!["A", "B"]);
    assert_eq!(snapshot.target, vec![None, None]);
}

#[test]
fn submitted_list_is_locked_and_emits_once() {
    let host = RecordingHost::new();
    let (mount, mounted) = mount_sortable(&sortable_trace(&["A"], json!({})), host.clone());
    drag(&mount, "source-item-0", "slot-0", 0.0);
    submit(&mount);
    submit(&mount);
    drag(&mount, "slot-0", "source", 0.0);

    assert_eq!(host.events().len(), 1);
    assert!(mounted.state().is_submitted());
    let rendered = html(&mount);
    assert!(rendered.contains("sortable-container submitted"));
    assert!(rendered.contains("disabled>Submitted</button>"));
}

#[test]
fn host_failure_keeps_submitted_state() {
    let (mount, mounted) = mount_sortable(&sortable_trace(&["A"], json!({})), Arc::new(FailingHost));
    drag(&mount, "source-item-0", "slot-0", 0.0);
    submit(&mount);
    assert!(mounted.state().is_submitted());
    assert!(html(&mount).contains("Submitted"));
}

#[test]
fn teardown_clears_mount_and_stops_events() {
    let host = RecordingHost::new();
    let (mount, mounted) = mount_sortable(&sortable_trace(&["A"], json!({})), host.clone());
    let widget = Arc::clone(mounted.widget());
    assert_eq!(mount.lock().listener_count(), 1);

    mounted.into_teardown().run();
    assert!(mount.lock().is_empty());
    assert!(!widget.lock().is_attached());

    let pending = widget.lock().handle(&DomEvent::new(DomEventKind::Submit));
    assert!(pending.is_none());
    assert!(host.events().is_empty());
    assert!(mount.lock().is_empty());
}

#[test]
fn events_without_known_target_are_ignored() {
    let host = RecordingHost::new();
    let (mount, mounted) = mount_sortable(&sortable_trace(&["A", "B"], json!({})), host);
    let before = mounted.state();
    dispatch(&mount, &DomEvent::on(DomEventKind::DragStart, "form"));
    dispatch(&mount, &DomEvent::on(DomEventKind::Drop, "nowhere"));
    assert_eq!(mounted.state(), before);
}

#[test]
fn invalid_payload_renders_error_notice_through_registry() {
    let extensions = Extensions::with_defaults(
        Arc::new(WidgetSettings::default()),
        Arc::new(UnavailableBackend),
    );
    let mount = MountPoint::shared();
    let trace = Trace::new("sortable_list", json!({ "options": [] }));

    let teardown = extensions
        .render(&trace, &mount, RecordingHost::new())
        .expect("sortable list matches");
    let rendered = html(&mount);
    assert!(rendered.contains(
        "Missing required input variables: options (non-empty array) or submitEvent"
    ));
    assert!(!rendered.contains("submit-btn"));
    assert_eq!(mount.lock().listener_count(), 0);

    teardown.run();
    assert!(mount.lock().is_empty());
}

#[test]
fn host_may_tear_down_from_inside_interact() {
    let host = Arc::new(TeardownOnSubmitHost::default());
    let (mount, mounted) = mount_sortable(&sortable_trace(&["A"], json!({})), host.clone());
    let widget = Arc::clone(mounted.widget());
    *host.teardown.lock() = Some(mounted.into_teardown());

    let (done_tx, done_rx) = mpsc::channel();
    let worker_mount = Arc::clone(&mount);
    thread::spawn(move || {
        drag(&worker_mount, "source-item-0", "slot-0", 0.0);
        submit(&worker_mount);
        let _ = done_tx.send(());
    });

    done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("submit should not block on the widget lock");
    assert_eq!(host.events.lock().len(), 1);
    assert!(!widget.lock().is_attached());
    assert!(mount.lock().is_empty());
}

#[test]
fn host_measured_bounds_drive_insertion() {
    let host = RecordingHost::new();
    let trace = sortable_trace(&["A", "B", "C", "D"], json!({ "requiredCount": 1, "allowMore": true }));
    let (mount, mounted) = mount_sortable(&trace, host);
    drag(&mount, "source-item-0", "target", 0.0);
    drag(&mount, "source-item-0", "target", 1000.0);
    drag(&mount, "source-item-0", "target", 1000.0);
    assert_eq!(target_labels(&mounted), vec!["A", "B", "C"]);

    // Centred items: midpoints 150, 240, 330. The built-in flow layout would
    // put them at 40, 135, 230 and land D after B.
    let centred = vec![
        Bounds::new(105.0, 0.0, 90.0, 35.0),
        Bounds::new(195.0, 0.0, 90.0, 35.0),
        Bounds::new(285.0, 0.0, 90.0, 35.0),
    ];
    dispatch(&mount, &DomEvent::on(DomEventKind::DragStart, "source-item-0"));
    dispatch(
        &mount,
        &DomEvent::on(DomEventKind::Drop, "target").at(200.0).with_bounds(centred),
    );
    dispatch(&mount, &DomEvent::on(DomEventKind::DragEnd, "source-item-0"));

    assert_eq!(target_labels(&mounted), vec!["A", "D", "B", "C"]);
}

#[test]
fn open_list_drop_on_target_item_takes_its_place() {
    let host = RecordingHost::new();
    let trace = sortable_trace(&["A", "B", "C"], json!({ "requiredCount": 1, "allowMore": true }));
    let (mount, mounted) = mount_sortable(&trace, host);
    drag(&mount, "source-item-0", "target", 0.0);
    drag(&mount, "source-item-0", "target", 1000.0);

    drag(&mount, "source-item-0", "target-item-1", 0.0);
    assert_eq!(target_labels(&mounted), vec!["A", "C", "B"]);

    drag(&mount, "target-item-2", "target-item-0", 0.0);
    assert_eq!(target_labels(&mounted), vec!["B", "A", "C"]);
}

#[test]
fn bubbled_second_drop_is_ignored() {
    let host = RecordingHost::new();
    let trace = sortable_trace(&["A", "B", "C"], json!({ "requiredCount": 1, "allowMore": true }));
    let (mount, mounted) = mount_sortable(&trace, host);
    drag(&mount, "source-item-0", "target", 0.0);

    // The item drop bubbles up to the container in the same gesture.
    dispatch(&mount, &DomEvent::on(DomEventKind::DragStart, "source-item-0"));
    dispatch(&mount, &DomEvent::on(DomEventKind::Drop, "target-item-0"));
    dispatch(&mount, &DomEvent::on(DomEventKind::Drop, "target").at(1000.0));
    dispatch(&mount, &DomEvent::on(DomEventKind::DragEnd, "source-item-0"));

    assert_eq!(target_labels(&mounted), vec!["B", "A"]);
    assert_eq!(mounted.state().pool.snapshot().source, vec!["C"]);
}

#[test]
fn oversized_required_count_mounts_without_completing() {
    let host = RecordingHost::new();
    let trace = sortable_trace(&["A", "B"], json!({ "requiredCount": 1e18 }));
    let (mount, mounted) = mount_sortable(&trace, host.clone());
    drag(&mount, "source-item-0", "slot-0", 0.0);
    drag(&mount, "source-item-0", "slot-1", 0.0);
    submit(&mount);

    assert!(host.events().is_empty());
    assert!(matches!(
        mounted.state().notice(),
        Some(SubmitRejected::EmptySlots { .. })
    ));
}
