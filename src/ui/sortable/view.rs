//! Projection of sortable-list state into elements and measured bounds.

use std::fmt;

use crate::config::{Labels, LayoutMetrics};
use crate::ui::layout::{self, Bounds};
use crate::ui::view::ViewNode;

use super::pool::{Collection, Mode, PoolSnapshot};
use super::state::{DropIndicator, HoverTarget, SortableState};

/// `data-key` of every node a host event can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKey {
    Source,
    Target,
    SourceItem(usize),
    TargetItem(usize),
    /// Fixed-mode slot, rendered either as a placeholder or as its item.
    Slot(usize),
}

impl NodeKey {
    pub fn parse(key: &str) -> Option<Self> {
        let indexed = |prefix: &str| key.strip_prefix(prefix)?.parse::<usize>().ok();
        match key {
            "source" => Some(NodeKey::Source),
            "target" => Some(NodeKey::Target),
            _ => indexed("source-item-")
                .map(NodeKey::SourceItem)
                .or_else(|| indexed("target-item-").map(NodeKey::TargetItem))
                .or_else(|| indexed("slot-").map(NodeKey::Slot)),
        }
    }

    /// Drag origin this key names, if it names an item.
    pub fn origin(self) -> Option<(Collection, usize)> {
        match self {
            NodeKey::SourceItem(index) => Some((Collection::Source, index)),
            NodeKey::TargetItem(index) | NodeKey::Slot(index) => Some((Collection::Target, index)),
            NodeKey::Source | NodeKey::Target => None,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Source => write!(f, "source"),
            NodeKey::Target => write!(f, "target"),
            NodeKey::SourceItem(index) => write!(f, "source-item-{}", index),
            NodeKey::TargetItem(index) => write!(f, "target-item-{}", index),
            NodeKey::Slot(index) => write!(f, "slot-{}", index),
        }
    }
}

/// Rebuild the whole widget tree from `state`.
pub fn render(state: &SortableState, labels: &Labels) -> ViewNode {
    let snapshot = state.pool.snapshot();
    let hover = state.hover;
    let indicator = |target: HoverTarget| hover.filter(|h| h.target == target);
    let locked = state.is_submitted();

    let target_children: Vec<ViewNode> = match snapshot.mode {
        Mode::Fixed { .. } => snapshot
            .target
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                let key = NodeKey::Slot(index);
                let node = match slot {
                    None => ViewNode::new("div")
                        .class("placeholder")
                        .attr("data-index", (index + 1).to_string()),
                    Some(label) => item_node(label, state.is_dragging(Collection::Target, index)),
                };
                with_indicator(node.attr("data-key", key.to_string()), indicator(HoverTarget::Slot(index)))
            })
            .collect(),
        Mode::Open { .. } => snapshot
            .target
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let node = item_node(
                    label.as_deref().unwrap_or_default(),
                    state.is_dragging(Collection::Target, index),
                )
                .attr("data-key", NodeKey::TargetItem(index).to_string());
                with_indicator(node, indicator(HoverTarget::TargetItem(index)))
            })
            .collect(),
    };

    let source_children = snapshot.source.iter().enumerate().map(|(index, label)| {
        item_node(label, state.is_dragging(Collection::Source, index))
            .attr("data-key", NodeKey::SourceItem(index).to_string())
    });

    let target = with_indicator(
        ViewNode::new("div")
            .class("target-container")
            .attr("data-key", NodeKey::Target.to_string()),
        indicator(HoverTarget::TargetContainer),
    )
    .children(target_children);

    let source = with_indicator(
        ViewNode::new("div")
            .class("source-container")
            .attr("data-key", NodeKey::Source.to_string())
            .attr("data-hint", labels.source_hint.as_str()),
        indicator(HoverTarget::SourceContainer),
    )
    .children(source_children);

    let submit = ViewNode::new("button")
        .class("submit-btn")
        .attr("type", "submit")
        .flag(locked, "disabled")
        .text(if locked {
            labels.submitted.as_str()
        } else {
            labels.submit.as_str()
        });

    let mut form = ViewNode::new("form").child(target).child(source).child(submit);
    if let Some(notice) = state.notice() {
        form = form.child(
            ViewNode::new("div")
                .class("validation-notice")
                .attr("role", "alert")
                .text(notice.to_string()),
        );
    }

    ViewNode::new("div")
        .class("sortable-container")
        .class_if(locked, "submitted")
        .child(form)
}

fn item_node(label: &str, dragging: bool) -> ViewNode {
    ViewNode::new("div")
        .class("option-btn")
        .class_if(dragging, "dragging")
        .attr("draggable", "true")
        .text(label)
}

fn with_indicator(node: ViewNode, hover: Option<DropIndicator>) -> ViewNode {
    match hover {
        Some(indicator) => node
            .class("drop-indicator")
            .class_if(!indicator.accepted, "drop-rejected"),
        None => node,
    }
}

/// Measured bounds of every rendered item, per container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemLayout {
    /// Slots (fixed) or items (open), in display order.
    pub target: Vec<Bounds>,
    pub source: Vec<Bounds>,
}

impl ItemLayout {
    pub fn container(&self, collection: Collection) -> &[Bounds] {
        match collection {
            Collection::Source => &self.source,
            Collection::Target => &self.target,
        }
    }
}

/// Lay out both containers with the headless flow metrics.
pub fn measure(snapshot: &PoolSnapshot, metrics: &LayoutMetrics) -> ItemLayout {
    let target_widths = snapshot.target.iter().map(|slot| match slot {
        Some(label) => layout::item_width(label, metrics),
        None => metrics.slot_width,
    });
    let source_widths = snapshot
        .source
        .iter()
        .map(|label| layout::item_width(label, metrics));

    ItemLayout {
        target: layout::flow(target_widths, metrics),
        source: layout::flow(source_widths, metrics),
    }
}
