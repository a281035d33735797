use serde::{Deserialize, Serialize};

/// Root settings container shared by every widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Option value dropped from sortable-list input before use.
    pub sentinel: String,
    /// Confirmation text attached to a submitted ordering.
    pub confirmation: String,
    pub labels: Labels,
    pub layout: LayoutMetrics,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            sentinel: "None".to_string(),
            confirmation: "Order submitted successfully".to_string(),
            labels: Labels::default(),
            layout: LayoutMetrics::default(),
        }
    }
}

/// User-facing text rendered by the sortable list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Submit button text while editable.
    pub submit: String,
    /// Submit button text once the list is locked.
    pub submitted: String,
    /// Hint shown behind the source area.
    pub source_hint: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            submit: "Submit".to_string(),
            submitted: "Submitted".to_string(),
            source_hint: "Please drag this area button to the above area".to_string(),
        }
    }
}

/// Geometry used to measure rendered items when no real layout engine
/// reports bounds (headless hosts, the CLI, tests).
///
/// All values are in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Inner width of each container before items wrap to a new row.
    pub container_width: f32,
    /// Average advance of one character of item text.
    pub char_width: f32,
    /// Horizontal padding on each side of an item's text.
    pub item_padding: f32,
    /// Items never render narrower than this.
    pub min_item_width: f32,
    /// Width of an empty fixed-mode placeholder.
    pub slot_width: f32,
    pub item_height: f32,
    /// Spacing between neighbouring items, both axes.
    pub gap: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            container_width: 480.0,
            char_width: 8.0,
            item_padding: 24.0,
            min_item_width: 80.0,
            slot_width: 100.0,
            item_height: 35.0,
            gap: 15.0,
        }
    }
}
