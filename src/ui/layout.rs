//! Flow layout for measuring rendered items.
//!
//! A DOM host reports real element bounds with each drop. Headless hosts (the
//! CLI, tests) use this left-to-right wrapping flow instead, which is close
//! enough to the widget's `flex-wrap: wrap` rows for midpoint hit-testing.

use serde::{Deserialize, Serialize};

use crate::config::LayoutMetrics;

/// Axis-aligned box of a rendered element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Horizontal midpoint used for insertion hit-testing.
    pub fn mid_x(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// Width of an item showing `text`.
pub fn item_width(text: &str, metrics: &LayoutMetrics) -> f32 {
    let text_width = text.chars().count() as f32 * metrics.char_width;
    (text_width + 2.0 * metrics.item_padding).max(metrics.min_item_width)
}

/// Place boxes of the given widths left to right, wrapping to a new row when
/// the next box would overflow the container.
pub fn flow(widths: impl IntoIterator<Item = f32>, metrics: &LayoutMetrics) -> Vec<Bounds> {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut placed = Vec::new();
    for width in widths {
        if x > 0.0 && x + width > metrics.container_width {
            x = 0.0;
            y += metrics.item_height + metrics.gap;
        }
        let bounds = Bounds::new(x, y, width, metrics.item_height);
        x = bounds.right() + metrics.gap;
        placed.push(bounds);
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> LayoutMetrics {
        LayoutMetrics {
            container_width: 200.0,
            char_width: 10.0,
            item_padding: 5.0,
            min_item_width: 40.0,
            slot_width: 60.0,
            item_height: 20.0,
            gap: 10.0,
        }
    }

    #[test]
    fn item_width_respects_minimum() {
        assert_eq!(item_width("A", &metrics()), 40.0);
        assert_eq!(item_width("Orange", &metrics()), 70.0);
    }

    #[test]
    fn flow_places_left_to_right_with_gap() {
        let placed = flow([50.0, 60.0], &metrics());
        assert_eq!(placed[0], Bounds::new(0.0, 0.0, 50.0, 20.0));
        assert_eq!(placed[1], Bounds::new(60.0, 0.0, 60.0, 20.0));
        assert_eq!(placed[1].mid_x(), 90.0);
    }

    #[test]
    fn flow_wraps_overflowing_items() {
        let placed = flow([120.0, 100.0, 30.0], &metrics());
        assert_eq!(placed[1], Bounds::new(0.0, 30.0, 100.0, 20.0));
        assert_eq!(placed[2], Bounds::new(110.0, 30.0, 30.0, 20.0));
    }

    #[test]
    fn oversized_item_still_placed_on_empty_row() {
        let placed = flow([500.0], &metrics());
        assert_eq!(placed[0].left, 0.0);
        assert_eq!(placed[0].right(), 500.0);
    }
}
