//! Sortable-list configuration read from a trace payload.

use serde_json::Value;
use thiserror::Error;

use super::pool::Mode;

/// Fixed targets are never built with more slots than this, unless there are
/// more options than this.
const MAX_SLOTS: usize = 1024;

/// Bound the slot count without making an over-sized target completable: a
/// capped target still has more slots than there are options.
fn cap_slots(slots: usize, options: usize) -> usize {
    slots.min(options.saturating_add(1).max(MAX_SLOTS))
}

/// The payload cannot configure a sortable list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Missing required input variables: options (non-empty array) or submitEvent")]
    MissingOptions,

    #[error("Missing required input variables: options (non-empty array) or submitEvent")]
    MissingSubmitEvent,

    #[error("Option at position {index} is not a string")]
    MalformedOption { index: usize },
}

/// Validated configuration for one sortable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableConfig {
    /// Options with the sentinel removed, in payload order.
    pub options: Vec<String>,
    pub submit_event: String,
    pub mode: Mode,
}

impl SortableConfig {
    /// Read `options`, `submitEvent`, `requiredCount`, and `allowMore`.
    ///
    /// `requiredCount` falls back to the filtered option count when absent,
    /// non-numeric, or below 1. `allowMore` falls back to `false` when it is
    /// not a boolean.
    pub fn from_payload(payload: &Value, sentinel: &str) -> Result<Self, PayloadError> {
        let raw = payload
            .get("options")
            .and_then(Value::as_array)
            .filter(|options| !options.is_empty())
            .ok_or(PayloadError::MissingOptions)?;

        let submit_event = payload
            .get("submitEvent")
            .and_then(Value::as_str)
            .filter(|event| !event.is_empty())
            .ok_or(PayloadError::MissingSubmitEvent)?
            .to_string();

        let mut options = Vec::with_capacity(raw.len());
        for (index, value) in raw.iter().enumerate() {
            let option = value
                .as_str()
                .ok_or(PayloadError::MalformedOption { index })?;
            if option != sentinel {
                options.push(option.to_string());
            }
        }

        // A fractional count is a lower bound: 1.5 needs two items.
        let required_count = payload
            .get("requiredCount")
            .and_then(Value::as_f64)
            .filter(|count| count.is_finite() && *count >= 1.0)
            .map(|count| count.ceil() as usize)
            .unwrap_or(options.len());

        let allow_more = payload
            .get("allowMore")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let mode = match Mode::resolve(required_count, allow_more) {
            Mode::Fixed { slots } => Mode::Fixed {
                slots: cap_slots(slots, options.len()),
            },
            open => open,
        };

        Ok(Self {
            options,
            submit_event,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_to_fixed_mode_over_all_options() {
        let config = SortableConfig::from_payload(
            &json!({ "options": ["Red", "Green", "Blue"], "submitEvent": "done" }),
            "None",
        )
        .unwrap();
        assert_eq!(config.mode, Mode::Fixed { slots: 3 });
        assert_eq!(config.submit_event, "done");
    }

    #[test]
    fn sentinel_is_filtered_before_counting() {
        let config = SortableConfig::from_payload(
            &json!({ "options": ["A", "None", "B"], "submitEvent": "done" }),
            "None",
        )
        .unwrap();
        assert_eq!(config.options, vec!["A", "B"]);
        assert_eq!(config.mode, Mode::Fixed { slots: 2 });
    }

    #[test]
    fn allow_more_selects_open_mode() {
        let config = SortableConfig::from_payload(
            &json!({
                "options": ["A", "B", "C", "D"],
                "submitEvent": "done",
                "requiredCount": 2,
                "allowMore": true
            }),
            "None",
        )
        .unwrap();
        assert_eq!(config.mode, Mode::Open { minimum: 2 });
    }

    #[test]
    fn invalid_required_count_falls_back() {
        for bad in [json!(0), json!(-3), json!("2"), json!(null)] {
            let config = SortableConfig::from_payload(
                &json!({ "options": ["A", "B"], "submitEvent": "e", "requiredCount": bad }),
                "None",
            )
            .unwrap();
            assert_eq!(config.mode, Mode::Fixed { slots: 2 });
        }
    }

    #[test]
    fn fractional_required_count_rounds_up() {
        let config = SortableConfig::from_payload(
            &json!({
                "options": ["A", "B", "C"],
                "submitEvent": "e",
                "requiredCount": 1.5,
                "allowMore": true
            }),
            "None",
        )
        .unwrap();
        assert_eq!(config.mode, Mode::Open { minimum: 2 });
    }

    #[test]
    fn huge_required_count_is_capped_but_uncompletable() {
        let config = SortableConfig::from_payload(
            &json!({ "options": ["A", "B"], "submitEvent": "e", "requiredCount": 1e18 }),
            "None",
        )
        .unwrap();
        assert_eq!(config.mode, Mode::Fixed { slots: MAX_SLOTS });

        let modest = SortableConfig::from_payload(
            &json!({ "options": ["A", "B"], "submitEvent": "e", "requiredCount": 5 }),
            "None",
        )
        .unwrap();
        assert_eq!(modest.mode, Mode::Fixed { slots: 5 });
    }

    #[test]
    fn cap_stays_above_option_count() {
        assert_eq!(cap_slots(5000, 2000), 2001);
        assert_eq!(cap_slots(2000, 2000), 2000);
        assert_eq!(cap_slots(usize::MAX, usize::MAX), usize::MAX);
    }

    #[test]
    fn non_boolean_allow_more_is_false() {
        let config = SortableConfig::from_payload(
            &json!({ "options": ["A"], "submitEvent": "e", "allowMore": "yes" }),
            "None",
        )
        .unwrap();
        assert_eq!(config.mode, Mode::Fixed { slots: 1 });
    }

    #[test]
    fn missing_or_empty_options_rejected() {
        assert_eq!(
            SortableConfig::from_payload(&json!({ "submitEvent": "e" }), "None"),
            Err(PayloadError::MissingOptions)
        );
        assert_eq!(
            SortableConfig::from_payload(&json!({ "options": [], "submitEvent": "e" }), "None"),
            Err(PayloadError::MissingOptions)
        );
    }

    #[test]
    fn missing_submit_event_rejected() {
        assert_eq!(
            SortableConfig::from_payload(&json!({ "options": ["A"], "submitEvent": "" }), "None"),
            Err(PayloadError::MissingSubmitEvent)
        );
    }

    #[test]
    fn non_string_option_rejected() {
        assert_eq!(
            SortableConfig::from_payload(&json!({ "options": ["A", 3], "submitEvent": "e" }), "None"),
            Err(PayloadError::MalformedOption { index: 1 })
        );
    }
}
