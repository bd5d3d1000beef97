//! WASM bindings for area-schedule.
//!
//! Exposes schedule and form validation to the hosting web form via
//! `wasm-bindgen`. Documents cross the boundary as JSON strings in the same
//! camelCase shape the form already uses, and errors come back as the flat
//! `{ "monday.1.openTime": "..." }` object the renderer reads.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p area-schedule-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/area_schedule_wasm.wasm
//! ```

use area_schedule::{CommonAreaData, Session, SessionOverlap, WeekSchedule, Weekday};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OverlapDto {
    earlier: usize,
    later: usize,
    overlap_minutes: u32,
}

impl From<&SessionOverlap> for OverlapDto {
    fn from(o: &SessionOverlap) -> Self {
        Self {
            earlier: o.earlier,
            later: o.later,
            overlap_minutes: o.overlap_minutes,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON-in, JSON-out implementations (target independent)
// ---------------------------------------------------------------------------

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn schedule_errors(schedule_json: &str) -> Result<String, String> {
    let schedule: WeekSchedule = serde_json::from_str(schedule_json)
        .map_err(|e| format!("Invalid schedule JSON: {}", e))?;
    to_json(&area_schedule::validate(&schedule))
}

fn day_errors(day: &str, sessions_json: &str) -> Result<String, String> {
    let day = day.parse::<Weekday>().map_err(|e| e.to_string())?;
    let sessions: Vec<Session> = serde_json::from_str(sessions_json)
        .map_err(|e| format!("Invalid sessions JSON: {}", e))?;
    to_json(&area_schedule::validate_day(day, &sessions))
}

fn overlaps(sessions_json: &str) -> Result<String, String> {
    let sessions: Vec<Session> = serde_json::from_str(sessions_json)
        .map_err(|e| format!("Invalid sessions JSON: {}", e))?;
    let dtos: Vec<OverlapDto> = area_schedule::find_overlaps(&sessions)
        .iter()
        .map(OverlapDto::from)
        .collect();
    to_json(&dtos)
}

fn form_errors(form_json: &str) -> Result<String, String> {
    let data: CommonAreaData =
        serde_json::from_str(form_json).map_err(|e| format!("Invalid form JSON: {}", e))?;
    to_json(&area_schedule::validate_form(&data))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Validate a weekly schedule.
///
/// `schedule_json` is an object keyed by weekday (`monday` … `sunday`), each
/// an array of `{openTime, closeTime}`. Missing days count as one blank
/// session. Returns the error object as a JSON string (`"{}"` when valid).
#[wasm_bindgen(js_name = "validateSchedule")]
pub fn validate_schedule(schedule_json: &str) -> Result<String, JsValue> {
    schedule_errors(schedule_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate the sessions of a single day, e.g. right after the user edits it.
#[wasm_bindgen(js_name = "validateDay")]
pub fn validate_day(day: &str, sessions_json: &str) -> Result<String, JsValue> {
    day_errors(day, sessions_json).map_err(|e| JsValue::from_str(&e))
}

/// List overlapping session pairs of one day as `{earlier, later, overlapMinutes}`.
#[wasm_bindgen(js_name = "findOverlaps")]
pub fn find_overlaps(sessions_json: &str) -> Result<String, JsValue> {
    overlaps(sessions_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate the whole form: required fields plus the schedule.
#[wasm_bindgen(js_name = "validateForm")]
pub fn validate_form(form_json: &str) -> Result<String, JsValue> {
    form_errors(form_json).map_err(|e| JsValue::from_str(&e))
}

/// Initial form values: unset fields and one blank session per day.
#[wasm_bindgen(js_name = "emptyForm")]
pub fn empty_form() -> Result<String, JsValue> {
    to_json(&CommonAreaData::default()).map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_errors_use_dotted_keys() {
        let json = r#"{"monday":[{"openTime":"08:00","closeTime":"10:00"},{"openTime":"09:00","closeTime":"11:00"}]}"#;
        assert_eq!(
            schedule_errors(json).unwrap(),
            r#"{"monday.1.openTime":"sessions may not overlap"}"#
        );
    }

    #[test]
    fn unknown_day_is_rejected() {
        let err = day_errors("someday", "[]").unwrap_err();
        assert!(err.contains("someday"), "{err}");
    }

    #[test]
    fn overlaps_report_minutes() {
        let json = r#"[{"openTime":"09:00","closeTime":"12:00"},{"openTime":"11:00","closeTime":"13:00"}]"#;
        assert_eq!(
            overlaps(json).unwrap(),
            r#"[{"earlier":0,"later":1,"overlapMinutes":60}]"#
        );
    }

    #[test]
    fn bad_form_json_names_the_problem() {
        let err = form_errors("not json").unwrap_err();
        assert!(err.starts_with("Invalid form JSON"), "{err}");
    }

    #[test]
    fn blank_form_lists_required_fields() {
        let errors: serde_json::Value = serde_json::from_str(&form_errors("{}").unwrap()).unwrap();
        assert_eq!(errors["name"], "name is required");
        assert_eq!(errors.as_object().unwrap().len(), 6);
    }
}
