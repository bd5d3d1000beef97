//! Tests for the form payload: required fields, JSON shape, and how field
//! errors combine with schedule errors.

use area_schedule::form::{
    CAPACITY_POSITIVE, CAPACITY_REQUIRED, COST_REQUIRED, DURATION_POSITIVE, DURATION_REQUIRED,
    NAME_REQUIRED, STATUS_REQUIRED, UNIQUE_RESERVATION_REQUIRED,
};
use area_schedule::validator::SESSIONS_OVERLAP;
use area_schedule::{
    validate_field, validate_form, AreaStatus, CommonAreaData, DurationUnit, FormField, Session,
    Weekday,
};
use serde_json::json;

fn complete_form() -> CommonAreaData {
    CommonAreaData {
        name: "Rooftop pool".to_string(),
        capacity: Some(30.0),
        unique_reservation: Some(true),
        reservation_duration: Some(90.0),
        duration_unit: DurationUnit::Minutes,
        status: Some(AreaStatus::Available),
        cost: Some(12.5),
        recommendations: "Shower before entering".to_string(),
        ..CommonAreaData::default()
    }
}

// ── Field rules ─────────────────────────────────────────────────────────────

#[test]
fn blank_form_reports_every_required_field() {
    let errors = validate_form(&CommonAreaData::default());

    assert_eq!(errors.len(), 6, "{errors:?}");
    assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
    assert_eq!(errors.get("capacity"), Some(CAPACITY_REQUIRED));
    assert_eq!(errors.get("uniqueReservation"), Some(UNIQUE_RESERVATION_REQUIRED));
    assert_eq!(errors.get("reservationDuration"), Some(DURATION_REQUIRED));
    assert_eq!(errors.get("status"), Some(STATUS_REQUIRED));
    assert_eq!(errors.get("cost"), Some(COST_REQUIRED));
}

#[test]
fn complete_form_is_valid() {
    assert!(validate_form(&complete_form()).is_empty());
}

#[test]
fn non_positive_capacity_and_duration_are_rejected() {
    let data = CommonAreaData {
        capacity: Some(0.0),
        reservation_duration: Some(-1.0),
        ..complete_form()
    };

    assert_eq!(validate_field(FormField::Capacity, &data), Some(CAPACITY_POSITIVE));
    assert_eq!(
        validate_field(FormField::ReservationDuration, &data),
        Some(DURATION_POSITIVE)
    );
}

#[test]
fn free_text_and_unit_are_never_flagged() {
    let data = CommonAreaData::default();
    assert_eq!(validate_field(FormField::Recommendations, &data), None);
    assert_eq!(validate_field(FormField::DurationUnit, &data), None);
}

#[test]
fn schedule_errors_are_merged_with_field_errors() {
    let mut data = complete_form();
    data.name.clear();
    data.schedule.set_day(
        Weekday::Monday,
        vec![Session::new("08:00", "10:00"), Session::new("09:00", "11:00")],
    );

    let errors = validate_form(&data);

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
    assert_eq!(errors.get("monday.1.openTime"), Some(SESSIONS_OVERLAP));
}

// ── JSON shape ──────────────────────────────────────────────────────────────

#[test]
fn form_json_uses_blank_strings_for_unset_values() {
    let data: CommonAreaData = serde_json::from_value(json!({
        "name": "Hall",
        "capacity": "",
        "uniqueReservation": "",
        "reservationDuration": "2",
        "durationUnit": "hours",
        "status": "",
        "cost": 0,
        "recommendations": "",
        "schedule": {}
    }))
    .unwrap();

    assert_eq!(data.capacity, None);
    assert_eq!(data.unique_reservation, None);
    assert_eq!(data.reservation_duration, Some(2.0));
    assert_eq!(data.status, None);
    assert_eq!(data.cost, Some(0.0));
    assert_eq!(data.schedule.session_count(), 7);
}

#[test]
fn typed_json_values_are_accepted() {
    let data: CommonAreaData = serde_json::from_value(json!({
        "name": "Court",
        "capacity": 4,
        "uniqueReservation": false,
        "reservationDuration": 1,
        "status": "maintenance",
        "cost": 3.75
    }))
    .unwrap();

    assert_eq!(data.capacity, Some(4.0));
    assert_eq!(data.unique_reservation, Some(false));
    assert_eq!(data.status, Some(AreaStatus::Maintenance));
    assert_eq!(data.duration_unit, DurationUnit::Hours);
    assert!(validate_form(&data).is_empty());
}

#[test]
fn decimal_capacity_and_duration_are_accepted() {
    let data: CommonAreaData = serde_json::from_value(json!({
        "name": "Pool",
        "capacity": 2.5,
        "uniqueReservation": true,
        "reservationDuration": "1.5",
        "status": "available",
        "cost": 0
    }))
    .unwrap();

    assert_eq!(data.capacity, Some(2.5));
    assert_eq!(data.reservation_duration, Some(1.5));
    assert!(validate_form(&data).is_empty());
}

#[test]
fn not_a_number_capacity_is_rejected() {
    let data: CommonAreaData = serde_json::from_value(json!({ "capacity": "NaN" })).unwrap();
    assert_eq!(validate_field(FormField::Capacity, &data), Some(CAPACITY_POSITIVE));
}

#[test]
fn unknown_status_is_a_parse_error() {
    let result: Result<CommonAreaData, _> = serde_json::from_value(json!({ "status": "closed" }));
    assert!(result.is_err());
}

#[test]
fn legacy_start_end_keys_are_read_as_open_close() {
    let data: CommonAreaData = serde_json::from_value(json!({
        "schedule": {
            "friday": [
                { "startTime": "09:00", "endTime": "13:00" },
                { "startTime": "15:00", "endTime": "19:00" }
            ]
        }
    }))
    .unwrap();

    assert_eq!(
        data.schedule.day(Weekday::Friday),
        &[Session::new("09:00", "13:00"), Session::new("15:00", "19:00")]
    );
}

#[test]
fn serialized_schedule_lists_all_days_in_week_order() {
    let value = serde_json::to_value(CommonAreaData::default()).unwrap();
    let days: Vec<&str> = value["schedule"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        days,
        ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"]
    );
    assert_eq!(value["schedule"]["monday"][0], json!({ "openTime": "", "closeTime": "" }));
    assert_eq!(value["durationUnit"], json!("hours"));
}

#[test]
fn validation_errors_serialize_as_flat_object() {
    let mut data = complete_form();
    data.schedule
        .set_day(Weekday::Sunday, vec![Session::new("10:00", "")]);

    let value = serde_json::to_value(validate_form(&data)).unwrap();

    assert_eq!(value, json!({ "sunday.0.closeTime": "closing time required" }));
}
