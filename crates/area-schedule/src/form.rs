//! The common-area form payload and its non-schedule field checks.
//!
//! Fields the user has not filled in yet are `None`. On input, an empty
//! string is read as `None` and numeric strings are accepted, since that is
//! what HTML form controls hand over.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{FieldPath, ValidationErrors};
use crate::schedule::WeekSchedule;
use crate::validator;

pub const NAME_REQUIRED: &str = "name is required";
pub const CAPACITY_REQUIRED: &str = "capacity is required";
pub const CAPACITY_POSITIVE: &str = "capacity must be greater than 0";
pub const UNIQUE_RESERVATION_REQUIRED: &str = "unique reservation selection is required";
pub const DURATION_REQUIRED: &str = "reservation duration is required";
pub const DURATION_POSITIVE: &str = "reservation duration must be greater than 0";
pub const STATUS_REQUIRED: &str = "status selection is required";
pub const COST_REQUIRED: &str = "cost is required";
pub const COST_NON_NEGATIVE: &str = "cost must be greater than or equal to 0";

/// Unit of [`CommonAreaData::reservation_duration`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Minutes,
    #[default]
    Hours,
}

/// Operational status of a common area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaStatus {
    Available,
    Reserved,
    Maintenance,
}

impl FromStr for AreaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(AreaStatus::Available),
            "reserved" => Ok(AreaStatus::Reserved),
            "maintenance" => Ok(AreaStatus::Maintenance),
            other => Err(format!("unknown status {other:?}")),
        }
    }
}

/// Everything the form collects about one common area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonAreaData {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub capacity: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub unique_reservation: Option<bool>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub reservation_duration: Option<f64>,
    #[serde(default)]
    pub duration_unit: DurationUnit,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<AreaStatus>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub cost: Option<f64>,
    #[serde(default)]
    pub recommendations: String,
    #[serde(default)]
    pub schedule: WeekSchedule,
}

impl Default for CommonAreaData {
    fn default() -> Self {
        Self {
            name: String::new(),
            capacity: None,
            unique_reservation: None,
            reservation_duration: None,
            duration_unit: DurationUnit::Hours,
            status: None,
            cost: None,
            recommendations: String::new(),
            schedule: WeekSchedule::empty(),
        }
    }
}

/// The non-schedule inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Capacity,
    UniqueReservation,
    ReservationDuration,
    DurationUnit,
    Status,
    Cost,
    Recommendations,
}

impl FormField {
    /// Fields that carry a requirement. `durationUnit` always has a value and
    /// `recommendations` is free text.
    pub const VALIDATED: [FormField; 6] = [
        FormField::Name,
        FormField::Capacity,
        FormField::UniqueReservation,
        FormField::ReservationDuration,
        FormField::Status,
        FormField::Cost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Capacity => "capacity",
            FormField::UniqueReservation => "uniqueReservation",
            FormField::ReservationDuration => "reservationDuration",
            FormField::DurationUnit => "durationUnit",
            FormField::Status => "status",
            FormField::Cost => "cost",
            FormField::Recommendations => "recommendations",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check one non-schedule field. `None` means the field is acceptable.
pub fn validate_field(field: FormField, data: &CommonAreaData) -> Option<&'static str> {
    match field {
        FormField::Name => data.name.trim().is_empty().then_some(NAME_REQUIRED),
        FormField::Capacity => match data.capacity {
            None => Some(CAPACITY_REQUIRED),
            Some(capacity) if capacity.is_nan() || capacity <= 0.0 => Some(CAPACITY_POSITIVE),
            Some(_) => None,
        },
        FormField::UniqueReservation => data
            .unique_reservation
            .is_none()
            .then_some(UNIQUE_RESERVATION_REQUIRED),
        FormField::ReservationDuration => match data.reservation_duration {
            None => Some(DURATION_REQUIRED),
            Some(duration) if duration.is_nan() || duration <= 0.0 => Some(DURATION_POSITIVE),
            Some(_) => None,
        },
        FormField::Status => data.status.is_none().then_some(STATUS_REQUIRED),
        FormField::Cost => match data.cost {
            None => Some(COST_REQUIRED),
            Some(cost) if cost < 0.0 => Some(COST_NON_NEGATIVE),
            Some(_) => None,
        },
        FormField::DurationUnit | FormField::Recommendations => None,
    }
}

/// Validate every field plus the weekly schedule.
pub fn validate_form(data: &CommonAreaData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for field in FormField::VALIDATED {
        if let Some(message) = validate_field(field, data) {
            errors.insert(FieldPath::Field(field), message);
        }
    }
    errors.merge(validator::validate(&data.schedule));
    errors
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Value(T),
    Text(String),
}

/// Accept `null`, `""`, a typed value, or the value spelled as a string.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match Option::<Loose<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Loose::Value(value)) => Ok(Some(value)),
        Some(Loose::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Loose::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
