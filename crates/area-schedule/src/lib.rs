//! # area-schedule
//!
//! Validation and form state for configuring common areas (shared amenities
//! such as a pool, hall, or court) of a residential complex.
//!
//! The core is the weekly schedule check: each day holds an ordered list of
//! open/close sessions, every session must be well-formed, and no two
//! sessions of the same day may overlap. Findings come back as a mapping from
//! stable dotted field paths (`"monday.1.openTime"`) to messages.
//!
//! ## Modules
//!
//! - [`time`]: `HH:MM` → minutes since midnight
//! - [`schedule`]: weekdays, sessions, and the week structure
//! - [`validator`]: session well-formedness and same-day overlap detection
//! - [`errors`]: field paths and the validation message mapping
//! - [`form`]: the full form payload and its required-field checks
//! - [`controller`]: reducer-style form state and the submit boundary
//! - [`error`]: Error types

pub mod controller;
pub mod error;
pub mod errors;
pub mod form;
pub mod schedule;
pub mod time;
pub mod validator;

pub use controller::{AreaStore, FieldUpdate, FormAction, FormState, SessionLimit, SubmitOutcome};
pub use error::{ScheduleError, SubmitError};
pub use errors::{FieldPath, ValidationErrors};
pub use form::{validate_field, validate_form, AreaStatus, CommonAreaData, DurationUnit, FormField};
pub use schedule::{DaySchedule, Session, SessionField, WeekSchedule, Weekday};
pub use validator::{find_overlaps, validate, validate_day, SessionOverlap};
