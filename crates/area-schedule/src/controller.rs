//! Form state and the transitions that mutate it.
//!
//! [`FormState`] is owned by whatever hosts the form. It changes only through
//! [`FormState::apply`], which keeps two invariants: every day has at least
//! one session, and no day grows beyond the configured [`SessionLimit`].

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::errors::{FieldPath, ValidationErrors};
use crate::form::{self, AreaStatus, CommonAreaData, DurationUnit, FormField};
use crate::schedule::{Session, SessionField, Weekday};

/// How many sessions a single day may hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "max")]
pub enum SessionLimit {
    /// Dynamic list: add as many sessions as needed.
    #[default]
    Unbounded,
    /// At most this many sessions per day. Values below 1 behave as 1.
    AtMost(usize),
}

impl SessionLimit {
    /// The fixed morning/afternoon layout.
    pub const PAIR: SessionLimit = SessionLimit::AtMost(2);

    /// Whether a day that currently has `len` sessions may get another one.
    pub fn allows_another(self, len: usize) -> bool {
        match self {
            SessionLimit::Unbounded => true,
            SessionLimit::AtMost(max) => len < max.max(1),
        }
    }
}

/// A new value for one non-schedule field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Capacity(Option<f64>),
    UniqueReservation(Option<bool>),
    ReservationDuration(Option<f64>),
    DurationUnit(DurationUnit),
    Status(Option<AreaStatus>),
    Cost(Option<f64>),
    Recommendations(String),
}

impl FieldUpdate {
    pub fn field(&self) -> FormField {
        match self {
            FieldUpdate::Name(_) => FormField::Name,
            FieldUpdate::Capacity(_) => FormField::Capacity,
            FieldUpdate::UniqueReservation(_) => FormField::UniqueReservation,
            FieldUpdate::ReservationDuration(_) => FormField::ReservationDuration,
            FieldUpdate::DurationUnit(_) => FormField::DurationUnit,
            FieldUpdate::Status(_) => FormField::Status,
            FieldUpdate::Cost(_) => FormField::Cost,
            FieldUpdate::Recommendations(_) => FormField::Recommendations,
        }
    }

    fn write_to(self, data: &mut CommonAreaData) {
        match self {
            FieldUpdate::Name(v) => data.name = v,
            FieldUpdate::Capacity(v) => data.capacity = v,
            FieldUpdate::UniqueReservation(v) => data.unique_reservation = v,
            FieldUpdate::ReservationDuration(v) => data.reservation_duration = v,
            FieldUpdate::DurationUnit(v) => data.duration_unit = v,
            FieldUpdate::Status(v) => data.status = v,
            FieldUpdate::Cost(v) => data.cost = v,
            FieldUpdate::Recommendations(v) => data.recommendations = v,
        }
    }
}

/// A single user action on the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetField(FieldUpdate),
    SetSession {
        day: Weekday,
        index: usize,
        field: SessionField,
        value: String,
    },
    AddSession(Weekday),
    RemoveSession {
        day: Weekday,
        index: usize,
    },
    Reset,
    BeginSubmit,
    EndSubmit,
}

/// Persistence collaborator that receives a validated payload.
pub trait AreaStore {
    fn save(
        &self,
        data: &CommonAreaData,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// Result of [`FormState::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Stored; the form has been reset.
    Saved,
    /// Validation failed; `errors` holds the messages and nothing was sent.
    Invalid,
    /// The store rejected the write; the data is kept for a retry.
    Failed(SubmitError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub data: CommonAreaData,
    pub errors: ValidationErrors,
    pub submitting: bool,
    limit: SessionLimit,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(SessionLimit::default())
    }
}

impl FormState {
    pub fn new(limit: SessionLimit) -> Self {
        Self {
            data: CommonAreaData::default(),
            errors: ValidationErrors::new(),
            submitting: false,
            limit,
        }
    }

    pub fn limit(&self) -> SessionLimit {
        self.limit
    }

    /// Whether the user may still add a session to `day`.
    pub fn can_add_session(&self, day: Weekday) -> bool {
        self.limit
            .allows_another(self.data.schedule.day(day).len())
    }

    /// Whether the session at `index` may be removed (it exists and is not
    /// the last one of the day).
    pub fn can_remove_session(&self, day: Weekday, index: usize) -> bool {
        let len = self.data.schedule.day(day).len();
        len > 1 && index < len
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetField(update) => {
                self.errors.remove(FieldPath::Field(update.field()));
                update.write_to(&mut self.data);
            }
            FormAction::SetSession {
                day,
                index,
                field,
                value,
            } => {
                let Some(session) = self.data.schedule.day_mut(day).get_mut(index) else {
                    tracing::debug!(%day, index, "ignoring edit of missing session");
                    return;
                };
                session.set(field, value);
                self.errors.remove(FieldPath::session(day, index, field));
            }
            FormAction::AddSession(day) => {
                if !self.can_add_session(day) {
                    tracing::debug!(%day, limit = ?self.limit, "session limit reached");
                    return;
                }
                self.data.schedule.day_mut(day).push(Session::default());
            }
            FormAction::RemoveSession { day, index } => {
                if !self.can_remove_session(day, index) {
                    tracing::debug!(%day, index, "refusing to remove session");
                    return;
                }
                self.data.schedule.day_mut(day).remove(index);
                self.errors.remove_session(day, index);
            }
            FormAction::Reset => *self = Self::new(self.limit),
            FormAction::BeginSubmit => self.submitting = true,
            FormAction::EndSubmit => self.submitting = false,
        }
    }

    /// Recompute `errors` for the whole form. Returns `true` when there are none.
    pub fn validate(&mut self) -> bool {
        self.errors = form::validate_form(&self.data);
        self.errors.is_empty()
    }

    /// Validate and, if clean, hand the payload to `store`.
    ///
    /// `submitting` is set for the duration of the call and cleared on every
    /// path. A failed write leaves `data` untouched.
    pub async fn submit<S: AreaStore>(&mut self, store: &S) -> SubmitOutcome {
        self.apply(FormAction::BeginSubmit);

        if !self.validate() {
            tracing::info!(errors = self.errors.len(), "form has validation errors");
            self.apply(FormAction::EndSubmit);
            return SubmitOutcome::Invalid;
        }

        let saved = store.save(&self.data).await;
        let outcome = match saved {
            Ok(()) => {
                tracing::info!(name = %self.data.name, "common area saved");
                self.apply(FormAction::Reset);
                SubmitOutcome::Saved
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save common area");
                SubmitOutcome::Failed(e)
            }
        };

        self.apply(FormAction::EndSubmit);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_allows_another() {
        assert!(SessionLimit::Unbounded.allows_another(100));
        assert!(SessionLimit::PAIR.allows_another(1));
        assert!(!SessionLimit::PAIR.allows_another(2));
        assert!(!SessionLimit::AtMost(0).allows_another(1));
    }

    #[test]
    fn set_field_clears_only_that_error() {
        let mut state = FormState::default();
        assert!(!state.validate());
        assert!(state.errors.contains(FieldPath::Field(FormField::Name)));

        state.apply(FormAction::SetField(FieldUpdate::Name("Gym".into())));

        assert!(!state.errors.contains(FieldPath::Field(FormField::Name)));
        assert!(state.errors.contains(FieldPath::Field(FormField::Capacity)));
    }

    #[test]
    fn reset_keeps_limit() {
        let mut state = FormState::new(SessionLimit::PAIR);
        state.apply(FormAction::SetField(FieldUpdate::Name("Hall".into())));
        state.apply(FormAction::Reset);
        assert_eq!(state.limit(), SessionLimit::PAIR);
        assert_eq!(state.data, CommonAreaData::default());
    }
}
