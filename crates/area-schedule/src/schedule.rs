//! Weekly availability schedule: seven days, each an ordered list of sessions.
//!
//! A [`WeekSchedule`] always holds all seven weekdays and every day holds at
//! least one [`Session`]. Both properties are restored on deserialization, so
//! a partial document from the hosting form is still a usable schedule.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// One of the seven fixed weekday keys.
///
/// Ordering follows the week as displayed by the form (Monday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The lowercase key used in field paths and JSON documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| ScheduleError::UnknownWeekday(s.to_string()))
    }
}

/// Which side of a session a value or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionField {
    OpenTime,
    CloseTime,
}

impl SessionField {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionField::OpenTime => "openTime",
            SessionField::CloseTime => "closeTime",
        }
    }
}

impl fmt::Display for SessionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One continuous open/close interval on a given day.
///
/// Both times are `HH:MM` strings, or empty while the user has not picked
/// them yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, alias = "startTime")]
    pub open_time: String,
    #[serde(default, alias = "endTime")]
    pub close_time: String,
}

impl Session {
    pub fn new(open_time: impl Into<String>, close_time: impl Into<String>) -> Self {
        Self {
            open_time: open_time.into(),
            close_time: close_time.into(),
        }
    }

    /// Both times are filled in.
    pub fn is_complete(&self) -> bool {
        !self.open_time.is_empty() && !self.close_time.is_empty()
    }

    /// Neither time is filled in.
    pub fn is_blank(&self) -> bool {
        self.open_time.is_empty() && self.close_time.is_empty()
    }

    pub fn get(&self, field: SessionField) -> &str {
        match field {
            SessionField::OpenTime => &self.open_time,
            SessionField::CloseTime => &self.close_time,
        }
    }

    pub fn set(&mut self, field: SessionField, value: impl Into<String>) {
        match field {
            SessionField::OpenTime => self.open_time = value.into(),
            SessionField::CloseTime => self.close_time = value.into(),
        }
    }
}

/// Ordered sessions of one day. Insertion order is display order.
pub type DaySchedule = Vec<Session>;

/// All seven days of availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Weekday, DaySchedule>",
    into = "BTreeMap<Weekday, DaySchedule>"
)]
pub struct WeekSchedule {
    days: BTreeMap<Weekday, DaySchedule>,
}

impl WeekSchedule {
    /// One blank session per day, the state of a freshly opened form.
    pub fn empty() -> Self {
        Self::from(BTreeMap::new())
    }

    pub fn day(&self, day: Weekday) -> &[Session] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mutable access to a day's sessions.
    ///
    /// Callers that remove sessions are responsible for leaving at least one;
    /// [`FormState`](crate::controller::FormState) does this.
    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        self.days.entry(day).or_insert_with(|| vec![Session::default()])
    }

    /// Replace a whole day. An empty list becomes one blank session.
    pub fn set_day(&mut self, day: Weekday, sessions: DaySchedule) {
        self.days.insert(day, normalize_day(sessions));
    }

    /// Days in week order with their sessions.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[Session])> + '_ {
        self.days.iter().map(|(day, sessions)| (*day, sessions.as_slice()))
    }

    /// Total number of sessions across the week.
    pub fn session_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<BTreeMap<Weekday, DaySchedule>> for WeekSchedule {
    fn from(mut days: BTreeMap<Weekday, DaySchedule>) -> Self {
        for day in Weekday::ALL {
            let sessions = days.remove(&day).unwrap_or_default();
            days.insert(day, normalize_day(sessions));
        }
        Self { days }
    }
}

impl From<WeekSchedule> for BTreeMap<Weekday, DaySchedule> {
    fn from(schedule: WeekSchedule) -> Self {
        schedule.days
    }
}

fn normalize_day(sessions: DaySchedule) -> DaySchedule {
    if sessions.is_empty() {
        vec![Session::default()]
    } else {
        sessions
    }
}
