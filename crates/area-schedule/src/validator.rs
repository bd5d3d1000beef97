//! Schedule validation: session well-formedness and same-day overlap.
//!
//! Every day is checked independently and every violation is reported in one
//! pass. Findings are returned as [`ValidationErrors`]; the validator itself
//! never fails.
//!
//! Sessions are half-open intervals `[open, close)`. Two sessions overlap when
//! `b.start < a.end && b.end > a.start`, so sessions that only touch at an
//! endpoint (one closes at 12:00, the next opens at 12:00) are fine.

use std::fmt;

use crate::errors::{FieldPath, ValidationErrors};
use crate::schedule::{Session, SessionField, WeekSchedule, Weekday};
use crate::time;

pub const CLOSE_TIME_REQUIRED: &str = "closing time required";
pub const OPEN_TIME_REQUIRED: &str = "opening time required";
pub const CLOSE_BEFORE_OPEN: &str = "closing time must be after opening time";
pub const SESSIONS_OVERLAP: &str = "sessions may not overlap";

/// Two sessions of the same day whose intervals intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOverlap {
    /// Index of the session that comes first in the day's list.
    pub earlier: usize,
    /// Index of the session that comes later in the list. This is the one
    /// that gets flagged.
    pub later: usize,
    /// Shared start of the intersection, in minutes since midnight.
    pub start_minutes: u32,
    pub overlap_minutes: u32,
}

impl fmt::Display for SessionOverlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sessions {} and {} overlap for {} min from {}",
            self.earlier,
            self.later,
            self.overlap_minutes,
            time::format_minutes(self.start_minutes)
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: u32,
    end: u32,
}

/// Validate a whole week.
pub fn validate(schedule: &WeekSchedule) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for (day, sessions) in schedule.iter() {
        errors.merge(validate_day(day, sessions));
    }
    tracing::debug!(
        sessions = schedule.session_count(),
        errors = errors.len(),
        "validated weekly schedule"
    );
    errors
}

/// Validate the sessions of one day.
pub fn validate_day(day: Weekday, sessions: &[Session]) -> ValidationErrors {
    let _span = tracing::debug_span!("validate_day", %day).entered();
    let mut errors = ValidationErrors::new();

    for (index, session) in sessions.iter().enumerate() {
        match (session.open_time.is_empty(), session.close_time.is_empty()) {
            (false, true) => errors.insert(
                FieldPath::session(day, index, SessionField::CloseTime),
                CLOSE_TIME_REQUIRED,
            ),
            (true, false) => errors.insert(
                FieldPath::session(day, index, SessionField::OpenTime),
                OPEN_TIME_REQUIRED,
            ),
            _ => {}
        }
    }

    let spans = parse_spans(sessions);

    for (index, span) in spans.iter().enumerate() {
        if let Some(span) = span {
            if span.start >= span.end {
                errors.insert(
                    FieldPath::session(day, index, SessionField::CloseTime),
                    CLOSE_BEFORE_OPEN,
                );
            }
        }
    }

    for overlap in overlaps(&spans) {
        errors.insert(
            FieldPath::session(day, overlap.later, SessionField::OpenTime),
            SESSIONS_OVERLAP,
        );
    }

    errors
}

/// Find all overlapping pairs `(i, j)`, `i < j`, among the complete sessions
/// of one day.
///
/// Sessions with an unparseable time are left out of the comparison.
pub fn find_overlaps(sessions: &[Session]) -> Vec<SessionOverlap> {
    overlaps(&parse_spans(sessions))
}

/// Parse each complete session into minutes. Incomplete or malformed
/// sessions become `None`.
fn parse_spans(sessions: &[Session]) -> Vec<Option<Span>> {
    sessions
        .iter()
        .enumerate()
        .map(|(index, session)| {
            if !session.is_complete() {
                return None;
            }
            match (time::minutes(&session.open_time), time::minutes(&session.close_time)) {
                (Ok(start), Ok(end)) => Some(Span { start, end }),
                (Err(e), _) | (_, Err(e)) => {
                    tracing::warn!(session = index, error = %e, "skipping session with malformed time");
                    None
                }
            }
        })
        .collect()
}

fn overlaps(spans: &[Option<Span>]) -> Vec<SessionOverlap> {
    let mut found = Vec::new();

    for (i, a) in spans.iter().enumerate() {
        let Some(a) = a else { continue };
        for (j, b) in spans.iter().enumerate().skip(i + 1) {
            let Some(b) = b else { continue };
            // Half-open: b.start == a.end is adjacent, not overlapping.
            if b.start < a.end && b.end > a.start {
                let start = a.start.max(b.start);
                let end = a.end.min(b.end);
                found.push(SessionOverlap {
                    earlier: i,
                    later: j,
                    start_minutes: start,
                    overlap_minutes: end.saturating_sub(start),
                });
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_spans_do_not_overlap() {
        let spans = [
            Some(Span { start: 540, end: 720 }),
            Some(Span { start: 720, end: 1080 }),
        ];
        assert!(overlaps(&spans).is_empty());
    }

    #[test]
    fn missing_spans_are_skipped_but_indices_kept() {
        let spans = [
            Some(Span { start: 540, end: 720 }),
            None,
            Some(Span { start: 660, end: 780 }),
        ];
        let found = overlaps(&spans);
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].earlier, found[0].later), (0, 2));
        assert_eq!(found[0].overlap_minutes, 60);
        assert_eq!(found[0].start_minutes, 660);
    }

    #[test]
    fn overlap_display_uses_clock_time() {
        let overlap = SessionOverlap {
            earlier: 0,
            later: 1,
            start_minutes: 540,
            overlap_minutes: 60,
        };
        assert_eq!(overlap.to_string(), "sessions 0 and 1 overlap for 60 min from 09:00");
    }
}
