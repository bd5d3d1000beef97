//! Field-addressed validation messages.
//!
//! Keys are the contract with the rendering layer and must stay stable:
//! non-schedule fields use their camelCase name (`"capacity"`), schedule
//! entries use `"{day}.{sessionIndex}.{field}"` (`"monday.1.openTime"`).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::FormField;
use crate::schedule::{SessionField, Weekday};

/// Address of one input on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Field(FormField),
    Session {
        day: Weekday,
        index: usize,
        field: SessionField,
    },
}

impl FieldPath {
    pub fn session(day: Weekday, index: usize, field: SessionField) -> Self {
        FieldPath::Session { day, index, field }
    }
}

impl From<FormField> for FieldPath {
    fn from(field: FormField) -> Self {
        FieldPath::Field(field)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Field(field) => f.write_str(field.as_str()),
            FieldPath::Session { day, index, field } => write!(f, "{day}.{index}.{field}"),
        }
    }
}

/// Mapping from field path to message. An absent key means the field is fine.
///
/// Serializes as a flat JSON object in key order, so two equal mappings always
/// render identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message, replacing any earlier one at the same path.
    pub fn insert(&mut self, path: FieldPath, message: impl Into<String>) {
        self.entries.insert(path.to_string(), message.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn at(&self, path: FieldPath) -> Option<&str> {
        self.get(&path.to_string())
    }

    pub fn contains(&self, path: FieldPath) -> bool {
        self.entries.contains_key(&path.to_string())
    }

    pub fn remove(&mut self, path: FieldPath) -> Option<String> {
        self.entries.remove(&path.to_string())
    }

    /// Drop every message attached to session `index` of `day` and move the
    /// messages of the sessions after it down one index, matching a removal
    /// from the day's list.
    pub fn remove_session(&mut self, day: Weekday, index: usize) {
        let prefix = format!("{day}.");
        let entries = std::mem::take(&mut self.entries);
        for (key, message) in entries {
            let Some((position, field)) = key
                .strip_prefix(&prefix)
                .and_then(|rest| rest.split_once('.'))
                .and_then(|(position, field)| Some((position.parse::<usize>().ok()?, field)))
            else {
                self.entries.insert(key, message);
                continue;
            };
            if position == index {
                continue;
            }
            let key = if position > index {
                format!("{prefix}{}.{field}", position - 1)
            } else {
                key
            };
            self.entries.insert(key, message);
        }
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, message)| (key.as_str(), message.as_str()))
    }
}
