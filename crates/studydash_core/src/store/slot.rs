//! Typed slot keys and structural validation of slot values.
//!
//! # Invariants
//! - A slot key always names the same value type.
//! - A payload is usable only if `SlotValue::decode` accepts it and the value
//!   passes `SlotValue::check_shape`.
//! - Collections are JSON; a value may override the encoding when the medium
//!   already holds it in another layout.

use crate::model::assignment::Assignment;
use crate::model::syllabus::SubjectSyllabus;
use crate::model::task::Task;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

/// Name of the durable slot holding assignments.
pub const ASSIGNMENTS_KEY: &str = "assignments";
/// Name of the durable slot holding daily tasks.
pub const TASKS_KEY: &str = "tasks";
/// Name of the durable slot holding the syllabus.
pub const SYLLABUS_KEY: &str = "syllabus";
/// Name of the durable slot holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Binding between a slot name and the value type stored under it.
#[derive(Debug)]
pub struct SlotKey<T> {
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> SlotKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _value: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for SlotKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlotKey<T> {}

pub const ASSIGNMENTS: SlotKey<Vec<Assignment>> = SlotKey::new(ASSIGNMENTS_KEY);
pub const TASKS: SlotKey<Vec<Task>> = SlotKey::new(TASKS_KEY);
pub const SYLLABUS: SlotKey<Vec<SubjectSyllabus>> = SlotKey::new(SYLLABUS_KEY);

/// Structural mismatch found in a deserialized payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    EmptyId { collection: &'static str },
    DuplicateId { collection: &'static str, id: String },
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId { collection } => write!(f, "empty id in `{collection}`"),
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate id `{id}` in `{collection}`")
            }
        }
    }
}

impl Error for ShapeError {}

/// Value that can live in a store slot.
pub trait SlotValue: Serialize + DeserializeOwned + Clone + 'static {
    /// Raw payload written to the medium.
    fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a raw payload read from the medium.
    fn decode(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// Checks invariants serde cannot express.
    fn check_shape(&self) -> Result<(), ShapeError> {
        Ok(())
    }
}

impl SlotValue for Vec<Assignment> {
    fn check_shape(&self) -> Result<(), ShapeError> {
        check_unique_ids(ASSIGNMENTS_KEY, self.iter().map(|item| item.id.as_str()))
    }
}

impl SlotValue for Vec<Task> {
    fn check_shape(&self) -> Result<(), ShapeError> {
        check_unique_ids(TASKS_KEY, self.iter().map(|item| item.id.as_str()))
    }
}

impl SlotValue for Vec<SubjectSyllabus> {
    fn check_shape(&self) -> Result<(), ShapeError> {
        check_unique_ids(SYLLABUS_KEY, self.iter().map(|item| item.id.as_str()))?;
        for subject in self {
            check_unique_ids(
                "syllabus.topics",
                subject.topics.iter().map(|topic| topic.id.as_str()),
            )?;
        }
        Ok(())
    }
}

fn check_unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ShapeError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(ShapeError::EmptyId { collection });
        }
        if !seen.insert(id) {
            return Err(ShapeError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
