//! Syllabus records: subjects and their ordered topics.
//!
//! # Invariants
//! - A topic belongs to exactly one subject.
//! - Topic order inside a subject is display order and is preserved by every
//!   mutation.

use super::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: RecordId,
    pub name: String,
    pub completed: bool,
}

impl Topic {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSyllabus {
    pub id: RecordId,
    /// Display name of the subject.
    pub subject: String,
    pub topics: Vec<Topic>,
}

impl SubjectSyllabus {
    /// Number of completed topics.
    pub fn completed_topics(&self) -> usize {
        self.topics.iter().filter(|topic| topic.completed).count()
    }

    /// Flips one topic's completion flag, returning the new value.
    pub fn toggle_topic(&mut self, topic_id: &str) -> Option<bool> {
        let topic = self.topics.iter_mut().find(|topic| topic.id == topic_id)?;
        topic.completed = !topic.completed;
        Some(topic.completed)
    }
}
