//! Assignment record.
//!
//! Status transitions are caller-driven only. A past due date never turns an
//! assignment `Overdue` on its own.

use super::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Submission state of one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Overdue,
}

impl AssignmentStatus {
    pub const ALL: [AssignmentStatus; 3] = [Self::Pending, Self::Submitted, Self::Overdue];

    /// Stored and displayed label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Submitted => "Submitted",
            Self::Overdue => "Overdue",
        }
    }
}

impl Display for AssignmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status label is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl Display for UnknownStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown assignment status `{}`; expected pending|submitted|overdue",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for AssignmentStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "submitted" => Ok(Self::Submitted),
            "overdue" => Ok(Self::Overdue),
            _ => Err(UnknownStatus(value.to_string())),
        }
    }
}

/// One coursework assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: RecordId,
    pub title: String,
    pub subject: String,
    /// Serialized as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
}

/// Raw add-assignment form input, before presence checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub title: String,
    pub subject: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub due_date: String,
}

impl AssignmentDraft {
    /// Builds a pending assignment when every field is present.
    ///
    /// Returns `None` when any field is blank or the due date does not parse.
    pub fn into_assignment(self, id: RecordId) -> Option<Assignment> {
        let title = self.title.trim();
        let subject = self.subject.trim();
        if title.is_empty() || subject.is_empty() {
            return None;
        }
        let due_date = NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d").ok()?;

        Some(Assignment {
            id,
            title: title.to_string(),
            subject: subject.to_string(),
            due_date,
            status: AssignmentStatus::Pending,
        })
    }
}
