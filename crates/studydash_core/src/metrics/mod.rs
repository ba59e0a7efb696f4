//! Derived metrics over collection snapshots.
//!
//! # Responsibility
//! - Compute percentages, counts, labels and chart aggregates from the
//!   current collections.
//!
//! # Invariants
//! - Every function is pure and recomputed per call; nothing is cached or
//!   persisted.
//! - No metric ever yields a non-finite or undefined number.

pub mod analytics;
pub mod progress;
pub mod summary;

use crate::model::assignment::AssignmentStatus;

pub use analytics::{assignments_per_subject, completed_topic_share, SubjectCount, TopicShare};
pub use progress::{
    completion_percent, percent_of, status_label, subject_progress, ProgressStatus,
    SubjectProgress,
};
pub use summary::{
    assignment_filter_counts, dashboard_summary, task_counts, AssignmentCounts,
    DashboardSummary, TaskCounts,
};

/// Color family a front end uses to render a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Accent,
    Warning,
    Critical,
}

impl AssignmentStatus {
    pub fn tone(self) -> Tone {
        match self {
            Self::Submitted => Tone::Positive,
            Self::Overdue => Tone::Critical,
            Self::Pending => Tone::Warning,
        }
    }
}
