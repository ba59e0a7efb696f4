//! Completion percentages and progress tiers.

use super::Tone;
use crate::model::syllabus::{SubjectSyllabus, Topic};
use crate::model::RecordId;

/// Tier shown next to a completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    Completed,
    InProgress,
    JustStarted,
}

impl ProgressStatus {
    /// `100` is completed, below `30` is just started, anything else is in
    /// progress.
    pub fn from_percent(percent: u8) -> Self {
        if percent == 100 {
            Self::Completed
        } else if percent < 30 {
            Self::JustStarted
        } else {
            Self::InProgress
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::JustStarted => "Just Started",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Completed => Tone::Positive,
            Self::InProgress => Tone::Accent,
            Self::JustStarted => Tone::Warning,
        }
    }
}

/// Label for a completion percentage.
pub fn status_label(percent: u8) -> &'static str {
    ProgressStatus::from_percent(percent).label()
}

/// `round(100 * part / whole)` with halves rounded up; `0` when `whole == 0`.
pub fn percent_of(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    // 100 * part / whole + 0.5, in integers.
    ((200 * part + whole) / (2 * whole)) as u8
}

/// Share of completed topics as a whole percentage.
pub fn completion_percent(topics: &[Topic]) -> u8 {
    let completed = topics.iter().filter(|topic| topic.completed).count();
    percent_of(completed, topics.len())
}

/// Progress row for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectProgress {
    pub subject_id: RecordId,
    pub subject: String,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub status: ProgressStatus,
}

/// Progress rows in syllabus order.
pub fn subject_progress(syllabus: &[SubjectSyllabus]) -> Vec<SubjectProgress> {
    syllabus
        .iter()
        .map(|subject| {
            let percent = completion_percent(&subject.topics);
            SubjectProgress {
                subject_id: subject.id.clone(),
                subject: subject.subject.clone(),
                completed: subject.completed_topics(),
                total: subject.topics.len(),
                percent,
                status: ProgressStatus::from_percent(percent),
            }
        })
        .collect()
}
