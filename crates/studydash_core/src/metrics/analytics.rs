//! Aggregates feeding the analytics charts.

use super::progress::percent_of;
use crate::model::assignment::Assignment;
use crate::model::syllabus::SubjectSyllabus;

/// One slice of the completed-topic distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicShare {
    pub subject: String,
    pub completed_topics: usize,
    /// Share of all completed topics; slices may not sum to exactly 100.
    pub share_percent: u8,
}

/// Each subject's share of all completed topics, in syllabus order.
pub fn completed_topic_share(syllabus: &[SubjectSyllabus]) -> Vec<TopicShare> {
    let total: usize = syllabus
        .iter()
        .map(SubjectSyllabus::completed_topics)
        .sum();
    syllabus
        .iter()
        .map(|subject| {
            let completed_topics = subject.completed_topics();
            TopicShare {
                subject: subject.subject.clone(),
                completed_topics,
                share_percent: percent_of(completed_topics, total),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCount {
    pub subject: String,
    pub count: usize,
}

/// Assignment count per subject, in first-seen order.
pub fn assignments_per_subject(assignments: &[Assignment]) -> Vec<SubjectCount> {
    let mut counts: Vec<SubjectCount> = Vec::new();
    for assignment in assignments {
        match counts
            .iter_mut()
            .find(|entry| entry.subject == assignment.subject)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(SubjectCount {
                subject: assignment.subject.clone(),
                count: 1,
            }),
        }
    }
    counts
}
