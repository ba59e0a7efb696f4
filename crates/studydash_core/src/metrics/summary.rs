//! Counts behind the dashboard summary tiles.

use crate::model::assignment::{Assignment, AssignmentStatus};
use crate::model::syllabus::SubjectSyllabus;
use crate::model::task::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentCounts {
    pub pending: usize,
    pub submitted: usize,
    pub overdue: usize,
}

impl AssignmentCounts {
    pub fn total(&self) -> usize {
        self.pending + self.submitted + self.overdue
    }

    pub fn of(&self, status: AssignmentStatus) -> usize {
        match status {
            AssignmentStatus::Pending => self.pending,
            AssignmentStatus::Submitted => self.submitted,
            AssignmentStatus::Overdue => self.overdue,
        }
    }
}

/// Assignments counted by status.
pub fn assignment_filter_counts(assignments: &[Assignment]) -> AssignmentCounts {
    assignments
        .iter()
        .fold(AssignmentCounts::default(), |mut counts, assignment| {
            match assignment.status {
                AssignmentStatus::Pending => counts.pending += 1,
                AssignmentStatus::Submitted => counts.submitted += 1,
                AssignmentStatus::Overdue => counts.overdue += 1,
            }
            counts
        })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub open: usize,
    pub done: usize,
}

pub fn task_counts(tasks: &[Task]) -> TaskCounts {
    let done = tasks.iter().filter(|task| task.completed).count();
    TaskCounts {
        open: tasks.len() - done,
        done,
    }
}

/// Figures for the dashboard tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_courses: usize,
    pub completed_lessons: usize,
    pub pending_assignments: usize,
    pub submitted_assignments: usize,
    pub overdue_assignments: usize,
    pub open_tasks: usize,
}

pub fn dashboard_summary(
    assignments: &[Assignment],
    tasks: &[Task],
    syllabus: &[SubjectSyllabus],
) -> DashboardSummary {
    let counts = assignment_filter_counts(assignments);
    DashboardSummary {
        total_courses: syllabus.len(),
        completed_lessons: syllabus
            .iter()
            .map(SubjectSyllabus::completed_topics)
            .sum(),
        pending_assignments: counts.pending,
        submitted_assignments: counts.submitted,
        overdue_assignments: counts.overdue,
        open_tasks: task_counts(tasks).open,
    }
}
