//! Read-only aggregates spanning every collection.

use crate::metrics::{
    assignment_filter_counts, assignments_per_subject, completed_topic_share,
    dashboard_summary, AssignmentCounts, DashboardSummary, SubjectCount, TopicShare,
};
use crate::model::seed::{default_assignments, default_syllabus, default_tasks};
use crate::store::backend::SlotBackend;
use crate::store::slot::{ASSIGNMENTS, SYLLABUS, TASKS};
use crate::store::CollectionStore;

/// Figures behind the analytics view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsReport {
    pub topic_share: Vec<TopicShare>,
    pub assignments_per_subject: Vec<SubjectCount>,
    pub assignment_counts: AssignmentCounts,
}

pub struct DashboardService<'store, B: SlotBackend> {
    store: &'store mut CollectionStore<B>,
}

impl<'store, B: SlotBackend> DashboardService<'store, B> {
    pub fn new(store: &'store mut CollectionStore<B>) -> Self {
        Self { store }
    }

    pub fn summary(&mut self) -> DashboardSummary {
        let assignments = self.store.get_or_init(&ASSIGNMENTS, default_assignments());
        let tasks = self.store.get_or_init(&TASKS, default_tasks());
        let syllabus = self.store.get_or_init(&SYLLABUS, default_syllabus());
        dashboard_summary(&assignments, &tasks, &syllabus)
    }

    pub fn analytics(&mut self) -> AnalyticsReport {
        let assignments = self.store.get_or_init(&ASSIGNMENTS, default_assignments());
        let syllabus = self.store.get_or_init(&SYLLABUS, default_syllabus());
        AnalyticsReport {
            topic_share: completed_topic_share(&syllabus),
            assignments_per_subject: assignments_per_subject(&assignments),
            assignment_counts: assignment_filter_counts(&assignments),
        }
    }
}
