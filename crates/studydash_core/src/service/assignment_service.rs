//! Assignment list use-cases.

use crate::metrics::{assignment_filter_counts, AssignmentCounts};
use crate::model::assignment::{Assignment, AssignmentDraft, AssignmentStatus};
use crate::model::fresh_record_id;
use crate::model::seed::default_assignments;
use crate::store::backend::SlotBackend;
use crate::store::slot::ASSIGNMENTS;
use crate::store::CollectionStore;
use log::info;

pub struct AssignmentService<'store, B: SlotBackend> {
    store: &'store mut CollectionStore<B>,
}

impl<'store, B: SlotBackend> AssignmentService<'store, B> {
    pub fn new(store: &'store mut CollectionStore<B>) -> Self {
        Self { store }
    }

    /// Current assignments, seeded on first run.
    pub fn list(&mut self) -> Vec<Assignment> {
        self.store.get_or_init(&ASSIGNMENTS, default_assignments())
    }

    /// Appends a pending assignment built from `draft`.
    ///
    /// Returns `None` without writing when any field is missing.
    pub fn add(&mut self, draft: AssignmentDraft) -> Option<Assignment> {
        let mut assignments = self.list();
        let id = fresh_record_id(assignments.iter().map(|item| item.id.as_str()));
        let Some(assignment) = draft.into_assignment(id) else {
            info!("event=assignment_add module=service status=skipped reason=missing_field");
            return None;
        };

        assignments.push(assignment.clone());
        let persistence = self.store.set(&ASSIGNMENTS, assignments);
        info!(
            "event=assignment_add module=service status=ok id={} persistence={:?}",
            assignment.id, persistence
        );
        Some(assignment)
    }

    /// Moves one assignment to `status`. Returns whether it was found.
    pub fn set_status(&mut self, id: &str, status: AssignmentStatus) -> bool {
        let mut assignments = self.list();
        let Some(target) = assignments.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        target.status = status;

        let persistence = self.store.set(&ASSIGNMENTS, assignments);
        info!(
            "event=assignment_status module=service status=ok id={id} to={status} persistence={persistence:?}"
        );
        true
    }

    /// Shorthand for `set_status(id, Submitted)`.
    pub fn mark_submitted(&mut self, id: &str) -> bool {
        self.set_status(id, AssignmentStatus::Submitted)
    }

    /// Removes one assignment. Returns whether it was found.
    pub fn delete(&mut self, id: &str) -> bool {
        let mut assignments = self.list();
        let before = assignments.len();
        assignments.retain(|item| item.id != id);
        if assignments.len() == before {
            return false;
        }

        let persistence = self.store.set(&ASSIGNMENTS, assignments);
        info!("event=assignment_delete module=service status=ok id={id} persistence={persistence:?}");
        true
    }

    pub fn counts(&mut self) -> AssignmentCounts {
        assignment_filter_counts(&self.list())
    }
}
