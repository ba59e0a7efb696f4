//! Syllabus tracker use-cases.

use crate::metrics::{subject_progress, SubjectProgress};
use crate::model::seed::default_syllabus;
use crate::model::syllabus::SubjectSyllabus;
use crate::store::backend::SlotBackend;
use crate::store::slot::SYLLABUS;
use crate::store::CollectionStore;
use log::info;

pub struct SyllabusService<'store, B: SlotBackend> {
    store: &'store mut CollectionStore<B>,
}

impl<'store, B: SlotBackend> SyllabusService<'store, B> {
    pub fn new(store: &'store mut CollectionStore<B>) -> Self {
        Self { store }
    }

    /// Current syllabus, seeded on first run.
    pub fn list(&mut self) -> Vec<SubjectSyllabus> {
        self.store.get_or_init(&SYLLABUS, default_syllabus())
    }

    /// Flips one topic inside one subject, returning the new value.
    ///
    /// Sibling topics and other subjects are left as they are.
    pub fn toggle_topic(&mut self, subject_id: &str, topic_id: &str) -> Option<bool> {
        let mut syllabus = self.list();
        let completed = syllabus
            .iter_mut()
            .find(|subject| subject.id == subject_id)?
            .toggle_topic(topic_id)?;

        let persistence = self.store.set(&SYLLABUS, syllabus);
        info!(
            "event=topic_toggle module=service status=ok subject_id={subject_id} topic_id={topic_id} completed={completed} persistence={persistence:?}"
        );
        Some(completed)
    }

    /// Progress rows in syllabus order.
    pub fn progress(&mut self) -> Vec<SubjectProgress> {
        subject_progress(&self.list())
    }
}
