//! Daily task use-cases.

use crate::metrics::{task_counts, TaskCounts};
use crate::model::fresh_record_id;
use crate::model::seed::default_tasks;
use crate::model::task::Task;
use crate::store::backend::SlotBackend;
use crate::store::slot::TASKS;
use crate::store::CollectionStore;
use log::info;

pub struct TaskService<'store, B: SlotBackend> {
    store: &'store mut CollectionStore<B>,
}

impl<'store, B: SlotBackend> TaskService<'store, B> {
    pub fn new(store: &'store mut CollectionStore<B>) -> Self {
        Self { store }
    }

    /// Current tasks, seeded on first run.
    pub fn list(&mut self) -> Vec<Task> {
        self.store.get_or_init(&TASKS, default_tasks())
    }

    /// Appends an open task. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<Task> {
        let text = text.trim();
        if text.is_empty() {
            info!("event=task_add module=service status=skipped reason=blank_text");
            return None;
        }

        let mut tasks = self.list();
        let task = Task::new(
            fresh_record_id(tasks.iter().map(|task| task.id.as_str())),
            text,
        );
        tasks.push(task.clone());
        let persistence = self.store.set(&TASKS, tasks);
        info!(
            "event=task_add module=service status=ok id={} persistence={:?}",
            task.id, persistence
        );
        Some(task)
    }

    /// Flips one task's completion flag, returning the new value.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let mut tasks = self.list();
        let task = tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        let completed = task.completed;

        let persistence = self.store.set(&TASKS, tasks);
        info!(
            "event=task_toggle module=service status=ok id={id} completed={completed} persistence={persistence:?}"
        );
        Some(completed)
    }

    /// Removes one task. Returns whether it was found.
    pub fn delete(&mut self, id: &str) -> bool {
        let mut tasks = self.list();
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return false;
        }

        let persistence = self.store.set(&TASKS, tasks);
        info!("event=task_delete module=service status=ok id={id} persistence={persistence:?}");
        true
    }

    pub fn counts(&mut self) -> TaskCounts {
        task_counts(&self.list())
    }
}
