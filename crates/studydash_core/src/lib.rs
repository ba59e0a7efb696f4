//! Core of the student dashboard.
//!
//! Owns the persisted collections (assignments, tasks, syllabus, theme), the
//! metrics derived from them, and the use-cases that mutate them. Front ends
//! only render what this crate returns.

pub mod config;
pub mod db;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod service;
pub mod session;
pub mod store;

pub use config::{ConfigError, DashConfig, StudentProfile};
pub use logging::{default_log_level, init_logging, logging_status};
pub use metrics::{
    assignment_filter_counts, completion_percent, status_label, AssignmentCounts,
    DashboardSummary, ProgressStatus, SubjectProgress, TaskCounts, Tone,
};
pub use model::assignment::{Assignment, AssignmentDraft, AssignmentStatus, UnknownStatus};
pub use model::syllabus::{SubjectSyllabus, Topic};
pub use model::task::Task;
pub use model::RecordId;
pub use service::assignment_service::AssignmentService;
pub use service::dashboard_service::{AnalyticsReport, DashboardService};
pub use service::syllabus_service::SyllabusService;
pub use service::task_service::TaskService;
pub use session::{Navigator, ThemePreference, View};
pub use store::backend::{
    MemorySlotBackend, SlotBackend, SqliteSlotBackend, StorageError, StorageResult,
};
pub use store::slot::{ShapeError, SlotKey, SlotValue, ASSIGNMENTS, SYLLABUS, TASKS};
pub use store::{CollectionStore, Persistence};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
