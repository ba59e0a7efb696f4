//! Default collection contents used while a slot has never been written.

use super::assignment::{Assignment, AssignmentStatus};
use super::syllabus::{SubjectSyllabus, Topic};
use super::task::Task;
use chrono::NaiveDate;

/// Seed assignments shown on first run.
pub fn default_assignments() -> Vec<Assignment> {
    vec![
        seed_assignment(
            "1",
            "Calculus Problem Set 4",
            "Math",
            (2023, 11, 15),
            AssignmentStatus::Pending,
        ),
        seed_assignment(
            "2",
            "Physics Lab Report",
            "Physics",
            (2023, 11, 10),
            AssignmentStatus::Overdue,
        ),
        seed_assignment(
            "3",
            "React Project",
            "CS",
            (2023, 11, 20),
            AssignmentStatus::Submitted,
        ),
    ]
}

/// Seed daily tasks shown on first run.
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            text: "Read Chapter 5 of History book".to_string(),
            completed: false,
        },
        Task {
            id: "2".to_string(),
            text: "Email professor about project".to_string(),
            completed: true,
        },
    ]
}

/// Seed syllabus shown on first run.
pub fn default_syllabus() -> Vec<SubjectSyllabus> {
    vec![
        SubjectSyllabus {
            id: "math".to_string(),
            subject: "Calculus II".to_string(),
            topics: vec![
                Topic::new("m1", "Integration Techniques", true),
                Topic::new("m2", "Infinite Series", true),
                Topic::new("m3", "Parametric Equations", false),
                Topic::new("m4", "Polar Coordinates", false),
            ],
        },
        SubjectSyllabus {
            id: "cs".to_string(),
            subject: "Data Structures".to_string(),
            topics: vec![
                Topic::new("c1", "Arrays & Linked Lists", true),
                Topic::new("c2", "Stacks & Queues", true),
                Topic::new("c3", "Trees & Graphs", false),
                Topic::new("c4", "Hash Tables", false),
            ],
        },
        SubjectSyllabus {
            id: "phy".to_string(),
            subject: "Physics: Mechanics".to_string(),
            topics: vec![
                Topic::new("p1", "Newton's Laws", true),
                Topic::new("p2", "Work and Energy", false),
                Topic::new("p3", "Momentum", false),
            ],
        },
    ]
}

fn seed_assignment(
    id: &str,
    title: &str,
    subject: &str,
    (year, month, day): (i32, u32, u32),
    status: AssignmentStatus,
) -> Assignment {
    Assignment {
        id: id.to_string(),
        title: title.to_string(),
        subject: subject.to_string(),
        due_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        status,
    }
}
