use chrono::NaiveDate;
use studydash_core::metrics::{
    assignments_per_subject, completed_topic_share, dashboard_summary, subject_progress,
};
use studydash_core::model::seed::{default_assignments, default_syllabus, default_tasks};
use studydash_core::{
    assignment_filter_counts, completion_percent, status_label, Assignment, AssignmentStatus,
    CollectionStore, DashboardService, MemorySlotBackend, SubjectSyllabus, Tone, Topic,
};

fn topics(completed: usize, total: usize) -> Vec<Topic> {
    (0..total)
        .map(|index| Topic::new(format!("t{index}"), format!("Topic {index}"), index < completed))
        .collect()
}

#[test]
fn completion_percent_of_empty_list_is_zero() {
    assert_eq!(completion_percent(&[]), 0);
}

#[test]
fn completion_percent_rounds_to_whole_numbers() {
    assert_eq!(completion_percent(&topics(7, 10)), 70);
    assert_eq!(completion_percent(&topics(10, 12)), 83);
    assert_eq!(completion_percent(&topics(3, 8)), 38);
    assert_eq!(completion_percent(&topics(4, 4)), 100);
}

#[test]
fn status_labels_follow_thresholds() {
    assert_eq!(status_label(100), "Completed");
    assert_eq!(status_label(25), "Just Started");
    assert_eq!(status_label(50), "In Progress");
    assert_eq!(status_label(30), "In Progress");
}

#[test]
fn empty_subject_reports_zero_and_just_started() {
    let syllabus = vec![SubjectSyllabus {
        id: "empty".to_string(),
        subject: "Empty".to_string(),
        topics: Vec::new(),
    }];
    let rows = subject_progress(&syllabus);
    assert_eq!(rows[0].percent, 0);
    assert_eq!(rows[0].status.label(), "Just Started");
    assert_eq!(rows[0].status.tone(), Tone::Warning);
}

#[test]
fn filter_counts_cover_every_status() {
    let mut assignments = default_assignments();
    assignments.push(Assignment {
        id: "4".to_string(),
        title: "Quiz".to_string(),
        subject: "Math".to_string(),
        due_date: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
        status: AssignmentStatus::Pending,
    });
    let counts = assignment_filter_counts(&assignments);

    assert_eq!(counts.of(AssignmentStatus::Pending), 2);
    assert_eq!(counts.of(AssignmentStatus::Submitted), 1);
    assert_eq!(counts.of(AssignmentStatus::Overdue), 1);
    assert_eq!(AssignmentStatus::Overdue.tone(), Tone::Critical);
}

#[test]
fn dashboard_summary_of_seed_data() {
    let summary = dashboard_summary(&default_assignments(), &default_tasks(), &default_syllabus());

    assert_eq!(summary.total_courses, 3);
    assert_eq!(summary.completed_lessons, 5);
    assert_eq!(summary.pending_assignments, 1);
    assert_eq!(summary.submitted_assignments, 1);
    assert_eq!(summary.open_tasks, 1);
}

#[test]
fn analytics_aggregates_seed_data() {
    let share = completed_topic_share(&default_syllabus());
    let percents: Vec<u8> = share.iter().map(|slice| slice.share_percent).collect();
    assert_eq!(percents, vec![40, 40, 20]);

    let per_subject = assignments_per_subject(&default_assignments());
    let subjects: Vec<&str> = per_subject.iter().map(|entry| entry.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Math", "Physics", "CS"]);
    assert!(per_subject.iter().all(|entry| entry.count == 1));
}

#[test]
fn topic_share_without_completed_topics_is_zero() {
    let syllabus = vec![SubjectSyllabus {
        id: "s".to_string(),
        subject: "S".to_string(),
        topics: topics(0, 3),
    }];
    assert_eq!(completed_topic_share(&syllabus)[0].share_percent, 0);
}

#[test]
fn dashboard_service_recomputes_from_current_state() {
    let mut store = CollectionStore::new(MemorySlotBackend::new());
    assert_eq!(DashboardService::new(&mut store).summary().open_tasks, 1);

    studydash_core::TaskService::new(&mut store).add("Buy milk").unwrap();
    let summary = DashboardService::new(&mut store).summary();
    assert_eq!(summary.open_tasks, 2);

    let report = DashboardService::new(&mut store).analytics();
    assert_eq!(report.assignment_counts.total(), 3);
}
