use chrono::NaiveDate;
use studydash_core::{
    Assignment, AssignmentDraft, AssignmentService, AssignmentStatus, CollectionStore,
    MemorySlotBackend, ASSIGNMENTS,
};

fn draft(title: &str, subject: &str, due_date: &str) -> AssignmentDraft {
    AssignmentDraft {
        title: title.to_string(),
        subject: subject.to_string(),
        due_date: due_date.to_string(),
    }
}

#[test]
fn first_run_counts_seed_statuses() {
    let mut store = CollectionStore::new(MemorySlotBackend::new());
    let counts = AssignmentService::new(&mut store).counts();

    assert_eq!(counts.pending, 1);
    assert_eq!(counts.submitted, 1);
    assert_eq!(counts.overdue, 1);
    assert_eq!(counts.total(), 3);
}

#[test]
fn add_creates_pending_assignment_at_the_end() {
    let mut store = CollectionStore::new(MemorySlotBackend::new());
    let mut service = AssignmentService::new(&mut store);

    let added = service
        .add(draft("Essay on History", "History", "2024-05-01"))
        .unwrap();

    let assignments = service.list();
    assert_eq!(assignments.len(), 4);
    assert_eq!(assignments.last(), Some(&added));
    assert_eq!(added.status, AssignmentStatus::Pending);
    assert_eq!(added.due_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    assert!(assignments[..3].iter().all(|item| item.id != added.id));
}

#[test]
fn missing_field_makes_add_a_no_op() {
    let mut store = CollectionStore::new(MemorySlotBackend::new());
    let mut service = AssignmentService::new(&mut store);

    assert!(service.add(draft("", "History", "2024-05-01")).is_none());
    assert!(service.add(draft("Essay", "History", "")).is_none());
    assert_eq!(service.list().len(), 3);
    assert!(store.backend().payload("assignments").is_none());
}

#[test]
fn status_changes_only_when_requested() {
    let mut store = CollectionStore::new(MemorySlotBackend::new());
    store.set(
        &ASSIGNMENTS,
        vec![Assignment {
            id: "old".to_string(),
            title: "Long past due".to_string(),
            subject: "Math".to_string(),
            due_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            status: AssignmentStatus::Pending,
        }],
    );
    let mut service = AssignmentService::new(&mut store);

    // A due date in the past does not make it overdue.
    assert_eq!(service.list()[0].status, AssignmentStatus::Pending);

    assert!(service.set_status("old", AssignmentStatus::Overdue));
    assert_eq!(service.list()[0].status, AssignmentStatus::Overdue);
    assert!(service.mark_submitted("old"));
    assert_eq!(service.list()[0].status, AssignmentStatus::Submitted);
    assert!(!service.mark_submitted("unknown"));
}

#[test]
fn delete_is_irrevocable_and_keeps_order() {
    let mut store = CollectionStore::new(MemorySlotBackend::new());
    let mut service = AssignmentService::new(&mut store);

    assert!(service.delete("2"));
    assert!(!service.delete("2"));

    let ids: Vec<String> = service.list().into_iter().map(|item| item.id).collect();
    assert_eq!(ids, vec!["1".to_string(), "3".to_string()]);
    assert_eq!(service.counts().overdue, 0);
}
