//! Plain-text rendering of dashboard views.
//!
//! Every function is a pure mapping from snapshots and metrics to text.

use std::fmt::Write;
use std::path::Path;
use studydash_core::metrics::{SubjectCount, TopicShare};
use studydash_core::{
    core_version, Assignment, AnalyticsReport, AssignmentStatus, DashboardSummary,
    StudentProfile, SubjectProgress, SubjectSyllabus, Task, ThemePreference, Tone, View,
};

const BAR_WIDTH: usize = 20;

pub fn header(view: View, theme: ThemePreference) -> String {
    let nav = View::ALL
        .iter()
        .map(|item| {
            if *item == view {
                format!("[{}]", item.nav_label())
            } else {
                item.nav_label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    format!(
        "StudentDash | {} | theme: {}\n{}\n\n",
        view.title(),
        theme.as_str(),
        nav
    )
}

pub fn dashboard(
    profile: &StudentProfile,
    summary: &DashboardSummary,
    progress: &[SubjectProgress],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Welcome back, {}!", profile.first_name());
    let _ = writeln!(out, "Here's what's happening with your studies today.\n");

    let tiles = [
        ("Total Courses", summary.total_courses),
        ("Completed Lessons", summary.completed_lessons),
        ("Pending Assignments", summary.pending_assignments),
        ("Open Tasks", summary.open_tasks),
    ];
    for (label, value) in tiles {
        let _ = writeln!(out, "  {label:<20} {value:>4}");
    }
    if summary.overdue_assignments > 0 {
        let _ = writeln!(
            out,
            "  {} {} overdue assignment(s)",
            marker(Tone::Critical),
            summary.overdue_assignments
        );
    }

    let _ = writeln!(out, "\nCourse Progress");
    for row in progress {
        let _ = writeln!(
            out,
            "  {:<22} {} {:>3}%",
            row.subject,
            bar(row.percent),
            row.percent
        );
    }
    out
}

pub fn progress(rows: &[SubjectProgress]) -> String {
    let mut out = String::from("Student Progress\n");
    for row in rows {
        let _ = writeln!(
            out,
            "\n  {} {} [{}]",
            marker(row.status.tone()),
            row.subject,
            row.status.label()
        );
        let _ = writeln!(
            out,
            "    {} / {} Topics Completed",
            row.completed, row.total
        );
        let _ = writeln!(out, "    {} {:>3}%", bar(row.percent), row.percent);
    }
    out
}

pub fn analytics(report: &AnalyticsReport) -> String {
    let mut out = String::from("Completed topics by subject\n");
    for TopicShare {
        subject,
        completed_topics,
        share_percent,
    } in &report.topic_share
    {
        let _ = writeln!(
            out,
            "  {subject:<22} {} {share_percent:>3}% ({completed_topics})",
            bar(*share_percent)
        );
    }

    let _ = writeln!(out, "\nAssignments per subject");
    for SubjectCount { subject, count } in &report.assignments_per_subject {
        let _ = writeln!(out, "  {subject:<22} {}", "#".repeat(*count));
    }

    let _ = writeln!(out, "\nAssignment status");
    for status in AssignmentStatus::ALL {
        let _ = writeln!(
            out,
            "  {} {:<10} {}",
            marker(status.tone()),
            status.as_str(),
            report.assignment_counts.of(status)
        );
    }
    out
}

pub fn assignments(items: &[Assignment]) -> String {
    if items.is_empty() {
        return "No assignments found. Great job!\n".to_string();
    }
    let mut out = String::new();
    for item in items {
        let _ = writeln!(
            out,
            "  {} {:<10} {:<10} {:<32} due {}  ({})",
            marker(item.status.tone()),
            item.status.as_str(),
            item.subject.to_uppercase(),
            item.title,
            item.due_date.format("%Y-%m-%d"),
            item.id
        );
    }
    out
}

pub fn tasks(items: &[Task]) -> String {
    if items.is_empty() {
        return "No tasks yet. Add one with `studydash tasks add <text>`.\n".to_string();
    }
    let mut out = String::from("Daily Tasks\n");
    for item in items {
        let check = if item.completed { "[x]" } else { "[ ]" };
        let _ = writeln!(out, "  {check} {}  ({})", item.text, item.id);
    }
    out
}

pub fn syllabus(subjects: &[SubjectSyllabus]) -> String {
    let mut out = String::from("Syllabus Tracker\n");
    for subject in subjects {
        let percent = studydash_core::completion_percent(&subject.topics);
        let _ = writeln!(
            out,
            "\n  {} ({}) {}% Completed",
            subject.subject, subject.id, percent
        );
        for topic in &subject.topics {
            let check = if topic.completed { "[x]" } else { "[ ]" };
            let _ = writeln!(out, "    {check} {}  ({})", topic.name, topic.id);
        }
    }
    out
}

pub fn settings(
    profile: &StudentProfile,
    theme: ThemePreference,
    db_path: &Path,
    persisted_keys: &[String],
) -> String {
    let mut out = String::from("Profile Information\n");
    let _ = writeln!(out, "  Full Name   {}", profile.name);
    let _ = writeln!(out, "  Email       {}", profile.email);
    let _ = writeln!(out, "  Student ID  {}", profile.student_id);

    let _ = writeln!(out, "\nPreferences");
    let _ = writeln!(out, "  Theme       {}", theme.as_str());

    let _ = writeln!(out, "\nData Management");
    let _ = writeln!(out, "  Your data is stored locally at {}", db_path.display());
    let stored = if persisted_keys.is_empty() {
        "nothing yet (showing defaults)".to_string()
    } else {
        persisted_keys.join(", ")
    };
    let _ = writeln!(out, "  Stored      {stored}");
    let _ = writeln!(out, "  Version     {}", core_version());
    out
}

fn marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "+",
        Tone::Accent => "~",
        Tone::Warning => "!",
        Tone::Critical => "x",
    }
}

fn bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
