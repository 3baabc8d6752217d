/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! End-to-end roster scenarios driven through the public `Gradebook` API.

use std::sync::{Arc, Mutex};

use gradebook::config::SeedConfig;
use gradebook::roster::{RosterEvent, RosterObserver};
use gradebook::{EntityKind, Gradebook, GradebookError, Roster, ValidationReason};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn order(book: &Gradebook, course: &str) -> Vec<String> {
    book.course(course)
        .unwrap()
        .enumerate()
        .map(|s| s.key().to_string())
        .collect()
}

fn averages(book: &Gradebook, course: &str) -> Vec<f64> {
    book.course(course)
        .unwrap()
        .enumerate()
        .map(|s| s.average())
        .collect()
}

fn assert_descending(book: &Gradebook, course: &str) {
    let avgs = averages(book, course);
    assert!(
        avgs.windows(2).all(|w| w[0] >= w[1]),
        "{course} not descending: {avgs:?}"
    );
}

/// Counts callbacks per course.
#[derive(Default)]
struct Counter {
    calls: Mutex<Vec<String>>,
}

impl RosterObserver for Counter {
    fn on_change(&self, event: RosterEvent<'_>, roster: &Roster) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}: {}", roster.key(), event));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn enroll_then_grade_update_reorders() {
    let mut book = Gradebook::new();
    book.create_student("A").unwrap();
    book.create_student("B").unwrap();
    book.add_grade("A", 70.0).unwrap();
    book.add_grade("B", 90.0).unwrap();
    book.create_course("CS101", "2024-2025").unwrap();
    book.enroll("CS101", "A").unwrap();
    book.enroll("CS101", "B").unwrap();
    assert_eq!(order(&book, "CS101"), ["B", "A"]);

    book.replace_grades("A", &[95.0]).unwrap();
    assert!(book.apply_grade_update("CS101", "A").unwrap());
    assert_eq!(order(&book, "CS101"), ["A", "B"]);
}

#[test]
fn validation_rejects_out_of_range() {
    let mut book = Gradebook::new();
    book.create_student("S001").unwrap();
    book.add_grade("S001", 70.0).unwrap();
    book.add_grade("S001", 90.0).unwrap();

    let err = book.add_grade("S001", 105.0).unwrap_err();
    assert_eq!(
        err,
        GradebookError::Validation(ValidationReason::GradeOutOfRange { value: 105.0 })
    );
    let s = book.student("S001").unwrap();
    assert_eq!(s.average(), 80.0);
    assert_eq!(s.grade_count(), 2);
}

#[test]
fn replace_all_round_trip() {
    let mut book = Gradebook::new();
    book.create_student("S001").unwrap();
    book.replace_grades("S001", &[85.5, 92.0]).unwrap();
    assert_eq!(book.student("S001").unwrap().average(), 88.75);
}

#[test]
fn withdraw_unknown_key_leaves_roster_unchanged() {
    let mut book = Gradebook::new();
    book.create_student("A").unwrap();
    book.create_course("CS101", "2024-2025").unwrap();
    book.enroll("CS101", "A").unwrap();

    assert!(!book.withdraw("CS101", "nonexistent").unwrap());
    assert_eq!(order(&book, "CS101"), ["A"]);
    assert!(matches!(
        book.withdraw("NOPE", "A"),
        Err(GradebookError::NotFound {
            kind: EntityKind::Course,
            ..
        })
    ));
}

#[test]
fn membership_in_one_roster_is_independent_of_another() {
    let mut book = Gradebook::new();
    book.create_student("A").unwrap();
    book.create_course("CS101", "2024-2025").unwrap();
    book.create_course("MA201", "2024-2025").unwrap();
    book.enroll("CS101", "A").unwrap();
    book.enroll("MA201", "A").unwrap();

    assert!(book.withdraw("CS101", "A").unwrap());
    assert!(book.course("MA201").unwrap().is_enrolled("A"));
    assert_eq!(book.courses_of("A").unwrap(), ["MA201"]);
}

#[test]
fn order_holds_after_mixed_mutations() {
    let mut book = Gradebook::new();
    book.create_course("CS101", "2024-2025").unwrap();

    let grades = [55.0, 91.0, 73.5, 91.0, 12.0, 100.0, 73.5, 0.0];
    for (i, g) in grades.iter().enumerate() {
        let key = format!("S{i:03}");
        book.create_student(&key).unwrap();
        book.add_grade(&key, *g).unwrap();
        book.enroll("CS101", &key).unwrap();
        assert_descending(&book, "CS101");
    }

    // ties keep enrollment order: S001 before S003, S002 before S006
    assert_eq!(
        order(&book, "CS101"),
        ["S005", "S001", "S003", "S002", "S006", "S000", "S004", "S007"]
    );

    book.withdraw("CS101", "S001").unwrap();
    assert_descending(&book, "CS101");

    book.add_grade("S007", 100.0).unwrap(); // 0 → 50
    book.propagate_grade_update("S007").unwrap();
    assert_descending(&book, "CS101");
    assert_eq!(
        order(&book, "CS101"),
        ["S005", "S003", "S002", "S006", "S000", "S007", "S004"]
    );
}

#[test]
fn observer_is_attached_to_new_courses() {
    let counter = Arc::new(Counter::default());
    let mut book = Gradebook::new().with_observer(counter.clone());
    book.create_student("A").unwrap();
    book.create_course("CS101", "2024-2025").unwrap();
    book.enroll("CS101", "A").unwrap();
    book.enroll("CS101", "A").unwrap();
    book.withdraw("CS101", "A").unwrap();

    let calls = counter.calls.lock().unwrap();
    assert_eq!(*calls, ["CS101: enrolled 'A'", "CS101: withdrew 'A'"]);
}

#[test]
fn seed_file_round_trip_through_gradebook() {
    let yaml = r#"
students:
  alice: { grades: [88, 92] }
  bob: { grades: [75] }
  carol: { grades: [90] }
courses:
  CS101:
    academic_year: "2024-2025"
    students: [bob, alice, carol]
"#;
    let mut book = Gradebook::new();
    SeedConfig::from_yaml_str(yaml)
        .unwrap()
        .apply(&mut book)
        .unwrap();

    // alice and carol tie at 90: bob was enrolled first, then alice, then carol
    assert_eq!(order(&book, "CS101"), ["alice", "carol", "bob"]);
    let stats = book.course_statistics("CS101").unwrap();
    assert_eq!(stats.highest_average, 90.0);
    assert_eq!(stats.lowest_average, 75.0);
}

#[test]
fn course_grade_updates_stay_within_their_course() {
    let mut book = Gradebook::new();
    book.create_student("A").unwrap();
    book.create_student("B").unwrap();
    book.create_course("CS101", "2024-2025").unwrap();
    book.create_course("MA201", "2024-2025").unwrap();
    for course in ["CS101", "MA201"] {
        book.enroll(course, "A").unwrap();
        book.enroll(course, "B").unwrap();
    }
    book.update_course_grades("CS101", "B", &[72.0]).unwrap();

    book.update_course_grades("CS101", "A", &[80.0]).unwrap();
    book.update_course_grades("MA201", "A", &[60.0]).unwrap();
    book.update_course_grades("CS101", "A", &[90.0]).unwrap();

    let a = book.student("A").unwrap();
    assert_eq!(a.grade_count(), 2);
    assert_eq!(a.average(), 75.0);
    assert_eq!(order(&book, "CS101"), ["A", "B"]);

    // an enrollment-less update is refused before any grade changes
    book.withdraw("MA201", "B").unwrap();
    assert!(!book.update_course_grades("MA201", "B", &[10.0]).unwrap());
    assert_eq!(book.student("B").unwrap().average(), 72.0);
}
