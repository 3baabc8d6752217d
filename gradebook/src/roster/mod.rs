/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Ordered course rosters.
//!
//! A [`Roster`] holds shared handles to [`Student`] records in a
//! [`DoublyLinkedList`] and keeps that list sorted by its [`SortPolicy`]
//! (highest average first by default) after every mutation.
//!
//! # Invariant
//! After `enroll`, `withdraw` and `apply_grade_update` return, every adjacent
//! pair `(a, b)` in [`enumerate`](Roster::enumerate) satisfies
//! `policy.compare(a, b) != Greater`.  Under the default policy that is
//! `a.average() >= b.average()`.  Ties keep the order they had before the
//! sort, so the first record to reach an average stays ahead of later ones.
//!
//! # Ownership
//! The roster never owns a record.  It stores [`StudentRef`] handles whose
//! lifetime is managed by the caller (normally the
//! [`Gradebook`](crate::registry::Gradebook)); withdrawing from one roster
//! does not affect any other roster holding the same record.
//!
//! # Concurrency
//! No internal locking: each method performs check, mutation and re-sort as
//! one unit on `&mut self`.  Embedders that share a roster between threads
//! wrap it in its own mutex.

pub mod observer;
pub mod order;

pub use observer::{RosterEvent, RosterObserver, TracingObserver};
pub use order::SortPolicy;

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{validate_key, EntityKind, ValidationReason};
use crate::list::{doubly, DoublyLinkedList};
use crate::student::Student;

/// Shared, non-owning handle to an enrollment record.
pub type StudentRef = Arc<Student>;

/// One course offering and its ordered list of enrolled records.
pub struct Roster {
    key: String,
    academic_year: String,
    students: DoublyLinkedList<StudentRef>,
    order: SortPolicy,
    observer: Option<Arc<dyn RosterObserver>>,
}

impl Roster {
    /// Creates an empty roster ordered by [`SortPolicy::AverageDescending`].
    ///
    /// # Errors
    /// [`ValidationReason::BlankKey`] when `key` is empty or whitespace.
    pub fn new(
        key: impl Into<String>,
        academic_year: impl Into<String>,
    ) -> Result<Self, ValidationReason> {
        let key = key.into();
        validate_key(EntityKind::Course, &key)?;
        Ok(Self {
            key,
            academic_year: academic_year.into(),
            students: DoublyLinkedList::new(),
            order: SortPolicy::default(),
            observer: None,
        })
    }

    /// Builder-style variant of [`set_order`](Self::set_order).
    pub fn with_order(mut self, order: SortPolicy) -> Self {
        self.set_order(order);
        self
    }

    /// Switches the sort policy and re-sorts immediately.
    pub fn set_order(&mut self, order: SortPolicy) {
        self.order = order;
        self.resort();
    }

    /// Installs (or removes) the post-mutation observer.
    pub fn set_observer(&mut self, observer: Option<Arc<dyn RosterObserver>>) {
        self.observer = observer;
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn academic_year(&self) -> &str {
        &self.academic_year
    }

    pub fn order(&self) -> SortPolicy {
        self.order
    }

    /// Number of enrolled records.  O(1).
    pub fn count(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────────

    /// Enrolls `student` and re-sorts.
    ///
    /// Returns `false` and changes nothing if a record with the same key is
    /// already enrolled.
    pub fn enroll(&mut self, student: StudentRef) -> bool {
        if self.is_enrolled(student.key()) {
            debug!(course = %self.key, student = %student.key(), "already enrolled");
            return false;
        }
        let key = student.key().to_string();
        self.students.push_back(student);
        self.resort();
        self.notify(RosterEvent::Enrolled { student: &key });
        true
    }

    /// Withdraws the record with `key`.  Returns whether anything was removed.
    ///
    /// Removal keeps the survivors' relative order, so no re-sort is needed.
    pub fn withdraw(&mut self, key: &str) -> bool {
        match self.students.remove_where(|s| s.key() == key) {
            Some(_) => {
                self.notify(RosterEvent::Withdrawn { student: key });
                true
            }
            None => false,
        }
    }

    /// Withdraws `student`, matched by key.
    pub fn withdraw_student(&mut self, student: &Student) -> bool {
        self.withdraw(student.key())
    }

    /// Replaces the stored handle for `student`'s key with `student` (whose
    /// grades have already changed) and re-sorts.
    ///
    /// Returns `false` and changes nothing if the key is not enrolled.
    pub fn apply_grade_update(&mut self, student: StudentRef) -> bool {
        let key = student.key().to_string();
        match self.students.find_mut(|s| s.key() == key) {
            Some(slot) => *slot = student,
            None => return false,
        }
        self.resort();
        self.notify(RosterEvent::GradesUpdated { student: &key });
        true
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// `true` if a record with `key` is enrolled.  O(n).
    pub fn is_enrolled(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// The enrolled handle for `key`, if any.  O(n).
    pub fn find(&self, key: &str) -> Option<&StudentRef> {
        self.students.iter().find(|s| s.key() == key)
    }

    /// Enrolled records in roster order.
    ///
    /// The list is kept sorted eagerly, so this is just a borrowing iterator.
    pub fn enumerate(&self) -> doubly::Iter<'_, StudentRef> {
        self.students.iter()
    }

    /// `true` when the roster satisfies its ordering invariant.
    pub fn is_ordered(&self) -> bool {
        let order = self.order;
        self.students.is_sorted_by(|a, b| order.compare(a, b))
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn resort(&mut self) {
        let order = self.order;
        self.students.sort_by(|a, b| order.compare(a, b));
        debug_assert!(self.is_ordered(), "roster '{}' out of order", self.key);
    }

    fn notify(&self, event: RosterEvent<'_>) {
        if let Some(observer) = &self.observer {
            observer.on_change(event, self);
        }
    }
}

impl fmt::Debug for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Roster")
            .field("key", &self.key)
            .field("academic_year", &self.academic_year)
            .field("order", &self.order)
            .field("students", &self.students)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course{{id='{}', academicYear='{}', studentCount={}}}",
            self.key,
            self.academic_year,
            self.count()
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // ── Test helpers ──────────────────────────────────────────────────────────

    fn student(key: &str, grades: &[f64]) -> StudentRef {
        let mut s = Student::new(key).unwrap();
        s.replace_all_grades(grades).unwrap();
        Arc::new(s)
    }

    fn roster() -> Roster {
        Roster::new("CS101", "2024-2025").unwrap()
    }

    fn keys(r: &Roster) -> Vec<String> {
        r.enumerate().map(|s| s.key().to_string()).collect()
    }

    /// Records every event as a string, plus the roster order at that moment.
    #[derive(Default)]
    struct Recorder {
        log: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl RosterObserver for Recorder {
        fn on_change(&self, event: RosterEvent<'_>, roster: &Roster) {
            assert!(roster.is_ordered(), "observer must see a sorted roster");
            self.log
                .lock()
                .unwrap()
                .push((event.to_string(), keys(roster)));
        }
    }

    // ── Construction ──────────────────────────────────────────────────────────

    #[test]
    fn new_roster_is_empty() {
        let r = roster();
        assert_eq!(r.key(), "CS101");
        assert_eq!(r.academic_year(), "2024-2025");
        assert_eq!(r.count(), 0);
        assert!(r.enumerate().next().is_none());
        assert_eq!(
            r.to_string(),
            "Course{id='CS101', academicYear='2024-2025', studentCount=0}"
        );
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(matches!(
            Roster::new("", "2024"),
            Err(ValidationReason::BlankKey {
                kind: EntityKind::Course
            })
        ));
    }

    // ── enroll ────────────────────────────────────────────────────────────────

    #[test]
    fn enroll_keeps_descending_order() {
        let mut r = roster();
        assert!(r.enroll(student("A", &[70.0])));
        assert!(r.enroll(student("B", &[90.0])));
        assert!(r.enroll(student("C", &[80.0])));
        assert_eq!(keys(&r), ["B", "C", "A"]);
        assert!(r.is_ordered());
    }

    #[test]
    fn enroll_duplicate_key_is_ignored() {
        let mut r = roster();
        r.enroll(student("A", &[70.0]));
        assert!(!r.enroll(student("A", &[99.0])));
        assert_eq!(r.count(), 1);
        assert_eq!(r.find("A").unwrap().average(), 70.0);
    }

    #[test]
    fn ties_keep_enrollment_order() {
        let mut r = roster();
        r.enroll(student("first", &[80.0]));
        r.enroll(student("top", &[95.0]));
        r.enroll(student("second", &[80.0]));
        r.enroll(student("third", &[80.0]));
        assert_eq!(keys(&r), ["top", "first", "second", "third"]);
    }

    #[test]
    fn records_without_grades_sort_last() {
        let mut r = roster();
        r.enroll(student("new", &[]));
        r.enroll(student("graded", &[1.0]));
        assert_eq!(keys(&r), ["graded", "new"]);
    }

    // ── withdraw ──────────────────────────────────────────────────────────────

    #[test]
    fn withdraw_twice_returns_true_then_false() {
        let mut r = roster();
        r.enroll(student("A", &[70.0]));
        r.enroll(student("B", &[90.0]));
        assert!(r.withdraw("A"));
        assert!(!r.withdraw("A"));
        assert_eq!(keys(&r), ["B"]);
    }

    #[test]
    fn withdraw_unknown_key_changes_nothing() {
        let mut r = roster();
        r.enroll(student("A", &[70.0]));
        assert!(!r.withdraw("nonexistent"));
        assert_eq!(keys(&r), ["A"]);
    }

    #[test]
    fn withdraw_student_matches_by_key() {
        let mut r = roster();
        r.enroll(student("A", &[70.0]));
        let other_copy = Student::new("A").unwrap();
        assert!(r.withdraw_student(&other_copy));
        assert!(r.is_empty());
    }

    #[test]
    fn withdraw_keeps_survivor_order() {
        let mut r = roster();
        for (k, g) in [("A", 50.0), ("B", 60.0), ("C", 70.0), ("D", 80.0)] {
            r.enroll(student(k, &[g]));
        }
        r.withdraw("C");
        assert_eq!(keys(&r), ["D", "B", "A"]);
        assert!(r.is_ordered());
    }

    // ── apply_grade_update ────────────────────────────────────────────────────

    #[test]
    fn grade_update_reorders() {
        let mut r = roster();
        let a = student("A", &[70.0]);
        r.enroll(a.clone());
        r.enroll(student("B", &[90.0]));
        assert_eq!(keys(&r), ["B", "A"]);

        let mut updated = (*a).clone();
        updated.replace_all_grades(&[95.0]).unwrap();
        assert!(r.apply_grade_update(Arc::new(updated)));

        assert_eq!(keys(&r), ["A", "B"]);
        assert_eq!(r.find("A").unwrap().average(), 95.0);
    }

    #[test]
    fn grade_update_for_unenrolled_key_is_noop() {
        let mut r = roster();
        r.enroll(student("A", &[70.0]));
        assert!(!r.apply_grade_update(student("Z", &[100.0])));
        assert_eq!(keys(&r), ["A"]);
    }

    #[test]
    fn grade_update_into_tie_keeps_prior_position() {
        let mut r = roster();
        r.enroll(student("A", &[90.0]));
        r.enroll(student("B", &[80.0]));
        // B climbs to tie with A; A was ahead and stays ahead
        r.apply_grade_update(student("B", &[90.0]));
        assert_eq!(keys(&r), ["A", "B"]);
    }

    // ── Sort policies ─────────────────────────────────────────────────────────

    #[test]
    fn alternate_policies_reorder_in_place() {
        let mut r = roster();
        r.enroll(student("b", &[90.0]));
        r.enroll(student("a", &[70.0]));
        r.enroll(student("c", &[80.0]));

        r.set_order(SortPolicy::KeyAscending);
        assert_eq!(keys(&r), ["a", "b", "c"]);

        r.set_order(SortPolicy::AverageAscending);
        assert_eq!(keys(&r), ["a", "c", "b"]);
        assert!(r.is_ordered());

        let r = roster().with_order(SortPolicy::KeyAscending);
        assert!(matches!(r.order(), SortPolicy::KeyAscending));
    }

    // ── Observer ──────────────────────────────────────────────────────────────

    #[test]
    fn observer_sees_every_successful_mutation() {
        let recorder = Arc::new(Recorder::default());
        let mut r = roster();
        r.set_observer(Some(recorder.clone()));

        r.enroll(student("A", &[70.0]));
        r.enroll(student("B", &[90.0]));
        r.enroll(student("A", &[70.0])); // duplicate: no event
        r.apply_grade_update(student("A", &[100.0]));
        r.withdraw("B");
        r.withdraw("B"); // nothing removed: no event

        let log = recorder.log.lock().unwrap();
        let events: Vec<&str> = log.iter().map(|(e, _)| e.as_str()).collect();
        assert_eq!(
            events,
            [
                "enrolled 'A'",
                "enrolled 'B'",
                "updated grades of 'A'",
                "withdrew 'B'"
            ]
        );
        assert_eq!(log[1].1, ["B", "A"]);
        assert_eq!(log[2].1, ["A", "B"]);
        assert_eq!(log[3].1, ["A"]);
    }

    #[test]
    fn tracing_observer_runs_without_subscriber() {
        let mut r = roster();
        r.set_observer(Some(Arc::new(TracingObserver)));
        r.enroll(student("A", &[70.0]));
        r.withdraw("A");
        assert!(r.is_empty());
    }
}
