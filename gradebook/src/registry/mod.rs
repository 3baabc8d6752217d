/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The gradebook context object.
//!
//! [`Gradebook`] owns the student table and the course table and is the
//! entry point for the outer layers (API handlers, CLI, seed loader).  It is
//! constructed explicitly and passed around; there is no global state.
//!
//! # Grade propagation
//! Records are stored as [`StudentRef`] (`Arc<Student>`) handles and mutated
//! copy-on-write with [`Arc::make_mut`]: a roster that still holds the old
//! handle keeps seeing the old average, so its order stays valid until the
//! caller explicitly applies the update with
//! [`apply_grade_update`](Gradebook::apply_grade_update) or
//! [`propagate_grade_update`](Gradebook::propagate_grade_update).  Grade
//! mutations never re-sort a roster on their own.
//!
//! | Operation | Touches rosters? |
//! |---|---|
//! | `add_grade` / `add_course_grade` / `replace_grades` / `remove_grade` | no |
//! | `apply_grade_update(course, student)` | that one roster |
//! | `propagate_grade_update(student)` | every roster holding the key |
//! | `update_course_grades(course, student, values)` | that one roster (only that course's grades are replaced) |
//! | `delete_student` | withdraws from every roster |

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{EntityKind, GradebookError};
use crate::grade::{Grade, GradeId};
use crate::roster::{Roster, RosterObserver, SortPolicy, StudentRef};
use crate::stats::{CourseStatistics, StudentStatistics};
use crate::student::Student;

/// Students and courses, keyed by their caller-supplied identifiers.
#[derive(Default)]
pub struct Gradebook {
    /// `BTreeMap` so listings iterate in key order.
    students: BTreeMap<String, StudentRef>,
    courses: BTreeMap<String, Roster>,

    /// Attached to every course created after it is set.
    observer: Option<Arc<dyn RosterObserver>>,

    /// Sort policy given to newly created courses.
    default_order: SortPolicy,
}

impl Gradebook {
    /// Creates an empty gradebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the observer handed to courses created from now on.
    pub fn with_observer(mut self, observer: Arc<dyn RosterObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Sets the sort policy handed to courses created from now on.
    pub fn with_default_order(mut self, order: SortPolicy) -> Self {
        self.default_order = order;
        self
    }

    // ── Students ──────────────────────────────────────────────────────────────

    /// Creates a record with no grades.
    ///
    /// # Errors
    /// * [`GradebookError::Validation`] – blank key.
    /// * [`GradebookError::DuplicateKey`] – key already in use.
    pub fn create_student(&mut self, key: &str) -> Result<StudentRef, GradebookError> {
        let student = Student::new(key)?;
        if self.students.contains_key(key) {
            return Err(GradebookError::duplicate(EntityKind::Student, key));
        }
        let handle = Arc::new(student);
        self.students.insert(key.to_string(), handle.clone());
        debug!(student = key, "student created");
        Ok(handle)
    }

    /// Current handle for `key`.
    pub fn student(&self, key: &str) -> Result<&StudentRef, GradebookError> {
        self.students
            .get(key)
            .ok_or_else(|| GradebookError::not_found(EntityKind::Student, key))
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// All records, highest average first; ties in key order.
    pub fn students_by_average(&self) -> Vec<StudentRef> {
        let mut all: Vec<StudentRef> = self.students.values().cloned().collect();
        let order = SortPolicy::AverageDescending;
        all.sort_by(|a, b| order.compare(a, b));
        all
    }

    /// Deletes the record and withdraws it from every roster holding it.
    pub fn delete_student(&mut self, key: &str) -> Result<StudentRef, GradebookError> {
        let removed = self
            .students
            .remove(key)
            .ok_or_else(|| GradebookError::not_found(EntityKind::Student, key))?;

        let withdrawn = self
            .courses
            .values_mut()
            .map(|course| course.withdraw(key))
            .filter(|&withdrawn| withdrawn)
            .count();
        info!(student = key, withdrawn_from = withdrawn, "student deleted");
        Ok(removed)
    }

    /// Copy-on-write access to a stored record.
    fn student_mut(&mut self, key: &str) -> Result<&mut Student, GradebookError> {
        let handle = self
            .students
            .get_mut(key)
            .ok_or_else(|| GradebookError::not_found(EntityKind::Student, key))?;
        Ok(Arc::make_mut(handle))
    }

    /// Validates and appends one grade.  Rosters are not re-sorted.
    pub fn add_grade(&mut self, key: &str, value: f64) -> Result<GradeId, GradebookError> {
        let student = self.student_mut(key)?;
        let id = student.add_grade(value)?;
        debug!(student = key, value, average = student.average(), "grade added");
        Ok(id)
    }

    /// Replaces all grades of `key` (all-or-nothing).  Rosters are not
    /// re-sorted.
    pub fn replace_grades(&mut self, key: &str, values: &[f64]) -> Result<(), GradebookError> {
        let student = self.student_mut(key)?;
        student.replace_all_grades(values)?;
        debug!(
            student = key,
            count = values.len(),
            average = student.average(),
            "grades replaced"
        );
        Ok(())
    }

    /// Validates and appends one grade recorded against `course`.  The course
    /// must exist; enrollment is not required and rosters are not re-sorted.
    pub fn add_course_grade(
        &mut self,
        course: &str,
        student: &str,
        value: f64,
    ) -> Result<GradeId, GradebookError> {
        self.course(course)?;
        let record = self.student_mut(student)?;
        let id = record.add_course_grade(course, value)?;
        debug!(course, student, value, average = record.average(), "course grade added");
        Ok(id)
    }

    /// Grade values of `student` per course, for the courses whose roster
    /// currently holds it.  Courses without grades are left out.
    pub fn grades_by_course(
        &self,
        student: &str,
    ) -> Result<BTreeMap<String, Vec<f64>>, GradebookError> {
        let record = self.student(student)?;
        Ok(self
            .courses_of(student)?
            .into_iter()
            .map(|course| {
                let values: Vec<f64> = record.grades_in(course).map(Grade::value).collect();
                (course.to_string(), values)
            })
            .filter(|(_, values)| !values.is_empty())
            .collect())
    }

    /// Removes one grade by id.  Returns whether it existed.
    pub fn remove_grade(&mut self, key: &str, id: GradeId) -> Result<bool, GradebookError> {
        // Look up first so a missing grade does not trigger a copy.
        let exists = self
            .student(key)?
            .grades()
            .iter()
            .any(|g| g.id() == id);
        if !exists {
            return Ok(false);
        }
        Ok(self.student_mut(key)?.remove_grade(id))
    }

    // ── Courses ───────────────────────────────────────────────────────────────

    /// Creates an empty roster.
    ///
    /// # Errors
    /// * [`GradebookError::Validation`] – blank key.
    /// * [`GradebookError::DuplicateKey`] – key already in use.
    pub fn create_course(
        &mut self,
        key: &str,
        academic_year: &str,
    ) -> Result<&Roster, GradebookError> {
        let mut roster = Roster::new(key, academic_year)?.with_order(self.default_order);
        if self.courses.contains_key(key) {
            return Err(GradebookError::duplicate(EntityKind::Course, key));
        }
        roster.set_observer(self.observer.clone());
        debug!(course = key, academic_year, "course created");
        Ok(self.courses.entry(key.to_string()).or_insert(roster))
    }

    pub fn course(&self, key: &str) -> Result<&Roster, GradebookError> {
        self.courses
            .get(key)
            .ok_or_else(|| GradebookError::not_found(EntityKind::Course, key))
    }

    fn course_mut(&mut self, key: &str) -> Result<&mut Roster, GradebookError> {
        self.courses
            .get_mut(key)
            .ok_or_else(|| GradebookError::not_found(EntityKind::Course, key))
    }

    /// Course keys in sorted order.
    pub fn course_keys(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    pub fn courses(&self) -> impl Iterator<Item = &Roster> {
        self.courses.values()
    }

    /// Deletes a roster.  Records stay in the student table.
    pub fn delete_course(&mut self, key: &str) -> Result<Roster, GradebookError> {
        let roster = self
            .courses
            .remove(key)
            .ok_or_else(|| GradebookError::not_found(EntityKind::Course, key))?;
        info!(course = key, enrolled = roster.count(), "course deleted");
        Ok(roster)
    }

    /// Keys of the courses whose roster holds `student`.
    pub fn courses_of(&self, student: &str) -> Result<Vec<&str>, GradebookError> {
        self.student(student)?;
        Ok(self
            .courses
            .values()
            .filter(|c| c.is_enrolled(student))
            .map(Roster::key)
            .collect())
    }

    // ── Enrollment ────────────────────────────────────────────────────────────

    /// Enrolls `student` in `course`.  `Ok(false)` if already enrolled.
    pub fn enroll(&mut self, course: &str, student: &str) -> Result<bool, GradebookError> {
        let handle = self.student(student)?.clone();
        let roster = self.course_mut(course)?;
        let enrolled = roster.enroll(handle);
        if !enrolled {
            warn!(course, student, "student already enrolled");
        }
        Ok(enrolled)
    }

    /// Withdraws `student` from `course`.  `Ok(false)` if not enrolled.
    ///
    /// The student key itself is not required to exist: a roster may still
    /// be asked to drop a key whose record was deleted elsewhere.
    pub fn withdraw(&mut self, course: &str, student: &str) -> Result<bool, GradebookError> {
        Ok(self.course_mut(course)?.withdraw(student))
    }

    /// Pushes the current handle of `student` into `course` and re-sorts it.
    /// `Ok(false)` if the student is not enrolled there.
    pub fn apply_grade_update(
        &mut self,
        course: &str,
        student: &str,
    ) -> Result<bool, GradebookError> {
        let handle = self.student(student)?.clone();
        Ok(self.course_mut(course)?.apply_grade_update(handle))
    }

    /// Applies the current handle of `student` to every roster holding it.
    /// Returns how many rosters were updated.
    pub fn propagate_grade_update(&mut self, student: &str) -> Result<usize, GradebookError> {
        let handle = self.student(student)?.clone();
        let updated = self
            .courses
            .values_mut()
            .map(|course| course.apply_grade_update(handle.clone()))
            .filter(|&applied| applied)
            .count();
        debug!(student, updated, "grade update propagated");
        Ok(updated)
    }

    /// Replaces the grades `student` has for `course` and applies the change
    /// to that roster.  Grades recorded for other courses are kept.
    ///
    /// Both keys are checked before any grade is touched.  Returns `Ok(false)`
    /// and changes nothing when `student` is not enrolled in `course`.
    pub fn update_course_grades(
        &mut self,
        course: &str,
        student: &str,
        values: &[f64],
    ) -> Result<bool, GradebookError> {
        self.student(student)?;
        if !self.course(course)?.is_enrolled(student) {
            warn!(course, student, "grade update for a student not enrolled");
            return Ok(false);
        }
        let record = self.student_mut(student)?;
        let removed = record.replace_course_grades(course, values)?;
        debug!(
            course,
            student,
            removed,
            added = values.len(),
            average = record.average(),
            "course grades replaced"
        );
        self.apply_grade_update(course, student)
    }

    // ── Statistics ────────────────────────────────────────────────────────────

    pub fn course_statistics(&self, course: &str) -> Result<CourseStatistics, GradebookError> {
        Ok(CourseStatistics::from_roster(self.course(course)?))
    }

    pub fn student_statistics(&self, student: &str) -> Result<StudentStatistics, GradebookError> {
        Ok(StudentStatistics::from_student(self.student(student)?))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
