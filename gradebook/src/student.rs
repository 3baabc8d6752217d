/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Enrollment records.
//!
//! A [`Student`] is identified by an immutable key and owns its grades in
//! insertion order.  The average is derived state: it is recomputed from the
//! grade list after every grade mutation and cannot be set directly.
//!
//! # Ownership model
//! Records are shared with rosters as `Arc<Student>` handles
//! ([`StudentRef`](crate::roster::StudentRef)).  A record does not know which
//! rosters hold it; after mutating grades the caller pushes the new handle to
//! each roster with [`Roster::apply_grade_update`].
//!
//! [`Roster::apply_grade_update`]: crate::roster::Roster::apply_grade_update

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{validate_key, EntityKind, ValidationReason};
use crate::grade::aggregate::average_of;
use crate::grade::{Grade, GradeId};
use crate::list::SinglyLinkedList;

/// Per-student record holding grades and their derived average.
#[derive(Debug, Clone)]
pub struct Student {
    key: String,
    grades: SinglyLinkedList<Grade>,
    average: f64,
    next_grade_id: u64,
}

impl Student {
    /// Creates a record with no grades (average `0.0`).
    ///
    /// # Errors
    /// [`ValidationReason::BlankKey`] when `key` is empty or whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationReason> {
        let key = key.into();
        validate_key(EntityKind::Student, &key)?;
        Ok(Self {
            key,
            grades: SinglyLinkedList::new(),
            average: 0.0,
            next_grade_id: 1,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Mean of all grade values, `0.0` when there are none.
    pub fn average(&self) -> f64 {
        self.average
    }

    /// Grades in the order they were recorded.
    pub fn grades(&self) -> &SinglyLinkedList<Grade> {
        &self.grades
    }

    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Validates `value`, appends it, and recomputes the average.
    ///
    /// On error the record is untouched.
    pub fn add_grade(&mut self, value: f64) -> Result<GradeId, ValidationReason> {
        self.push_grade(value, None)
    }

    /// Like [`add_grade`](Self::add_grade), recording the grade against
    /// `course`.
    pub fn add_course_grade(
        &mut self,
        course: &str,
        value: f64,
    ) -> Result<GradeId, ValidationReason> {
        self.push_grade(value, Some(course))
    }

    /// Replaces every grade with `values`, in the given order.
    ///
    /// All values are validated before anything is cleared: either the whole
    /// batch is committed or the record is left as it was.  The average is
    /// recomputed once.
    pub fn replace_all_grades(&mut self, values: &[f64]) -> Result<(), ValidationReason> {
        let validated = validate_all(values)?;
        self.grades.clear();
        self.append_validated(validated, None);
        Ok(())
    }

    /// Replaces the grades recorded for `course` with `values`, leaving
    /// grades of other courses in place.  New grades go after the kept ones.
    ///
    /// Validated as a whole before anything is removed, like
    /// [`replace_all_grades`](Self::replace_all_grades).  Returns how many
    /// grades were removed.
    pub fn replace_course_grades(
        &mut self,
        course: &str,
        values: &[f64],
    ) -> Result<usize, ValidationReason> {
        let validated = validate_all(values)?;
        let removed = self.grades.retain(|g| !g.belongs_to(course));
        self.append_validated(validated, Some(course));
        Ok(removed)
    }

    /// Grades recorded for `course`, in insertion order.
    pub fn grades_in<'a>(&'a self, course: &'a str) -> impl Iterator<Item = &'a Grade> + 'a {
        self.grades.iter().filter(move |g| g.belongs_to(course))
    }

    /// Removes the grade with `id`.  Returns `false` (and changes nothing)
    /// when no such grade exists.
    pub fn remove_grade(&mut self, id: GradeId) -> bool {
        match self.grades.remove_where(|g| g.id() == id) {
            Some(_) => {
                self.recompute_average();
                true
            }
            None => false,
        }
    }

    fn push_grade(
        &mut self,
        value: f64,
        course: Option<&str>,
    ) -> Result<GradeId, ValidationReason> {
        let value = Grade::validate(value)?;
        let id = self.allocate_id();
        self.grades.push_back(Grade::new(id, value, course.map(str::to_string)));
        self.recompute_average();
        Ok(id)
    }

    /// Appends already validated values in one walk and recomputes once.
    fn append_validated(&mut self, values: Vec<f64>, course: Option<&str>) {
        let grades: Vec<Grade> = values
            .into_iter()
            .map(|v| Grade::new(self.allocate_id(), v, course.map(str::to_string)))
            .collect();
        self.grades.extend(grades);
        self.recompute_average();
    }

    fn allocate_id(&mut self) -> GradeId {
        let id = GradeId(self.next_grade_id);
        self.next_grade_id += 1;
        id
    }

    fn recompute_average(&mut self) {
        self.average = average_of(&self.grades);
    }
}

fn validate_all(values: &[f64]) -> Result<Vec<f64>, ValidationReason> {
    values.iter().map(|&v| Grade::validate(v)).collect()
}

// Identity is the key alone; grades and average are mutable state.
impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student{{id='{}', averageGrade={:.2}, gradeCount={}}}",
            self.key,
            self.average,
            self.grades.len()
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
