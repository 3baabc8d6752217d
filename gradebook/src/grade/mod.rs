/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Grade values.
//!
//! A [`Grade`] is a validated score in `[0, 100]` plus the instant it was
//! recorded and, optionally, the key of the course it was earned in.  Grades are only ever created through
//! [`Student`](crate::student::Student), which assigns the [`GradeId`] and
//! owns the grade for its whole life.

pub mod aggregate;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::ValidationReason;

/// Lowest accepted grade value.
pub const MIN_GRADE: f64 = 0.0;

/// Highest accepted grade value.
pub const MAX_GRADE: f64 = 100.0;

/// Identity of a grade within its owning record.
///
/// Ids are handed out in increasing order by the record and are never reused,
/// so a stale id cannot accidentally remove a newer grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GradeId(pub(crate) u64);

impl fmt::Display for GradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single recorded grade.
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    id: GradeId,
    value: f64,
    /// Course the grade belongs to; `None` for grades recorded without one.
    course: Option<String>,
    created_at: DateTime<Utc>,
}

impl Grade {
    /// Checks that `value` is a finite number in `[MIN_GRADE, MAX_GRADE]`.
    ///
    /// Returns the accepted value with `-0.0` folded to `0.0`, so equal
    /// averages always compare equal.
    pub fn validate(value: f64) -> Result<f64, ValidationReason> {
        if !value.is_finite() {
            return Err(ValidationReason::GradeNotFinite { value });
        }
        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(ValidationReason::GradeOutOfRange { value });
        }
        Ok(value + 0.0)
    }

    /// Builds a grade from an already validated value.
    pub(crate) fn new(id: GradeId, value: f64, course: Option<String>) -> Self {
        Self {
            id,
            value,
            course,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> GradeId {
        self.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn course(&self) -> Option<&str> {
        self.course.as_deref()
    }

    /// `true` when the grade was recorded for `course`.
    pub fn belongs_to(&self, course: &str) -> bool {
        self.course.as_deref() == Some(course)
    }

    /// When the grade was recorded.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}
