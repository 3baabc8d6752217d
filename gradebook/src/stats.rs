/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Read-only statistics derived from rosters and records.
//!
//! Everything here is a pure fold over [`Roster::enumerate`] or a record's
//! grade list; nothing is cached and nothing feeds back into ordering.

use crate::grade::aggregate::Summary;
use crate::grade::Grade;
use crate::roster::Roster;
use crate::student::Student;

/// Roll-up of the averages in one roster.
///
/// All numeric fields are `0.0` for an empty roster.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseStatistics {
    pub course_key: String,
    pub academic_year: String,
    pub student_count: usize,
    /// Mean of the enrolled records' averages.
    pub class_average: f64,
    pub highest_average: f64,
    pub lowest_average: f64,
    /// Sum of the enrolled records' averages.
    pub total_average_sum: f64,
}

impl CourseStatistics {
    pub fn from_roster(roster: &Roster) -> Self {
        let summary = Summary::from_values(roster.enumerate().map(|s| s.average()));
        Self {
            course_key: roster.key().to_string(),
            academic_year: roster.academic_year().to_string(),
            student_count: summary.count(),
            class_average: summary.mean(),
            highest_average: summary.highest(),
            lowest_average: summary.lowest(),
            total_average_sum: summary.sum(),
        }
    }
}

/// Roll-up of one record's grades.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentStatistics {
    pub student_key: String,
    pub grade_count: usize,
    pub average: f64,
    pub highest_grade: f64,
    pub lowest_grade: f64,
}

impl StudentStatistics {
    pub fn from_student(student: &Student) -> Self {
        let summary = Summary::from_values(student.grades().iter().map(Grade::value));
        Self {
            student_key: student.key().to_string(),
            grade_count: summary.count(),
            average: student.average(),
            highest_grade: summary.highest(),
            lowest_grade: summary.lowest(),
        }
    }
}
