//! Seed file loading.
//!
//! A seed file describes an initial gradebook: the students with their
//! grades, and the courses with the students enrolled in them.
//!
//! The expected YAML structure is:
//! ```yaml
//! students:
//!   S001:
//!     grades: [85.5, 92.0]
//!   S002: {}
//! courses:
//!   CS101:
//!     academic_year: "2024-2025"
//!     students: [S001, S002]
//! ```
//!
//! Students are created in key order.  Each course's `students` list is
//! enrolled in the order written, which decides the order of records that
//! tie on average.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::GradebookError;
use crate::registry::Gradebook;

// ── Seed document ─────────────────────────────────────────────────────────────

/// Parsed seed file.
///
/// Both top-level sections are optional so that a file with only students
/// (or only empty courses) is accepted.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    #[serde(default)]
    pub students: BTreeMap<String, StudentSeed>,
    #[serde(default)]
    pub courses: BTreeMap<String, CourseSeed>,
}

/// Per-student fields as they appear in the seed file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentSeed {
    #[serde(default)]
    pub grades: Vec<f64>,
}

/// Per-course fields as they appear in the seed file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseSeed {
    /// Academic-period label, e.g. `"2024-2025"`.  Empty when absent.
    #[serde(default)]
    pub academic_year: String,
    /// Student keys to enroll, in order.
    #[serde(default)]
    pub students: Vec<String>,
}

impl SeedConfig {
    /// Reads and parses `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the YAML is
    /// structurally invalid.  Grade ranges and key references are checked
    /// later, by [`apply`](Self::apply).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading seed file from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open seed file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))
    }

    /// Parses a seed document from a string.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document deserializes as YAML null, not as an empty map.
        if content.trim().is_empty() {
            warn!("Seed document is empty");
            return Ok(Self::default());
        }
        let seed: SeedConfig = serde_yaml::from_str(content)?;
        debug!(
            students = seed.students.len(),
            courses = seed.courses.len(),
            "Seed document parsed"
        );
        Ok(seed)
    }

    /// Creates every student, course and enrollment in `book`.
    ///
    /// Stops at the first failure; whatever was created before it stays in
    /// `book`.
    ///
    /// # Errors
    /// * [`GradebookError::DuplicateKey`] – a key already exists in `book`.
    /// * [`GradebookError::Validation`] – a grade outside `[0, 100]`.
    /// * [`GradebookError::NotFound`] – a course lists an unknown student.
    pub fn apply(&self, book: &mut Gradebook) -> Result<(), GradebookError> {
        for (key, entry) in &self.students {
            book.create_student(key)?;
            if !entry.grades.is_empty() {
                book.replace_grades(key, &entry.grades)?;
            }
            debug!(
                "  Student: {} | Grades: {:?} | Average: {:.2}",
                key,
                entry.grades,
                book.student(key)?.average()
            );
        }

        for (key, entry) in &self.courses {
            book.create_course(key, &entry.academic_year)?;
            for student in &entry.students {
                book.enroll(key, student)?;
            }
            debug!(
                "  Course: {} | Year: {} | Enrolled: {}",
                key,
                entry.academic_year,
                entry.students.len()
            );
        }

        info!(
            "Applied seed: {} student(s), {} course(s)",
            self.students.len(),
            self.courses.len()
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
