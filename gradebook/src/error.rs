/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the gradebook.
//!
//! Two layers, mirroring how failures are produced:
//!
//! * [`ValidationReason`] – why a single input value was refused (a grade
//!   outside `[0, 100]`, a non-finite grade, a blank key).  Produced by the
//!   entity types themselves, before any state changes.
//! * [`GradebookError`] – top-level failure returned from
//!   [`Gradebook`](crate::registry::Gradebook) operations: duplicate keys,
//!   unknown keys, or a wrapped validation failure.
//!
//! | Variant | Typical API response |
//! |---|---|
//! | `DuplicateKey` | conflict |
//! | `NotFound` | not found |
//! | `Validation` | bad request |
//!
//! Positional list errors are not part of this hierarchy; see
//! [`ListError`](crate::list::ListError).

use std::fmt;

use thiserror::Error;

// ── Entity kinds ──────────────────────────────────────────────────────────────

/// Which table a key belongs to.  Carried by key-related errors so messages
/// say *what* was missing or duplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Course,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Student => f.write_str("student"),
            EntityKind::Course => f.write_str("course"),
        }
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Detailed reason why an input value was rejected.
///
/// Carries the offending value so the caller can report it without parsing
/// the message.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationReason {
    /// Grade value outside the closed range `[0, 100]`.
    GradeOutOfRange { value: f64 },

    /// Grade value is NaN or infinite.
    GradeNotFinite { value: f64 },

    /// Key is empty or whitespace only.
    BlankKey { kind: EntityKind },
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::GradeOutOfRange { value } => {
                write!(f, "grade {} is outside the range 0-100", value)
            }
            ValidationReason::GradeNotFinite { value } => {
                write!(f, "grade {} is not a finite number", value)
            }
            ValidationReason::BlankKey { kind } => write!(f, "{} key must not be blank", kind),
        }
    }
}

impl std::error::Error for ValidationReason {}

/// Rejects empty or whitespace-only keys.
pub(crate) fn validate_key(kind: EntityKind, key: &str) -> Result<(), ValidationReason> {
    if key.trim().is_empty() {
        return Err(ValidationReason::BlankKey { kind });
    }
    Ok(())
}

// ── Top-level errors ──────────────────────────────────────────────────────────

/// Top-level error returned by [`Gradebook`](crate::registry::Gradebook)
/// operations.
///
/// No variant is ever produced after a partial mutation: every check runs
/// before the first write.
#[derive(Debug, Error, PartialEq)]
pub enum GradebookError {
    /// A record or roster with this key already exists; nothing was created.
    #[error("{kind} '{key}' already exists")]
    DuplicateKey { kind: EntityKind, key: String },

    /// No record or roster with this key.
    #[error("{kind} '{key}' not found")]
    NotFound { kind: EntityKind, key: String },

    /// An input value was rejected before any state changed.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationReason),
}

impl GradebookError {
    pub(crate) fn not_found(kind: EntityKind, key: &str) -> Self {
        GradebookError::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub(crate) fn duplicate(kind: EntityKind, key: &str) -> Self {
        GradebookError::DuplicateKey {
            kind,
            key: key.to_string(),
        }
    }
}
