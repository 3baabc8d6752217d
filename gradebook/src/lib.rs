/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Gradebook – course rosters kept in descending order of student average.
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── list/        – singly / doubly linked list primitives
//! ├── grade/       – validated grade values, averaging helpers
//! ├── student      – enrollment record: key, grades, derived average
//! ├── roster/      – ordered course roster, sort policies, observers
//! ├── stats        – course / student roll-ups
//! ├── registry/    – Gradebook context object (student + course tables)
//! ├── config/      – YAML seed file loading
//! └── error        – ValidationReason / GradebookError
//! ```
//!
//! Data flow: a caller mutates a record's grades through the
//! [`Gradebook`](registry::Gradebook) → the record recomputes its average →
//! the caller applies the update to each roster → the roster re-sorts, so
//! [`Roster::enumerate`](roster::Roster::enumerate) always yields the current
//! descending order.

pub mod config;
pub mod error;
pub mod grade;
pub mod list;
pub mod registry;
pub mod roster;
pub mod stats;
pub mod student;

pub use error::{EntityKind, GradebookError, ValidationReason};
pub use registry::Gradebook;
pub use roster::{Roster, SortPolicy, StudentRef};
pub use student::Student;
