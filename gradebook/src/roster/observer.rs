/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Post-mutation hook for rosters.
//!
//! A [`Roster`] calls its observer after every successful mutation, once the
//! roster is back in order.  The core never prints on its own; listing the
//! roster is the observer's job.

use std::fmt;

use tracing::info;

use super::Roster;

/// What just happened to a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterEvent<'a> {
    Enrolled { student: &'a str },
    Withdrawn { student: &'a str },
    GradesUpdated { student: &'a str },
}

impl fmt::Display for RosterEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterEvent::Enrolled { student } => write!(f, "enrolled '{}'", student),
            RosterEvent::Withdrawn { student } => write!(f, "withdrew '{}'", student),
            RosterEvent::GradesUpdated { student } => {
                write!(f, "updated grades of '{}'", student)
            }
        }
    }
}

/// Receives a callback after each successful roster mutation.
///
/// Called synchronously from inside the mutating method, with the roster
/// already re-sorted.
pub trait RosterObserver: Send + Sync {
    fn on_change(&self, event: RosterEvent<'_>, roster: &Roster);
}

/// Logs the full roster listing through `tracing` after every change.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RosterObserver for TracingObserver {
    fn on_change(&self, event: RosterEvent<'_>, roster: &Roster) {
        info!(
            course = %roster.key(),
            academic_year = %roster.academic_year(),
            order = %roster.order(),
            "=== Course {} ({}): {} ===",
            roster.key(),
            roster.academic_year(),
            event
        );
        if roster.is_empty() {
            info!("  No students enrolled.");
        }
        for (rank, student) in roster.enumerate().enumerate() {
            info!("  {}. {}", rank + 1, student);
        }
        info!(total = roster.count(), "Total students: {}", roster.count());
    }
}
