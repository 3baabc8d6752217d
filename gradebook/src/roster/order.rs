/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Sort policies for rosters.
//!
//! The ordering lives here as a comparator value instead of on
//! [`Student`], so a roster can be kept in a different order without
//! touching the entity.
//!
//! Every policy is applied with a stable sort: records that compare equal
//! keep the relative order they already had in the roster, which means a
//! newly enrolled record lands after existing records with the same average.

use std::cmp::Ordering;
use std::fmt;

use crate::student::Student;

/// How a roster orders its records.
#[derive(Clone, Copy, Default)]
pub enum SortPolicy {
    /// Highest average first.  The roster's standing invariant.
    #[default]
    AverageDescending,
    /// Lowest average first.
    AverageAscending,
    /// Alphabetical by student key.
    KeyAscending,
    /// Caller-supplied comparator.
    Custom(fn(&Student, &Student) -> Ordering),
}

impl SortPolicy {
    /// Compares two records under this policy.
    pub fn compare(&self, a: &Student, b: &Student) -> Ordering {
        match self {
            SortPolicy::AverageDescending => by_average(b, a),
            SortPolicy::AverageAscending => by_average(a, b),
            SortPolicy::KeyAscending => a.key().cmp(b.key()),
            SortPolicy::Custom(cmp) => cmp(a, b),
        }
    }

    /// Short, stable name used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            SortPolicy::AverageDescending => "average-desc",
            SortPolicy::AverageAscending => "average-asc",
            SortPolicy::KeyAscending => "key",
            SortPolicy::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Averages are validated finite values, so `partial_cmp` only returns
/// `None` if that guarantee is broken; such pairs are treated as ties.
fn by_average(a: &Student, b: &Student) -> Ordering {
    a.average()
        .partial_cmp(&b.average())
        .unwrap_or(Ordering::Equal)
}
