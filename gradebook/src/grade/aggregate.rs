/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Pure aggregation helpers over grade values.
//!
//! Free functions rather than methods so records, rosters and statistics can
//! share one definition of "average".  An empty input averages to `0.0`: that
//! is the gradebook's convention for "no data yet", not an error.

use super::Grade;

/// Arithmetic mean of `values`, or `0.0` when there are none.  O(n).
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    Summary::from_values(values).mean()
}

/// Mean of the grade values in `grades`.
pub fn average_of<'a, I>(grades: I) -> f64
where
    I: IntoIterator<Item = &'a Grade>,
{
    mean(grades.into_iter().map(Grade::value))
}

/// Single-pass count / sum / min / max over a sequence of values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    count: usize,
    sum: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl Summary {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(Self::default(), |mut acc, v| {
            acc.count += 1;
            acc.sum += v;
            acc.min = Some(acc.min.map_or(v, |m| m.min(v)));
            acc.max = Some(acc.max.map_or(v, |m| m.max(v)));
            acc
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Largest value, `0.0` when empty.
    pub fn highest(&self) -> f64 {
        self.max.unwrap_or(0.0)
    }

    /// Smallest value, `0.0` when empty.
    pub fn lowest(&self) -> f64 {
        self.min.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_nothing_is_zero() {
        assert_eq!(mean(std::iter::empty()), 0.0);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean([85.5, 92.0]), 88.75);
        assert_eq!(mean([70.0, 90.0]), 80.0);
        assert_eq!(mean([100.0]), 100.0);
    }

    #[test]
    fn summary_tracks_extremes() {
        let s = Summary::from_values([70.0, 95.0, 82.0]);
        assert_eq!(s.count(), 3);
        assert_eq!(s.sum(), 247.0);
        assert_eq!(s.highest(), 95.0);
        assert_eq!(s.lowest(), 70.0);
    }

    #[test]
    fn empty_summary_reports_zeros() {
        let s = Summary::default();
        assert_eq!(s.count(), 0);
        assert_eq!(s.mean(), 0.0);
        assert_eq!(s.highest(), 0.0);
        assert_eq!(s.lowest(), 0.0);
    }
}
