//! Completion progress for a project, derived on demand from its entries.

use std::collections::BTreeSet;

use serde::Serialize;

/// How many days of a project have an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: i32,
    pub total: i32,
    pub percent: i32,
}

impl Progress {
    /// Compute progress from the project's duration and the day numbers of
    /// its entries.
    ///
    /// Duplicate days and days outside `1..=duration_days` are ignored.
    /// `percent` is rounded half-up and is 0 for a non-positive duration.
    pub fn compute<I>(duration_days: i32, entry_days: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        if duration_days <= 0 {
            return Self {
                completed: 0,
                total: duration_days.max(0),
                percent: 0,
            };
        }

        let distinct: BTreeSet<i32> = entry_days
            .into_iter()
            .filter(|day| (1..=duration_days).contains(day))
            .collect();
        let completed = distinct.len() as i32;

        let total = i64::from(duration_days);
        let percent = (i64::from(completed) * 200 + total) / (2 * total);

        Self {
            completed,
            total: duration_days,
            percent: percent.clamp(0, 100) as i32,
        }
    }
}
