// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kitchen_domain::Schedule;
use time::OffsetDateTime;

/// Filters applied when listing schedules.
///
/// All present criteria must hold (logical AND). `limit` is applied last
/// and keeps the first matches in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScheduleFilter {
    /// `Some(true)` keeps only schedules in progress,
    /// `Some(false)` keeps everything else.
    pub progress: Option<bool>,
    /// Inclusive lower bound on the creation timestamp.
    pub since: Option<OffsetDateTime>,
    /// Maximum number of schedules to return.
    pub limit: Option<usize>,
}

impl ScheduleFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            progress: None,
            since: None,
            limit: None,
        }
    }

    /// Returns whether no criteria are set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.progress.is_none() && self.since.is_none() && self.limit.is_none()
    }

    /// Checks the per-record criteria (`progress` and `since`).
    #[must_use]
    pub fn matches(&self, schedule: &Schedule) -> bool {
        if let Some(in_progress) = self.progress
            && schedule.is_in_progress() != in_progress
        {
            return false;
        }

        // OffsetDateTime compares instants, so offsets need no normalising here
        if let Some(since) = self.since
            && schedule.scheduled < since
        {
            return false;
        }

        true
    }

    /// Applies the filter to a collection, preserving its order.
    #[must_use]
    pub fn apply<'a, I>(&self, schedules: I) -> Vec<&'a Schedule>
    where
        I: IntoIterator<Item = &'a Schedule>,
    {
        let matching = schedules.into_iter().filter(|s| self.matches(s));
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}
