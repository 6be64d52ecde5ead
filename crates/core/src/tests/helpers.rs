// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ScheduleStore;
use kitchen_domain::{OrderItem, Schedule, ScheduleStatus, Size};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_order() -> Vec<OrderItem> {
    vec![OrderItem::new("latte", Size::Medium, 2)]
}

/// Base timestamp for deterministic fixtures.
pub const fn base_time() -> OffsetDateTime {
    datetime!(2026-05-01 09:00:00 UTC)
}

/// Builds a store with four schedules one hour apart:
/// pending, progress, cancelled, progress.
pub fn create_populated_store() -> (ScheduleStore, Vec<Schedule>) {
    let mut store: ScheduleStore = ScheduleStore::new();
    let statuses: [ScheduleStatus; 4] = [
        ScheduleStatus::Pending,
        ScheduleStatus::Progress,
        ScheduleStatus::Cancelled,
        ScheduleStatus::Progress,
    ];

    let mut created: Vec<Schedule> = Vec::new();
    for (hour, status) in (0_i64..).zip(statuses) {
        let schedule: Schedule = store
            .create_at(create_test_order(), base_time() + time::Duration::hours(hour))
            .unwrap();
        let schedule: Schedule = store.set_status(schedule.id, status).unwrap();
        created.push(schedule);
    }

    (store, created)
}
