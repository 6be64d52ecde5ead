// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use kitchen::ScheduleStore;
use serde_json::{Value, json};

use crate::{ListSchedulesQuery, ScheduleResponse, create_schedule};

pub fn latte_order_body() -> Value {
    json!({
        "order": [
            {"product": "latte", "size": "medium", "quantity": 2}
        ]
    })
}

pub fn create_test_schedule(store: &mut ScheduleStore) -> ScheduleResponse {
    create_schedule(store, &latte_order_body()).expect("Valid test order")
}

pub fn query(
    progress: Option<&str>,
    limit: Option<&str>,
    since: Option<&str>,
) -> ListSchedulesQuery {
    ListSchedulesQuery {
        progress: progress.map(String::from),
        limit: limit.map(String::from),
        since: since.map(String::from),
    }
}
