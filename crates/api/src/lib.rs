// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod decode;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use decode::{decode_list_query, decode_schedule_order};
pub use error::{ApiError, FieldErrors, SCHEMA_FIELD, translate_core_error};
pub use handlers::{
    cancel_schedule, create_schedule, delete_schedule, get_schedule, get_schedule_status,
    list_schedules, update_schedule,
};
pub use request_response::{
    ListSchedulesQuery, ListSchedulesResponse, OrderItemResponse, ScheduleOrderRequest,
    ScheduleResponse, ScheduleStatusResponse,
};
