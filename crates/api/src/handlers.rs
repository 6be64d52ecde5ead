// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One function per schedule operation.
//!
//! Every schedule handed back to a caller is re-validated first. A stored
//! record that fails validation is reported as `ApiError::Internal`.

use crate::decode::{decode_list_query, decode_schedule_order};
use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    ListSchedulesQuery, ListSchedulesResponse, ScheduleOrderRequest, ScheduleResponse,
    ScheduleStatusResponse,
};
use kitchen::{CoreError, ScheduleFilter, ScheduleStore};
use kitchen_domain::{Schedule, ScheduleId, validate_schedule};
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, error};

/// Lists schedules, optionally filtered.
///
/// # Errors
///
/// Returns an error if:
/// - A query parameter cannot be decoded
/// - A stored schedule fails re-validation
pub fn list_schedules(
    store: &ScheduleStore,
    query: &ListSchedulesQuery,
) -> Result<ListSchedulesResponse, ApiError> {
    let filter: ScheduleFilter = decode_list_query(query)?;
    debug!(?filter, "Decoded list filter");

    let schedules: Vec<ScheduleResponse> = store
        .list(&filter)
        .into_iter()
        .map(render_schedule)
        .collect::<Result<_, _>>()?;

    Ok(ListSchedulesResponse { schedules })
}

/// Creates a pending schedule from a request body.
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` if the body does not decode.
pub fn create_schedule(
    store: &mut ScheduleStore,
    body: &Value,
) -> Result<ScheduleResponse, ApiError> {
    let request: ScheduleOrderRequest = decode_schedule_order(body)?;
    let schedule: Schedule = store.create(request.order)?;
    render_schedule(&schedule)
}

/// Fetches a single schedule.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the schedule does not exist.
pub fn get_schedule(
    store: &ScheduleStore,
    schedule_id: &str,
) -> Result<ScheduleResponse, ApiError> {
    let id: ScheduleId = parse_schedule_id(schedule_id)?;
    let schedule: &Schedule = store
        .get(id)
        .map_err(|err| lookup_error(err, schedule_id))?;
    render_schedule(schedule)
}

/// Replaces the order of an existing schedule.
///
/// The body is decoded before the schedule is looked up, so an invalid
/// body is reported even when the identifier is unknown.
///
/// # Errors
///
/// Returns an error if:
/// - The body does not decode
/// - The schedule does not exist
pub fn update_schedule(
    store: &mut ScheduleStore,
    schedule_id: &str,
    body: &Value,
) -> Result<ScheduleResponse, ApiError> {
    let request: ScheduleOrderRequest = decode_schedule_order(body)?;
    let id: ScheduleId = parse_schedule_id(schedule_id)?;
    let schedule: Schedule = store
        .update(id, request.order)
        .map_err(|err| lookup_error(err, schedule_id))?;
    render_schedule(&schedule)
}

/// Removes a schedule.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the schedule does not exist.
pub fn delete_schedule(store: &mut ScheduleStore, schedule_id: &str) -> Result<(), ApiError> {
    let id: ScheduleId = parse_schedule_id(schedule_id)?;
    store
        .delete(id)
        .map_err(|err| lookup_error(err, schedule_id))?;
    Ok(())
}

/// Cancels a schedule regardless of its current status.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the schedule does not exist.
pub fn cancel_schedule(
    store: &mut ScheduleStore,
    schedule_id: &str,
) -> Result<ScheduleResponse, ApiError> {
    let id: ScheduleId = parse_schedule_id(schedule_id)?;
    let schedule: Schedule = store
        .cancel(id)
        .map_err(|err| lookup_error(err, schedule_id))?;
    render_schedule(&schedule)
}

/// Returns only the status of a schedule.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the schedule does not exist.
pub fn get_schedule_status(
    store: &ScheduleStore,
    schedule_id: &str,
) -> Result<ScheduleStatusResponse, ApiError> {
    let id: ScheduleId = parse_schedule_id(schedule_id)?;
    let schedule: &Schedule = store
        .get(id)
        .map_err(|err| lookup_error(err, schedule_id))?;
    let response: ScheduleResponse = render_schedule(schedule)?;
    Ok(ScheduleStatusResponse {
        status: response.status,
    })
}

/// Parses a path identifier.
///
/// Path identifiers are matched exactly against the stored spelling. Only
/// the lowercase hyphenated form can match; anything else (other UUID
/// spellings included) is reported as not found rather than as bad input.
fn parse_schedule_id(schedule_id: &str) -> Result<ScheduleId, ApiError> {
    ScheduleId::from_str(schedule_id)
        .ok()
        .filter(|id| id.to_string() == schedule_id)
        .ok_or_else(|| not_found(schedule_id))
}

fn not_found(schedule_id: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Schedule"),
        id: schedule_id.to_string(),
    }
}

/// Translates a store error for a lookup, naming the id as the caller sent it.
fn lookup_error(err: CoreError, schedule_id: &str) -> ApiError {
    match err {
        CoreError::NotFound { .. } => not_found(schedule_id),
        other => translate_core_error(other),
    }
}

/// Re-validates a stored schedule and converts it for the wire.
pub(crate) fn render_schedule(schedule: &Schedule) -> Result<ScheduleResponse, ApiError> {
    if let Err(err) = validate_schedule(schedule) {
        error!(schedule_id = %schedule.id, error = %err, "Stored schedule failed validation");
        return Err(ApiError::Internal {
            message: format!("Schedule {} failed consistency check: {err}", schedule.id),
        });
    }
    Ok(ScheduleResponse::from(schedule))
}
