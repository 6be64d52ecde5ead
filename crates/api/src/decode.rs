// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Structured decoding of request payloads and query parameters.
//!
//! Only the fields listed here are recognised. Anything else in a payload
//! is dropped without complaint. Every problem found is recorded against
//! its dotted field path so callers see all errors at once.

use crate::error::{ApiError, FieldErrors, SCHEMA_FIELD};
use crate::request_response::{ListSchedulesQuery, ScheduleOrderRequest};
use kitchen::ScheduleFilter;
use kitchen_domain::{MAX_QUANTITY, MIN_QUANTITY, OrderItem, Size};
use serde_json::{Map, Value};
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

pub const MISSING_FIELD: &str = "Missing data for required field.";
pub const NULL_FIELD: &str = "Field may not be null.";
pub const INVALID_TYPE: &str = "Invalid input type.";
pub const NOT_A_LIST: &str = "Not a valid list.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const NOT_AN_INTEGER: &str = "Not a valid integer.";
pub const NOT_A_BOOLEAN: &str = "Not a valid boolean.";
pub const NOT_A_DATETIME: &str = "Not a valid datetime.";
pub const EMPTY_STRING: &str = "Shorter than minimum length 1.";
pub const NEGATIVE_LIMIT: &str = "Must be greater than or equal to 0.";

const TRUTHY: [&str; 6] = ["true", "t", "1", "yes", "y", "on"];
const FALSY: [&str; 6] = ["false", "f", "0", "no", "n", "off"];

/// Decodes the body of a create or update request.
///
/// Expects `{"order": [{"product": .., "size": .., "quantity": ..}, ...]}`.
/// An empty `order` list is accepted.
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` listing every invalid field.
pub fn decode_schedule_order(body: &Value) -> Result<ScheduleOrderRequest, ApiError> {
    let mut errors: FieldErrors = FieldErrors::new();

    let Some(fields) = body.as_object() else {
        errors.add(SCHEMA_FIELD, INVALID_TYPE);
        return Err(errors.into());
    };

    let order: Vec<OrderItem> = match fields.get("order") {
        None => {
            errors.add("order", MISSING_FIELD);
            Vec::new()
        }
        Some(Value::Null) => {
            errors.add("order", NULL_FIELD);
            Vec::new()
        }
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| decode_order_item(index, item, &mut errors))
            .collect(),
        Some(_) => {
            errors.add("order", NOT_A_LIST);
            Vec::new()
        }
    };

    errors.into_result(ScheduleOrderRequest { order })
}

fn decode_order_item(index: usize, item: &Value, errors: &mut FieldErrors) -> Option<OrderItem> {
    let Some(fields) = item.as_object() else {
        errors.add(format!("order.{index}"), INVALID_TYPE);
        return None;
    };

    let product: Option<String> = record(errors, index, "product", decode_product(fields));
    let size: Option<Size> = record(errors, index, "size", decode_size(fields));
    let quantity: Option<u32> = record(errors, index, "quantity", decode_quantity(fields));

    Some(OrderItem::new(product?, size?, quantity?))
}

fn record<T>(
    errors: &mut FieldErrors,
    index: usize,
    field: &str,
    result: Result<T, String>,
) -> Option<T> {
    result
        .map_err(|message| errors.add(format!("order.{index}.{field}"), message))
        .ok()
}

fn required<'a>(fields: &'a Map<String, Value>, name: &str) -> Result<&'a Value, String> {
    match fields.get(name) {
        None => Err(String::from(MISSING_FIELD)),
        Some(Value::Null) => Err(String::from(NULL_FIELD)),
        Some(value) => Ok(value),
    }
}

fn decode_product(fields: &Map<String, Value>) -> Result<String, String> {
    match required(fields, "product")? {
        Value::String(product) if product.is_empty() => Err(String::from(EMPTY_STRING)),
        Value::String(product) => Ok(product.clone()),
        _ => Err(String::from(NOT_A_STRING)),
    }
}

fn decode_size(fields: &Map<String, Value>) -> Result<Size, String> {
    let Value::String(size) = required(fields, "size")? else {
        return Err(String::from(NOT_A_STRING));
    };
    Size::from_str(size).map_err(|_| {
        let choices: Vec<&str> = Size::ALL.iter().map(Size::as_str).collect();
        format!("Must be one of: {}.", choices.join(", "))
    })
}

fn decode_quantity(fields: &Map<String, Value>) -> Result<u32, String> {
    let quantity: i64 = match required(fields, "quantity")? {
        Value::Number(number) => integer_from_number(number)?,
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| String::from(NOT_AN_INTEGER))?,
        _ => return Err(String::from(NOT_AN_INTEGER)),
    };

    u32::try_from(quantity)
        .ok()
        .filter(|q| (MIN_QUANTITY..=MAX_QUANTITY).contains(q))
        .ok_or_else(|| {
            format!(
                "Must be greater than or equal to {MIN_QUANTITY} and less than or equal to {MAX_QUANTITY}."
            )
        })
}

/// Accepts JSON integers and floats with no fractional part.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integer_from_number(number: &serde_json::Number) -> Result<i64, String> {
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    if number.is_u64() {
        // Larger than i64::MAX, so certainly out of range
        return Ok(i64::MAX);
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < 9.0e15 => Ok(value as i64),
        _ => Err(String::from(NOT_AN_INTEGER)),
    }
}

/// Decodes list query parameters into a store filter.
///
/// `since` accepts RFC 3339 timestamps; a timestamp without an offset is
/// taken to be UTC. An explicit offset is honoured, so the bound is the
/// instant it names rather than its wall-clock time read as UTC.
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` listing every invalid parameter.
pub fn decode_list_query(query: &ListSchedulesQuery) -> Result<ScheduleFilter, ApiError> {
    let mut errors: FieldErrors = FieldErrors::new();
    let mut filter: ScheduleFilter = ScheduleFilter::new();

    if let Some(progress) = &query.progress {
        match parse_boolean(progress) {
            Some(value) => filter.progress = Some(value),
            None => errors.add("progress", NOT_A_BOOLEAN),
        }
    }

    if let Some(limit) = &query.limit {
        match limit.trim().parse::<i64>() {
            Ok(value) => match usize::try_from(value) {
                Ok(value) => filter.limit = Some(value),
                Err(_) => errors.add("limit", NEGATIVE_LIMIT),
            },
            Err(_) => errors.add("limit", NOT_AN_INTEGER),
        }
    }

    if let Some(since) = &query.since {
        match parse_timestamp(since) {
            Some(value) => filter.since = Some(value),
            None => errors.add("since", NOT_A_DATETIME),
        }
    }

    errors.into_result(filter)
}

fn parse_boolean(value: &str) -> Option<bool> {
    let lowered: String = value.trim().to_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSY.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    let value: &str = value.trim();
    if let Ok(timestamp) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(timestamp);
    }

    let naive = format_description!(
        version = 2,
        "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
    );
    PrimitiveDateTime::parse(value, &naive)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
