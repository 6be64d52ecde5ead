// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{latte_order_body, query};
use crate::{ApiError, FieldErrors, ScheduleOrderRequest, decode_list_query, decode_schedule_order};
use kitchen::ScheduleFilter;
use kitchen_domain::{OrderItem, Size};
use serde_json::json;
use time::macros::datetime;

fn field_errors(result: Result<ScheduleOrderRequest, ApiError>) -> FieldErrors {
    match result {
        Err(ApiError::ValidationFailed { errors }) => errors,
        other => panic!("expected validation failure, got {other:?}"),
    }
}

fn filter_errors(result: Result<ScheduleFilter, ApiError>) -> FieldErrors {
    match result {
        Err(ApiError::ValidationFailed { errors }) => errors,
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_decode_valid_order() {
    let request: ScheduleOrderRequest = decode_schedule_order(&latte_order_body()).unwrap();
    assert_eq!(
        request.order,
        vec![OrderItem::new("latte", Size::Medium, 2)]
    );
}

#[test]
fn test_decode_accepts_empty_order() {
    let request: ScheduleOrderRequest = decode_schedule_order(&json!({"order": []})).unwrap();
    assert!(request.order.is_empty());
}

#[test]
fn test_decode_ignores_unknown_fields() {
    let body = json!({
        "order": [
            {"product": "mocha", "size": "big", "quantity": 1, "extra": "ignored"}
        ],
        "status": "finished",
        "id": "not-a-uuid"
    });

    let request: ScheduleOrderRequest = decode_schedule_order(&body).unwrap();
    assert_eq!(request.order, vec![OrderItem::new("mocha", Size::Big, 1)]);
}

#[test]
fn test_decode_missing_order() {
    let errors: FieldErrors = field_errors(decode_schedule_order(&json!({})));
    assert_eq!(
        errors.get("order"),
        Some(&[String::from("Missing data for required field.")][..])
    );
}

#[test]
fn test_decode_null_order() {
    let errors: FieldErrors = field_errors(decode_schedule_order(&json!({"order": null})));
    assert_eq!(
        errors.get("order"),
        Some(&[String::from("Field may not be null.")][..])
    );
}

#[test]
fn test_decode_order_not_a_list() {
    let errors: FieldErrors = field_errors(decode_schedule_order(&json!({"order": "latte"})));
    assert_eq!(
        errors.get("order"),
        Some(&[String::from("Not a valid list.")][..])
    );
}

#[test]
fn test_decode_body_not_an_object() {
    let errors: FieldErrors = field_errors(decode_schedule_order(&json!([1, 2, 3])));
    assert_eq!(
        errors.get("_schema"),
        Some(&[String::from("Invalid input type.")][..])
    );
}

#[test]
fn test_decode_item_not_an_object() {
    let errors: FieldErrors = field_errors(decode_schedule_order(&json!({"order": [42]})));
    assert_eq!(
        errors.get("order.0"),
        Some(&[String::from("Invalid input type.")][..])
    );
}

#[test]
fn test_decode_reports_every_invalid_field() {
    let body = json!({
        "order": [
            {"product": "latte", "size": "medium", "quantity": 2},
            {"size": "huge", "quantity": 0},
            {"product": 7, "size": "small", "quantity": "lots"}
        ]
    });

    let errors: FieldErrors = field_errors(decode_schedule_order(&body));
    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(
        fields,
        vec![
            "order.1.product",
            "order.1.quantity",
            "order.1.size",
            "order.2.product",
            "order.2.quantity",
        ]
    );
    assert_eq!(
        errors.get("order.1.size"),
        Some(&[String::from("Must be one of: small, medium, big.")][..])
    );
    assert_eq!(
        errors.get("order.1.quantity"),
        Some(
            &[String::from(
                "Must be greater than or equal to 1 and less than or equal to 1000000."
            )][..]
        )
    );
    assert_eq!(
        errors.get("order.2.product"),
        Some(&[String::from("Not a valid string.")][..])
    );
    assert_eq!(
        errors.get("order.2.quantity"),
        Some(&[String::from("Not a valid integer.")][..])
    );
}

#[test]
fn test_decode_quantity_bounds() {
    let at_max = json!({"order": [{"product": "tea", "size": "small", "quantity": 1_000_000}]});
    assert!(decode_schedule_order(&at_max).is_ok());

    let above_max = json!({"order": [{"product": "tea", "size": "small", "quantity": 1_000_001}]});
    let errors: FieldErrors = field_errors(decode_schedule_order(&above_max));
    assert!(errors.get("order.0.quantity").is_some());

    let negative = json!({"order": [{"product": "tea", "size": "small", "quantity": -3}]});
    let errors: FieldErrors = field_errors(decode_schedule_order(&negative));
    assert!(errors.get("order.0.quantity").is_some());
}

#[test]
fn test_decode_quantity_accepts_integral_float_and_numeric_string() {
    let body = json!({
        "order": [
            {"product": "tea", "size": "small", "quantity": 3.0},
            {"product": "tea", "size": "small", "quantity": "4"}
        ]
    });
    let request: ScheduleOrderRequest = decode_schedule_order(&body).unwrap();
    assert_eq!(request.order[0].quantity, 3);
    assert_eq!(request.order[1].quantity, 4);

    let fractional = json!({"order": [{"product": "tea", "size": "small", "quantity": 2.5}]});
    let errors: FieldErrors = field_errors(decode_schedule_order(&fractional));
    assert_eq!(
        errors.get("order.0.quantity"),
        Some(&[String::from("Not a valid integer.")][..])
    );
}

#[test]
fn test_decode_rejects_empty_product() {
    let body = json!({"order": [{"product": "", "size": "small", "quantity": 1}]});
    let errors: FieldErrors = field_errors(decode_schedule_order(&body));
    assert_eq!(
        errors.get("order.0.product"),
        Some(&[String::from("Shorter than minimum length 1.")][..])
    );
}

#[test]
fn test_decode_size_is_case_sensitive() {
    let body = json!({"order": [{"product": "tea", "size": "Small", "quantity": 1}]});
    let errors: FieldErrors = field_errors(decode_schedule_order(&body));
    assert!(errors.get("order.0.size").is_some());
}

#[test]
fn test_decode_empty_query_is_empty_filter() {
    let filter: ScheduleFilter = decode_list_query(&query(None, None, None)).unwrap();
    assert!(filter.is_empty());
}

#[test]
fn test_decode_progress_values() {
    for truthy in ["true", "True", "1", "yes", "on"] {
        let filter: ScheduleFilter = decode_list_query(&query(Some(truthy), None, None)).unwrap();
        assert_eq!(filter.progress, Some(true), "{truthy}");
    }
    for falsy in ["false", "FALSE", "0", "no", "off"] {
        let filter: ScheduleFilter = decode_list_query(&query(Some(falsy), None, None)).unwrap();
        assert_eq!(filter.progress, Some(false), "{falsy}");
    }

    let errors: FieldErrors = filter_errors(decode_list_query(&query(Some("maybe"), None, None)));
    assert_eq!(
        errors.get("progress"),
        Some(&[String::from("Not a valid boolean.")][..])
    );
}

#[test]
fn test_decode_limit_values() {
    let filter: ScheduleFilter = decode_list_query(&query(None, Some("5"), None)).unwrap();
    assert_eq!(filter.limit, Some(5));

    let filter: ScheduleFilter = decode_list_query(&query(None, Some("0"), None)).unwrap();
    assert_eq!(filter.limit, Some(0));

    let errors: FieldErrors = filter_errors(decode_list_query(&query(None, Some("-1"), None)));
    assert_eq!(
        errors.get("limit"),
        Some(&[String::from("Must be greater than or equal to 0.")][..])
    );

    let errors: FieldErrors = filter_errors(decode_list_query(&query(None, Some("ten"), None)));
    assert_eq!(
        errors.get("limit"),
        Some(&[String::from("Not a valid integer.")][..])
    );
}

#[test]
fn test_decode_since_values() {
    let filter: ScheduleFilter =
        decode_list_query(&query(None, None, Some("2026-05-01T10:00:00Z"))).unwrap();
    assert_eq!(filter.since, Some(datetime!(2026-05-01 10:00:00 UTC)));

    // Naive timestamps are taken as UTC
    let filter: ScheduleFilter =
        decode_list_query(&query(None, None, Some("2026-05-01T10:00:00"))).unwrap();
    assert_eq!(filter.since, Some(datetime!(2026-05-01 10:00:00 UTC)));

    let filter: ScheduleFilter =
        decode_list_query(&query(None, None, Some("2026-05-01T12:00:00+02:00"))).unwrap();
    assert_eq!(filter.since, Some(datetime!(2026-05-01 10:00:00 UTC)));

    let errors: FieldErrors =
        filter_errors(decode_list_query(&query(None, None, Some("yesterday"))));
    assert_eq!(
        errors.get("since"),
        Some(&[String::from("Not a valid datetime.")][..])
    );
}

#[test]
fn test_decode_query_collects_all_errors() {
    let errors: FieldErrors =
        filter_errors(decode_list_query(&query(Some("x"), Some("y"), Some("z"))));
    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(fields, vec!["limit", "progress", "since"]);
}
