// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{MAX_QUANTITY, MIN_QUANTITY, OrderItem, Schedule};

/// Validates a single order item.
///
/// # Arguments
///
/// * `index` - Position of the item within its order, used in error reports
/// * `item` - The item to validate
///
/// # Errors
///
/// Returns an error if:
/// - The product name is empty
/// - The quantity is outside `MIN_QUANTITY..=MAX_QUANTITY`
pub fn validate_order_item(index: usize, item: &OrderItem) -> Result<(), DomainError> {
    // Rule: product must not be empty
    if item.product.is_empty() {
        return Err(DomainError::EmptyProduct { index });
    }

    // Rule: quantity is bounded on both sides
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&item.quantity) {
        return Err(DomainError::QuantityOutOfRange {
            index,
            quantity: item.quantity,
        });
    }

    Ok(())
}

/// Validates every item of an order.
///
/// An empty order is accepted.
///
/// # Errors
///
/// Returns the first item error encountered.
pub fn validate_order(order: &[OrderItem]) -> Result<(), DomainError> {
    order
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| validate_order_item(index, item))
}

/// Validates a complete schedule record.
///
/// Size and status are closed enums, so only the remaining
/// constraints are checked here.
///
/// # Errors
///
/// Returns an error if:
/// - The identifier is the nil UUID
/// - The timestamp carries a non-UTC offset
/// - Any order item is invalid
pub fn validate_schedule(schedule: &Schedule) -> Result<(), DomainError> {
    if schedule.id.as_uuid().is_nil() {
        return Err(DomainError::NilScheduleId);
    }

    if !schedule.scheduled.offset().is_utc() {
        return Err(DomainError::NonUtcTimestamp {
            scheduled: schedule.scheduled.to_string(),
        });
    }

    validate_order(&schedule.order)
}
