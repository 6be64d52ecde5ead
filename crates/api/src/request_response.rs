// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use kitchen_domain::{OrderItem, Schedule, ScheduleStatus, Size};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Decoded body of a create or update request.
///
/// Produced by `decode_schedule_order`; never deserialised directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOrderRequest {
    /// The ordered items.
    pub order: Vec<OrderItem>,
}

/// Raw query parameters accepted when listing schedules.
///
/// Values are kept as strings so that `decode_list_query` can report
/// field-level errors. Unrecognised parameters are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSchedulesQuery {
    /// Restrict to (`true`) or exclude (`false`) schedules in progress.
    pub progress: Option<String>,
    /// Maximum number of schedules to return.
    pub limit: Option<String>,
    /// Only schedules created at or after this timestamp.
    pub since: Option<String>,
}

impl ListSchedulesQuery {
    /// Builds the query from raw key/value pairs in request order.
    ///
    /// A repeated parameter keeps its first value.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query: Self = Self::default();
        for (key, value) in pairs {
            let slot: &mut Option<String> = match key.as_ref() {
                "progress" => &mut query.progress,
                "limit" => &mut query.limit,
                "since" => &mut query.since,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// A single order line in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemResponse {
    /// The product name.
    pub product: String,
    /// The size.
    pub size: Size,
    /// The quantity.
    pub quantity: u32,
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        Self {
            product: item.product.clone(),
            size: item.size,
            quantity: item.quantity,
        }
    }
}

/// API representation of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The schedule identifier (hyphenated UUID).
    pub id: String,
    /// Creation time, RFC 3339 in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled: OffsetDateTime,
    /// Current status.
    pub status: ScheduleStatus,
    /// The ordered items.
    pub order: Vec<OrderItemResponse>,
}

impl From<&Schedule> for ScheduleResponse {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id.to_string(),
            scheduled: schedule.scheduled,
            status: schedule.status,
            order: schedule.order.iter().map(OrderItemResponse::from).collect(),
        }
    }
}

/// API response for listing schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSchedulesResponse {
    /// The matching schedules, in insertion order.
    pub schedules: Vec<ScheduleResponse>,
}

/// API response carrying only a schedule's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStatusResponse {
    /// The current status.
    pub status: ScheduleStatus,
}
