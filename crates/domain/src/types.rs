// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// Smallest quantity an order item may carry.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity an order item may carry.
pub const MAX_QUANTITY: u32 = 1_000_000;

/// Lifecycle marker for a schedule.
///
/// Transitions are driven externally. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    /// Initial state after creation.
    #[default]
    Pending,
    /// The kitchen is working on the order.
    Progress,
    /// The order was cancelled.
    Cancelled,
    /// The order is ready.
    Finished,
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ScheduleStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Progress => "progress",
            Self::Cancelled => "cancelled",
            Self::Finished => "finished",
        }
    }
}

/// Size of a single order item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    /// Single serving.
    Small,
    /// Regular serving.
    Medium,
    /// Large serving.
    Big,
}

impl Size {
    /// All sizes, in the order they are listed in error messages.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Big];

    /// Converts this size to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Big => "big",
        }
    }
}

impl FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| DomainError::InvalidSize(s.to_string()))
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unique identifier of a schedule.
///
/// Generated once at creation and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleId(Uuid);

impl ScheduleId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for ScheduleId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl std::fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// One line of a kitchen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The product being ordered.
    pub product: String,
    /// The requested size.
    pub size: Size,
    /// How many units were ordered.
    pub quantity: u32,
}

impl OrderItem {
    /// Creates a new order item.
    ///
    /// No validation happens here; see `validate_order_item`.
    #[must_use]
    pub fn new(product: impl Into<String>, size: Size, quantity: u32) -> Self {
        Self {
            product: product.into(),
            size,
            quantity,
        }
    }
}

/// A kitchen order together with its fulfilment status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Server-assigned identifier.
    pub id: ScheduleId,
    /// When the schedule was created (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled: OffsetDateTime,
    /// Current lifecycle status.
    pub status: ScheduleStatus,
    /// The ordered items. May be empty.
    pub order: Vec<OrderItem>,
}

impl Schedule {
    /// Creates a new pending schedule.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier to assign
    /// * `order` - The ordered items
    /// * `scheduled` - The creation timestamp, normalised to UTC
    #[must_use]
    pub fn new(id: ScheduleId, order: Vec<OrderItem>, scheduled: OffsetDateTime) -> Self {
        Self {
            id,
            scheduled: scheduled.to_offset(time::UtcOffset::UTC),
            status: ScheduleStatus::Pending,
            order,
        }
    }

    /// Returns whether the kitchen is currently working on this schedule.
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        matches!(self.status, ScheduleStatus::Progress)
    }
}
