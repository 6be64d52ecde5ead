// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Product name is empty.
    EmptyProduct {
        /// Position of the offending item within the order.
        index: usize,
    },
    /// Quantity is outside the accepted range.
    QuantityOutOfRange {
        /// Position of the offending item within the order.
        index: usize,
        /// The rejected quantity.
        quantity: u32,
    },
    /// Size string is not one of the known sizes.
    InvalidSize(String),
    /// Schedule identifier is the nil UUID.
    NilScheduleId,
    /// Schedule timestamp is not expressed in UTC.
    NonUtcTimestamp {
        /// The offending timestamp, formatted for display.
        scheduled: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProduct { index } => {
                write!(f, "Order item {index}: product cannot be empty")
            }
            Self::QuantityOutOfRange { index, quantity } => {
                write!(
                    f,
                    "Order item {index}: quantity {quantity} must be between {} and {}",
                    crate::MIN_QUANTITY,
                    crate::MAX_QUANTITY
                )
            }
            Self::InvalidSize(value) => {
                write!(
                    f,
                    "Invalid size: '{value}'. Must be one of: small, medium, big"
                )
            }
            Self::NilScheduleId => write!(f, "Schedule identifier cannot be the nil UUID"),
            Self::NonUtcTimestamp { scheduled } => {
                write!(f, "Schedule timestamp {scheduled} is not in UTC")
            }
        }
    }
}

impl std::error::Error for DomainError {}
