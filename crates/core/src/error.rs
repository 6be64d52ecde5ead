// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kitchen_domain::{DomainError, ScheduleId};
use thiserror::Error;

/// Errors that can occur while operating on the schedule store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No schedule with the given identifier exists.
    #[error("Resource with ID={id} not found")]
    NotFound {
        /// The identifier that was looked up.
        id: ScheduleId,
    },

    /// The order supplied for a write failed validation.
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] DomainError),
}
