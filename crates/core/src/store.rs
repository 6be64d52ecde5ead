// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::filter::ScheduleFilter;
use kitchen_domain::{OrderItem, Schedule, ScheduleId, ScheduleStatus, validate_order};
use time::OffsetDateTime;
use tracing::debug;

/// In-memory collection of schedules.
///
/// Schedules are kept in insertion order, which is also the order
/// in which they are listed. The store is not synchronised; callers
/// that share it across tasks wrap it in a mutex.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    /// All schedules, oldest first.
    schedules: Vec<Schedule>,
}

impl ScheduleStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            schedules: Vec::new(),
        }
    }

    /// Returns the number of stored schedules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Returns whether the store holds no schedules.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Lists schedules matching `filter`, in insertion order.
    ///
    /// An empty filter returns the whole collection.
    #[must_use]
    pub fn list(&self, filter: &ScheduleFilter) -> Vec<&Schedule> {
        if filter.is_empty() {
            return self.schedules.iter().collect();
        }
        filter.apply(&self.schedules)
    }

    /// Creates a pending schedule timestamped with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidOrder` if any order item is invalid.
    pub fn create(&mut self, order: Vec<OrderItem>) -> Result<Schedule, CoreError> {
        self.create_at(order, OffsetDateTime::now_utc())
    }

    /// Creates a pending schedule with an explicit creation timestamp.
    ///
    /// # Arguments
    ///
    /// * `order` - The ordered items (may be empty)
    /// * `scheduled` - The creation timestamp; converted to UTC
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidOrder` if any order item is invalid.
    pub fn create_at(
        &mut self,
        order: Vec<OrderItem>,
        scheduled: OffsetDateTime,
    ) -> Result<Schedule, CoreError> {
        validate_order(&order)?;

        let id: ScheduleId = self.fresh_id();
        let schedule: Schedule = Schedule::new(id, order, scheduled);
        self.schedules.push(schedule.clone());

        debug!(schedule_id = %id, total = self.schedules.len(), "Stored new schedule");
        Ok(schedule)
    }

    /// Returns the schedule with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no such schedule exists.
    pub fn get(&self, id: ScheduleId) -> Result<&Schedule, CoreError> {
        self.schedules
            .iter()
            .find(|s| s.id == id)
            .ok_or(CoreError::NotFound { id })
    }

    /// Replaces the order of an existing schedule.
    ///
    /// Identifier, timestamp and status are retained. The merged record
    /// is validated before it replaces the stored one, so a rejected
    /// update leaves the schedule untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No such schedule exists
    /// - Any item of the new order is invalid
    pub fn update(
        &mut self,
        id: ScheduleId,
        order: Vec<OrderItem>,
    ) -> Result<Schedule, CoreError> {
        let index: usize = self.position(id)?;
        validate_order(&order)?;

        let schedule: &mut Schedule = &mut self.schedules[index];
        schedule.order = order;
        Ok(schedule.clone())
    }

    /// Sets the status of a schedule.
    ///
    /// No transition rules apply; any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no such schedule exists.
    pub fn set_status(
        &mut self,
        id: ScheduleId,
        status: ScheduleStatus,
    ) -> Result<Schedule, CoreError> {
        let index: usize = self.position(id)?;
        let schedule: &mut Schedule = &mut self.schedules[index];
        debug!(
            schedule_id = %id,
            from = %schedule.status,
            to = %status,
            "Changing schedule status"
        );
        schedule.status = status;
        Ok(schedule.clone())
    }

    /// Marks a schedule as cancelled, whatever its current status.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no such schedule exists.
    pub fn cancel(&mut self, id: ScheduleId) -> Result<Schedule, CoreError> {
        self.set_status(id, ScheduleStatus::Cancelled)
    }

    /// Removes a schedule.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no such schedule exists.
    pub fn delete(&mut self, id: ScheduleId) -> Result<(), CoreError> {
        let index: usize = self.position(id)?;
        self.schedules.remove(index);
        Ok(())
    }

    /// Returns only the status of a schedule.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no such schedule exists.
    pub fn status(&self, id: ScheduleId) -> Result<ScheduleStatus, CoreError> {
        self.get(id).map(|s| s.status)
    }

    fn position(&self, id: ScheduleId) -> Result<usize, CoreError> {
        self.schedules
            .iter()
            .position(|s| s.id == id)
            .ok_or(CoreError::NotFound { id })
    }

    /// Draws identifiers until one is not already taken.
    fn fresh_id(&self) -> ScheduleId {
        loop {
            let candidate: ScheduleId = ScheduleId::generate();
            if !self.schedules.iter().any(|s| s.id == candidate) {
                return candidate;
            }
        }
    }
}
