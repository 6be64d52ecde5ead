// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use kitchen::CoreError;
use kitchen_domain::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key used for errors that concern the payload as a whole.
pub const SCHEMA_FIELD: &str = "_schema";

/// Validation messages keyed by dotted field path (e.g. `order.0.size`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty error collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records a message against a field path.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns whether no errors have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the messages recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Returns every field path that has errors, in sorted order.
    #[must_use]
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns `value` when no errors were recorded.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ValidationFailed` carrying these errors otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, ApiError> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(ApiError::ValidationFailed { errors: self })
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first: bool = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request payload or query failed schema validation.
    ValidationFailed {
        /// Field-level detail.
        errors: FieldErrors,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// The identifier as supplied by the caller.
        id: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed { errors } => write!(f, "Validation failed: {errors}"),
            Self::ResourceNotFound { id, .. } => write!(f, "Resource with ID={id} not found"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        Self::ValidationFailed { errors }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

/// Translates a store error into an API error.
///
/// Domain rule violations on a write become field-level validation
/// errors under the same paths the payload decoder uses. Writes only
/// check order items, so record-level violations land under `_schema`.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::NotFound { id } => ApiError::ResourceNotFound {
            resource_type: String::from("Schedule"),
            id: id.to_string(),
        },
        CoreError::InvalidOrder(domain_err) => {
            let mut errors: FieldErrors = FieldErrors::new();
            let field: String = match &domain_err {
                DomainError::EmptyProduct { index } => format!("order.{index}.product"),
                DomainError::QuantityOutOfRange { index, .. } => {
                    format!("order.{index}.quantity")
                }
                DomainError::InvalidSize(_)
                | DomainError::NilScheduleId
                | DomainError::NonUtcTimestamp { .. } => String::from(SCHEMA_FIELD),
            };
            errors.add(field, domain_err.to_string());
            ApiError::ValidationFailed { errors }
        }
    }
}
