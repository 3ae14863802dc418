// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary input validation.
//!
//! Path and body values arrive as strings; these helpers turn them into
//! typed domain values or a `FieldError` naming the offending field. The
//! core never sees an unparsed value.

use rota_domain::{Role, ScheduleId, ShiftStatus, UserId};
use thiserror::Error;

use crate::error::ApiError;

/// A request field that failed to parse or validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// An identifier field does not contain a UUID.
    #[error("'{value}' is not a valid UUID")]
    NotAUuid {
        /// The field name as it appears on the wire.
        field: String,
        /// The rejected value.
        value: String,
    },
    /// An enum-valued field holds an unrecognized value.
    #[error("'{value}' is not a recognized {field}")]
    UnknownVariant {
        /// The field name as it appears on the wire.
        field: String,
        /// The rejected value.
        value: String,
    },
}

impl FieldError {
    fn field(&self) -> &str {
        match self {
            Self::NotAUuid { field, .. } | Self::UnknownVariant { field, .. } => field,
        }
    }
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Parses a user ID from its wire form.
///
/// # Errors
///
/// Returns `FieldError::NotAUuid` naming the given field.
pub fn parse_user_id(field: &str, value: &str) -> Result<UserId, FieldError> {
    UserId::parse(value).map_err(|_| FieldError::NotAUuid {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parses a schedule ID from its wire form.
///
/// # Errors
///
/// Returns `FieldError::NotAUuid` naming the given field.
pub fn parse_schedule_id(field: &str, value: &str) -> Result<ScheduleId, FieldError> {
    ScheduleId::parse(value).map_err(|_| FieldError::NotAUuid {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parses a role from its wire form.
///
/// # Errors
///
/// Returns `FieldError::UnknownVariant` for an unrecognized role string.
pub fn parse_role(value: &str) -> Result<Role, FieldError> {
    value.parse().map_err(|_| FieldError::UnknownVariant {
        field: String::from("role"),
        value: value.to_string(),
    })
}

/// Parses a shift status from its wire form.
///
/// # Errors
///
/// Returns `FieldError::UnknownVariant` for an unrecognized status string.
pub fn parse_status(value: &str) -> Result<ShiftStatus, FieldError> {
    value.parse().map_err(|_| FieldError::UnknownVariant {
        field: String::from("status"),
        value: value.to_string(),
    })
}
