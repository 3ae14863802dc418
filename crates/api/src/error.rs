// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use rota_core::CoreError;
use rota_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. The server maps each variant to an HTTP status class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A scheduling rule rejected the request.
    Conflict {
        /// The rule that was violated.
        rule: String,
        /// The validator's reason, surfaced verbatim to callers.
        message: String,
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
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { rule, message } => {
                write!(f, "Conflict ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly. Constraint rejections become `Conflict` with a stable rule
/// slug and the domain message verbatim, so callers can show exactly why
/// an assignment was refused.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidId(_) => ApiError::InvalidInput {
            field: String::from("id"),
            message,
        },
        DomainError::InvalidName(_) => ApiError::InvalidInput {
            field: String::from("name"),
            message,
        },
        DomainError::InvalidPhone(_) => ApiError::InvalidInput {
            field: String::from("phone"),
            message,
        },
        DomainError::InvalidShiftLimit { .. } => ApiError::InvalidInput {
            field: String::from("monthlyShiftLimit"),
            message,
        },
        DomainError::InvalidMonth { .. } => ApiError::InvalidInput {
            field: String::from("month"),
            message,
        },
        DomainError::InvalidYear { .. } => ApiError::InvalidInput {
            field: String::from("year"),
            message,
        },
        DomainError::InvalidCalendarDate { .. } => ApiError::InvalidInput {
            field: String::from("day"),
            message,
        },
        DomainError::InvalidRole(_) => ApiError::InvalidInput {
            field: String::from("role"),
            message,
        },
        DomainError::InvalidStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        // Trade kinds are never client input; a bad one means a corrupt
        // stored record.
        DomainError::InvalidTradeKind(_) => ApiError::Internal { message },
        DomainError::UserNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message,
        },
        DomainError::ScheduleNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Schedule"),
            message,
        },
        DomainError::DuplicateName { .. } => ApiError::Conflict {
            rule: String::from("unique_name"),
            message,
        },
        DomainError::UserAlreadyScheduled { .. } => ApiError::Conflict {
            rule: String::from("one_shift_per_day"),
            message,
        },
        DomainError::MonthlyLimitExceeded { .. } => ApiError::Conflict {
            rule: String::from("monthly_shift_limit"),
            message,
        },
        DomainError::RoleSlotTaken { .. } => ApiError::Conflict {
            rule: String::from("role_slot_taken"),
            message,
        },
        DomainError::ScheduleAlreadyOwned { .. } => ApiError::Conflict {
            rule: String::from("already_owner"),
            message,
        },
        DomainError::SwapRequiresDistinctOwners => ApiError::Conflict {
            rule: String::from("distinct_owners"),
            message,
        },
        DomainError::InactiveUser { .. } => ApiError::Conflict {
            rule: String::from("inactive_user"),
            message,
        },
        DomainError::UserOwnsSchedules { .. } => ApiError::Conflict {
            rule: String::from("user_owns_schedules"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// Rule violations carry through to their domain translation; store
/// failures are internal and never expose backend detail beyond the
/// store's own message.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::RuleViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Store(store_err) => ApiError::Internal {
            message: store_err.to_string(),
        },
    }
}
