// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Role, ScheduleId, UserId};

/// Errors raised by domain validation and the scheduling constraint rules.
///
/// `Display` strings are user-facing: the UI surfaces constraint messages
/// verbatim, so each names the specific rule that was violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier string is not a valid UUID.
    InvalidId(String),
    /// User name is empty or too long.
    InvalidName(String),
    /// Phone number does not match the accepted pattern.
    InvalidPhone(String),
    /// Monthly shift limit is outside 1-31.
    InvalidShiftLimit {
        /// The rejected limit value.
        limit: u32,
    },
    /// Month is outside 1-12.
    InvalidMonth {
        /// The rejected month value.
        month: u32,
    },
    /// Year is outside the supported range.
    InvalidYear {
        /// The rejected year value.
        year: u32,
    },
    /// The (year, month, day) triple does not denote a real calendar date.
    InvalidCalendarDate {
        /// The year component.
        year: u16,
        /// The month component.
        month: u8,
        /// The day component.
        day: u8,
    },
    /// Role string is not one of physician/learner/admin.
    InvalidRole(String),
    /// Status string is not one of scheduled/available/unavailable.
    InvalidStatus(String),
    /// Trade kind string is not one of reassign/swap.
    InvalidTradeKind(String),
    /// No user exists with the given identifier.
    UserNotFound {
        /// The unresolved identifier.
        user_id: UserId,
    },
    /// No schedule entry exists with the given identifier.
    ScheduleNotFound {
        /// The unresolved identifier.
        schedule_id: ScheduleId,
    },
    /// Another user already has this name.
    DuplicateName {
        /// The conflicting name.
        name: String,
    },
    /// The user already holds a schedule entry on this day.
    UserAlreadyScheduled {
        /// The user's display name.
        name: String,
    },
    /// The user is at their monthly shift limit.
    MonthlyLimitExceeded {
        /// The user's display name.
        name: String,
        /// The limit in force at the time of the operation.
        limit: u8,
    },
    /// The day already has an assignee of this role class.
    RoleSlotTaken {
        /// The role class whose slot is occupied.
        role: Role,
    },
    /// Reassignment target already owns the schedule entry.
    ScheduleAlreadyOwned {
        /// The owner's display name.
        name: String,
    },
    /// Both schedule entries in a swap belong to the same user.
    SwapRequiresDistinctOwners,
    /// The target user is inactive and cannot take shifts.
    InactiveUser {
        /// The user's display name.
        name: String,
    },
    /// The user still owns schedule entries and cannot be deleted.
    UserOwnsSchedules {
        /// The user's display name.
        name: String,
        /// How many entries the user owns.
        count: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(s) => write!(f, "Invalid identifier: '{s}' is not a UUID"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone number: {msg}"),
            Self::InvalidShiftLimit { limit } => {
                write!(
                    f,
                    "Invalid monthly shift limit: {limit}. Must be between 1 and 31"
                )
            }
            Self::InvalidMonth { month } => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::InvalidYear { year } => {
                write!(f, "Invalid year: {year}. Must be between 2020 and 2100")
            }
            Self::InvalidCalendarDate { year, month, day } => {
                write!(
                    f,
                    "Invalid date: day {day} does not exist in month {month} of {year}"
                )
            }
            Self::InvalidRole(s) => write!(f, "Invalid role: '{s}'"),
            Self::InvalidStatus(s) => write!(f, "Invalid status: '{s}'"),
            Self::InvalidTradeKind(s) => write!(f, "Invalid trade kind: '{s}'"),
            Self::UserNotFound { user_id } => write!(f, "User {user_id} not found"),
            Self::ScheduleNotFound { schedule_id } => {
                write!(f, "Schedule {schedule_id} not found")
            }
            Self::DuplicateName { name } => {
                write!(f, "A user named '{name}' already exists")
            }
            Self::UserAlreadyScheduled { name } => {
                write!(f, "{name} is already scheduled for this day")
            }
            Self::MonthlyLimitExceeded { name, limit } => {
                write!(f, "{name} has reached their monthly shift limit of {limit}")
            }
            Self::RoleSlotTaken { role } => {
                write!(f, "Only one {role} can be scheduled per day")
            }
            Self::ScheduleAlreadyOwned { name } => {
                write!(f, "This shift is already assigned to {name}")
            }
            Self::SwapRequiresDistinctOwners => {
                write!(f, "Cannot swap two shifts owned by the same user")
            }
            Self::InactiveUser { name } => {
                write!(f, "{name} is inactive and cannot take shifts")
            }
            Self::UserOwnsSchedules { name, count } => {
                write!(
                    f,
                    "Cannot delete {name}: they still own {count} scheduled shift(s). Remove the shifts first"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
