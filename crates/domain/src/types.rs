// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// Default monthly shift limit assigned to newly created users.
pub const DEFAULT_MONTHLY_SHIFT_LIMIT: u8 = 8;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parses an identifier from its string form.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::InvalidId` if the string is not a valid UUID.
            pub fn parse(s: &str) -> Result<Self, DomainError> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|_| DomainError::InvalidId(s.to_string()))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id! {
    /// Opaque unique identifier for a user.
    UserId
}

uuid_id! {
    /// Opaque unique identifier for a schedule entry (a calendar day-slot).
    ScheduleId
}

uuid_id! {
    /// Opaque unique identifier for a trade audit record.
    TradeId
}

/// Role classification for a user.
///
/// Physicians and learners each occupy an exclusive slot per calendar day.
/// Admins are supervisory and exempt from the role-slot rule entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Clinical physician coverage.
    #[default]
    Physician,
    /// Learner (resident/student) coverage.
    Learner,
    /// Administrative user; not counted as clinical coverage.
    Admin,
}

impl Role {
    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Physician => "physician",
            Self::Learner => "learner",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "physician" => Ok(Self::Physician),
            "learner" => Ok(Self::Learner),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a schedule entry.
///
/// Current flows only ever produce `Scheduled`; the other states are kept
/// for wire compatibility with stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    /// The slot is assigned and active.
    #[default]
    Scheduled,
    /// The slot is open.
    Available,
    /// The owner is unavailable for the slot.
    Unavailable,
}

impl ShiftStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }
}

impl FromStr for ShiftStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "available" => Ok(Self::Available),
            "unavailable" => Ok(Self::Unavailable),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A schedulable user.
///
/// Names are unique across all users; uniqueness is enforced by the store
/// at creation and rename, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Canonical identifier.
    pub id: UserId,
    /// Display name (unique, 1-100 characters).
    pub name: String,
    /// Contact phone number; shared with stakeholders via the public view.
    pub phone: String,
    /// Role classification.
    pub role: Role,
    /// Whether this user may receive new shifts.
    pub is_active: bool,
    /// Maximum schedule entries this user may hold in one month (1-31).
    pub monthly_shift_limit: u8,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    /// Creates a new active user with a fresh identifier.
    #[must_use]
    pub fn new(name: String, phone: String, role: Role, monthly_shift_limit: u8) -> Self {
        Self {
            id: UserId::new(),
            name,
            phone,
            role,
            is_active: true,
            monthly_shift_limit,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// A schedule entry: one calendar day-slot owned by one user.
///
/// The entry's identity is the slot, not the pairing; reassign and swap
/// change `user_id` in place while the `ScheduleId` stays stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Canonical identifier, stable across ownership transfers.
    pub id: ScheduleId,
    /// Calendar month (1-12).
    pub month: u8,
    /// Calendar year.
    pub year: u16,
    /// Day of month (1-31, a real day for the month/year).
    pub day: u8,
    /// The owning user.
    pub user_id: UserId,
    /// Entry status.
    pub status: ShiftStatus,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Schedule {
    /// Creates a new schedule entry with a fresh identifier.
    #[must_use]
    pub fn new(month: u8, year: u16, day: u8, user_id: UserId, status: ShiftStatus) -> Self {
        Self {
            id: ScheduleId::new(),
            month,
            year,
            day,
            user_id,
            status,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Per-month publication settings and the public share token.
///
/// At most one record exists per (month, year); records are created lazily
/// on first update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySettings {
    /// Calendar month (1-12).
    pub month: u8,
    /// Calendar year.
    pub year: u16,
    /// Whether the month is visible through the public view.
    pub is_published: bool,
    /// Opaque share token; replaced wholesale on regeneration, which
    /// invalidates the prior token.
    pub public_share_token: Option<String>,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl MonthlySettings {
    /// Creates an unpublished settings record with no token.
    #[must_use]
    pub fn new(month: u8, year: u16) -> Self {
        Self {
            month,
            year,
            is_published: false,
            public_share_token: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
