// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and their domain conversions.
//!
//! Rows store UUIDs as text, enums as their string form, and timestamps
//! as RFC 3339 text. Conversion back to domain types is fallible; a row
//! that no longer parses surfaces as a `SerializationError` rather than
//! a panic.

use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use rota_audit::{TradeKind, TradeRecord};
use rota_domain::{
    MonthlySettings, Role, Schedule, ScheduleId, ShiftStatus, TradeId, User, UserId,
};

use crate::diesel_schema::{monthly_settings, schedules, shift_trades, users};
use crate::error::PersistenceError;

fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(value.format(&Rfc3339)?)
}

fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    Ok(OffsetDateTime::parse(value, &Rfc3339)?)
}

fn serialization_error(err: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::SerializationError(err.to_string())
}

/// Diesel row for the `users` table.
#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub role: String,
    pub is_active: i32,
    pub monthly_shift_limit: i32,
    pub created_at: String,
}

impl UserRow {
    /// Builds a row from a domain user.
    ///
    /// # Errors
    ///
    /// Returns an error if the creation timestamp cannot be formatted.
    pub fn from_domain(user: &User) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            role: user.role.to_string(),
            is_active: i32::from(user.is_active),
            monthly_shift_limit: i32::from(user.monthly_shift_limit),
            created_at: format_timestamp(user.created_at)?,
        })
    }

    /// Converts this row back into a domain user.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if any column fails to parse.
    pub fn into_domain(self) -> Result<User, PersistenceError> {
        Ok(User {
            id: UserId::parse(&self.id).map_err(serialization_error)?,
            name: self.name,
            phone: self.phone,
            role: self.role.parse::<Role>().map_err(serialization_error)?,
            is_active: self.is_active != 0,
            monthly_shift_limit: u8::try_from(self.monthly_shift_limit)
                .map_err(serialization_error)?,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

/// Diesel row for the `schedules` table.
#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = schedules)]
pub struct ScheduleRow {
    pub id: String,
    pub month: i32,
    pub year: i32,
    pub day: i32,
    pub user_id: String,
    pub status: String,
    pub created_at: String,
}

impl ScheduleRow {
    /// Builds a row from a domain schedule entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the creation timestamp cannot be formatted.
    pub fn from_domain(schedule: &Schedule) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: schedule.id.to_string(),
            month: i32::from(schedule.month),
            year: i32::from(schedule.year),
            day: i32::from(schedule.day),
            user_id: schedule.user_id.to_string(),
            status: schedule.status.to_string(),
            created_at: format_timestamp(schedule.created_at)?,
        })
    }

    /// Converts this row back into a domain schedule entry.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if any column fails to parse.
    pub fn into_domain(self) -> Result<Schedule, PersistenceError> {
        Ok(Schedule {
            id: ScheduleId::parse(&self.id).map_err(serialization_error)?,
            month: u8::try_from(self.month).map_err(serialization_error)?,
            year: u16::try_from(self.year).map_err(serialization_error)?,
            day: u8::try_from(self.day).map_err(serialization_error)?,
            user_id: UserId::parse(&self.user_id).map_err(serialization_error)?,
            status: self
                .status
                .parse::<ShiftStatus>()
                .map_err(serialization_error)?,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

/// Diesel row for the `monthly_settings` table.
///
/// The synthetic `settings_id` exists only to give the table a rowid
/// primary key; domain identity is the unique (month, year) pair.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = monthly_settings)]
pub struct SettingsRow {
    pub settings_id: i64,
    pub month: i32,
    pub year: i32,
    pub is_published: i32,
    pub public_share_token: Option<String>,
    pub created_at: String,
}

impl SettingsRow {
    /// Converts this row back into domain settings.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if any column fails to parse.
    pub fn into_domain(self) -> Result<MonthlySettings, PersistenceError> {
        Ok(MonthlySettings {
            month: u8::try_from(self.month).map_err(serialization_error)?,
            year: u16::try_from(self.year).map_err(serialization_error)?,
            is_published: self.is_published != 0,
            public_share_token: self.public_share_token,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

/// Insertable row for `monthly_settings`, without the synthetic key.
#[derive(Debug, Insertable)]
#[diesel(table_name = monthly_settings)]
pub struct NewSettingsRow {
    pub month: i32,
    pub year: i32,
    pub is_published: i32,
    pub public_share_token: Option<String>,
    pub created_at: String,
}

impl NewSettingsRow {
    /// Builds an insertable row from domain settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the creation timestamp cannot be formatted.
    pub fn from_domain(settings: &MonthlySettings) -> Result<Self, PersistenceError> {
        Ok(Self {
            month: i32::from(settings.month),
            year: i32::from(settings.year),
            is_published: i32::from(settings.is_published),
            public_share_token: settings.public_share_token.clone(),
            created_at: format_timestamp(settings.created_at)?,
        })
    }
}

/// Diesel row for the `shift_trades` table.
///
/// The involved schedule IDs are stored as a JSON array of UUID strings;
/// one element for a reassign, two for a swap.
#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = shift_trades)]
pub struct TradeRow {
    pub id: String,
    pub kind: String,
    pub from_user: String,
    pub to_user: String,
    pub schedule_ids: String,
    pub month: i32,
    pub year: i32,
    pub occurred_at: String,
}

impl TradeRow {
    /// Builds a row from a domain trade record.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted or the
    /// schedule ID list cannot be serialized.
    pub fn from_domain(record: &TradeRecord) -> Result<Self, PersistenceError> {
        let ids: Vec<String> = record
            .schedule_ids
            .iter()
            .map(ToString::to_string)
            .collect();
        Ok(Self {
            id: record.trade_id.to_string(),
            kind: record.kind.to_string(),
            from_user: record.from_user.to_string(),
            to_user: record.to_user.to_string(),
            schedule_ids: serde_json::to_string(&ids)?,
            month: i32::from(record.month),
            year: i32::from(record.year),
            occurred_at: format_timestamp(record.occurred_at)?,
        })
    }

    /// Converts this row back into a domain trade record.
    ///
    /// # Errors
    ///
    /// Returns a `SerializationError` if any column fails to parse.
    pub fn into_domain(self) -> Result<TradeRecord, PersistenceError> {
        let ids: Vec<String> = serde_json::from_str(&self.schedule_ids)?;
        let schedule_ids: Vec<ScheduleId> = ids
            .iter()
            .map(|id| ScheduleId::parse(id).map_err(serialization_error))
            .collect::<Result<_, _>>()?;
        Ok(TradeRecord {
            trade_id: TradeId::parse(&self.id).map_err(serialization_error)?,
            kind: TradeKind::parse(&self.kind).map_err(serialization_error)?,
            from_user: UserId::parse(&self.from_user).map_err(serialization_error)?,
            to_user: UserId::parse(&self.to_user).map_err(serialization_error)?,
            schedule_ids,
            month: u8::try_from(self.month).map_err(serialization_error)?,
            year: u16::try_from(self.year).map_err(serialization_error)?,
            occurred_at: parse_timestamp(&self.occurred_at)?,
        })
    }
}
