// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side queries. All functions use Diesel DSL against a SQLite
//! connection and convert rows to domain types on the way out.

use diesel::dsl::not;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use rota_audit::TradeRecord;
use rota_domain::{MonthlySettings, Schedule, ScheduleId, User, UserId};

use crate::data_models::{ScheduleRow, SettingsRow, TradeRow, UserRow};
use crate::diesel_schema::{monthly_settings, schedules, shift_trades, users};
use crate::error::PersistenceError;

fn schedules_into_domain(rows: Vec<ScheduleRow>) -> Result<Vec<Schedule>, PersistenceError> {
    rows.into_iter().map(ScheduleRow::into_domain).collect()
}

fn exclude_strings(exclude: &[ScheduleId]) -> Vec<String> {
    exclude.iter().map(ToString::to_string).collect()
}

/// Looks up a user by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be converted.
pub fn get_user(
    conn: &mut SqliteConnection,
    id: UserId,
) -> Result<Option<User>, PersistenceError> {
    let row: Option<UserRow> = users::table
        .filter(users::id.eq(id.to_string()))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?;
    row.map(UserRow::into_domain).transpose()
}

/// Looks up a user by exact name.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be converted.
pub fn get_user_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<User>, PersistenceError> {
    let row: Option<UserRow> = users::table
        .filter(users::name.eq(name))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?;
    row.map(UserRow::into_domain).transpose()
}

/// Returns all users, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be converted.
pub fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>, PersistenceError> {
    let rows: Vec<UserRow> = users::table
        .order(users::created_at.asc())
        .select(UserRow::as_select())
        .load(conn)?;
    rows.into_iter().map(UserRow::into_domain).collect()
}

/// Looks up a schedule entry by ID.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be converted.
pub fn get_schedule(
    conn: &mut SqliteConnection,
    id: ScheduleId,
) -> Result<Option<Schedule>, PersistenceError> {
    let row: Option<ScheduleRow> = schedules::table
        .filter(schedules::id.eq(id.to_string()))
        .select(ScheduleRow::as_select())
        .first(conn)
        .optional()?;
    row.map(ScheduleRow::into_domain).transpose()
}

/// Returns every schedule entry owned by a user, across all months.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be converted.
pub fn schedules_for_user(
    conn: &mut SqliteConnection,
    user_id: UserId,
) -> Result<Vec<Schedule>, PersistenceError> {
    let rows: Vec<ScheduleRow> = schedules::table
        .filter(schedules::user_id.eq(user_id.to_string()))
        .select(ScheduleRow::as_select())
        .load(conn)?;
    schedules_into_domain(rows)
}

/// Returns all schedule entries for a month, ordered by day.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be converted.
pub fn schedules_for_month(
    conn: &mut SqliteConnection,
    month: u8,
    year: u16,
) -> Result<Vec<Schedule>, PersistenceError> {
    debug!("Loading schedules for {}-{:02}", year, month);

    let rows: Vec<ScheduleRow> = schedules::table
        .filter(schedules::month.eq(i32::from(month)))
        .filter(schedules::year.eq(i32::from(year)))
        .order((schedules::day.asc(), schedules::id.asc()))
        .select(ScheduleRow::as_select())
        .load(conn)?;
    schedules_into_domain(rows)
}

/// Returns all schedule entries for a specific day, skipping `exclude`.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be converted.
pub fn schedules_for_day(
    conn: &mut SqliteConnection,
    month: u8,
    year: u16,
    day: u8,
    exclude: &[ScheduleId],
) -> Result<Vec<Schedule>, PersistenceError> {
    let rows: Vec<ScheduleRow> = schedules::table
        .filter(schedules::month.eq(i32::from(month)))
        .filter(schedules::year.eq(i32::from(year)))
        .filter(schedules::day.eq(i32::from(day)))
        .filter(not(schedules::id.eq_any(exclude_strings(exclude))))
        .select(ScheduleRow::as_select())
        .load(conn)?;
    schedules_into_domain(rows)
}

/// Returns a user's schedule entries on a specific day, skipping `exclude`.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be converted.
pub fn schedules_for_user_day(
    conn: &mut SqliteConnection,
    user_id: UserId,
    month: u8,
    year: u16,
    day: u8,
    exclude: &[ScheduleId],
) -> Result<Vec<Schedule>, PersistenceError> {
    let rows: Vec<ScheduleRow> = schedules::table
        .filter(schedules::user_id.eq(user_id.to_string()))
        .filter(schedules::month.eq(i32::from(month)))
        .filter(schedules::year.eq(i32::from(year)))
        .filter(schedules::day.eq(i32::from(day)))
        .filter(not(schedules::id.eq_any(exclude_strings(exclude))))
        .select(ScheduleRow::as_select())
        .load(conn)?;
    schedules_into_domain(rows)
}

/// Counts a user's schedule entries in a month, skipping `exclude`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn monthly_count(
    conn: &mut SqliteConnection,
    user_id: UserId,
    month: u8,
    year: u16,
    exclude: &[ScheduleId],
) -> Result<usize, PersistenceError> {
    let count: i64 = schedules::table
        .filter(schedules::user_id.eq(user_id.to_string()))
        .filter(schedules::month.eq(i32::from(month)))
        .filter(schedules::year.eq(i32::from(year)))
        .filter(not(schedules::id.eq_any(exclude_strings(exclude))))
        .count()
        .get_result(conn)?;
    usize::try_from(count)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Looks up the settings record for a month, if one exists.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be converted.
pub fn get_settings(
    conn: &mut SqliteConnection,
    month: u8,
    year: u16,
) -> Result<Option<MonthlySettings>, PersistenceError> {
    let row: Option<SettingsRow> = monthly_settings::table
        .filter(monthly_settings::month.eq(i32::from(month)))
        .filter(monthly_settings::year.eq(i32::from(year)))
        .select(SettingsRow::as_select())
        .first(conn)
        .optional()?;
    row.map(SettingsRow::into_domain).transpose()
}

/// Looks up a settings record by share token.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be converted.
pub fn settings_by_token(
    conn: &mut SqliteConnection,
    token: &str,
) -> Result<Option<MonthlySettings>, PersistenceError> {
    let row: Option<SettingsRow> = monthly_settings::table
        .filter(monthly_settings::public_share_token.eq(token))
        .select(SettingsRow::as_select())
        .first(conn)
        .optional()?;
    row.map(SettingsRow::into_domain).transpose()
}

/// Returns trade records for a month, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be converted.
pub fn trades_for_month(
    conn: &mut SqliteConnection,
    month: u8,
    year: u16,
) -> Result<Vec<TradeRecord>, PersistenceError> {
    let rows: Vec<TradeRow> = shift_trades::table
        .filter(shift_trades::month.eq(i32::from(month)))
        .filter(shift_trades::year.eq(i32::from(year)))
        .order(shift_trades::occurred_at.asc())
        .select(TradeRow::as_select())
        .load(conn)?;
    rows.into_iter().map(TradeRow::into_domain).collect()
}
