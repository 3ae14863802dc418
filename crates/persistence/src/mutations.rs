// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-side mutations. All functions use Diesel DSL against a SQLite
//! connection; multi-row updates run inside a transaction.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use rota_audit::TradeRecord;
use rota_domain::{MonthlySettings, Schedule, ScheduleId, User, UserId};

use crate::data_models::{NewSettingsRow, ScheduleRow, TradeRow, UserRow};
use crate::diesel_schema::{monthly_settings, schedules, shift_trades, users};
use crate::error::PersistenceError;

/// Inserts a new user row.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_user(conn: &mut SqliteConnection, user: &User) -> Result<(), PersistenceError> {
    info!(user_id = %user.id, "Inserting user: {}", user.name);

    let row: UserRow = UserRow::from_domain(user)?;
    diesel::insert_into(users::table).values(&row).execute(conn)?;
    Ok(())
}

/// Replaces an existing user row, matched by ID.
///
/// # Errors
///
/// Returns an error if no row matches or the update fails.
pub fn update_user(conn: &mut SqliteConnection, user: &User) -> Result<(), PersistenceError> {
    debug!(user_id = %user.id, "Updating user");

    let row: UserRow = UserRow::from_domain(user)?;
    let updated: usize = diesel::update(users::table)
        .filter(users::id.eq(user.id.to_string()))
        .set(&row)
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("user {}", user.id)));
    }
    Ok(())
}

/// Deletes a user row. Returns whether a row was removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_user(conn: &mut SqliteConnection, id: UserId) -> Result<bool, PersistenceError> {
    info!(user_id = %id, "Deleting user");

    let deleted: usize = diesel::delete(users::table)
        .filter(users::id.eq(id.to_string()))
        .execute(conn)?;
    Ok(deleted > 0)
}

/// Inserts a new schedule row.
///
/// # Errors
///
/// Returns an error if the insert fails, including a unique-constraint
/// violation on (user, year, month, day).
pub fn insert_schedule(
    conn: &mut SqliteConnection,
    schedule: &Schedule,
) -> Result<(), PersistenceError> {
    debug!(
        schedule_id = %schedule.id,
        "Inserting schedule for {}-{:02}-{:02}", schedule.year, schedule.month, schedule.day
    );

    let row: ScheduleRow = ScheduleRow::from_domain(schedule)?;
    diesel::insert_into(schedules::table)
        .values(&row)
        .execute(conn)?;
    Ok(())
}

/// Deletes a schedule row. Returns whether a row was removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_schedule(
    conn: &mut SqliteConnection,
    id: ScheduleId,
) -> Result<bool, PersistenceError> {
    info!(schedule_id = %id, "Deleting schedule");

    let deleted: usize = diesel::delete(schedules::table)
        .filter(schedules::id.eq(id.to_string()))
        .execute(conn)?;
    Ok(deleted > 0)
}

/// Transfers ownership of the named schedule rows inside one transaction.
///
/// Every update must match exactly one row or the whole transaction rolls
/// back, so a swap can never commit half-applied.
///
/// # Errors
///
/// Returns an error if any named row is missing or the transaction fails.
pub fn transfer_owners(
    conn: &mut SqliteConnection,
    transfers: &[(ScheduleId, UserId)],
) -> Result<(), PersistenceError> {
    debug!("Transferring ownership of {} schedule(s)", transfers.len());

    conn.transaction::<_, PersistenceError, _>(|conn| {
        for (schedule_id, new_owner) in transfers {
            let updated: usize = diesel::update(schedules::table)
                .filter(schedules::id.eq(schedule_id.to_string()))
                .set(schedules::user_id.eq(new_owner.to_string()))
                .execute(conn)?;
            if updated != 1 {
                return Err(PersistenceError::NotFound(format!(
                    "schedule {schedule_id}"
                )));
            }
        }
        Ok(())
    })
}

/// Inserts or updates the settings record for its (month, year).
///
/// # Errors
///
/// Returns an error if the upsert fails.
pub fn upsert_settings(
    conn: &mut SqliteConnection,
    settings: &MonthlySettings,
) -> Result<(), PersistenceError> {
    debug!(
        "Upserting settings for {}-{:02}",
        settings.year, settings.month
    );

    let row: NewSettingsRow = NewSettingsRow::from_domain(settings)?;
    diesel::insert_into(monthly_settings::table)
        .values(&row)
        .on_conflict((monthly_settings::month, monthly_settings::year))
        .do_update()
        .set((
            monthly_settings::is_published.eq(i32::from(settings.is_published)),
            monthly_settings::public_share_token.eq(settings.public_share_token.clone()),
        ))
        .execute(conn)?;
    Ok(())
}

/// Appends a trade audit record.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn append_trade(
    conn: &mut SqliteConnection,
    record: &TradeRecord,
) -> Result<(), PersistenceError> {
    info!(trade_id = %record.trade_id, kind = %record.kind, "Recording trade");

    let row: TradeRow = TradeRow::from_domain(record)?;
    diesel::insert_into(shift_trades::table)
        .values(&row)
        .execute(conn)?;
    Ok(())
}
