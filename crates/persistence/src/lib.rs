// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite persistence for the Rota on-call scheduler.
//!
//! This crate provides a durable [`ScheduleStore`] backed by Diesel and
//! SQLite. The schema mirrors the domain model directly: one table each
//! for users, schedule entries, monthly settings, and trade history.
//!
//! The schema also carries a defense the engine already enforces in
//! logic: a unique index on (user, year, month, day) rejects duplicate
//! same-day rows at the storage layer no matter how they arrive.
//!
//! In-memory databases (used by tests and available to the server when
//! no file path is configured) are named through an atomic counter so
//! each store instance gets an isolated database.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use rota_audit::TradeRecord;
use rota_core::{ScheduleStore, StoreError};
use rota_domain::{MonthlySettings, Schedule, ScheduleId, User, UserId};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Durable [`ScheduleStore`] backed by a SQLite database.
pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// Creates a store with an in-memory SQLite database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based
    /// collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_rota_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a store with a file-based SQLite database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the SQLite database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }
}

impl ScheduleStore for SqliteStore {
    fn get_user(&mut self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(queries::get_user(&mut self.conn, id)?)
    }

    fn get_user_by_name(&mut self, name: &str) -> Result<Option<User>, StoreError> {
        Ok(queries::get_user_by_name(&mut self.conn, name)?)
    }

    fn all_users(&mut self) -> Result<Vec<User>, StoreError> {
        Ok(queries::all_users(&mut self.conn)?)
    }

    fn insert_user(&mut self, user: &User) -> Result<(), StoreError> {
        Ok(mutations::insert_user(&mut self.conn, user)?)
    }

    fn update_user(&mut self, user: &User) -> Result<(), StoreError> {
        Ok(mutations::update_user(&mut self.conn, user)?)
    }

    fn delete_user(&mut self, id: UserId) -> Result<bool, StoreError> {
        Ok(mutations::delete_user(&mut self.conn, id)?)
    }

    fn schedules_for_user(&mut self, user_id: UserId) -> Result<Vec<Schedule>, StoreError> {
        Ok(queries::schedules_for_user(&mut self.conn, user_id)?)
    }

    fn get_schedule(&mut self, id: ScheduleId) -> Result<Option<Schedule>, StoreError> {
        Ok(queries::get_schedule(&mut self.conn, id)?)
    }

    fn schedules_for_month(&mut self, month: u8, year: u16) -> Result<Vec<Schedule>, StoreError> {
        Ok(queries::schedules_for_month(&mut self.conn, month, year)?)
    }

    fn schedules_for_day(
        &mut self,
        month: u8,
        year: u16,
        day: u8,
        exclude: &[ScheduleId],
    ) -> Result<Vec<Schedule>, StoreError> {
        Ok(queries::schedules_for_day(
            &mut self.conn,
            month,
            year,
            day,
            exclude,
        )?)
    }

    fn schedules_for_user_day(
        &mut self,
        user_id: UserId,
        month: u8,
        year: u16,
        day: u8,
        exclude: &[ScheduleId],
    ) -> Result<Vec<Schedule>, StoreError> {
        Ok(queries::schedules_for_user_day(
            &mut self.conn,
            user_id,
            month,
            year,
            day,
            exclude,
        )?)
    }

    fn monthly_count(
        &mut self,
        user_id: UserId,
        month: u8,
        year: u16,
        exclude: &[ScheduleId],
    ) -> Result<usize, StoreError> {
        Ok(queries::monthly_count(
            &mut self.conn,
            user_id,
            month,
            year,
            exclude,
        )?)
    }

    fn insert_schedule(&mut self, schedule: &Schedule) -> Result<(), StoreError> {
        Ok(mutations::insert_schedule(&mut self.conn, schedule)?)
    }

    fn delete_schedule(&mut self, id: ScheduleId) -> Result<bool, StoreError> {
        Ok(mutations::delete_schedule(&mut self.conn, id)?)
    }

    fn transfer_owners(&mut self, transfers: &[(ScheduleId, UserId)]) -> Result<(), StoreError> {
        Ok(mutations::transfer_owners(&mut self.conn, transfers)?)
    }

    fn get_settings(&mut self, month: u8, year: u16) -> Result<Option<MonthlySettings>, StoreError> {
        Ok(queries::get_settings(&mut self.conn, month, year)?)
    }

    fn upsert_settings(&mut self, settings: &MonthlySettings) -> Result<(), StoreError> {
        Ok(mutations::upsert_settings(&mut self.conn, settings)?)
    }

    fn settings_by_token(&mut self, token: &str) -> Result<Option<MonthlySettings>, StoreError> {
        Ok(queries::settings_by_token(&mut self.conn, token)?)
    }

    fn append_trade(&mut self, record: &TradeRecord) -> Result<(), StoreError> {
        Ok(mutations::append_trade(&mut self.conn, record)?)
    }

    fn trades_for_month(&mut self, month: u8, year: u16) -> Result<Vec<TradeRecord>, StoreError> {
        Ok(queries::trades_for_month(&mut self.conn, month, year)?)
    }
}
