// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota_audit::TradeRecord;
use rota_domain::{MonthlySettings, Schedule, ScheduleId, User, UserId};

/// A backend failure inside a store implementation.
///
/// Rule violations never travel through this type; it covers only the
/// truly exceptional conditions (database unreachable, corrupt row) that
/// surface to callers as server-side failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError(String);

impl StoreError {
    /// Creates a new store error with the given description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Store error: {}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// The contract the scheduling engine requires of an entity store.
///
/// Implementations must make each primitive atomic at the row level;
/// `transfer_owners` must apply all of its updates or none. Callers are
/// expected to serialize conflicting writes externally (the server holds
/// the store behind a mutex), so implementations need not be internally
/// thread-safe.
///
/// Query methods that accept an `exclude` slice disregard the named
/// schedule rows, which lets the validator evaluate "what if this
/// candidate existed" while a row is mid-reassignment or mid-swap.
///
/// Every method takes `&mut self`; database-backed implementations need a
/// mutable connection even for reads.
pub trait ScheduleStore {
    /// Looks up a user by ID.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn get_user(&mut self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Looks up a user by exact name.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn get_user_by_name(&mut self, name: &str) -> Result<Option<User>, StoreError>;

    /// Returns all users.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn all_users(&mut self) -> Result<Vec<User>, StoreError>;

    /// Inserts a new user row.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn insert_user(&mut self, user: &User) -> Result<(), StoreError>;

    /// Replaces an existing user row, matched by ID.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn update_user(&mut self, user: &User) -> Result<(), StoreError>;

    /// Deletes a user row. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn delete_user(&mut self, id: UserId) -> Result<bool, StoreError>;

    /// Returns every schedule entry owned by a user, across all months.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn schedules_for_user(&mut self, user_id: UserId) -> Result<Vec<Schedule>, StoreError>;

    /// Looks up a schedule entry by ID.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn get_schedule(&mut self, id: ScheduleId) -> Result<Option<Schedule>, StoreError>;

    /// Returns all schedule entries for a month.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn schedules_for_month(&mut self, month: u8, year: u16) -> Result<Vec<Schedule>, StoreError>;

    /// Returns all schedule entries for a specific day, skipping `exclude`.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn schedules_for_day(
        &mut self,
        month: u8,
        year: u16,
        day: u8,
        exclude: &[ScheduleId],
    ) -> Result<Vec<Schedule>, StoreError>;

    /// Returns a user's schedule entries on a specific day, skipping `exclude`.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn schedules_for_user_day(
        &mut self,
        user_id: UserId,
        month: u8,
        year: u16,
        day: u8,
        exclude: &[ScheduleId],
    ) -> Result<Vec<Schedule>, StoreError>;

    /// Counts a user's schedule entries in a month, skipping `exclude`.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn monthly_count(
        &mut self,
        user_id: UserId,
        month: u8,
        year: u16,
        exclude: &[ScheduleId],
    ) -> Result<usize, StoreError>;

    /// Inserts a new schedule row.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn insert_schedule(&mut self, schedule: &Schedule) -> Result<(), StoreError>;

    /// Deletes a schedule row. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn delete_schedule(&mut self, id: ScheduleId) -> Result<bool, StoreError>;

    /// Transfers ownership of the named schedule rows, atomically.
    ///
    /// Either every (schedule, new owner) pair is applied or none is. A
    /// swap commits both of its updates through a single call here so a
    /// crash can never leave one side swapped and the other not.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure or if any named schedule
    /// row does not exist.
    fn transfer_owners(&mut self, transfers: &[(ScheduleId, UserId)]) -> Result<(), StoreError>;

    /// Looks up the settings record for a month, if one exists.
    ///
    /// Absence is an expected steady state for an unconfigured month.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn get_settings(&mut self, month: u8, year: u16) -> Result<Option<MonthlySettings>, StoreError>;

    /// Inserts or replaces the settings record for its (month, year).
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn upsert_settings(&mut self, settings: &MonthlySettings) -> Result<(), StoreError>;

    /// Looks up a settings record by share token.
    ///
    /// Publish state is NOT checked here; that is gateway logic.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn settings_by_token(&mut self, token: &str) -> Result<Option<MonthlySettings>, StoreError>;

    /// Appends a trade audit record.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn append_trade(&mut self, record: &TradeRecord) -> Result<(), StoreError>;

    /// Returns trade audit records for a month, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` on backend failure.
    fn trades_for_month(&mut self, month: u8, year: u16) -> Result<Vec<TradeRecord>, StoreError>;
}
