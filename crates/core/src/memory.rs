// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::{ScheduleStore, StoreError};
use rota_audit::TradeRecord;
use rota_domain::{MonthlySettings, Schedule, ScheduleId, User, UserId};
use std::collections::HashMap;

/// HashMap-backed reference implementation of [`ScheduleStore`].
///
/// Infallible by construction; every method returns `Ok`. Used by the
/// engine and API test suites and as the server's default store when no
/// database path is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: HashMap<UserId, User>,
    schedules: HashMap<ScheduleId, Schedule>,
    settings: HashMap<(u8, u16), MonthlySettings>,
    trades: Vec<TradeRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScheduleStore for MemoryStore {
    fn get_user(&mut self, id: UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(&id).cloned())
    }

    fn get_user_by_name(&mut self, name: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.values().find(|u| u.name == name).cloned())
    }

    fn all_users(&mut self) -> Result<Vec<User>, StoreError> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }

    fn insert_user(&mut self, user: &User) -> Result<(), StoreError> {
        self.users.insert(user.id, user.clone());
        Ok(())
    }

    fn update_user(&mut self, user: &User) -> Result<(), StoreError> {
        self.users.insert(user.id, user.clone());
        Ok(())
    }

    fn delete_user(&mut self, id: UserId) -> Result<bool, StoreError> {
        Ok(self.users.remove(&id).is_some())
    }

    fn schedules_for_user(&mut self, user_id: UserId) -> Result<Vec<Schedule>, StoreError> {
        Ok(self
            .schedules
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    fn get_schedule(&mut self, id: ScheduleId) -> Result<Option<Schedule>, StoreError> {
        Ok(self.schedules.get(&id).cloned())
    }

    fn schedules_for_month(&mut self, month: u8, year: u16) -> Result<Vec<Schedule>, StoreError> {
        let mut rows: Vec<Schedule> = self
            .schedules
            .values()
            .filter(|s| s.month == month && s.year == year)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.id.cmp(&b.id)));
        Ok(rows)
    }

    fn schedules_for_day(
        &mut self,
        month: u8,
        year: u16,
        day: u8,
        exclude: &[ScheduleId],
    ) -> Result<Vec<Schedule>, StoreError> {
        Ok(self
            .schedules
            .values()
            .filter(|s| {
                s.month == month && s.year == year && s.day == day && !exclude.contains(&s.id)
            })
            .cloned()
            .collect())
    }

    fn schedules_for_user_day(
        &mut self,
        user_id: UserId,
        month: u8,
        year: u16,
        day: u8,
        exclude: &[ScheduleId],
    ) -> Result<Vec<Schedule>, StoreError> {
        Ok(self
            .schedules
            .values()
            .filter(|s| {
                s.user_id == user_id
                    && s.month == month
                    && s.year == year
                    && s.day == day
                    && !exclude.contains(&s.id)
            })
            .cloned()
            .collect())
    }

    fn monthly_count(
        &mut self,
        user_id: UserId,
        month: u8,
        year: u16,
        exclude: &[ScheduleId],
    ) -> Result<usize, StoreError> {
        Ok(self
            .schedules
            .values()
            .filter(|s| {
                s.user_id == user_id
                    && s.month == month
                    && s.year == year
                    && !exclude.contains(&s.id)
            })
            .count())
    }

    fn insert_schedule(&mut self, schedule: &Schedule) -> Result<(), StoreError> {
        self.schedules.insert(schedule.id, schedule.clone());
        Ok(())
    }

    fn delete_schedule(&mut self, id: ScheduleId) -> Result<bool, StoreError> {
        Ok(self.schedules.remove(&id).is_some())
    }

    fn transfer_owners(&mut self, transfers: &[(ScheduleId, UserId)]) -> Result<(), StoreError> {
        // Verify every row exists before mutating any, so a bad batch
        // leaves the map untouched.
        for (schedule_id, _) in transfers {
            if !self.schedules.contains_key(schedule_id) {
                return Err(StoreError::new(format!(
                    "schedule {schedule_id} vanished before ownership transfer"
                )));
            }
        }
        for (schedule_id, new_owner) in transfers {
            if let Some(schedule) = self.schedules.get_mut(schedule_id) {
                schedule.user_id = *new_owner;
            }
        }
        Ok(())
    }

    fn get_settings(&mut self, month: u8, year: u16) -> Result<Option<MonthlySettings>, StoreError> {
        Ok(self.settings.get(&(month, year)).cloned())
    }

    fn upsert_settings(&mut self, settings: &MonthlySettings) -> Result<(), StoreError> {
        self.settings
            .insert((settings.month, settings.year), settings.clone());
        Ok(())
    }

    fn settings_by_token(&mut self, token: &str) -> Result<Option<MonthlySettings>, StoreError> {
        Ok(self
            .settings
            .values()
            .find(|s| s.public_share_token.as_deref() == Some(token))
            .cloned())
    }

    fn append_trade(&mut self, record: &TradeRecord) -> Result<(), StoreError> {
        self.trades.push(record.clone());
        Ok(())
    }

    fn trades_for_month(&mut self, month: u8, year: u16) -> Result<Vec<TradeRecord>, StoreError> {
        Ok(self
            .trades
            .iter()
            .filter(|t| t.month == month && t.year == year)
            .cloned()
            .collect())
    }
}
