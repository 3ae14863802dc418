// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::memory::MemoryStore;
use crate::store::ScheduleStore;
use crate::validator::ScheduleCandidate;
use rota_domain::{Role, Schedule, ShiftStatus, User, UserId};

/// Creates an active user with the given role and limit and stores it.
pub fn add_user(store: &mut MemoryStore, name: &str, role: Role, limit: u8) -> User {
    let user: User = User::new(
        name.to_string(),
        String::from("555-123-4567"),
        role,
        limit,
    );
    store.insert_user(&user).unwrap();
    user
}

/// Creates an inactive user and stores it.
pub fn add_inactive_user(store: &mut MemoryStore, name: &str, role: Role) -> User {
    let mut user: User = User::new(
        name.to_string(),
        String::from("555-123-4567"),
        role,
        8,
    );
    user.is_active = false;
    store.insert_user(&user).unwrap();
    user
}

/// Stores a scheduled entry for the given user and day in March 2025.
pub fn add_march_schedule(store: &mut MemoryStore, user_id: UserId, day: u8) -> Schedule {
    let schedule: Schedule = Schedule::new(3, 2025, day, user_id, ShiftStatus::Scheduled);
    store.insert_schedule(&schedule).unwrap();
    schedule
}

/// Builds a candidate for the given user and day in March 2025.
pub fn march_candidate(user_id: UserId, day: u8) -> ScheduleCandidate {
    ScheduleCandidate {
        month: 3,
        year: 2025,
        day,
        user_id,
        status: ShiftStatus::Scheduled,
    }
}
