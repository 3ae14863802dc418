// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::store::ScheduleStore;
use rota_domain::{DomainError, Role, Schedule, ScheduleId, ShiftStatus, UserId};

/// A proposed schedule entry, not yet stored.
///
/// The validator evaluates candidates speculatively: a swap validates two
/// of them against the same pre-swap snapshot before either row moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleCandidate {
    /// Calendar month (1-12).
    pub month: u8,
    /// Calendar year.
    pub year: u16,
    /// Day of month.
    pub day: u8,
    /// The proposed owner.
    pub user_id: UserId,
    /// The proposed status.
    pub status: ShiftStatus,
}

impl ScheduleCandidate {
    /// Builds a candidate occupying an existing entry's day-slot with a
    /// different owner. Used by reassign and swap.
    #[must_use]
    pub const fn for_slot_of(schedule: &Schedule, user_id: UserId) -> Self {
        Self {
            month: schedule.month,
            year: schedule.year,
            day: schedule.day,
            user_id,
            status: schedule.status,
        }
    }
}

/// Decides whether a candidate entry may legally exist.
///
/// Deterministic and side-effect-free: it only queries the store. Checks
/// run in order and short-circuit on the first failure:
///
/// 1. The candidate's user must exist.
/// 2. The user must not already hold an entry on that day.
/// 3. The user must be under their monthly shift limit.
/// 4. The day must not already have an assignee of the same role class.
///    Admin users neither block nor are blocked by this rule.
///
/// Rows named in `exclude` are treated as absent for every check, so an
/// entry being reassigned or swapped does not conflict with its own prior
/// state.
///
/// # Errors
///
/// Returns `CoreError::RuleViolation` carrying the specific violated rule,
/// or `CoreError::Store` on backend failure.
pub fn validate_candidate<S: ScheduleStore + ?Sized>(
    store: &mut S,
    candidate: &ScheduleCandidate,
    exclude: &[ScheduleId],
) -> Result<(), CoreError> {
    let Some(user) = store.get_user(candidate.user_id)? else {
        return Err(DomainError::UserNotFound {
            user_id: candidate.user_id,
        }
        .into());
    };

    let same_day: Vec<Schedule> = store.schedules_for_user_day(
        candidate.user_id,
        candidate.month,
        candidate.year,
        candidate.day,
        exclude,
    )?;
    if !same_day.is_empty() {
        return Err(DomainError::UserAlreadyScheduled { name: user.name }.into());
    }

    let count: usize =
        store.monthly_count(candidate.user_id, candidate.month, candidate.year, exclude)?;
    if count >= usize::from(user.monthly_shift_limit) {
        return Err(DomainError::MonthlyLimitExceeded {
            name: user.name,
            limit: user.monthly_shift_limit,
        }
        .into());
    }

    // Admins are supervisory, not clinical coverage; they sit outside the
    // one-per-role-per-day rule on both sides.
    if user.role == Role::Admin {
        return Ok(());
    }

    let day_schedules: Vec<Schedule> =
        store.schedules_for_day(candidate.month, candidate.year, candidate.day, exclude)?;
    for schedule in &day_schedules {
        let Some(owner) = store.get_user(schedule.user_id)? else {
            // Orphaned row; it cannot occupy a role slot.
            continue;
        };
        if owner.role == user.role {
            return Err(DomainError::RoleSlotTaken { role: user.role }.into());
        }
    }

    Ok(())
}
