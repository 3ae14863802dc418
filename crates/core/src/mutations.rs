// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::store::ScheduleStore;
use crate::validator::{ScheduleCandidate, validate_candidate};
use rota_audit::TradeRecord;
use rota_domain::{
    DomainError, Schedule, ScheduleId, User, UserId, validate_calendar_date,
};

/// The result of a successful reassignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignOutcome {
    /// The schedule entry with its new owner.
    pub schedule: Schedule,
    /// The audit record that was appended.
    pub trade: TradeRecord,
}

/// The result of a successful swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    /// The first entry with its new owner.
    pub schedule_a: Schedule,
    /// The second entry with its new owner.
    pub schedule_b: Schedule,
    /// The audit record that was appended.
    pub trade: TradeRecord,
}

/// Creates a new schedule entry from a validated candidate.
///
/// The calendar date is checked first (day 30 of February never reaches
/// the validator), then the candidate runs through the full constraint
/// check with no exclusions. On success a fresh row is inserted.
///
/// # Errors
///
/// Returns `CoreError::RuleViolation` with the specific failed rule, or
/// `CoreError::Store` on backend failure. State is unchanged on rejection.
pub fn create_schedule<S: ScheduleStore + ?Sized>(
    store: &mut S,
    candidate: &ScheduleCandidate,
) -> Result<Schedule, CoreError> {
    validate_calendar_date(candidate.year, candidate.month, candidate.day)?;
    validate_candidate(store, candidate, &[])?;

    let schedule: Schedule = Schedule::new(
        candidate.month,
        candidate.year,
        candidate.day,
        candidate.user_id,
        candidate.status,
    );
    store.insert_schedule(&schedule)?;

    Ok(schedule)
}

/// Moves an existing schedule entry to a new owner.
///
/// The entry's ID is stable across the transfer: the row represents a
/// day-slot whose tenant changes, not a person-day pairing. The row being
/// moved is excluded from validation so it does not conflict with its own
/// prior state.
///
/// # Errors
///
/// Returns `CoreError::RuleViolation` if:
/// - The schedule or target user does not exist
/// - The target user is inactive
/// - The target user already owns the entry
/// - The candidate fails any constraint check
///
/// State is unchanged on any rejection.
pub fn reassign_schedule<S: ScheduleStore + ?Sized>(
    store: &mut S,
    schedule_id: ScheduleId,
    to_user: UserId,
) -> Result<ReassignOutcome, CoreError> {
    let Some(schedule) = store.get_schedule(schedule_id)? else {
        return Err(DomainError::ScheduleNotFound { schedule_id }.into());
    };
    let target: User = require_active_user(store, to_user)?;

    if schedule.user_id == to_user {
        return Err(DomainError::ScheduleAlreadyOwned { name: target.name }.into());
    }

    let candidate: ScheduleCandidate = ScheduleCandidate::for_slot_of(&schedule, to_user);
    validate_candidate(store, &candidate, &[schedule_id])?;

    store.transfer_owners(&[(schedule_id, to_user)])?;

    let trade: TradeRecord = TradeRecord::reassign(
        schedule.user_id,
        to_user,
        schedule_id,
        schedule.month,
        schedule.year,
    );
    store.append_trade(&trade)?;

    let schedule: Schedule = Schedule {
        user_id: to_user,
        ..schedule
    };
    Ok(ReassignOutcome { schedule, trade })
}

/// Exchanges the owners of two schedule entries.
///
/// Both sides are validated against the same pre-swap snapshot, with both
/// rows excluded, before either row is touched. If either side fails the
/// whole swap is rejected and no row moves; on success both transfers
/// commit through one atomic store call.
///
/// The trade record is filed under the first entry's month, so a swap
/// spanning two months shows up only in that month's history.
///
/// # Errors
///
/// Returns `CoreError::RuleViolation` if:
/// - Either schedule does not exist
/// - Both entries belong to the same user
/// - Either owning user is missing or inactive
/// - Either side fails a constraint check (the error names that side's
///   user)
///
/// State is unchanged on any rejection.
pub fn swap_schedules<S: ScheduleStore + ?Sized>(
    store: &mut S,
    schedule_id_a: ScheduleId,
    schedule_id_b: ScheduleId,
) -> Result<SwapOutcome, CoreError> {
    let Some(schedule_a) = store.get_schedule(schedule_id_a)? else {
        return Err(DomainError::ScheduleNotFound {
            schedule_id: schedule_id_a,
        }
        .into());
    };
    let Some(schedule_b) = store.get_schedule(schedule_id_b)? else {
        return Err(DomainError::ScheduleNotFound {
            schedule_id: schedule_id_b,
        }
        .into());
    };

    if schedule_a.user_id == schedule_b.user_id {
        return Err(DomainError::SwapRequiresDistinctOwners.into());
    }

    require_active_user(store, schedule_a.user_id)?;
    require_active_user(store, schedule_b.user_id)?;

    // Both rows are pretend-absent for both checks; the swap considers the
    // pair as a unit against the pre-swap snapshot.
    let exclude: [ScheduleId; 2] = [schedule_id_a, schedule_id_b];
    let candidate_a: ScheduleCandidate =
        ScheduleCandidate::for_slot_of(&schedule_a, schedule_b.user_id);
    let candidate_b: ScheduleCandidate =
        ScheduleCandidate::for_slot_of(&schedule_b, schedule_a.user_id);

    validate_candidate(store, &candidate_a, &exclude)?;
    validate_candidate(store, &candidate_b, &exclude)?;

    store.transfer_owners(&[
        (schedule_id_a, schedule_b.user_id),
        (schedule_id_b, schedule_a.user_id),
    ])?;

    let trade: TradeRecord = TradeRecord::swap(
        schedule_a.user_id,
        schedule_b.user_id,
        schedule_id_a,
        schedule_id_b,
        schedule_a.month,
        schedule_a.year,
    );
    store.append_trade(&trade)?;

    let new_a: Schedule = Schedule {
        user_id: schedule_b.user_id,
        ..schedule_a.clone()
    };
    let new_b: Schedule = Schedule {
        user_id: schedule_a.user_id,
        ..schedule_b
    };
    Ok(SwapOutcome {
        schedule_a: new_a,
        schedule_b: new_b,
        trade,
    })
}

/// Resolves a user and requires them to be active.
fn require_active_user<S: ScheduleStore + ?Sized>(
    store: &mut S,
    user_id: UserId,
) -> Result<User, CoreError> {
    let Some(user) = store.get_user(user_id)? else {
        return Err(DomainError::UserNotFound { user_id }.into());
    };
    if !user.is_active {
        return Err(DomainError::InactiveUser { name: user.name }.into());
    }
    Ok(user)
}
