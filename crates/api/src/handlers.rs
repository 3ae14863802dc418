// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers are generic over the store so the HTTP layer can run them
//! against either the in-memory or the SQLite implementation. Each
//! handler validates its inputs at the boundary, delegates rule
//! decisions to the engine, and translates every error into `ApiError`.

use tracing::info;

use rota_audit::TradeRecord;
use rota_core::{
    PublicSchedule, ScheduleCandidate, ScheduleStore, SettingsPatch, StoreError,
};
use rota_domain::{
    DEFAULT_MONTHLY_SHIFT_LIMIT, DomainError, MonthlySettings, Role, Schedule, ScheduleId,
    ShiftStatus, User, UserId, validate_month, validate_user_fields, validate_year,
};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CreateScheduleRequest, CreateUserRequest, PublicScheduleResponse, ReassignRequest,
    SwapRequest, SwapResponse, UpdateSettingsRequest, UpdateUserRequest,
};
use crate::token::generate_share_token;
use crate::validation::{parse_role, parse_schedule_id, parse_status, parse_user_id};

fn store_failure(err: StoreError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}

/// Lists all users, oldest first.
///
/// # Errors
///
/// Returns `ApiError::Internal` on store failure.
pub fn list_users<S: ScheduleStore + ?Sized>(store: &mut S) -> Result<Vec<User>, ApiError> {
    store.all_users().map_err(store_failure)
}

/// Creates a user.
///
/// # Errors
///
/// Returns `InvalidInput` for bad fields and `Conflict` for a duplicate
/// name.
pub fn create_user<S: ScheduleStore + ?Sized>(
    store: &mut S,
    request: CreateUserRequest,
) -> Result<User, ApiError> {
    let role: Role = parse_role(&request.role)?;
    let limit: u8 = request
        .monthly_shift_limit
        .unwrap_or(DEFAULT_MONTHLY_SHIFT_LIMIT);
    validate_user_fields(&request.name, &request.phone, limit)
        .map_err(translate_domain_error)?;

    if store
        .get_user_by_name(&request.name)
        .map_err(store_failure)?
        .is_some()
    {
        return Err(translate_domain_error(DomainError::DuplicateName {
            name: request.name,
        }));
    }

    let user: User = User::new(request.name, request.phone, role, limit);
    store.insert_user(&user).map_err(store_failure)?;

    info!(user_id = %user.id, role = %user.role, "Created user: {}", user.name);
    Ok(user)
}

/// Applies a partial update to a user.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown ID, `InvalidInput` for bad
/// fields, and `Conflict` when renaming onto an existing name.
pub fn update_user<S: ScheduleStore + ?Sized>(
    store: &mut S,
    id: &str,
    request: UpdateUserRequest,
) -> Result<User, ApiError> {
    let user_id: UserId = parse_user_id("id", id)?;
    let Some(mut user) = store.get_user(user_id).map_err(store_failure)? else {
        return Err(translate_domain_error(DomainError::UserNotFound {
            user_id,
        }));
    };

    if let Some(name) = request.name {
        if name != user.name
            && store
                .get_user_by_name(&name)
                .map_err(store_failure)?
                .is_some()
        {
            return Err(translate_domain_error(DomainError::DuplicateName { name }));
        }
        user.name = name;
    }
    if let Some(phone) = request.phone {
        user.phone = phone;
    }
    if let Some(role) = request.role {
        user.role = parse_role(&role)?;
    }
    if let Some(is_active) = request.is_active {
        user.is_active = is_active;
    }
    if let Some(limit) = request.monthly_shift_limit {
        user.monthly_shift_limit = limit;
    }

    validate_user_fields(&user.name, &user.phone, user.monthly_shift_limit)
        .map_err(translate_domain_error)?;
    store.update_user(&user).map_err(store_failure)?;

    info!(user_id = %user.id, "Updated user: {}", user.name);
    Ok(user)
}

/// Deletes a user.
///
/// A user who still owns schedule entries cannot be deleted; the shifts
/// must be removed or reassigned first.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown ID and `Conflict` when the
/// user still owns entries.
pub fn delete_user<S: ScheduleStore + ?Sized>(store: &mut S, id: &str) -> Result<(), ApiError> {
    let user_id: UserId = parse_user_id("id", id)?;
    let Some(user) = store.get_user(user_id).map_err(store_failure)? else {
        return Err(translate_domain_error(DomainError::UserNotFound {
            user_id,
        }));
    };

    let owned: Vec<Schedule> = store.schedules_for_user(user_id).map_err(store_failure)?;
    if !owned.is_empty() {
        return Err(translate_domain_error(DomainError::UserOwnsSchedules {
            name: user.name,
            count: owned.len(),
        }));
    }

    store.delete_user(user_id).map_err(store_failure)?;
    info!(user_id = %user_id, "Deleted user: {}", user.name);
    Ok(())
}

/// Lists all schedule entries for a month.
///
/// # Errors
///
/// Returns `InvalidInput` for an out-of-range month or year.
pub fn list_schedules<S: ScheduleStore + ?Sized>(
    store: &mut S,
    month: u8,
    year: u16,
) -> Result<Vec<Schedule>, ApiError> {
    validate_month(u32::from(month)).map_err(translate_domain_error)?;
    validate_year(u32::from(year)).map_err(translate_domain_error)?;
    store.schedules_for_month(month, year).map_err(store_failure)
}

/// Creates a schedule entry.
///
/// # Errors
///
/// Returns `InvalidInput` for a nonexistent calendar date and `Conflict`
/// for any constraint rejection, carrying the validator's reason.
pub fn create_schedule<S: ScheduleStore + ?Sized>(
    store: &mut S,
    request: CreateScheduleRequest,
) -> Result<Schedule, ApiError> {
    let user_id: UserId = parse_user_id("userId", &request.user_id)?;
    let status: ShiftStatus = match request.status.as_deref() {
        Some(value) => parse_status(value)?,
        None => ShiftStatus::Scheduled,
    };

    let candidate: ScheduleCandidate = ScheduleCandidate {
        month: request.month,
        year: request.year,
        day: request.day,
        user_id,
        status,
    };
    let schedule: Schedule =
        rota_core::create_schedule(store, &candidate).map_err(translate_core_error)?;

    info!(
        schedule_id = %schedule.id,
        user_id = %user_id,
        "Scheduled {}-{:02}-{:02}", schedule.year, schedule.month, schedule.day
    );
    Ok(schedule)
}

/// Deletes a schedule entry.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown ID.
pub fn delete_schedule<S: ScheduleStore + ?Sized>(
    store: &mut S,
    id: &str,
) -> Result<(), ApiError> {
    let schedule_id: ScheduleId = parse_schedule_id("id", id)?;
    let removed: bool = store.delete_schedule(schedule_id).map_err(store_failure)?;
    if !removed {
        return Err(translate_domain_error(DomainError::ScheduleNotFound {
            schedule_id,
        }));
    }

    info!(schedule_id = %schedule_id, "Deleted schedule");
    Ok(())
}

/// Moves a schedule entry to a new owner.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the entry or target user is unknown
/// and `Conflict` for any constraint rejection.
pub fn reassign_schedule<S: ScheduleStore + ?Sized>(
    store: &mut S,
    request: ReassignRequest,
) -> Result<Schedule, ApiError> {
    let schedule_id: ScheduleId = parse_schedule_id("scheduleId", &request.schedule_id)?;
    let to_user: UserId = parse_user_id("toUserId", &request.to_user_id)?;

    let outcome =
        rota_core::reassign_schedule(store, schedule_id, to_user).map_err(translate_core_error)?;

    info!(
        schedule_id = %schedule_id,
        from_user = %outcome.trade.from_user,
        to_user = %to_user,
        "Reassigned schedule"
    );
    Ok(outcome.schedule)
}

/// Exchanges the owners of two schedule entries.
///
/// # Errors
///
/// Returns `ResourceNotFound` when either entry is unknown and
/// `Conflict` when either side fails a constraint check; no row moves on
/// rejection.
pub fn swap_schedules<S: ScheduleStore + ?Sized>(
    store: &mut S,
    request: SwapRequest,
) -> Result<SwapResponse, ApiError> {
    let schedule_id_a: ScheduleId = parse_schedule_id("scheduleIdA", &request.schedule_id_a)?;
    let schedule_id_b: ScheduleId = parse_schedule_id("scheduleIdB", &request.schedule_id_b)?;

    let outcome = rota_core::swap_schedules(store, schedule_id_a, schedule_id_b)
        .map_err(translate_core_error)?;

    info!(
        schedule_a = %schedule_id_a,
        schedule_b = %schedule_id_b,
        "Swapped schedules"
    );
    Ok(SwapResponse {
        schedule_a: outcome.schedule_a,
        schedule_b: outcome.schedule_b,
    })
}

/// Fetches a month's settings record, `None` when never configured.
///
/// # Errors
///
/// Returns `InvalidInput` for an out-of-range month or year.
pub fn get_monthly_settings<S: ScheduleStore + ?Sized>(
    store: &mut S,
    month: u8,
    year: u16,
) -> Result<Option<MonthlySettings>, ApiError> {
    rota_core::get_settings(store, month, year).map_err(translate_core_error)
}

/// Patches a month's settings, creating the record lazily.
///
/// # Errors
///
/// Returns `InvalidInput` for an out-of-range month or year.
pub fn update_monthly_settings<S: ScheduleStore + ?Sized>(
    store: &mut S,
    month: u8,
    year: u16,
    request: UpdateSettingsRequest,
) -> Result<MonthlySettings, ApiError> {
    let patch: SettingsPatch = SettingsPatch {
        is_published: request.is_published,
        public_share_token: request.public_share_token,
    };
    let settings: MonthlySettings =
        rota_core::update_settings(store, month, year, patch).map_err(translate_core_error)?;

    info!(
        month,
        year,
        is_published = settings.is_published,
        "Updated monthly settings"
    );
    Ok(settings)
}

/// Assigns a fresh share token to a month, invalidating any prior token.
///
/// # Errors
///
/// Returns `InvalidInput` for an out-of-range month or year.
pub fn regenerate_share_token<S: ScheduleStore + ?Sized>(
    store: &mut S,
    month: u8,
    year: u16,
) -> Result<MonthlySettings, ApiError> {
    let token: String = generate_share_token();
    let settings: MonthlySettings =
        rota_core::set_share_token(store, month, year, token).map_err(translate_core_error)?;

    info!(month, year, "Regenerated share token");
    Ok(settings)
}

/// Lists the trade audit log for a month, oldest first.
///
/// # Errors
///
/// Returns `InvalidInput` for an out-of-range month or year.
pub fn list_trades<S: ScheduleStore + ?Sized>(
    store: &mut S,
    month: u8,
    year: u16,
) -> Result<Vec<TradeRecord>, ApiError> {
    validate_month(u32::from(month)).map_err(translate_domain_error)?;
    validate_year(u32::from(year)).map_err(translate_domain_error)?;
    store.trades_for_month(month, year).map_err(store_failure)
}

/// Resolves a share token to its month's public snapshot.
///
/// An unknown token and an unpublished month are indistinguishable to
/// the caller.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the token does not resolve.
pub fn public_schedule<S: ScheduleStore + ?Sized>(
    store: &mut S,
    token: &str,
) -> Result<PublicScheduleResponse, ApiError> {
    let snapshot: Option<PublicSchedule> =
        rota_core::resolve_public_token(store, token).map_err(translate_core_error)?;
    let Some(snapshot) = snapshot else {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Public schedule"),
            message: String::from("No published schedule matches this link"),
        });
    };

    Ok(PublicScheduleResponse {
        schedules: snapshot.schedules,
        users: snapshot.users,
        settings: snapshot.settings,
    })
}
