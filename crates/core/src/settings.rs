// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::store::ScheduleStore;
use rota_domain::{
    MonthlySettings, Schedule, User, validate_month, validate_year,
};

/// A partial update to a month's settings.
///
/// `None` fields are left untouched; a settings row is created lazily if
/// none exists for the month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    /// New publish state, if changing.
    pub is_published: Option<bool>,
    /// New share token, if changing. Replacing the token invalidates the
    /// previous one.
    pub public_share_token: Option<String>,
}

/// The read-only snapshot served to holders of a valid share token.
///
/// Phone numbers are included deliberately; the public view exists to
/// share contact info with stakeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicSchedule {
    /// All schedule entries for the published month.
    pub schedules: Vec<Schedule>,
    /// All users, so entries can be resolved to names and phones.
    pub users: Vec<User>,
    /// The month's settings record.
    pub settings: MonthlySettings,
}

/// Fetches the settings record for a month.
///
/// `None` means the month has never been configured, which is an expected
/// steady state rather than an error.
///
/// # Errors
///
/// Returns `CoreError::RuleViolation` for an out-of-range month/year, or
/// `CoreError::Store` on backend failure.
pub fn get_settings<S: ScheduleStore + ?Sized>(
    store: &mut S,
    month: u8,
    year: u16,
) -> Result<Option<MonthlySettings>, CoreError> {
    validate_month(u32::from(month))?;
    validate_year(u32::from(year))?;
    Ok(store.get_settings(month, year)?)
}

/// Upserts the settings record for a month.
///
/// Creates an unpublished, token-less record if none exists, then applies
/// the patch's named fields.
///
/// # Errors
///
/// Returns `CoreError::RuleViolation` for an out-of-range month/year, or
/// `CoreError::Store` on backend failure.
pub fn update_settings<S: ScheduleStore + ?Sized>(
    store: &mut S,
    month: u8,
    year: u16,
    patch: SettingsPatch,
) -> Result<MonthlySettings, CoreError> {
    validate_month(u32::from(month))?;
    validate_year(u32::from(year))?;

    let mut settings: MonthlySettings = store
        .get_settings(month, year)?
        .unwrap_or_else(|| MonthlySettings::new(month, year));

    if let Some(is_published) = patch.is_published {
        settings.is_published = is_published;
    }
    if let Some(token) = patch.public_share_token {
        settings.public_share_token = Some(token);
    }

    store.upsert_settings(&settings)?;
    Ok(settings)
}

/// Assigns a fresh share token to a month, replacing any prior token.
///
/// The old token stops resolving the moment the new one is stored. Token
/// assignment is independent of publish state: a token may exist while
/// the month is unpublished, and resolution still requires both.
///
/// # Errors
///
/// Returns `CoreError::RuleViolation` for an out-of-range month/year, or
/// `CoreError::Store` on backend failure.
pub fn set_share_token<S: ScheduleStore + ?Sized>(
    store: &mut S,
    month: u8,
    year: u16,
    token: String,
) -> Result<MonthlySettings, CoreError> {
    update_settings(
        store,
        month,
        year,
        SettingsPatch {
            is_published: None,
            public_share_token: Some(token),
        },
    )
}

/// Resolves a share token to the public snapshot of its month.
///
/// Returns `None` when no settings row carries the token, or when the
/// month is not published — an unpublished month's token never resolves
/// even on an exact match.
///
/// # Errors
///
/// Returns `CoreError::Store` on backend failure.
pub fn resolve_public_token<S: ScheduleStore + ?Sized>(
    store: &mut S,
    token: &str,
) -> Result<Option<PublicSchedule>, CoreError> {
    let Some(settings) = store.settings_by_token(token)? else {
        return Ok(None);
    };
    if !settings.is_published {
        return Ok(None);
    }

    let schedules: Vec<Schedule> = store.schedules_for_month(settings.month, settings.year)?;
    let users: Vec<User> = store.all_users()?;

    Ok(Some(PublicSchedule {
        schedules,
        users,
        settings,
    }))
}
