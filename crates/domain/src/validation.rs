// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::{Date, Month};

/// Earliest year the scheduler accepts.
pub const MIN_YEAR: u16 = 2020;
/// Latest year the scheduler accepts.
pub const MAX_YEAR: u16 = 2100;

/// Maximum length of a user name in characters.
const MAX_NAME_LEN: usize = 100;

/// Validates a user's basic field constraints.
///
/// Checks name, phone, and monthly shift limit. Does NOT check name
/// uniqueness; that requires store context.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or longer than 100 characters
/// - The phone number does not match the accepted pattern
/// - The monthly shift limit is outside 1-31
pub fn validate_user_fields(name: &str, phone: &str, limit: u8) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be longer than 100 characters",
        )));
    }

    validate_phone(phone)?;
    validate_shift_limit(u32::from(limit))?;

    Ok(())
}

/// Validates a phone number against the accepted loose pattern.
///
/// The pattern is intentionally permissive: an optional leading `+`, then
/// 10-20 characters drawn from digits, spaces, dashes, parentheses, and
/// dots, with at least one digit present.
///
/// # Errors
///
/// Returns `DomainError::InvalidPhone` if the number does not match.
pub fn validate_phone(phone: &str) -> Result<(), DomainError> {
    let body: &str = phone.strip_prefix('+').unwrap_or(phone);

    let len: usize = body.chars().count();
    if !(10..=20).contains(&len) {
        return Err(DomainError::InvalidPhone(String::from(
            "Phone number must be 10-20 characters",
        )));
    }

    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '.'))
    {
        return Err(DomainError::InvalidPhone(String::from(
            "Phone number may only contain digits, spaces, dashes, parentheses, and dots",
        )));
    }

    if !body.chars().any(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidPhone(String::from(
            "Phone number must contain at least one digit",
        )));
    }

    Ok(())
}

/// Validates a monthly shift limit.
///
/// # Errors
///
/// Returns `DomainError::InvalidShiftLimit` if the limit is outside 1-31.
pub fn validate_shift_limit(limit: u32) -> Result<(), DomainError> {
    if !(1..=31).contains(&limit) {
        return Err(DomainError::InvalidShiftLimit { limit });
    }
    Ok(())
}

/// Validates a calendar month number.
///
/// # Errors
///
/// Returns `DomainError::InvalidMonth` if the month is outside 1-12.
pub fn validate_month(month: u32) -> Result<(), DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::InvalidMonth { month });
    }
    Ok(())
}

/// Validates a calendar year.
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` if the year is outside 2020-2100.
pub fn validate_year(year: u32) -> Result<(), DomainError> {
    if !(u32::from(MIN_YEAR)..=u32::from(MAX_YEAR)).contains(&year) {
        return Err(DomainError::InvalidYear { year });
    }
    Ok(())
}

/// Validates that a (year, month, day) triple denotes a real calendar date.
///
/// Rejects non-existent dates such as February 30 regardless of the other
/// fields being in range.
///
/// # Errors
///
/// Returns an error if the month or year is out of range, or if the day
/// does not exist in that month of that year.
pub fn validate_calendar_date(year: u16, month: u8, day: u8) -> Result<(), DomainError> {
    validate_month(u32::from(month))?;
    validate_year(u32::from(year))?;

    let month_enum: Month = Month::try_from(month)
        .map_err(|_| DomainError::InvalidMonth {
            month: u32::from(month),
        })?;

    Date::from_calendar_date(i32::from(year), month_enum, day)
        .map_err(|_| DomainError::InvalidCalendarDate { year, month, day })?;

    Ok(())
}
