// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use types::{
    DEFAULT_MONTHLY_SHIFT_LIMIT, MonthlySettings, Role, Schedule, ScheduleId, ShiftStatus,
    TradeId, User, UserId,
};
pub use validation::{
    MAX_YEAR, MIN_YEAR, validate_calendar_date, validate_month, validate_phone,
    validate_shift_limit, validate_user_fields, validate_year,
};
