// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP-agnostic API layer for the scheduling service.
//!
//! Handlers take any `ScheduleStore`, parse wire-form inputs, delegate
//! rule decisions to the engine, and produce `ApiError` values the
//! server maps to HTTP statuses. Nothing in this crate knows about axum.

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

mod error;
mod handlers;
mod request_response;
mod token;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    create_schedule, create_user, delete_schedule, delete_user, get_monthly_settings,
    list_schedules, list_trades, list_users, public_schedule, reassign_schedule,
    regenerate_share_token, swap_schedules, update_monthly_settings, update_user,
};
pub use request_response::{
    CreateScheduleRequest, CreateUserRequest, PublicScheduleResponse, ReassignRequest,
    SwapRequest, SwapResponse, UpdateSettingsRequest, UpdateUserRequest,
};
pub use token::generate_share_token;
pub use validation::FieldError;
