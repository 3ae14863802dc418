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
mod memory;
mod mutations;
mod settings;
mod store;
mod validator;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use memory::MemoryStore;
pub use mutations::{ReassignOutcome, SwapOutcome, create_schedule, reassign_schedule, swap_schedules};
pub use settings::{
    PublicSchedule, SettingsPatch, get_settings, resolve_public_token, set_share_token,
    update_settings,
};
pub use store::{ScheduleStore, StoreError};
pub use validator::{ScheduleCandidate, validate_candidate};
