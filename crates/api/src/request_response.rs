// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry enum-valued fields as strings and IDs as UUID strings;
//! handlers parse them through `validation` before anything reaches the
//! engine. Domain entities serialize directly as responses, so only the
//! shapes that differ from a plain entity are defined here.

use serde::{Deserialize, Serialize};

use rota_domain::{MonthlySettings, Schedule, User};

/// Request to create a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Display name (unique).
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Role string: physician, learner, or admin.
    pub role: String,
    /// Monthly shift limit; defaults when omitted.
    #[serde(default)]
    pub monthly_shift_limit: Option<u8>,
}

/// Request to update a user. Omitted fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// New role string.
    #[serde(default)]
    pub role: Option<String>,
    /// New active flag.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// New monthly shift limit.
    #[serde(default)]
    pub monthly_shift_limit: Option<u8>,
}

/// Request to create a schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    /// Calendar month (1-12).
    pub month: u8,
    /// Calendar year.
    pub year: u16,
    /// Day of month.
    pub day: u8,
    /// The assignee's ID as a UUID string.
    pub user_id: String,
    /// Entry status string; defaults to scheduled when omitted.
    #[serde(default)]
    pub status: Option<String>,
}

/// Request to move a schedule entry to a new owner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignRequest {
    /// The schedule entry to move.
    pub schedule_id: String,
    /// The new owner's ID.
    pub to_user_id: String,
}

/// Request to exchange the owners of two schedule entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    /// The first entry.
    pub schedule_id_a: String,
    /// The second entry.
    pub schedule_id_b: String,
}

/// Request to patch a month's settings. Omitted fields are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    /// New publish state.
    #[serde(default)]
    pub is_published: Option<bool>,
    /// New share token. Prefer POST `/api/monthly-settings/token` for a
    /// server-minted value; this field exists for clients restoring one.
    #[serde(default)]
    pub public_share_token: Option<String>,
}

/// Response for a successful swap: both entries with their new owners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    /// The first entry after the exchange.
    pub schedule_a: Schedule,
    /// The second entry after the exchange.
    pub schedule_b: Schedule,
}

/// The public read-only snapshot served to share-token holders.
///
/// Users are included in full, phone numbers deliberately among them;
/// the public view exists to share contact info with stakeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicScheduleResponse {
    /// All schedule entries for the published month.
    pub schedules: Vec<Schedule>,
    /// All users, for resolving entries to names and phones.
    pub users: Vec<User>,
    /// The month's settings record.
    pub settings: MonthlySettings,
}
