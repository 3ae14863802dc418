// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota_core::MemoryStore;
use rota_domain::User;

use crate::handlers;
use crate::request_response::{CreateScheduleRequest, CreateUserRequest};

/// Creates a user through the handler with the store's default limit.
pub fn add_user(store: &mut MemoryStore, name: &str, role: &str) -> User {
    handlers::create_user(
        store,
        CreateUserRequest {
            name: name.to_string(),
            phone: String::from("555-123-4567"),
            role: role.to_string(),
            monthly_shift_limit: None,
        },
    )
    .unwrap()
}

/// Creates a user through the handler with an explicit monthly limit.
pub fn add_limited_user(store: &mut MemoryStore, name: &str, role: &str, limit: u8) -> User {
    handlers::create_user(
        store,
        CreateUserRequest {
            name: name.to_string(),
            phone: String::from("555-123-4567"),
            role: role.to_string(),
            monthly_shift_limit: Some(limit),
        },
    )
    .unwrap()
}

/// Builds a create request for the given user and day in March 2025.
pub fn march_request(user: &User, day: u8) -> CreateScheduleRequest {
    CreateScheduleRequest {
        month: 3,
        year: 2025,
        day,
        user_id: user.id.to_string(),
        status: None,
    }
}
