// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota_core::MemoryStore;
use rota_domain::{MonthlySettings, User};

use crate::error::ApiError;
use crate::handlers;
use crate::request_response::{PublicScheduleResponse, UpdateSettingsRequest};
use crate::tests::helpers::{add_user, march_request};

fn publish_march(store: &mut MemoryStore) -> MonthlySettings {
    handlers::update_monthly_settings(
        store,
        3,
        2025,
        UpdateSettingsRequest {
            is_published: Some(true),
            ..UpdateSettingsRequest::default()
        },
    )
    .unwrap()
}

#[test]
fn test_update_settings_applies_client_supplied_token() {
    let mut store: MemoryStore = MemoryStore::new();

    let settings: MonthlySettings = handlers::update_monthly_settings(
        &mut store,
        3,
        2025,
        UpdateSettingsRequest {
            is_published: Some(true),
            public_share_token: Some(String::from("restored-token")),
        },
    )
    .unwrap();

    assert_eq!(settings.public_share_token.as_deref(), Some("restored-token"));
    assert!(handlers::public_schedule(&mut store, "restored-token").is_ok());
}

#[test]
fn test_update_settings_omitted_token_is_kept() {
    let mut store: MemoryStore = MemoryStore::new();
    publish_march(&mut store);
    let token: String = handlers::regenerate_share_token(&mut store, 3, 2025)
        .unwrap()
        .public_share_token
        .unwrap();

    let settings: MonthlySettings = handlers::update_monthly_settings(
        &mut store,
        3,
        2025,
        UpdateSettingsRequest {
            is_published: Some(false),
            ..UpdateSettingsRequest::default()
        },
    )
    .unwrap();

    assert_eq!(settings.public_share_token, Some(token));
    assert!(!settings.is_published);
}

#[test]
fn test_unconfigured_month_has_no_settings() {
    let mut store: MemoryStore = MemoryStore::new();

    let settings: Option<MonthlySettings> =
        handlers::get_monthly_settings(&mut store, 3, 2025).unwrap();

    assert!(settings.is_none());
}

#[test]
fn test_get_settings_rejects_bad_month() {
    let mut store: MemoryStore = MemoryStore::new();

    let result = handlers::get_monthly_settings(&mut store, 0, 2025);

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "month"
    ));
}

#[test]
fn test_update_settings_publishes_month() {
    let mut store: MemoryStore = MemoryStore::new();

    let settings: MonthlySettings = publish_march(&mut store);

    assert!(settings.is_published);
    assert!(settings.public_share_token.is_none());
    assert_eq!(
        handlers::get_monthly_settings(&mut store, 3, 2025)
            .unwrap()
            .unwrap(),
        settings
    );
}

#[test]
fn test_regenerated_token_resolves_to_published_month() {
    let mut store: MemoryStore = MemoryStore::new();
    let user: User = add_user(&mut store, "Dr. Chen", "physician");
    handlers::create_schedule(&mut store, march_request(&user, 5)).unwrap();
    publish_march(&mut store);

    let settings: MonthlySettings =
        handlers::regenerate_share_token(&mut store, 3, 2025).unwrap();
    let token: String = settings.public_share_token.unwrap();

    let snapshot: PublicScheduleResponse =
        handlers::public_schedule(&mut store, &token).unwrap();

    assert_eq!(snapshot.schedules.len(), 1);
    assert_eq!(snapshot.users.len(), 1);
    assert!(snapshot.settings.is_published);
}

#[test]
fn test_unpublished_token_does_not_resolve() {
    let mut store: MemoryStore = MemoryStore::new();

    let settings: MonthlySettings =
        handlers::regenerate_share_token(&mut store, 3, 2025).unwrap();
    let token: String = settings.public_share_token.unwrap();

    let result = handlers::public_schedule(&mut store, &token);

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_regenerating_invalidates_previous_token() {
    let mut store: MemoryStore = MemoryStore::new();
    publish_march(&mut store);

    let old_token: String = handlers::regenerate_share_token(&mut store, 3, 2025)
        .unwrap()
        .public_share_token
        .unwrap();
    let new_token: String = handlers::regenerate_share_token(&mut store, 3, 2025)
        .unwrap()
        .public_share_token
        .unwrap();

    assert_ne!(old_token, new_token);
    assert!(matches!(
        handlers::public_schedule(&mut store, &old_token),
        Err(ApiError::ResourceNotFound { .. })
    ));
    assert!(handlers::public_schedule(&mut store, &new_token).is_ok());
}

#[test]
fn test_unknown_token_is_not_found() {
    let mut store: MemoryStore = MemoryStore::new();

    let result = handlers::public_schedule(&mut store, "deadbeefdeadbeefdeadbeefdeadbeef");

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_public_snapshot_limited_to_published_month() {
    let mut store: MemoryStore = MemoryStore::new();
    let user: User = add_user(&mut store, "Dr. Chen", "physician");
    handlers::create_schedule(&mut store, march_request(&user, 5)).unwrap();
    handlers::create_schedule(
        &mut store,
        crate::request_response::CreateScheduleRequest {
            month: 4,
            year: 2025,
            day: 2,
            user_id: user.id.to_string(),
            status: None,
        },
    )
    .unwrap();
    publish_march(&mut store);

    let token: String = handlers::regenerate_share_token(&mut store, 3, 2025)
        .unwrap()
        .public_share_token
        .unwrap();
    let snapshot: PublicScheduleResponse =
        handlers::public_schedule(&mut store, &token).unwrap();

    assert_eq!(snapshot.schedules.len(), 1);
    assert_eq!(snapshot.schedules[0].month, 3);
}
