// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::memory::MemoryStore;
use crate::settings::{
    SettingsPatch, get_settings, resolve_public_token, set_share_token, update_settings,
};
use crate::store::ScheduleStore;
use crate::tests::helpers::{add_march_schedule, add_user};
use rota_domain::{DomainError, MonthlySettings, Role, Schedule, ShiftStatus, User};

#[test]
fn test_unconfigured_month_reads_as_none() {
    let mut store: MemoryStore = MemoryStore::new();
    assert_eq!(get_settings(&mut store, 3, 2025).unwrap(), None);
}

#[test]
fn test_get_settings_rejects_out_of_range_month() {
    let mut store: MemoryStore = MemoryStore::new();
    let result = get_settings(&mut store, 13, 2025);
    assert!(matches!(
        result,
        Err(CoreError::RuleViolation(DomainError::InvalidMonth {
            month: 13
        }))
    ));
}

#[test]
fn test_update_creates_row_lazily() {
    let mut store: MemoryStore = MemoryStore::new();

    let settings: MonthlySettings = update_settings(
        &mut store,
        3,
        2025,
        SettingsPatch {
            is_published: Some(true),
            public_share_token: None,
        },
    )
    .unwrap();

    assert!(settings.is_published);
    assert_eq!(settings.public_share_token, None);
    assert_eq!(get_settings(&mut store, 3, 2025).unwrap(), Some(settings));
}

#[test]
fn test_patch_leaves_unnamed_fields_untouched() {
    let mut store: MemoryStore = MemoryStore::new();
    set_share_token(&mut store, 3, 2025, String::from("tok-one")).unwrap();

    let settings: MonthlySettings = update_settings(
        &mut store,
        3,
        2025,
        SettingsPatch {
            is_published: Some(true),
            public_share_token: None,
        },
    )
    .unwrap();

    assert!(settings.is_published);
    assert_eq!(settings.public_share_token.as_deref(), Some("tok-one"));
}

#[test]
fn test_new_token_invalidates_old_token() {
    let mut store: MemoryStore = MemoryStore::new();
    update_settings(
        &mut store,
        3,
        2025,
        SettingsPatch {
            is_published: Some(true),
            public_share_token: Some(String::from("tok-old")),
        },
    )
    .unwrap();
    assert!(resolve_public_token(&mut store, "tok-old").unwrap().is_some());

    set_share_token(&mut store, 3, 2025, String::from("tok-new")).unwrap();

    assert!(resolve_public_token(&mut store, "tok-old").unwrap().is_none());
    assert!(resolve_public_token(&mut store, "tok-new").unwrap().is_some());
}

#[test]
fn test_unpublished_token_does_not_resolve() {
    let mut store: MemoryStore = MemoryStore::new();
    set_share_token(&mut store, 3, 2025, String::from("tok-one")).unwrap();

    assert!(resolve_public_token(&mut store, "tok-one").unwrap().is_none());

    update_settings(
        &mut store,
        3,
        2025,
        SettingsPatch {
            is_published: Some(true),
            public_share_token: None,
        },
    )
    .unwrap();
    assert!(resolve_public_token(&mut store, "tok-one").unwrap().is_some());
}

#[test]
fn test_unknown_token_does_not_resolve() {
    let mut store: MemoryStore = MemoryStore::new();
    assert!(resolve_public_token(&mut store, "no-such-token").unwrap().is_none());
}

#[test]
fn test_resolved_snapshot_carries_month_data() {
    let mut store: MemoryStore = MemoryStore::new();
    let physician: User = add_user(&mut store, "Dr. A", Role::Physician, 8);
    add_march_schedule(&mut store, physician.id, 5);
    add_march_schedule(&mut store, physician.id, 12);
    // A different month's entry must not leak into the snapshot.
    let learner: User = add_user(&mut store, "Student B", Role::Learner, 8);
    let stray: Schedule = Schedule::new(4, 2025, 5, learner.id, ShiftStatus::Scheduled);
    store.insert_schedule(&stray).unwrap();

    update_settings(
        &mut store,
        3,
        2025,
        SettingsPatch {
            is_published: Some(true),
            public_share_token: Some(String::from("tok-one")),
        },
    )
    .unwrap();

    let snapshot = resolve_public_token(&mut store, "tok-one").unwrap().unwrap();
    assert_eq!(snapshot.schedules.len(), 2);
    assert!(snapshot.schedules.iter().all(|s| s.month == 3));
    assert_eq!(snapshot.users.len(), 2);
    assert_eq!(snapshot.settings.month, 3);
    assert_eq!(snapshot.settings.year, 2025);
}
