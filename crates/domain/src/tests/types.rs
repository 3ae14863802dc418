// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Role, Schedule, ScheduleId, ShiftStatus, User, UserId};
use std::str::FromStr;

#[test]
fn test_role_round_trips_through_strings() {
    for role in [Role::Physician, Role::Learner, Role::Admin] {
        let parsed: Role = Role::from_str(role.as_str()).unwrap();
        assert_eq!(parsed, role);
    }
}

#[test]
fn test_role_rejects_unknown_string() {
    let result: Result<Role, DomainError> = Role::from_str("nurse");
    assert!(matches!(result, Err(DomainError::InvalidRole(_))));
}

#[test]
fn test_role_serde_uses_lowercase() {
    let json: String = serde_json::to_string(&Role::Physician).unwrap();
    assert_eq!(json, "\"physician\"");
}

#[test]
fn test_shift_status_round_trips_through_strings() {
    for status in [
        ShiftStatus::Scheduled,
        ShiftStatus::Available,
        ShiftStatus::Unavailable,
    ] {
        let parsed: ShiftStatus = ShiftStatus::from_str(status.as_str()).unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_shift_status_defaults_to_scheduled() {
    assert_eq!(ShiftStatus::default(), ShiftStatus::Scheduled);
}

#[test]
fn test_user_id_parse_accepts_uuid_strings() {
    let id: UserId = UserId::new();
    let parsed: UserId = UserId::parse(&id.to_string()).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn test_user_id_parse_rejects_non_uuid() {
    let result: Result<ScheduleId, DomainError> = ScheduleId::parse("not-a-uuid");
    assert!(matches!(result, Err(DomainError::InvalidId(_))));
}

#[test]
fn test_new_user_starts_active() {
    let user: User = User::new(
        String::from("Dr. Chen"),
        String::from("555-123-4567"),
        Role::Physician,
        8,
    );

    assert!(user.is_active);
    assert_eq!(user.monthly_shift_limit, 8);
}

#[test]
fn test_new_schedule_keeps_given_slot() {
    let user_id: UserId = UserId::new();
    let schedule: Schedule = Schedule::new(3, 2025, 5, user_id, ShiftStatus::Scheduled);

    assert_eq!(schedule.month, 3);
    assert_eq!(schedule.year, 2025);
    assert_eq!(schedule.day, 5);
    assert_eq!(schedule.user_id, user_id);
}

#[test]
fn test_schedule_ids_are_unique() {
    let a: ScheduleId = ScheduleId::new();
    let b: ScheduleId = ScheduleId::new();
    assert_ne!(a, b);
}
