// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::memory::MemoryStore;
use crate::store::ScheduleStore;
use crate::tests::helpers::{add_march_schedule, add_user, march_candidate};
use crate::validator::validate_candidate;
use rota_domain::{DomainError, Role, User, UserId};

#[test]
fn test_validator_accepts_open_day() {
    let mut store: MemoryStore = MemoryStore::new();
    let physician: User = add_user(&mut store, "Dr. A", Role::Physician, 8);

    let result = validate_candidate(&mut store, &march_candidate(physician.id, 5), &[]);
    assert!(result.is_ok());
}

#[test]
fn test_validator_rejects_unknown_user() {
    let mut store: MemoryStore = MemoryStore::new();
    let ghost: UserId = UserId::new();

    let result = validate_candidate(&mut store, &march_candidate(ghost, 5), &[]);
    assert!(matches!(
        result,
        Err(CoreError::RuleViolation(DomainError::UserNotFound { .. }))
    ));
}

#[test]
fn test_validator_rejects_duplicate_user_day() {
    let mut store: MemoryStore = MemoryStore::new();
    let physician: User = add_user(&mut store, "Dr. A", Role::Physician, 8);
    add_march_schedule(&mut store, physician.id, 5);

    let result = validate_candidate(&mut store, &march_candidate(physician.id, 5), &[]);
    assert!(matches!(
        result,
        Err(CoreError::RuleViolation(
            DomainError::UserAlreadyScheduled { .. }
        ))
    ));
}

#[test]
fn test_validator_rejects_over_monthly_limit() {
    let mut store: MemoryStore = MemoryStore::new();
    let physician: User = add_user(&mut store, "Dr. A", Role::Physician, 1);
    add_march_schedule(&mut store, physician.id, 3);

    let result = validate_candidate(&mut store, &march_candidate(physician.id, 10), &[]);
    assert!(matches!(
        result,
        Err(CoreError::RuleViolation(
            DomainError::MonthlyLimitExceeded { limit: 1, .. }
        ))
    ));
}

#[test]
fn test_validator_rejects_second_physician_on_day() {
    let mut store: MemoryStore = MemoryStore::new();
    let dr_a: User = add_user(&mut store, "Dr. A", Role::Physician, 8);
    let dr_b: User = add_user(&mut store, "Dr. B", Role::Physician, 8);
    add_march_schedule(&mut store, dr_a.id, 5);

    let result = validate_candidate(&mut store, &march_candidate(dr_b.id, 5), &[]);
    assert!(matches!(
        result,
        Err(CoreError::RuleViolation(DomainError::RoleSlotTaken {
            role: Role::Physician
        }))
    ));
}

#[test]
fn test_validator_allows_learner_beside_physician() {
    let mut store: MemoryStore = MemoryStore::new();
    let physician: User = add_user(&mut store, "Dr. A", Role::Physician, 8);
    let learner: User = add_user(&mut store, "Student B", Role::Learner, 8);
    add_march_schedule(&mut store, physician.id, 5);

    let result = validate_candidate(&mut store, &march_candidate(learner.id, 5), &[]);
    assert!(result.is_ok());
}

#[test]
fn test_validator_rejects_second_learner_on_day() {
    let mut store: MemoryStore = MemoryStore::new();
    let learner_a: User = add_user(&mut store, "Student A", Role::Learner, 8);
    let learner_b: User = add_user(&mut store, "Student B", Role::Learner, 8);
    add_march_schedule(&mut store, learner_a.id, 5);

    let result = validate_candidate(&mut store, &march_candidate(learner_b.id, 5), &[]);
    assert!(matches!(
        result,
        Err(CoreError::RuleViolation(DomainError::RoleSlotTaken {
            role: Role::Learner
        }))
    ));
}

#[test]
fn test_validator_exempts_admin_candidates() {
    let mut store: MemoryStore = MemoryStore::new();
    let physician: User = add_user(&mut store, "Dr. A", Role::Physician, 8);
    let learner: User = add_user(&mut store, "Student B", Role::Learner, 8);
    let admin: User = add_user(&mut store, "Chief C", Role::Admin, 8);
    add_march_schedule(&mut store, physician.id, 5);
    add_march_schedule(&mut store, learner.id, 5);

    // A fully occupied clinical day still accepts an admin.
    let result = validate_candidate(&mut store, &march_candidate(admin.id, 5), &[]);
    assert!(result.is_ok());
}

#[test]
fn test_validator_exempts_admin_rows_from_blocking() {
    let mut store: MemoryStore = MemoryStore::new();
    let admin: User = add_user(&mut store, "Chief C", Role::Admin, 8);
    let physician: User = add_user(&mut store, "Dr. A", Role::Physician, 8);
    add_march_schedule(&mut store, admin.id, 5);

    let result = validate_candidate(&mut store, &march_candidate(physician.id, 5), &[]);
    assert!(result.is_ok());
}

#[test]
fn test_validator_exclusion_hides_own_row() {
    let mut store: MemoryStore = MemoryStore::new();
    let physician: User = add_user(&mut store, "Dr. A", Role::Physician, 1);
    let existing = add_march_schedule(&mut store, physician.id, 5);

    // Without exclusion the row conflicts with itself on both the
    // duplicate-day and monthly-limit checks.
    assert!(validate_candidate(&mut store, &march_candidate(physician.id, 5), &[]).is_err());

    // Excluded, the same candidate is legal.
    let result = validate_candidate(&mut store, &march_candidate(physician.id, 5), &[existing.id]);
    assert!(result.is_ok());
}

#[test]
fn test_validator_is_side_effect_free() {
    let mut store: MemoryStore = MemoryStore::new();
    let physician: User = add_user(&mut store, "Dr. A", Role::Physician, 8);

    validate_candidate(&mut store, &march_candidate(physician.id, 5), &[]).unwrap();

    assert!(store.schedules_for_month(3, 2025).unwrap().is_empty());
}
