// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::StoreError;
use rota_domain::DomainError;

/// Errors that can occur inside the scheduling engine.
///
/// Rule violations are expected, recoverable, user-facing conditions;
/// store failures are server-side faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A scheduling rule was violated.
    RuleViolation(DomainError),
    /// The entity store failed.
    Store(StoreError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RuleViolation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::RuleViolation(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
