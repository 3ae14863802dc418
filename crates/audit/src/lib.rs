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
    clippy::all
)]

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use rota_domain::{DomainError, ScheduleId, TradeId, UserId};

/// The kind of trade that was executed.
///
/// Trades execute immediately and unilaterally; these records are an
/// append-only history written after the fact, never a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeKind {
    /// A single schedule entry moved to a new owner.
    Reassign,
    /// Two schedule entries exchanged owners.
    Swap,
}

impl TradeKind {
    /// Returns the string representation of this trade kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reassign => "reassign",
            Self::Swap => "swap",
        }
    }

    /// Parses a trade kind from a string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTradeKind` if the string is not
    /// recognized.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "reassign" => Ok(Self::Reassign),
            "swap" => Ok(Self::Swap),
            _ => Err(DomainError::InvalidTradeKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for TradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable record of an executed trade.
///
/// Every successful reassign or swap appends exactly one record. Records
/// capture who gave up coverage, who took it on, and which day-slots were
/// involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    /// Canonical identifier.
    pub trade_id: TradeId,
    /// What kind of trade was executed.
    pub kind: TradeKind,
    /// The prior owner (reassign) or owner of the first entry (swap).
    pub from_user: UserId,
    /// The new owner (reassign) or owner of the second entry (swap).
    pub to_user: UserId,
    /// The schedule entries involved: one for reassign, two for swap.
    pub schedule_ids: Vec<ScheduleId>,
    /// Month the trade is filed under: the moved entry's month for a
    /// reassign, the first entry's month for a swap. A swap spanning two
    /// months appears only in the first entry's history.
    pub month: u8,
    /// Year the trade is filed under, keyed like `month`.
    pub year: u16,
    /// When the trade executed.
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
}

impl TradeRecord {
    /// Creates a record for an executed reassignment.
    #[must_use]
    pub fn reassign(
        from_user: UserId,
        to_user: UserId,
        schedule_id: ScheduleId,
        month: u8,
        year: u16,
    ) -> Self {
        Self {
            trade_id: TradeId::new(),
            kind: TradeKind::Reassign,
            from_user,
            to_user,
            schedule_ids: vec![schedule_id],
            month,
            year,
            occurred_at: OffsetDateTime::now_utc(),
        }
    }

    /// Creates a record for an executed swap.
    #[must_use]
    pub fn swap(
        from_user: UserId,
        to_user: UserId,
        schedule_a: ScheduleId,
        schedule_b: ScheduleId,
        month: u8,
        year: u16,
    ) -> Self {
        Self {
            trade_id: TradeId::new(),
            kind: TradeKind::Swap,
            from_user,
            to_user,
            schedule_ids: vec![schedule_a, schedule_b],
            month,
            year,
            occurred_at: OffsetDateTime::now_utc(),
        }
    }
}
