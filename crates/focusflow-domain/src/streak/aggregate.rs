use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::UserId;

/// Per-user streak ledger. One record per user, mutated in place.
///
/// Invariants:
/// - `best_streak >= current_streak`
/// - `best_streak` never decreases
/// - `last_successful_date` only moves forward and never past the date
///   passed to [`StreakRecord::advance`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakRecord {
    user_id: UserId,
    current_streak: u32,
    best_streak: u32,
    last_successful_date: NaiveDate,
    updated_at: DateTime<Utc>,
    /// Store revision this record was read at. 0 until first saved.
    version: u64,
}

/// What a single `advance` call did to the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakOutcome {
    /// The streak was zeroed because a full day was skipped.
    pub reset: bool,
    /// Today was credited and the streak grew by one.
    pub credited: bool,
}

impl StreakOutcome {
    pub fn is_unchanged(&self) -> bool {
        !self.reset && !self.credited
    }
}

impl StreakRecord {
    /// Default state for a user with no history.
    ///
    /// The last success is placed two days back so the first evaluation sees
    /// yesterday as absent rather than as a break from an undefined date.
    pub fn new(user_id: UserId, today: NaiveDate) -> Self {
        Self {
            user_id,
            current_streak: 0,
            best_streak: 0,
            last_successful_date: today - Duration::days(2),
            updated_at: Utc::now(),
            version: 0,
        }
    }

    /// Restore a record from persistence
    pub fn restore(
        user_id: UserId,
        current_streak: u32,
        best_streak: u32,
        last_successful_date: NaiveDate,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            current_streak,
            best_streak: best_streak.max(current_streak),
            last_successful_date,
            updated_at,
            version: 0,
        }
    }

    /// Attach the store revision a restored record was read at.
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Called by the owner after a successful conditional save.
    pub fn mark_saved(&mut self) {
        self.version += 1;
    }

    /// Apply the daily transition rule for `today`.
    ///
    /// The reset check and the credit check run independently, in that order.
    /// A success exactly yesterday keeps the streak alive but does not grow
    /// it; growth needs `goal_met` for today. Once today is credited further
    /// calls on the same date change nothing.
    pub fn advance(&mut self, today: NaiveDate, goal_met: bool) -> StreakOutcome {
        let mut outcome = StreakOutcome {
            reset: false,
            credited: false,
        };

        let yesterday = today - Duration::days(1);
        if self.last_successful_date < yesterday && self.current_streak != 0 {
            self.current_streak = 0;
            outcome.reset = true;
        }

        if self.last_successful_date < today && goal_met {
            self.current_streak = self.current_streak.saturating_add(1);
            self.last_successful_date = today;
            self.best_streak = self.best_streak.max(self.current_streak);
            outcome.credited = true;
        }

        if !outcome.is_unchanged() {
            self.updated_at = Utc::now();
        }

        outcome
    }

    /// True once `date` (or a later day) has been credited.
    pub fn is_credited_on(&self, date: NaiveDate) -> bool {
        self.last_successful_date >= date
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn last_successful_date(&self) -> NaiveDate {
        self.last_successful_date
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
