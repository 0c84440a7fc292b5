use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::DailyActivityCounts;
use crate::goal::DailyGoal;
use crate::shared::UserId;

/// Persisted per-user, per-date rollup of the three goal counters.
///
/// `goal_met` is derived from the counters on every mutation and on restore;
/// there is no way to set it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetricsSnapshot {
    user_id: UserId,
    date: NaiveDate,
    tasks_completed: u32,
    tasks_total: u32,
    focus_minutes: u32,
    water_units: u32,
    goal_met: bool,
    created_at: DateTime<Utc>,
}

/// Partial update of a snapshot. `None` leaves a counter untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatsUpdate {
    pub tasks_completed: Option<u32>,
    pub tasks_total: Option<u32>,
    pub focus_minutes: Option<u32>,
    pub water_units: Option<u32>,
}

impl DailyStatsUpdate {
    pub fn is_empty(&self) -> bool {
        self.tasks_completed.is_none()
            && self.tasks_total.is_none()
            && self.focus_minutes.is_none()
            && self.water_units.is_none()
    }
}

impl DailyMetricsSnapshot {
    /// Empty snapshot for a date with nothing recorded yet.
    pub fn empty(user_id: UserId, date: NaiveDate) -> Self {
        Self::restore(user_id, date, 0, 0, 0, 0, Utc::now())
    }

    /// Snapshot taken from the activity stores' counters for `date`.
    pub fn from_counts(user_id: UserId, date: NaiveDate, counts: &DailyActivityCounts) -> Self {
        Self::restore(
            user_id,
            date,
            counts.tasks_completed,
            counts.tasks_total,
            counts.focus_minutes,
            counts.water_units,
            Utc::now(),
        )
    }

    /// Restore from persistence; the goal flag is recomputed, not trusted.
    pub fn restore(
        user_id: UserId,
        date: NaiveDate,
        tasks_completed: u32,
        tasks_total: u32,
        focus_minutes: u32,
        water_units: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut snapshot = Self {
            user_id,
            date,
            tasks_completed,
            tasks_total,
            focus_minutes,
            water_units,
            goal_met: false,
            created_at,
        };
        snapshot.refresh_goal();
        snapshot
    }

    pub fn apply(&mut self, update: &DailyStatsUpdate) {
        if let Some(v) = update.tasks_completed {
            self.tasks_completed = v;
        }
        if let Some(v) = update.tasks_total {
            self.tasks_total = v;
        }
        if let Some(v) = update.focus_minutes {
            self.focus_minutes = v;
        }
        if let Some(v) = update.water_units {
            self.water_units = v;
        }
        self.refresh_goal();
    }

    /// Overwrite all counters with freshly aggregated ones, keeping `created_at`.
    pub fn replace_counts(&mut self, counts: &DailyActivityCounts) {
        self.tasks_completed = counts.tasks_completed;
        self.tasks_total = counts.tasks_total;
        self.focus_minutes = counts.focus_minutes;
        self.water_units = counts.water_units;
        self.refresh_goal();
    }

    fn refresh_goal(&mut self) {
        self.goal_met =
            DailyGoal::STANDARD.is_met(self.tasks_completed, self.focus_minutes, self.water_units);
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn tasks_completed(&self) -> u32 {
        self.tasks_completed
    }

    pub fn tasks_total(&self) -> u32 {
        self.tasks_total
    }

    pub fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    pub fn water_units(&self) -> u32 {
        self.water_units
    }

    pub fn goal_met(&self) -> bool {
        self.goal_met
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
