use chrono::NaiveDate;
use std::sync::Arc;

use focusflow_domain::daily_stats::{DailyMetricsSnapshot, DailyStatsRepository};
use focusflow_domain::shared::{Clock, DomainError, UserId};

mod range;
mod recompute;

pub use range::{MONTHLY_WINDOW_DAYS, WEEKLY_WINDOW_DAYS};

/// Read-side reporting over persisted daily snapshots.
pub struct DailyStatsQueries {
    stats_repo: Arc<dyn DailyStatsRepository>,
    clock: Arc<dyn Clock>,
}

impl DailyStatsQueries {
    pub fn new(stats_repo: Arc<dyn DailyStatsRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { stats_repo, clock }
    }

    /// Snapshots for the last 7 days, today included
    pub async fn get_weekly_stats(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<DailyMetricsSnapshot>, DomainError> {
        range::stats_for_window(
            self.stats_repo.as_ref(),
            user_id,
            self.clock.today(),
            WEEKLY_WINDOW_DAYS,
        )
        .await
    }

    /// Snapshots for the last 30 days, today included
    pub async fn get_monthly_stats(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<DailyMetricsSnapshot>, DomainError> {
        range::stats_for_window(
            self.stats_repo.as_ref(),
            user_id,
            self.clock.today(),
            MONTHLY_WINDOW_DAYS,
        )
        .await
    }

    /// Consecutive goal-met days ending today, from snapshots alone
    pub async fn recompute_current_streak_from_history(
        &self,
        user_id: &UserId,
    ) -> Result<u32, DomainError> {
        recompute::current_streak_from_history(
            self.stats_repo.as_ref(),
            user_id,
            self.clock.today(),
        )
        .await
    }

    /// Date the reports are anchored on.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
