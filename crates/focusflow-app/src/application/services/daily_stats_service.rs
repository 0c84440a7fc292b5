use chrono::NaiveDate;
use log::{debug, info, warn};
use std::sync::Arc;

use super::{MetricsAggregator, UserLocks};
use focusflow_domain::daily_stats::{DailyMetricsSnapshot, DailyStatsRepository, DailyStatsUpdate};
use focusflow_domain::shared::{Clock, DomainError, UserId};

/// Write path for per-day snapshots.
pub struct DailyStatsService {
    stats_repo: Arc<dyn DailyStatsRepository>,
    aggregator: Arc<MetricsAggregator>,
    clock: Arc<dyn Clock>,
    locks: UserLocks,
}

impl DailyStatsService {
    pub fn new(
        stats_repo: Arc<dyn DailyStatsRepository>,
        aggregator: Arc<MetricsAggregator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            stats_repo,
            aggregator,
            clock,
            locks: UserLocks::new(),
        }
    }

    /// Overwrite the given counters on today's snapshot, creating it if absent.
    /// Fields left as `None` keep their stored value.
    pub async fn update_today(
        &self,
        user_id: &UserId,
        update: DailyStatsUpdate,
    ) -> Result<DailyMetricsSnapshot, DomainError> {
        let today = self.clock.today();
        let _guard = self.locks.acquire(user_id).await;

        if update.is_empty() {
            debug!("[daily_stats] empty update user_id={} date={}", user_id, today);
        }

        let mut snapshot = self
            .stats_repo
            .find_by_user_and_date(user_id, today)
            .await?
            .unwrap_or_else(|| DailyMetricsSnapshot::empty(user_id.clone(), today));
        snapshot.apply(&update);

        self.persist(&snapshot).await?;
        Ok(snapshot)
    }

    /// Rebuild the snapshot for `date` from the activity stores.
    pub async fn sync_from_activity(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<DailyMetricsSnapshot, DomainError> {
        let _guard = self.locks.acquire(user_id).await;

        let counts = self.aggregator.collect(user_id, date).await?;
        let snapshot = match self.stats_repo.find_by_user_and_date(user_id, date).await? {
            Some(mut existing) => {
                existing.replace_counts(&counts);
                existing
            }
            None => DailyMetricsSnapshot::from_counts(user_id.clone(), date, &counts),
        };

        self.persist(&snapshot).await?;
        Ok(snapshot)
    }

    async fn persist(&self, snapshot: &DailyMetricsSnapshot) -> Result<(), DomainError> {
        self.stats_repo.save(snapshot).await.inspect_err(|e| {
            warn!(
                "[daily_stats] save failed user_id={} date={} err={}",
                snapshot.user_id(),
                snapshot.date(),
                e
            )
        })?;

        info!(
            "[daily_stats] saved user_id={} date={} tasks={}/{} focus={} water={} goal_met={}",
            snapshot.user_id(),
            snapshot.date(),
            snapshot.tasks_completed(),
            snapshot.tasks_total(),
            snapshot.focus_minutes(),
            snapshot.water_units(),
            snapshot.goal_met()
        );
        Ok(())
    }
}
