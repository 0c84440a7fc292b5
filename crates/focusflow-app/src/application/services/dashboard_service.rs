use log::info;
use std::sync::Arc;

use super::{MetricsAggregator, StreakService};
use crate::application::dtos::DashboardSummaryDto;
use focusflow_domain::shared::{Clock, DomainError, UserId};

pub struct DashboardService {
    aggregator: Arc<MetricsAggregator>,
    streak_service: Arc<StreakService>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(
        aggregator: Arc<MetricsAggregator>,
        streak_service: Arc<StreakService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            aggregator,
            streak_service,
            clock,
        }
    }

    /// Today's counters plus the streak after advancing it.
    ///
    /// The goal is evaluated once from a single read of the counters and
    /// handed to the ledger, so the summary and the streak always agree.
    pub async fn compute_today_summary(
        &self,
        user_id: &UserId,
    ) -> Result<DashboardSummaryDto, DomainError> {
        let today = self.clock.today();

        let counts = self.aggregator.collect(user_id, today).await?;
        let streak = self
            .streak_service
            .advance_with_goal(user_id, today, counts.goal_met())
            .await?;

        let summary = DashboardSummaryDto::from_parts(today, &counts, &streak);

        info!(
            "[dashboard] summary user_id={} date={} goal_met={} current={} best={}",
            user_id, today, summary.goal_met, summary.current_streak, summary.best_streak
        );

        Ok(summary)
    }
}
