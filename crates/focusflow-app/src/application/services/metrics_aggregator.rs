use chrono::NaiveDate;
use log::{debug, warn};
use std::sync::Arc;

use focusflow_domain::activity::{
    DailyActivityCounts, FocusSessionRepository, TaskRepository, WaterIntakeRepository,
};
use focusflow_domain::shared::{DomainError, UserId};

/// Reduces one user's raw activity for a date to the three goal counters.
///
/// Every call re-reads the stores. The three reads run concurrently and
/// together form the point-in-time view used for one request.
pub struct MetricsAggregator {
    task_repo: Arc<dyn TaskRepository>,
    focus_session_repo: Arc<dyn FocusSessionRepository>,
    water_intake_repo: Arc<dyn WaterIntakeRepository>,
}

impl MetricsAggregator {
    pub fn new(
        task_repo: Arc<dyn TaskRepository>,
        focus_session_repo: Arc<dyn FocusSessionRepository>,
        water_intake_repo: Arc<dyn WaterIntakeRepository>,
    ) -> Self {
        Self {
            task_repo,
            focus_session_repo,
            water_intake_repo,
        }
    }

    pub async fn collect(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<DailyActivityCounts, DomainError> {
        let (tasks, sessions, intakes) = futures::try_join!(
            self.task_repo.list_for_user_on_date(user_id, date),
            self.focus_session_repo.list_for_user_on_date(user_id, date),
            self.water_intake_repo.list_for_user_on_date(user_id, date),
        )
        .inspect_err(|e| {
            warn!(
                "[metrics] activity read failed user_id={} date={} err={}",
                user_id, date, e
            )
        })?;

        let reduction = DailyActivityCounts::reduce(&tasks, &sessions, &intakes);
        if reduction.clamped_entries > 0 {
            warn!(
                "[metrics] clamped negative amounts user_id={} date={} entries={}",
                user_id, date, reduction.clamped_entries
            );
        }

        let counts = reduction.counts;
        debug!(
            "[metrics] collected user_id={} date={} tasks={}/{} focus={} water={}",
            user_id,
            date,
            counts.tasks_completed,
            counts.tasks_total,
            counts.focus_minutes,
            counts.water_units
        );

        Ok(counts)
    }
}
