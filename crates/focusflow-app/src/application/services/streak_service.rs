use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;

use super::{MetricsAggregator, UserLocks};
use focusflow_domain::shared::{Clock, DomainError, UserId};
use focusflow_domain::streak::{StreakRecord, StreakRepository};

/// Conditional saves attempted before a conflict is handed back.
const MAX_SAVE_ATTEMPTS: u32 = 3;

/// Advances and persists the per-user streak ledger.
///
/// Each call is load-or-default, one `StreakRecord::advance`, then a
/// conditional save at the revision that was loaded. Within this process the
/// sequence runs under the user's lock. Across processes sharing one
/// database the save itself is the guard: a stale save returns
/// `DomainError::Conflict`, and the sequence is re-run from a fresh load.
///
/// A failed save is returned as-is and the mutated record is dropped.
pub struct StreakService {
    streak_repo: Arc<dyn StreakRepository>,
    aggregator: Arc<MetricsAggregator>,
    clock: Arc<dyn Clock>,
    locks: UserLocks,
}

impl StreakService {
    pub fn new(
        streak_repo: Arc<dyn StreakRepository>,
        aggregator: Arc<MetricsAggregator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            streak_repo,
            aggregator,
            clock,
            locks: UserLocks::new(),
        }
    }

    /// Advance for the clock's today.
    pub async fn get_and_update(&self, user_id: &UserId) -> Result<StreakRecord, DomainError> {
        self.advance(user_id, self.clock.today()).await
    }

    /// Advance for `today`, reading today's goal from the activity stores.
    pub async fn advance(
        &self,
        user_id: &UserId,
        today: NaiveDate,
    ) -> Result<StreakRecord, DomainError> {
        self.update(user_id, today, None).await
    }

    /// Advance for `today` with a goal result the caller already computed.
    pub async fn advance_with_goal(
        &self,
        user_id: &UserId,
        today: NaiveDate,
        goal_met: bool,
    ) -> Result<StreakRecord, DomainError> {
        self.update(user_id, today, Some(goal_met)).await
    }

    async fn update(
        &self,
        user_id: &UserId,
        today: NaiveDate,
        known_goal: Option<bool>,
    ) -> Result<StreakRecord, DomainError> {
        let _guard = self.locks.acquire(user_id).await;
        let mut goal_met = known_goal;
        let mut attempt = 1;

        loop {
            let record = self.streak_repo.load_or_default(user_id, today).await?;

            let goal = match goal_met {
                Some(goal) => goal,
                // Once today is credited the counters cannot change the outcome.
                None if record.is_credited_on(today) => false,
                None => {
                    let goal = self.aggregator.collect(user_id, today).await?.goal_met();
                    goal_met = Some(goal);
                    goal
                }
            };

            match self.apply_and_save(record, today, goal).await {
                Err(DomainError::Conflict(msg)) if attempt < MAX_SAVE_ATTEMPTS => {
                    info!(
                        "[streak] reload after concurrent update user_id={} date={} attempt={} reason={}",
                        user_id, today, attempt, msg
                    );
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn apply_and_save(
        &self,
        mut record: StreakRecord,
        today: NaiveDate,
        goal_met: bool,
    ) -> Result<StreakRecord, DomainError> {
        let outcome = record.advance(today, goal_met);

        self.streak_repo.save(&record).await.inspect_err(|e| {
            warn!(
                "[streak] save failed user_id={} date={} version={} err={}",
                record.user_id(),
                today,
                record.version(),
                e
            )
        })?;
        record.mark_saved();

        info!(
            "[streak] advance user_id={} date={} reset={} credited={} current={} best={} last_success={}",
            record.user_id(),
            today,
            outcome.reset,
            outcome.credited,
            record.current_streak(),
            record.best_streak(),
            record.last_successful_date()
        );

        Ok(record)
    }
}
