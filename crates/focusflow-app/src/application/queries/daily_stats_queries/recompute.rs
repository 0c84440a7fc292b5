use chrono::{Duration, NaiveDate};
use log::info;
use std::collections::HashMap;

use focusflow_domain::daily_stats::{DailyMetricsSnapshot, DailyStatsRepository};
use focusflow_domain::shared::{DomainError, UserId};

pub(super) async fn current_streak_from_history(
    repo: &dyn DailyStatsRepository,
    user_id: &UserId,
    today: NaiveDate,
) -> Result<u32, DomainError> {
    let snapshots = repo.find_all_by_user(user_id).await?;
    let streak = count_consecutive_met_days(today, &snapshots);

    info!(
        "[stats] recompute user_id={} as_of={} snapshots={} current={}",
        user_id,
        today,
        snapshots.len(),
        streak
    );

    Ok(streak)
}

/// Walk back from `today` inclusive; stop at the first day with no snapshot
/// or an unmet goal. Snapshots after `today` are ignored.
fn count_consecutive_met_days(today: NaiveDate, snapshots: &[DailyMetricsSnapshot]) -> u32 {
    let by_date: HashMap<NaiveDate, bool> = snapshots
        .iter()
        .filter(|s| s.date() <= today)
        .map(|s| (s.date(), s.goal_met()))
        .collect();

    let mut streak = 0u32;
    let mut cursor = today;
    while by_date.get(&cursor).copied().unwrap_or(false) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}
