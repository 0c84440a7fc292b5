use chrono::{Duration, NaiveDate};
use log::info;

use focusflow_domain::daily_stats::{DailyMetricsSnapshot, DailyStatsRepository};
use focusflow_domain::shared::{DomainError, UserId};

pub const WEEKLY_WINDOW_DAYS: u32 = 7;
pub const MONTHLY_WINDOW_DAYS: u32 = 30;

/// Inclusive `[today - days + 1, today]`.
pub(super) fn window_bounds(today: NaiveDate, days: u32) -> (NaiveDate, NaiveDate) {
    let span = i64::from(days.max(1)) - 1;
    (today - Duration::days(span), today)
}

pub(super) async fn stats_for_window(
    repo: &dyn DailyStatsRepository,
    user_id: &UserId,
    today: NaiveDate,
    days: u32,
) -> Result<Vec<DailyMetricsSnapshot>, DomainError> {
    let (start, end) = window_bounds(today, days);
    let rows = repo
        .find_by_user_and_date_range(user_id, start, end)
        .await?;

    info!(
        "[stats] range user_id={} days={} start={} end={} rows={}",
        user_id,
        days,
        start,
        end,
        rows.len()
    );

    Ok(rows)
}
