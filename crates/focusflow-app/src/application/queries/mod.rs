mod daily_stats_queries;

pub use daily_stats_queries::{DailyStatsQueries, MONTHLY_WINDOW_DAYS, WEEKLY_WINDOW_DAYS};
