mod daily_stats_service;
mod dashboard_service;
mod metrics_aggregator;
mod streak_service;
mod user_locks;

pub use daily_stats_service::DailyStatsService;
pub use dashboard_service::DashboardService;
pub use metrics_aggregator::MetricsAggregator;
pub use streak_service::StreakService;
pub use user_locks::UserLocks;
