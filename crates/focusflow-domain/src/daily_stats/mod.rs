mod repository;
mod snapshot;


pub use repository::DailyStatsRepository;
pub use snapshot::{DailyMetricsSnapshot, DailyStatsUpdate};
