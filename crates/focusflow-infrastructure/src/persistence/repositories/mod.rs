use chrono::NaiveDate;

use focusflow_domain::shared::DomainError;

pub mod activity_repos;
pub mod daily_stats_repo;
pub mod streak_repo;

pub use activity_repos::{
    SqliteFocusSessionRepository, SqliteTaskRepository, SqliteWaterIntakeRepository,
};
pub use daily_stats_repo::SqliteDailyStatsRepository;
pub use streak_repo::SqliteStreakRepository;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn parse_date(value: &str, column: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| DomainError::DataIntegrity(format!("Invalid {}: {} ({})", column, value, e)))
}

/// Counters are stored as INTEGER; a negative one means the row was written
/// outside this crate and is rejected rather than reinterpreted.
pub(crate) fn to_counter(value: i64, column: &str) -> Result<u32, DomainError> {
    u32::try_from(value)
        .map_err(|_| DomainError::DataIntegrity(format!("Invalid {}: {}", column, value)))
}
