use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use focusflow_domain::streak::StreakRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakDto {
    pub user_id: String,
    pub current_streak: u32,
    pub best_streak: u32,
    pub last_successful_date: NaiveDate,
    pub updated_at: DateTime<Utc>,
}

impl From<&StreakRecord> for StreakDto {
    fn from(record: &StreakRecord) -> Self {
        Self {
            user_id: record.user_id().as_str().to_string(),
            current_streak: record.current_streak(),
            best_streak: record.best_streak(),
            last_successful_date: record.last_successful_date(),
            updated_at: record.updated_at(),
        }
    }
}

/// Streak length derived from persisted daily snapshots alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakRecomputeDto {
    pub user_id: String,
    pub as_of: NaiveDate,
    pub current_streak: u32,
}
