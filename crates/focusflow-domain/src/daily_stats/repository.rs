use async_trait::async_trait;
use chrono::NaiveDate;

use super::DailyMetricsSnapshot;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait DailyStatsRepository: Send + Sync {
    /// Upsert the snapshot keyed by `(user_id, date)`.
    async fn save(&self, snapshot: &DailyMetricsSnapshot) -> Result<(), DomainError>;

    async fn find_by_user_and_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DailyMetricsSnapshot>, DomainError>;

    /// Snapshots with `start_date <= date <= end_date`. Ordering is not part
    /// of the contract.
    async fn find_by_user_and_date_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<DailyMetricsSnapshot>, DomainError>;

    async fn find_all_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<DailyMetricsSnapshot>, DomainError>;
}
