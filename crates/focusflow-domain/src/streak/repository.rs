use async_trait::async_trait;
use chrono::NaiveDate;

use super::StreakRecord;
use crate::shared::{DomainError, UserId};

#[async_trait]
pub trait StreakRepository: Send + Sync {
    /// Load the user's record, if one was ever saved.
    async fn load(&self, user_id: &UserId) -> Result<Option<StreakRecord>, DomainError>;

    /// Conditional write of the user's record.
    ///
    /// Succeeds only if the stored revision still equals `record.version()`
    /// (no row at all for version 0). Otherwise returns
    /// [`DomainError::Conflict`] and writes nothing; the caller reloads and
    /// re-applies. The stored revision becomes `record.version() + 1`.
    async fn save(&self, record: &StreakRecord) -> Result<(), DomainError>;

    /// Load the user's record, or the "no history" default relative to `today`.
    ///
    /// The default is not persisted here; it is written on the next `save`.
    async fn load_or_default(
        &self,
        user_id: &UserId,
        today: NaiveDate,
    ) -> Result<StreakRecord, DomainError> {
        Ok(self
            .load(user_id)
            .await?
            .unwrap_or_else(|| StreakRecord::new(user_id.clone(), today)))
    }
}
