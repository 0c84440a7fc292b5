use async_trait::async_trait;
use chrono::NaiveDate;

use super::{FocusSessionRecord, TaskRecord, WaterIntakeRecord};
use crate::shared::{DomainError, UserId};

/// Read path into the task subsystem.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Tasks scheduled for `date`. An empty list is not an error.
    async fn list_for_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<TaskRecord>, DomainError>;
}

/// Read path into the focus-session subsystem.
#[async_trait]
pub trait FocusSessionRepository: Send + Sync {
    async fn list_for_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<FocusSessionRecord>, DomainError>;
}

/// Read path into the water-intake subsystem.
#[async_trait]
pub trait WaterIntakeRepository: Send + Sync {
    async fn list_for_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<WaterIntakeRecord>, DomainError>;
}
