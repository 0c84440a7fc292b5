use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::{format_date, parse_date, to_counter};
use crate::persistence::SqliteRepositoryBase;
use focusflow_domain::shared::{DomainError, UserId};
use focusflow_domain::streak::{StreakRecord, StreakRepository};

#[derive(FromRow)]
struct StreakRow {
    user_id: String,
    current_streak: i64,
    best_streak: i64,
    last_successful_date: String,
    updated_at: DateTime<Utc>,
    version: i64,
}

impl StreakRow {
    fn try_into_record(self) -> Result<StreakRecord, DomainError> {
        Ok(StreakRecord::restore(
            UserId::from_string(&self.user_id),
            to_counter(self.current_streak, "current_streak")?,
            to_counter(self.best_streak, "best_streak")?,
            parse_date(&self.last_successful_date, "last_successful_date")?,
            self.updated_at,
        )
        .with_version(to_version(self.version)?))
    }
}

pub struct SqliteStreakRepository {
    base: SqliteRepositoryBase,
}

impl SqliteStreakRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl StreakRepository for SqliteStreakRepository {
    async fn load(&self, user_id: &UserId) -> Result<Option<StreakRecord>, DomainError> {
        let query = r#"
            SELECT user_id, current_streak, best_streak, last_successful_date, updated_at, version
            FROM user_streaks
            WHERE user_id = ?1
        "#;

        let row: Option<StreakRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(query).bind(user_id.as_str()),
                "Load streak by user ID",
            )
            .await?;

        row.map(|r| r.try_into_record()).transpose()
    }

    async fn save(&self, record: &StreakRecord) -> Result<(), DomainError> {
        let expected = record.version();

        // Version 0 means the caller started from the default record, so the
        // row must not exist yet. Otherwise the row must still be at the
        // revision the caller read.
        let result = if expected == 0 {
            let query = r#"
                INSERT INTO user_streaks (user_id, current_streak, best_streak, last_successful_date, updated_at, version)
                VALUES (?1, ?2, ?3, ?4, ?5, 1)
                ON CONFLICT(user_id) DO NOTHING
            "#;

            self.base
                .execute(
                    sqlx::query(query)
                        .bind(record.user_id().as_str())
                        .bind(i64::from(record.current_streak()))
                        .bind(i64::from(record.best_streak()))
                        .bind(format_date(record.last_successful_date()))
                        .bind(record.updated_at()),
                    "Insert streak",
                )
                .await?
        } else {
            let query = r#"
                UPDATE user_streaks SET
                    current_streak = ?2,
                    best_streak = ?3,
                    last_successful_date = ?4,
                    updated_at = ?5,
                    version = version + 1
                WHERE user_id = ?1 AND version = ?6
            "#;

            self.base
                .execute(
                    sqlx::query(query)
                        .bind(record.user_id().as_str())
                        .bind(i64::from(record.current_streak()))
                        .bind(i64::from(record.best_streak()))
                        .bind(format_date(record.last_successful_date()))
                        .bind(record.updated_at())
                        .bind(from_version(expected)?),
                    "Update streak",
                )
                .await?
        };

        if result.rows_affected() == 0 {
            return Err(DomainError::Conflict(format!(
                "user_streaks row for {} changed since version {}",
                record.user_id(),
                expected
            )));
        }

        Ok(())
    }
}

fn to_version(value: i64) -> Result<u64, DomainError> {
    u64::try_from(value)
        .map_err(|_| DomainError::DataIntegrity(format!("Invalid version: {}", value)))
}

fn from_version(value: u64) -> Result<i64, DomainError> {
    i64::try_from(value)
        .map_err(|_| DomainError::DataIntegrity(format!("Invalid version: {}", value)))
}
