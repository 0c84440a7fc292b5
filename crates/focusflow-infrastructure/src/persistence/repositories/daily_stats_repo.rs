use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::{format_date, parse_date, to_counter};
use crate::persistence::SqliteRepositoryBase;
use focusflow_domain::daily_stats::{DailyMetricsSnapshot, DailyStatsRepository};
use focusflow_domain::shared::{DomainError, UserId};

const SELECT_COLUMNS: &str = r#"
    SELECT user_id, date, tasks_completed, tasks_total, focus_minutes, water_units, created_at
    FROM daily_stats
"#;

#[derive(FromRow)]
struct DailyStatsRow {
    user_id: String,
    date: String,
    tasks_completed: i64,
    tasks_total: i64,
    focus_minutes: i64,
    water_units: i64,
    created_at: DateTime<Utc>,
}

impl DailyStatsRow {
    fn try_into_snapshot(self) -> Result<DailyMetricsSnapshot, DomainError> {
        Ok(DailyMetricsSnapshot::restore(
            UserId::from_string(&self.user_id),
            parse_date(&self.date, "date")?,
            to_counter(self.tasks_completed, "tasks_completed")?,
            to_counter(self.tasks_total, "tasks_total")?,
            to_counter(self.focus_minutes, "focus_minutes")?,
            to_counter(self.water_units, "water_units")?,
            self.created_at,
        ))
    }
}

pub struct SqliteDailyStatsRepository {
    base: SqliteRepositoryBase,
}

impl SqliteDailyStatsRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }

    fn collect(rows: Vec<DailyStatsRow>) -> Result<Vec<DailyMetricsSnapshot>, DomainError> {
        rows.into_iter().map(|r| r.try_into_snapshot()).collect()
    }
}

#[async_trait]
impl DailyStatsRepository for SqliteDailyStatsRepository {
    async fn save(&self, snapshot: &DailyMetricsSnapshot) -> Result<(), DomainError> {
        // goal_met is materialised for ad-hoc queries; reads always recompute it.
        let query = r#"
            INSERT INTO daily_stats (
                user_id,
                date,
                tasks_completed,
                tasks_total,
                focus_minutes,
                water_units,
                goal_met,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT(user_id, date) DO UPDATE SET
                tasks_completed = ?3,
                tasks_total = ?4,
                focus_minutes = ?5,
                water_units = ?6,
                goal_met = ?7,
                updated_at = ?9
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(snapshot.user_id().as_str())
                    .bind(format_date(snapshot.date()))
                    .bind(i64::from(snapshot.tasks_completed()))
                    .bind(i64::from(snapshot.tasks_total()))
                    .bind(i64::from(snapshot.focus_minutes()))
                    .bind(i64::from(snapshot.water_units()))
                    .bind(snapshot.goal_met())
                    .bind(snapshot.created_at())
                    .bind(Utc::now()),
                "Save daily stats",
            )
            .await?;

        Ok(())
    }

    async fn find_by_user_and_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DailyMetricsSnapshot>, DomainError> {
        let query = format!("{} WHERE user_id = ?1 AND date = ?2 LIMIT 1", SELECT_COLUMNS);

        let row: Option<DailyStatsRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query)
                    .bind(user_id.as_str())
                    .bind(format_date(date)),
                "Find daily stats by user and date",
            )
            .await?;

        row.map(|r| r.try_into_snapshot()).transpose()
    }

    async fn find_by_user_and_date_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<DailyMetricsSnapshot>, DomainError> {
        let query = format!(
            "{} WHERE user_id = ?1 AND date >= ?2 AND date <= ?3 ORDER BY date ASC",
            SELECT_COLUMNS
        );

        let rows: Vec<DailyStatsRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query)
                    .bind(user_id.as_str())
                    .bind(format_date(start_date))
                    .bind(format_date(end_date)),
                "Find daily stats in range",
            )
            .await?;

        Self::collect(rows)
    }

    async fn find_all_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<DailyMetricsSnapshot>, DomainError> {
        let query = format!("{} WHERE user_id = ?1 ORDER BY date ASC", SELECT_COLUMNS);

        let rows: Vec<DailyStatsRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(user_id.as_str()),
                "Find all daily stats",
            )
            .await?;

        Self::collect(rows)
    }
}
