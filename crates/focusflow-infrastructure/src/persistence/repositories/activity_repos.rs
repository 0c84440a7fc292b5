//! Read-only adapters over the task, focus-session and water-intake tables.
//! Those tables are written by the logging subsystems, not by this crate.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::{format_date, parse_date};
use crate::persistence::SqliteRepositoryBase;
use focusflow_domain::activity::{
    FocusSessionRecord, FocusSessionRepository, TaskRecord, TaskRepository, WaterIntakeRecord,
    WaterIntakeRepository,
};
use focusflow_domain::shared::{DomainError, FocusSessionId, TaskId, UserId, WaterIntakeId};

#[derive(FromRow)]
struct TaskRow {
    id: String,
    user_id: String,
    title: String,
    status: String,
    date: String,
}

impl TaskRow {
    fn try_into_record(self) -> Result<TaskRecord, DomainError> {
        Ok(TaskRecord {
            id: TaskId::from_string(&self.id),
            user_id: UserId::from_string(&self.user_id),
            title: self.title,
            status: self.status.parse()?,
            date: parse_date(&self.date, "date")?,
        })
    }
}

#[derive(FromRow)]
struct FocusSessionRow {
    id: String,
    user_id: String,
    task_id: Option<String>,
    date: String,
    duration_minutes: Option<i64>,
    active: bool,
}

impl FocusSessionRow {
    fn try_into_record(self) -> Result<FocusSessionRecord, DomainError> {
        Ok(FocusSessionRecord {
            id: FocusSessionId::from_string(&self.id),
            user_id: UserId::from_string(&self.user_id),
            task_id: self.task_id.as_deref().map(TaskId::from_string),
            date: parse_date(&self.date, "date")?,
            duration_minutes: self.duration_minutes,
            active: self.active,
        })
    }
}

#[derive(FromRow)]
struct WaterIntakeRow {
    id: String,
    user_id: String,
    amount: i64,
    date: String,
}

impl WaterIntakeRow {
    fn try_into_record(self) -> Result<WaterIntakeRecord, DomainError> {
        Ok(WaterIntakeRecord {
            id: WaterIntakeId::from_string(&self.id),
            user_id: UserId::from_string(&self.user_id),
            amount: self.amount,
            date: parse_date(&self.date, "date")?,
        })
    }
}

pub struct SqliteTaskRepository {
    base: SqliteRepositoryBase,
}

impl SqliteTaskRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list_for_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<TaskRecord>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, status, date
            FROM tasks
            WHERE user_id = ?1 AND date = ?2
        "#;

        let rows: Vec<TaskRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(format_date(date)),
                "List tasks for user on date",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_record()).collect()
    }
}

pub struct SqliteFocusSessionRepository {
    base: SqliteRepositoryBase,
}

impl SqliteFocusSessionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl FocusSessionRepository for SqliteFocusSessionRepository {
    async fn list_for_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<FocusSessionRecord>, DomainError> {
        let query = r#"
            SELECT id, user_id, task_id, date, duration_minutes, active
            FROM focus_sessions
            WHERE user_id = ?1 AND date = ?2
        "#;

        let rows: Vec<FocusSessionRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(format_date(date)),
                "List focus sessions for user on date",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_record()).collect()
    }
}

pub struct SqliteWaterIntakeRepository {
    base: SqliteRepositoryBase,
}

impl SqliteWaterIntakeRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl WaterIntakeRepository for SqliteWaterIntakeRepository {
    async fn list_for_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<WaterIntakeRecord>, DomainError> {
        let query = r#"
            SELECT id, user_id, amount, date
            FROM water_intake
            WHERE user_id = ?1 AND date = ?2
        "#;

        let rows: Vec<WaterIntakeRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query)
                    .bind(user_id.as_str())
                    .bind(format_date(date)),
                "List water intake for user on date",
            )
            .await?;

        rows.into_iter().map(|r| r.try_into_record()).collect()
    }
}
