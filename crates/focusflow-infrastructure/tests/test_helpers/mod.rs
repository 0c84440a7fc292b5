#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;

use focusflow_infrastructure::persistence::Database;

/// Fresh in-memory database with all migrations applied.
pub async fn setup_in_memory_db() -> Arc<SqlitePool> {
    let database = Database::in_memory().await.expect("open in-memory db");
    database.run_migrations().await.expect("run migrations");
    Arc::new(database.pool().clone())
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub async fn insert_task(pool: &SqlitePool, user_id: &str, status: &str, date: &str) {
    sqlx::query("INSERT INTO tasks (id, user_id, title, status, date) VALUES (?1, ?2, ?3, ?4, ?5)")
        .bind(uuid_like())
        .bind(user_id)
        .bind("test task")
        .bind(status)
        .bind(date)
        .execute(pool)
        .await
        .expect("insert task");
}

pub async fn insert_focus_session(
    pool: &SqlitePool,
    user_id: &str,
    duration_minutes: Option<i64>,
    active: bool,
    date: &str,
) {
    sqlx::query(
        "INSERT INTO focus_sessions (id, user_id, duration_minutes, active, date) VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(uuid_like())
    .bind(user_id)
    .bind(duration_minutes)
    .bind(active)
    .bind(date)
    .execute(pool)
    .await
    .expect("insert focus session");
}

pub async fn insert_water(pool: &SqlitePool, user_id: &str, amount: i64, date: &str) {
    sqlx::query("INSERT INTO water_intake (id, user_id, amount, date) VALUES (?1, ?2, ?3, ?4)")
        .bind(uuid_like())
        .bind(user_id)
        .bind(amount)
        .bind(date)
        .execute(pool)
        .await
        .expect("insert water intake");
}

fn uuid_like() -> String {
    focusflow_domain::shared::TaskId::new().as_str().to_string()
}
