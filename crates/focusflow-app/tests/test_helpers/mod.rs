#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;

use focusflow_domain::shared::{FixedClock, TaskId};
use focusflow_infrastructure::persistence::Database;
use focusflow_lib::presentation::state::AppState;

pub async fn setup_in_memory_db() -> Arc<SqlitePool> {
    let database = Database::in_memory().await.expect("open in-memory db");
    database.run_migrations().await.expect("run migrations");
    Arc::new(database.pool().clone())
}

/// Services wired over `pool` with the clock pinned to `today`.
pub fn state_on(pool: &Arc<SqlitePool>, today: NaiveDate) -> AppState {
    AppState::from_pool(pool.clone(), Arc::new(FixedClock::new(today)))
}

pub fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, n).expect("valid test date")
}

/// Log raw activity the way the task, focus and water subsystems would.
pub async fn record_activity(
    pool: &SqlitePool,
    user_id: &str,
    date: NaiveDate,
    tasks_completed: u32,
    focus_minutes: i64,
    water_units: i64,
) {
    let date = date.format("%Y-%m-%d").to_string();

    for _ in 0..tasks_completed {
        sqlx::query(
            "INSERT INTO tasks (id, user_id, title, status, date) VALUES (?1, ?2, 'task', 'COMPLETED', ?3)",
        )
        .bind(TaskId::new().as_str())
        .bind(user_id)
        .bind(&date)
        .execute(pool)
        .await
        .expect("insert task");
    }

    sqlx::query(
        "INSERT INTO focus_sessions (id, user_id, duration_minutes, active, date) VALUES (?1, ?2, ?3, 0, ?4)",
    )
    .bind(TaskId::new().as_str())
    .bind(user_id)
    .bind(focus_minutes)
    .bind(&date)
    .execute(pool)
    .await
    .expect("insert focus session");

    sqlx::query("INSERT INTO water_intake (id, user_id, amount, date) VALUES (?1, ?2, ?3, ?4)")
        .bind(TaskId::new().as_str())
        .bind(user_id)
        .bind(water_units)
        .bind(&date)
        .execute(pool)
        .await
        .expect("insert water intake");
}

pub async fn meet_goal(pool: &SqlitePool, user_id: &str, date: NaiveDate) {
    record_activity(pool, user_id, date, 4, 60, 5).await;
}

pub async fn add_pending_task(pool: &SqlitePool, user_id: &str, date: NaiveDate) {
    sqlx::query(
        "INSERT INTO tasks (id, user_id, title, status, date) VALUES (?1, ?2, 'todo', 'ACTIVE', ?3)",
    )
    .bind(TaskId::new().as_str())
    .bind(user_id)
    .bind(date.format("%Y-%m-%d").to_string())
    .execute(pool)
    .await
    .expect("insert pending task");
}
