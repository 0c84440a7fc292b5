//! In-memory repositories shared by the application-layer tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::RwLock;

use focusflow_domain::activity::{
    FocusSessionRecord, FocusSessionRepository, TaskRecord, TaskRepository, TaskStatus,
    WaterIntakeRecord, WaterIntakeRepository,
};
use focusflow_domain::daily_stats::{DailyMetricsSnapshot, DailyStatsRepository};
use focusflow_domain::shared::{DomainError, FocusSessionId, TaskId, UserId, WaterIntakeId};
use focusflow_domain::streak::{StreakRecord, StreakRepository};

pub fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, n).unwrap()
}

/// Backs all three activity read paths.
pub struct InMemoryActivity {
    tasks: RwLock<Vec<TaskRecord>>,
    sessions: RwLock<Vec<FocusSessionRecord>>,
    intakes: RwLock<Vec<WaterIntakeRecord>>,
    failing: RwLock<bool>,
}

impl InMemoryActivity {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
            sessions: RwLock::new(Vec::new()),
            intakes: RwLock::new(Vec::new()),
            failing: RwLock::new(false),
        }
    }

    pub async fn add_task(&self, user_id: &UserId, date: NaiveDate, status: TaskStatus) {
        self.tasks.write().await.push(TaskRecord {
            id: TaskId::new(),
            user_id: user_id.clone(),
            title: "task".to_string(),
            status,
            date,
        });
    }

    pub async fn add_focus(
        &self,
        user_id: &UserId,
        date: NaiveDate,
        duration_minutes: Option<i64>,
        active: bool,
    ) {
        self.sessions.write().await.push(FocusSessionRecord {
            id: FocusSessionId::new(),
            user_id: user_id.clone(),
            task_id: None,
            date,
            duration_minutes,
            active,
        });
    }

    pub async fn add_water(&self, user_id: &UserId, date: NaiveDate, amount: i64) {
        self.intakes.write().await.push(WaterIntakeRecord {
            id: WaterIntakeId::new(),
            user_id: user_id.clone(),
            amount,
            date,
        });
    }

    /// Record exactly enough activity for the standard goal on `date`.
    pub async fn meet_goal(&self, user_id: &UserId, date: NaiveDate) {
        for _ in 0..4 {
            self.add_task(user_id, date, TaskStatus::Completed).await;
        }
        self.add_focus(user_id, date, Some(60), false).await;
        self.add_water(user_id, date, 5).await;
    }

    pub async fn fail_reads(&self) {
        *self.failing.write().await = true;
    }

    async fn check(&self) -> Result<(), DomainError> {
        if *self.failing.read().await {
            return Err(DomainError::Repository("activity store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryActivity {
    async fn list_for_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<TaskRecord>, DomainError> {
        self.check().await?;
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .filter(|t| &t.user_id == user_id && t.date == date)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FocusSessionRepository for InMemoryActivity {
    async fn list_for_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<FocusSessionRecord>, DomainError> {
        self.check().await?;
        let sessions = self.sessions.read().await;
        Ok(sessions
            .iter()
            .filter(|s| &s.user_id == user_id && s.date == date)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl WaterIntakeRepository for InMemoryActivity {
    async fn list_for_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<WaterIntakeRecord>, DomainError> {
        self.check().await?;
        let intakes = self.intakes.read().await;
        Ok(intakes
            .iter()
            .filter(|i| &i.user_id == user_id && i.date == date)
            .cloned()
            .collect())
    }
}

pub struct InMemoryStreakRepository {
    records: RwLock<HashMap<String, StreakRecord>>,
    saves: RwLock<usize>,
}

impl InMemoryStreakRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            saves: RwLock::new(0),
        }
    }

    /// Seed a stored row. Records built with `restore` are treated as
    /// already persisted at revision 1.
    pub async fn insert(&self, record: StreakRecord) {
        let version = record.version().max(1);
        self.records
            .write()
            .await
            .insert(record.user_id().as_str().to_string(), record.with_version(version));
    }

    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }
}

#[async_trait]
impl StreakRepository for InMemoryStreakRepository {
    async fn load(&self, user_id: &UserId) -> Result<Option<StreakRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(user_id.as_str()).cloned())
    }

    async fn save(&self, record: &StreakRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let key = record.user_id().as_str().to_string();
        let stored_version = records.get(&key).map(|r| r.version()).unwrap_or(0);
        if stored_version != record.version() {
            return Err(DomainError::Conflict(format!(
                "stored version {} != {}",
                stored_version,
                record.version()
            )));
        }

        records.insert(key, record.clone().with_version(stored_version + 1));
        *self.saves.write().await += 1;
        Ok(())
    }
}

pub struct InMemoryDailyStatsRepository {
    snapshots: RwLock<HashMap<(String, NaiveDate), DailyMetricsSnapshot>>,
}

impl InMemoryDailyStatsRepository {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl DailyStatsRepository for InMemoryDailyStatsRepository {
    async fn save(&self, snapshot: &DailyMetricsSnapshot) -> Result<(), DomainError> {
        let key = (snapshot.user_id().as_str().to_string(), snapshot.date());
        self.snapshots.write().await.insert(key, snapshot.clone());
        Ok(())
    }

    async fn find_by_user_and_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DailyMetricsSnapshot>, DomainError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots
            .get(&(user_id.as_str().to_string(), date))
            .cloned())
    }

    async fn find_by_user_and_date_range(
        &self,
        user_id: &UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<DailyMetricsSnapshot>, DomainError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots
            .values()
            .filter(|s| s.user_id() == user_id && s.date() >= start_date && s.date() <= end_date)
            .cloned()
            .collect())
    }

    async fn find_all_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<DailyMetricsSnapshot>, DomainError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots
            .values()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect())
    }
}
