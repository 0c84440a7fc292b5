use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::{DomainError, FocusSessionId, TaskId, UserId, WaterIntakeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Active,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Active => "ACTIVE",
            TaskStatus::Completed => "COMPLETED",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(TaskStatus::Active),
            "COMPLETED" => Ok(TaskStatus::Completed),
            other => Err(DomainError::DataIntegrity(format!(
                "Unknown task status: {}",
                other
            ))),
        }
    }
}

/// A task as seen by the goal engine. Owned by the task subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub user_id: UserId,
    pub title: String,
    pub status: TaskStatus,
    pub date: NaiveDate,
}

impl TaskRecord {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    pub fn is_active(&self) -> bool {
        self.status == TaskStatus::Active
    }
}

/// A focus session. `duration_minutes` stays `None` until the session is stopped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSessionRecord {
    pub id: FocusSessionId,
    pub user_id: UserId,
    pub task_id: Option<TaskId>,
    pub date: NaiveDate,
    pub duration_minutes: Option<i64>,
    pub active: bool,
}

impl FocusSessionRecord {
    /// Minutes that count toward the day, if the session has been stopped.
    pub fn completed_minutes(&self) -> Option<i64> {
        if self.active {
            None
        } else {
            self.duration_minutes
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterIntakeRecord {
    pub id: WaterIntakeId,
    pub user_id: UserId,
    pub amount: i64,
    pub date: NaiveDate,
}
