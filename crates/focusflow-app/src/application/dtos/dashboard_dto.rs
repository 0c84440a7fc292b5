use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use focusflow_domain::activity::DailyActivityCounts;
use focusflow_domain::streak::StreakRecord;

/// Today's counters next to the streak they produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryDto {
    pub date: NaiveDate,
    pub tasks_completed: u32,
    pub tasks_total: u32,
    pub pending_tasks: u32,
    pub focus_minutes: u32,
    pub water_units: u32,
    pub goal_met: bool,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl DashboardSummaryDto {
    pub fn from_parts(date: NaiveDate, counts: &DailyActivityCounts, streak: &StreakRecord) -> Self {
        Self {
            date,
            tasks_completed: counts.tasks_completed,
            tasks_total: counts.tasks_total,
            pending_tasks: counts.pending_tasks,
            focus_minutes: counts.focus_minutes,
            water_units: counts.water_units,
            goal_met: counts.goal_met(),
            current_streak: streak.current_streak(),
            best_streak: streak.best_streak(),
        }
    }
}
