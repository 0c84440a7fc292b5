use serde::{Deserialize, Serialize};

/// Thresholds a day must reach on every axis to count as goal-met.
///
/// There is exactly one goal formula in the system: the dashboard, the streak
/// ledger and the persisted daily stats all go through [`DailyGoal::is_met`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyGoal {
    pub min_tasks_completed: u32,
    pub min_focus_minutes: u32,
    pub min_water_units: u32,
}

impl DailyGoal {
    pub const STANDARD: DailyGoal = DailyGoal {
        min_tasks_completed: 4,
        min_focus_minutes: 60,
        min_water_units: 5,
    };

    /// All three thresholds are required, no partial credit.
    pub fn is_met(&self, tasks_completed: u32, focus_minutes: u32, water_units: u32) -> bool {
        tasks_completed >= self.min_tasks_completed
            && focus_minutes >= self.min_focus_minutes
            && water_units >= self.min_water_units
    }
}

impl Default for DailyGoal {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Evaluate the standard daily goal.
pub fn evaluate(tasks_completed: u32, focus_minutes: u32, water_units: u32) -> bool {
    DailyGoal::STANDARD.is_met(tasks_completed, focus_minutes, water_units)
}
