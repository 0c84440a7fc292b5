use serde::{Deserialize, Serialize};

use super::{FocusSessionRecord, TaskRecord, WaterIntakeRecord};
use crate::goal::DailyGoal;

/// Today's raw activity reduced to one number per signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivityCounts {
    pub tasks_completed: u32,
    pub tasks_total: u32,
    pub pending_tasks: u32,
    pub focus_minutes: u32,
    pub water_units: u32,
}

/// Result of reducing raw records, with the number of entries whose
/// negative amounts were clamped to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityReduction {
    pub counts: DailyActivityCounts,
    pub clamped_entries: u32,
}

impl DailyActivityCounts {
    pub fn reduce(
        tasks: &[TaskRecord],
        sessions: &[FocusSessionRecord],
        intakes: &[WaterIntakeRecord],
    ) -> ActivityReduction {
        let mut clamped_entries = 0u32;
        let mut clamp = |value: i64| -> u32 {
            if value < 0 {
                clamped_entries += 1;
                0
            } else {
                u32::try_from(value).unwrap_or(u32::MAX)
            }
        };

        let focus_minutes = sessions
            .iter()
            .filter_map(FocusSessionRecord::completed_minutes)
            .map(&mut clamp)
            .fold(0u32, u32::saturating_add);

        let water_units = intakes
            .iter()
            .map(|intake| clamp(intake.amount))
            .fold(0u32, u32::saturating_add);

        let counts = DailyActivityCounts {
            tasks_completed: count_u32(tasks.iter().filter(|t| t.is_completed()).count()),
            tasks_total: count_u32(tasks.len()),
            pending_tasks: count_u32(tasks.iter().filter(|t| t.is_active()).count()),
            focus_minutes,
            water_units,
        };

        ActivityReduction {
            counts,
            clamped_entries,
        }
    }

    /// Whether these counters satisfy the standard daily goal.
    pub fn goal_met(&self) -> bool {
        DailyGoal::STANDARD.is_met(self.tasks_completed, self.focus_minutes, self.water_units)
    }
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
