#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::shared::{FocusSessionId, TaskId, UserId, WaterIntakeId};
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn task(user_id: &UserId, status: TaskStatus) -> TaskRecord {
        TaskRecord {
            id: TaskId::new(),
            user_id: user_id.clone(),
            title: "write report".to_string(),
            status,
            date: day(),
        }
    }

    fn session(user_id: &UserId, minutes: Option<i64>, active: bool) -> FocusSessionRecord {
        FocusSessionRecord {
            id: FocusSessionId::new(),
            user_id: user_id.clone(),
            task_id: None,
            date: day(),
            duration_minutes: minutes,
            active,
        }
    }

    fn intake(user_id: &UserId, amount: i64) -> WaterIntakeRecord {
        WaterIntakeRecord {
            id: WaterIntakeId::new(),
            user_id: user_id.clone(),
            amount,
            date: day(),
        }
    }

    #[test]
    fn test_empty_inputs_reduce_to_zero() {
        let reduction = DailyActivityCounts::reduce(&[], &[], &[]);

        assert_eq!(reduction.counts, DailyActivityCounts::default());
        assert_eq!(reduction.clamped_entries, 0);
        assert!(!reduction.counts.goal_met());
    }

    #[test]
    fn test_counts_completed_and_pending_tasks() {
        let user = UserId::new();
        let tasks = vec![
            task(&user, TaskStatus::Completed),
            task(&user, TaskStatus::Completed),
            task(&user, TaskStatus::Active),
        ];

        let counts = DailyActivityCounts::reduce(&tasks, &[], &[]).counts;

        assert_eq!(counts.tasks_completed, 2);
        assert_eq!(counts.pending_tasks, 1);
        assert_eq!(counts.tasks_total, 3);
    }

    #[test]
    fn test_only_stopped_sessions_count_toward_focus() {
        let user = UserId::new();
        let sessions = vec![
            session(&user, Some(25), false),
            session(&user, Some(35), false),
            session(&user, None, true),
            session(&user, Some(40), true),
        ];

        let counts = DailyActivityCounts::reduce(&[], &sessions, &[]).counts;

        assert_eq!(counts.focus_minutes, 60);
    }

    #[test]
    fn test_water_amounts_are_summed() {
        let user = UserId::new();
        let intakes = vec![intake(&user, 2), intake(&user, 1), intake(&user, 2)];

        let counts = DailyActivityCounts::reduce(&[], &[], &intakes).counts;

        assert_eq!(counts.water_units, 5);
    }

    #[test]
    fn test_negative_amounts_are_clamped_to_zero() {
        let user = UserId::new();
        let sessions = vec![session(&user, Some(-30), false), session(&user, Some(20), false)];
        let intakes = vec![intake(&user, -4), intake(&user, 3)];

        let reduction = DailyActivityCounts::reduce(&[], &sessions, &intakes);

        assert_eq!(reduction.counts.focus_minutes, 20);
        assert_eq!(reduction.counts.water_units, 3);
        assert_eq!(reduction.clamped_entries, 2);
    }

    #[test]
    fn test_goal_met_uses_standard_thresholds() {
        let user = UserId::new();
        let tasks: Vec<_> = (0..4).map(|_| task(&user, TaskStatus::Completed)).collect();
        let sessions = vec![session(&user, Some(60), false)];
        let intakes = vec![intake(&user, 5)];

        let counts = DailyActivityCounts::reduce(&tasks, &sessions, &intakes).counts;

        assert!(counts.goal_met());
    }

    #[test]
    fn test_task_status_parsing() {
        assert_eq!("ACTIVE".parse::<TaskStatus>().unwrap(), TaskStatus::Active);
        assert_eq!(
            "COMPLETED".parse::<TaskStatus>().unwrap(),
            TaskStatus::Completed
        );
        assert!("done".parse::<TaskStatus>().is_err());
        assert_eq!(TaskStatus::Completed.as_str(), "COMPLETED");
    }
}
