#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_all_thresholds_exactly_met() {
        assert!(evaluate(4, 60, 5));
    }

    #[test]
    fn test_tasks_boundary() {
        assert!(!evaluate(3, 60, 5));
        assert!(evaluate(4, 60, 5));
    }

    #[test]
    fn test_focus_boundary() {
        assert!(!evaluate(4, 59, 5));
        assert!(evaluate(4, 60, 5));
    }

    #[test]
    fn test_water_boundary() {
        assert!(!evaluate(4, 60, 4));
        assert!(evaluate(4, 60, 5));
    }

    #[test]
    fn test_zero_counters_never_meet_goal() {
        assert!(!evaluate(0, 0, 0));
    }

    #[test]
    fn test_exceeding_one_axis_does_not_compensate_another() {
        assert!(!evaluate(100, 0, 100));
        assert!(!evaluate(0, 600, 100));
    }

    #[test]
    fn test_large_values_are_accepted() {
        assert!(evaluate(u32::MAX, u32::MAX, u32::MAX));
    }

    #[test]
    fn test_evaluate_matches_standard_goal() {
        for tasks in 0..6 {
            for focus in [0, 59, 60, 61] {
                for water in 0..7 {
                    assert_eq!(
                        evaluate(tasks, focus, water),
                        DailyGoal::default().is_met(tasks, focus, water)
                    );
                }
            }
        }
    }
}
