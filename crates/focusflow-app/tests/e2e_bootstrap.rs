/// E2E Test: bootstrapping the application state from configuration
use std::sync::Arc;

use focusflow_domain::shared::{DomainError, FixedClock, UserId};
use focusflow_domain::streak::StreakRepository;
use focusflow_infrastructure::config::AppConfig;
use focusflow_lib::presentation::state::AppState;

mod test_helpers;
use test_helpers::day;

#[tokio::test]
async fn e2e_bootstrap_creates_database_and_persists_across_restarts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = AppConfig::default()
        .with_database_path(dir.path().join("data").join("focusflow.db"))
        .with_log_dir(dir.path().join("logs"));
    let user = UserId::from_string("restart-user");

    // ============================================================
    // First run: record a goal-met day
    // ============================================================
    {
        let state = AppState::new(&config, Arc::new(FixedClock::new(day(14))))
            .await
            .expect("bootstrap should succeed");
        test_helpers::meet_goal(&state.runtime.pool, user.as_str(), day(14)).await;

        let record = state
            .services
            .streak
            .get_and_update(&user)
            .await
            .expect("advance should succeed");
        assert_eq!(record.current_streak(), 1);
        state.runtime.pool.close().await;
    }

    assert!(config.database_path.exists());
    println!("✓ Database file created");

    // ============================================================
    // Second run, next day: ledger continues from disk
    // ============================================================
    let state = AppState::new(&config, Arc::new(FixedClock::new(day(15))))
        .await
        .expect("second bootstrap should succeed");
    test_helpers::meet_goal(&state.runtime.pool, user.as_str(), day(15)).await;

    let record = state
        .services
        .streak
        .get_and_update(&user)
        .await
        .expect("advance should succeed");

    assert_eq!(record.current_streak(), 2);
    assert_eq!(record.best_streak(), 2);
    println!("✓ Streak survived restart");
}

#[tokio::test]
async fn e2e_two_states_on_one_file_do_not_lose_todays_credit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = AppConfig::default()
        .with_database_path(dir.path().join("focusflow.db"))
        .with_log_dir(dir.path().join("logs"));
    let user = UserId::from_string("two-process-user");

    // Each state has its own pool and its own lock maps, like two CLI runs.
    let early = AppState::new(&config, Arc::new(FixedClock::new(day(3))))
        .await
        .expect("first bootstrap");
    let late = AppState::new(&config, Arc::new(FixedClock::new(day(3))))
        .await
        .expect("second bootstrap");

    for n in 1..=2 {
        test_helpers::meet_goal(&late.runtime.pool, user.as_str(), day(n)).await;
        late.services
            .streak
            .advance(&user, day(n))
            .await
            .expect("seed streak");
    }

    // ============================================================
    // Early run reads the ledger before today's goal is reached
    // ============================================================
    let mut stale = early
        .repositories
        .streak
        .load(&user)
        .await
        .expect("load")
        .expect("seeded record");
    stale.advance(day(3), false);

    // ============================================================
    // Late run sees the goal met and credits today
    // ============================================================
    test_helpers::meet_goal(&late.runtime.pool, user.as_str(), day(3)).await;
    let credited = late
        .services
        .streak
        .get_and_update(&user)
        .await
        .expect("credit today");
    assert_eq!(credited.current_streak(), 3);

    // ============================================================
    // Early run's write is rejected, its service retries cleanly
    // ============================================================
    let result = early.repositories.streak.save(&stale).await;
    assert!(matches!(result, Err(DomainError::Conflict(_))));

    let early_view = early
        .services
        .streak
        .advance_with_goal(&user, day(3), false)
        .await
        .expect("advance after reload");
    assert_eq!(early_view.current_streak(), 3);
    println!("✓ Stale write rejected, credit for today kept");

    // Next day still continues the streak.
    let next_day = late
        .services
        .streak
        .advance_with_goal(&user, day(4), true)
        .await
        .expect("next day");
    assert_eq!(next_day.current_streak(), 4);
    println!("✓ Streak continues the next day");
}
