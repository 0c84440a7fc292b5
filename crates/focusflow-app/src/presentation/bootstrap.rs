use anyhow::Context;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::queries::DailyStatsQueries;
use crate::application::services::{
    DailyStatsService, DashboardService, MetricsAggregator, StreakService,
};
use crate::presentation::state::{AppState, Queries, Repositories, Runtime, Services};
use focusflow_domain::activity::{FocusSessionRepository, TaskRepository, WaterIntakeRepository};
use focusflow_domain::daily_stats::DailyStatsRepository;
use focusflow_domain::shared::Clock;
use focusflow_domain::streak::StreakRepository;
use focusflow_infrastructure::config::AppConfig;
use focusflow_infrastructure::persistence::{
    repositories::{
        SqliteDailyStatsRepository, SqliteFocusSessionRepository, SqliteStreakRepository,
        SqliteTaskRepository, SqliteWaterIntakeRepository,
    },
    Database,
};

/// File logging, or plain stderr output when the log directory is unusable.
pub fn init_logging(log_dir: PathBuf) {
    match focusflow_infrastructure::logging::init_logger(log_dir.clone()) {
        Ok(_) => {
            info!("🚀 FocusFlow starting...");
            info!("📝 File logging initialized at: {}", log_dir.display());
        }
        Err(e) => {
            eprintln!("⚠️  Failed to initialize file logging: {}", e);
            eprintln!("   Falling back to console logging only");

            let _ = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true)
                .try_init();
        }
    }
}

pub async fn build_app_state(
    config: &AppConfig,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<AppState> {
    let startup_started_at = Instant::now();

    info!("Database path: {}", config.database_path.display());

    info!("🔌 Connecting to database...");
    let started_at = Instant::now();
    let database = Database::new(config)
        .await
        .context("Failed to open database")?;
    info!(
        "✓ Database connection established ({}ms)",
        started_at.elapsed().as_millis()
    );

    info!("🔄 Running migrations...");
    let started_at = Instant::now();
    database
        .run_migrations()
        .await
        .context("Failed to run migrations")?;
    info!(
        "✓ Migrations completed ({}ms)",
        started_at.elapsed().as_millis()
    );

    let pool = Arc::new(database.pool().clone());
    let state = wire_state(pool, clock);

    info!(
        "✓ App state ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(state)
}

pub fn wire_state(pool: Arc<SqlitePool>, clock: Arc<dyn Clock>) -> AppState {
    let task_repo = Arc::new(SqliteTaskRepository::new(pool.clone())) as Arc<dyn TaskRepository>;
    let focus_session_repo = Arc::new(SqliteFocusSessionRepository::new(pool.clone()))
        as Arc<dyn FocusSessionRepository>;
    let water_intake_repo = Arc::new(SqliteWaterIntakeRepository::new(pool.clone()))
        as Arc<dyn WaterIntakeRepository>;
    let streak_repo =
        Arc::new(SqliteStreakRepository::new(pool.clone())) as Arc<dyn StreakRepository>;
    let daily_stats_repo =
        Arc::new(SqliteDailyStatsRepository::new(pool.clone())) as Arc<dyn DailyStatsRepository>;

    let aggregator = Arc::new(MetricsAggregator::new(
        task_repo.clone(),
        focus_session_repo.clone(),
        water_intake_repo.clone(),
    ));
    let streak_service = Arc::new(StreakService::new(
        streak_repo.clone(),
        aggregator.clone(),
        clock.clone(),
    ));
    let daily_stats_service = Arc::new(DailyStatsService::new(
        daily_stats_repo.clone(),
        aggregator.clone(),
        clock.clone(),
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        aggregator.clone(),
        streak_service.clone(),
        clock.clone(),
    ));
    let daily_stats_queries = Arc::new(DailyStatsQueries::new(
        daily_stats_repo.clone(),
        clock.clone(),
    ));

    AppState {
        runtime: Runtime { pool, clock },
        repositories: Repositories {
            task: task_repo,
            focus_session: focus_session_repo,
            water_intake: water_intake_repo,
            streak: streak_repo,
            daily_stats: daily_stats_repo,
        },
        services: Services {
            aggregator,
            streak: streak_service,
            daily_stats: daily_stats_service,
            dashboard: dashboard_service,
        },
        queries: Queries {
            daily_stats: daily_stats_queries,
        },
    }
}
