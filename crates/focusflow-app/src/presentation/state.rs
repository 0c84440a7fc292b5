use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::queries::DailyStatsQueries;
use crate::application::services::{
    DailyStatsService, DashboardService, MetricsAggregator, StreakService,
};
use focusflow_domain::activity::{FocusSessionRepository, TaskRepository, WaterIntakeRepository};
use focusflow_domain::daily_stats::DailyStatsRepository;
use focusflow_domain::shared::Clock;
use focusflow_domain::streak::StreakRepository;
use focusflow_infrastructure::config::AppConfig;

pub struct Runtime {
    pub pool: Arc<SqlitePool>,
    pub clock: Arc<dyn Clock>,
}

pub struct Repositories {
    pub task: Arc<dyn TaskRepository>,
    pub focus_session: Arc<dyn FocusSessionRepository>,
    pub water_intake: Arc<dyn WaterIntakeRepository>,
    pub streak: Arc<dyn StreakRepository>,
    pub daily_stats: Arc<dyn DailyStatsRepository>,
}

pub struct Services {
    pub aggregator: Arc<MetricsAggregator>,
    pub streak: Arc<StreakService>,
    pub daily_stats: Arc<DailyStatsService>,
    pub dashboard: Arc<DashboardService>,
}

pub struct Queries {
    pub daily_stats: Arc<DailyStatsQueries>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub services: Services,
    pub queries: Queries,
}

impl AppState {
    pub async fn new(config: &AppConfig, clock: Arc<dyn Clock>) -> anyhow::Result<Self> {
        crate::presentation::bootstrap::build_app_state(config, clock).await
    }

    /// Wire services over an already migrated pool.
    pub fn from_pool(pool: Arc<SqlitePool>, clock: Arc<dyn Clock>) -> Self {
        crate::presentation::bootstrap::wire_state(pool, clock)
    }
}
