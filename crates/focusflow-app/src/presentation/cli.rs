use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::dtos::{StreakDto, StreakRecomputeDto};
use crate::application::ResultExt;
use crate::presentation::bootstrap;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use focusflow_domain::daily_stats::DailyStatsUpdate;
use focusflow_domain::shared::{Clock, DomainError, FixedClock, SystemClock, UserId};
use focusflow_infrastructure::config::{AppConfig, ENV_DB_PATH, ENV_LOG_DIR};

#[derive(Parser, Debug)]
#[command(name = "focusflow")]
#[command(author, version, about = "Daily goal and streak tracking", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SQLite database file
    #[arg(long, global = true, env = ENV_DB_PATH)]
    pub db: Option<PathBuf>,

    /// Directory for rolling log files
    #[arg(long, global = true, env = ENV_LOG_DIR)]
    pub log_dir: Option<PathBuf>,

    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Today's counters and streak; advances the streak
    Summary(UserArgs),
    /// Advance and show the streak record
    Streak(UserArgs),
    /// Snapshots for the last 7 days
    Weekly(UserArgs),
    /// Snapshots for the last 30 days
    Monthly(UserArgs),
    /// Streak length derived from stored snapshots only
    Recompute(UserArgs),
    /// Set counters on today's snapshot
    Record {
        #[command(flatten)]
        target: UserArgs,
        #[arg(long)]
        tasks_completed: Option<u32>,
        #[arg(long)]
        tasks_total: Option<u32>,
        #[arg(long)]
        focus_minutes: Option<u32>,
        #[arg(long)]
        water_units: Option<u32>,
    },
    /// Rebuild today's snapshot from the activity tables
    Sync(UserArgs),
}

#[derive(Args, Debug, Clone)]
pub struct UserArgs {
    /// User identifier
    #[arg(short, long, env = "FOCUSFLOW_USER")]
    pub user: String,
}

impl UserArgs {
    fn user_id(&self) -> Result<UserId, DomainError> {
        let trimmed = self.user.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("user must not be empty".to_string()));
        }
        Ok(UserId::from_string(trimmed))
    }
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<AppConfig, DomainError> {
        let mut config = AppConfig::from_env()?;
        if let Some(db) = &self.db {
            config = config.with_database_path(db.clone());
        }
        if let Some(dir) = &self.log_dir {
            config = config.with_log_dir(dir.clone());
        }
        Ok(config)
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.date {
            Some(date) => Arc::new(FixedClock::new(date)),
            None => Arc::new(SystemClock),
        }
    }
}

/// Parse-to-output pipeline used by the binary.
pub async fn run(cli: Cli) -> Result<String, CommandError> {
    let config = cli.resolve_config()?;
    bootstrap::init_logging(config.log_dir.clone());

    let state = AppState::new(&config, cli.clock()).await?;
    let output = execute(&state, &cli.command).await?;

    Ok(serde_json::to_string_pretty(&output).to_serialization_err()?)
}

pub async fn execute(state: &AppState, command: &Commands) -> Result<serde_json::Value, DomainError> {
    match command {
        Commands::Summary(args) => {
            let summary = state
                .services
                .dashboard
                .compute_today_summary(&args.user_id()?)
                .await?;
            to_json(&summary)
        }
        Commands::Streak(args) => {
            let record = state
                .services
                .streak
                .get_and_update(&args.user_id()?)
                .await?;
            to_json(&StreakDto::from(&record))
        }
        Commands::Weekly(args) => {
            let rows = state
                .queries
                .daily_stats
                .get_weekly_stats(&args.user_id()?)
                .await?;
            to_json(&rows)
        }
        Commands::Monthly(args) => {
            let rows = state
                .queries
                .daily_stats
                .get_monthly_stats(&args.user_id()?)
                .await?;
            to_json(&rows)
        }
        Commands::Recompute(args) => {
            let user_id = args.user_id()?;
            let queries = &state.queries.daily_stats;
            let current_streak = queries
                .recompute_current_streak_from_history(&user_id)
                .await?;
            to_json(&StreakRecomputeDto {
                user_id: user_id.as_str().to_string(),
                as_of: queries.today(),
                current_streak,
            })
        }
        Commands::Record {
            target,
            tasks_completed,
            tasks_total,
            focus_minutes,
            water_units,
        } => {
            let update = DailyStatsUpdate {
                tasks_completed: *tasks_completed,
                tasks_total: *tasks_total,
                focus_minutes: *focus_minutes,
                water_units: *water_units,
            };
            let snapshot = state
                .services
                .daily_stats
                .update_today(&target.user_id()?, update)
                .await?;
            to_json(&snapshot)
        }
        Commands::Sync(args) => {
            let today = state.runtime.clock.today();
            let snapshot = state
                .services
                .daily_stats
                .sync_from_activity(&args.user_id()?, today)
                .await?;
            to_json(&snapshot)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value).to_serialization_err()
}
