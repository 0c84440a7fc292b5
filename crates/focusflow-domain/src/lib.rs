// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod activity;
pub mod daily_stats;
pub mod goal;
pub mod shared;
pub mod streak;

// Re-exports for convenience
pub use goal::{evaluate, DailyGoal};
pub use shared::{DomainError, UserId};
