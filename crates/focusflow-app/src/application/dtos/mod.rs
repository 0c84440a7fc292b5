mod dashboard_dto;
mod streak_dto;

pub use dashboard_dto::DashboardSummaryDto;
pub use streak_dto::{StreakDto, StreakRecomputeDto};
