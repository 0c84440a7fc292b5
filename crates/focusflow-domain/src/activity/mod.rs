mod counts;
mod records;
mod repository;

#[cfg(test)]
mod counts_test;

pub use counts::{ActivityReduction, DailyActivityCounts};
pub use records::{FocusSessionRecord, TaskRecord, TaskStatus, WaterIntakeRecord};
pub use repository::{FocusSessionRepository, TaskRepository, WaterIntakeRepository};
