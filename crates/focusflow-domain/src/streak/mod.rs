mod aggregate;
mod repository;


pub use aggregate::{StreakOutcome, StreakRecord};
pub use repository::StreakRepository;
