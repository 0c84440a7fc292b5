mod evaluator;

#[cfg(test)]
mod evaluator_test;

pub use evaluator::{evaluate, DailyGoal};
