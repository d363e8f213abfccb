//! Combat components

pub mod action;
pub mod cooldown;
pub mod resource_pool;

#[cfg(test)]
mod cooldown_tests;

// Re-export all components
pub use action::*;
pub use cooldown::*;
pub use resource_pool::*;
