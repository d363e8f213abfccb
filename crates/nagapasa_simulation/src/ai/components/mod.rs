//! AI components

pub mod detection;
pub mod fsm;
pub mod patrol;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod detection_tests;
#[cfg(test)]
mod fsm_tests;

// Re-export all components
pub use detection::*;
pub use fsm::*;
pub use patrol::*;
