//! Combat systems

pub mod actions;
pub mod damage;
pub mod hazards;
pub mod pickups;
pub mod player;
pub mod regen;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod damage_tests;

// Re-export all systems
pub use actions::*;
pub use damage::*;
pub use hazards::*;
pub use pickups::*;
pub use player::*;
pub use regen::*;
