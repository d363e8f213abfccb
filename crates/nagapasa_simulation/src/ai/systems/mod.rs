//! AI systems

pub mod behavior;
pub mod movement;
pub mod perception;
pub mod transitions;

// Re-export all systems
pub use behavior::*;
pub use movement::*;
pub use perception::*;
pub use transitions::*;
