//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: маркеры Actor/Player/Enemy + CharacterVitals (health, stamina, defense)
//! - movement: Velocity, Facing
//! - world: Position (2D)

pub mod actor;
pub mod movement;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
pub use world::*;
