//! Movement компоненты: скорость, направление взгляда

use bevy::prelude::*;

/// Текущая скорость актора (м/с)
///
/// Пишется AI (suspicious chase, dash/jump импульсы), интегрируется в Position
/// системой integrate_velocity.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec2);

/// Куда смотрит спрайт (flip по X)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// direction_x < 0 → Left, иначе Right (ноль смотрит вправо)
    pub fn from_direction_x(direction_x: f32) -> Self {
        if direction_x < 0.0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    /// Знак по X (flip спрайта, направление dash игрока)
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}
