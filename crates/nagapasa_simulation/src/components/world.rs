//! World positioning: 2D позиция актора

use bevy::prelude::*;

/// Позиция в мире (2D side-scroller, метры)
///
/// Движок-хост синхронизирует её со своим transform; симуляция читает/пишет
/// только этот компонент.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Position(pub Vec2);

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn distance(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Нормализованное направление на other (ZERO если совпадают)
    pub fn direction_to(&self, other: &Position) -> Vec2 {
        (other.0 - self.0).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_and_direction() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert!((a.direction_to(&b) - Vec2::new(0.6, 0.8)).length() < 1e-6);
        assert_eq!(a.direction_to(&a), Vec2::ZERO);
    }
}
