//! Patrol: циклический обход waypoints с паузой на каждой точке.

use bevy::prelude::*;
use rand::Rng;

use crate::constants::WAYPOINT_REACH_DISTANCE;

/// Маршрут патруля
///
/// Пустой маршрут = стоим на месте.
/// Старт в idle: враг сначала выжидает idle_duration, потом идёт к waypoints[0].
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PatrolRoute {
    pub waypoints: Vec<Vec2>,
    pub current_index: usize,
    pub idle_elapsed: f32,
    pub idle_duration: f32,
    pub is_idle: bool,
}

impl Default for PatrolRoute {
    fn default() -> Self {
        Self::new(Vec::new(), 3.0)
    }
}

/// Результат шага патруля
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolStep {
    pub position: Vec2,
    /// Куда смотрим (x компонента направления), None = стоим
    pub facing_x: Option<f32>,
    pub reached_waypoint: bool,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec2>, idle_duration: f32) -> Self {
        Self {
            waypoints,
            current_index: 0,
            idle_elapsed: 0.0,
            idle_duration,
            is_idle: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(self.current_index).copied()
    }

    /// Один тик патруля: idle таймер либо движение к текущему waypoint
    pub fn step(&mut self, position: Vec2, speed: f32, delta: f32) -> PatrolStep {
        let idle = PatrolStep {
            position,
            facing_x: None,
            reached_waypoint: false,
        };

        let Some(target) = self.current_waypoint() else {
            return idle;
        };

        if self.is_idle {
            self.idle_elapsed += delta;
            if self.idle_elapsed >= self.idle_duration {
                self.is_idle = false;
                self.idle_elapsed = 0.0;
            }
            return idle;
        }

        let position = move_towards(position, target, speed * delta);
        let reached_waypoint = position.distance(target) < WAYPOINT_REACH_DISTANCE;
        if reached_waypoint {
            self.advance();
        }

        PatrolStep {
            position,
            facing_x: Some(target.x - position.x),
            reached_waypoint,
        }
    }

    /// Waypoint достигнут: пауза + следующий индекс (wraparound)
    pub fn advance(&mut self) {
        if self.waypoints.is_empty() {
            return;
        }
        self.is_idle = true;
        self.current_index = (self.current_index + 1) % self.waypoints.len();
    }

    /// Потеряли цель: случайный waypoint (uniform)
    pub fn reseed<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.waypoints.is_empty() {
            return None;
        }
        self.current_index = rng.gen_range(0..self.waypoints.len());
        Some(self.current_index)
    }
}

/// Сдвиг к target не больше чем на max_delta (без перелёта)
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let offset = target - current;
    let distance = offset.length();
    if distance <= max_delta || distance == 0.0 {
        target
    } else {
        current + offset / distance * max_delta
    }
}
