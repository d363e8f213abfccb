//! Detection: suspicion accumulator + зона обнаружения.
//!
//! ```text
//! target в зоне:   level += dt (last known position обновляется)
//! target вне зоны: level -= dt
//! level ∈ [0, threshold]
//!
//! alert ON  когда level ≥ threshold
//! alert OFF когда level ≤ 0 (гистерезис: между границами состояние держится)
//! ```

use bevy::prelude::*;

use crate::error::SimulationError;

/// Состояние обнаружения цели (одно на врага)
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct DetectionState {
    pub suspicion_level: f32,
    pub threshold: f32,
    pub is_alerted: bool,
    pub was_alerted_last_tick: bool,
    pub last_known_target_position: Vec2,
}

impl Default for DetectionState {
    fn default() -> Self {
        Self::new(1.5)
    }
}

impl DetectionState {
    pub fn new(threshold: f32) -> Self {
        Self {
            suspicion_level: 0.0,
            threshold: threshold.max(0.0),
            is_alerted: false,
            was_alerted_last_tick: false,
            last_known_target_position: Vec2::ZERO,
        }
    }

    /// Тик детекции
    pub fn update(&mut self, target_inside_zone: bool, target_position: Vec2, delta: f32) {
        if target_inside_zone {
            self.suspicion_level += delta;
            self.last_known_target_position = target_position;
        } else {
            self.suspicion_level -= delta;
        }
        self.suspicion_level = self.suspicion_level.clamp(0.0, self.threshold);

        self.was_alerted_last_tick = self.is_alerted;
        if self.suspicion_level >= self.threshold {
            self.is_alerted = true;
        } else if self.suspicion_level <= 0.0 {
            self.is_alerted = false;
        }
    }

    pub fn became_alerted(&self) -> bool {
        self.is_alerted && !self.was_alerted_last_tick
    }

    pub fn became_unalerted(&self) -> bool {
        !self.is_alerted && self.was_alerted_last_tick
    }
}

/// Зона обнаружения: AABB относительно позиции владельца
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct DetectionZone {
    pub half_extents: Vec2,
    pub offset: Vec2,
}

impl DetectionZone {
    pub fn new(half_extents: Vec2, offset: Vec2) -> Result<Self, SimulationError> {
        if !half_extents.is_finite() || half_extents.x < 0.0 || half_extents.y < 0.0 {
            return Err(SimulationError::invalid(
                "detection_zone.half_extents",
                format!("must be finite and non-negative, got {half_extents}"),
            ));
        }
        if !offset.is_finite() {
            return Err(SimulationError::invalid(
                "detection_zone.offset",
                format!("must be finite, got {offset}"),
            ));
        }
        Ok(Self { half_extents, offset })
    }

    /// Точка внутри зоны (границы включительно)
    pub fn contains(&self, owner_position: Vec2, point: Vec2) -> bool {
        let local = point - (owner_position + self.offset);
        local.x.abs() <= self.half_extents.x && local.y.abs() <= self.half_extents.y
    }
}
