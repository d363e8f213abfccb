//! ResourcePool: регенерирующийся ресурс (stamina) с потолком max.

use bevy::prelude::*;

use crate::constants::REGEN_RATE_SCALE;

/// Пул ресурса для действий
///
/// Инвариант: 0.0 ≤ current ≤ max после каждого spend/regen/restore.
/// Affordability строгая: `current > cost` (ровно cost не хватает).
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ResourcePool {
    pub current: f32,
    pub max: f32,
}

impl Default for ResourcePool {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl ResourcePool {
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    /// Пул с заданным текущим значением (clamp в [0, max])
    pub fn with_current(max: f32, current: f32) -> Self {
        let mut pool = Self::new(max);
        pool.current = current;
        pool.clamp();
        pool
    }

    pub fn can_afford(&self, cost: f32) -> bool {
        self.current > cost
    }

    /// Списать cost. Если не хватает: no-op, возвращает false.
    pub fn spend(&mut self, cost: f32) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.current -= cost;
        self.clamp();
        true
    }

    /// Регенерация: `rate / 100` единиц в секунду
    pub fn regen_tick(&mut self, rate: f32, delta: f32) {
        self.current += rate / REGEN_RATE_SCALE * delta;
        self.clamp();
    }

    /// Мгновенное восстановление (pickups)
    pub fn restore(&mut self, amount: f32) {
        self.current += amount;
        self.clamp();
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    fn clamp(&mut self) {
        self.current = self.current.clamp(0.0, self.max);
    }
}
