//! Базовые компоненты акторов: Actor, Player, Enemy, CharacterVitals

use bevy::prelude::*;

use crate::combat::ResourcePool;
use crate::components::{Facing, Position, Velocity};
use crate::constants::REGEN_RATE_SCALE;

/// Актор (игрок, враг, босс): всё что двигается и получает урон
///
/// Автоматически добавляет Position, Velocity, Facing, CharacterVitals через Required Components.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Position, Velocity, Facing, CharacterVitals)]
pub struct Actor;

/// Маркер игрока (цель для всех врагов)
///
/// Stamina cost / cooldown гейтинг действий: см. player_bundle (PlayerConfig).
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Actor)]
pub struct Player;

/// Маркер врага (AI-управляемый актор)
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Actor)]
pub struct Enemy;

/// Здоровье + stamina актора
///
/// Инварианты:
/// - 0 ≤ current_health ≤ max_health
/// - stamina.current ∈ [0, stamina.max]
/// - death сигналится ровно один раз
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CharacterVitals {
    pub max_health: f32,
    pub current_health: f32,
    pub stamina: ResourcePool,
    /// "Проценты" в секунду (rate / 100)
    pub health_regen_rate: f32,
    pub stamina_regen_rate: f32,
    /// Вычитается из сырого урона (может дать net heal, см. apply_damage)
    pub defense_power: f32,
    /// Death уже был отправлен
    pub death_signaled: bool,
}

impl Default for CharacterVitals {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

impl CharacterVitals {
    pub fn new(max_health: f32, max_stamina: f32) -> Self {
        let max_health = max_health.max(0.0);
        Self {
            max_health,
            current_health: max_health,
            stamina: ResourcePool::new(max_stamina),
            health_regen_rate: 50.0,   // 0.5 HP/sec
            stamina_regen_rate: 500.0, // 5 stamina/sec
            defense_power: 2.0,
            death_signaled: false,
        }
    }

    pub fn with_defense(mut self, defense_power: f32) -> Self {
        self.defense_power = defense_power;
        self
    }

    pub fn with_regen(mut self, health_regen_rate: f32, stamina_regen_rate: f32) -> Self {
        self.health_regen_rate = health_regen_rate;
        self.stamina_regen_rate = stamina_regen_rate;
        self
    }

    /// Применить сырой урон: `health -= raw - defense`
    ///
    /// Если defense > raw, разница ЛЕЧИТ (так устроена формула во всех врагах,
    /// сохраняем как есть). Результат clamp'ится в [0, max_health].
    ///
    /// Возвращает true ровно один раз: на вызове, где health впервые ≤ 0.
    pub fn apply_damage(&mut self, raw_damage: i32) -> bool {
        self.current_health -= raw_damage as f32 - self.defense_power;
        self.current_health = self.current_health.clamp(0.0, self.max_health);

        if self.current_health <= 0.0 && !self.death_signaled {
            self.death_signaled = true;
            return true;
        }
        false
    }

    pub fn heal(&mut self, amount: f32) {
        self.current_health = (self.current_health + amount.max(0.0)).min(self.max_health);
    }

    /// Regen health + stamina за тик (rate / 100 * delta)
    pub fn regen_tick(&mut self, delta: f32) {
        if self.is_dead() {
            return;
        }
        self.current_health += self.health_regen_rate / REGEN_RATE_SCALE * delta;
        self.current_health = self.current_health.clamp(0.0, self.max_health);
        self.stamina.regen_tick(self.stamina_regen_rate, delta);
    }

    pub fn is_dead(&self) -> bool {
        self.death_signaled || self.current_health <= 0.0
    }

    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            self.current_health / self.max_health
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_minus_defense() {
        let mut vitals = CharacterVitals::new(100.0, 100.0).with_defense(3.0);
        let died = vitals.apply_damage(20);
        assert!(!died);
        assert_eq!(vitals.current_health, 83.0); // 100 - (20 - 3)
    }

    #[test]
    fn test_weak_hit_heals() {
        let mut vitals = CharacterVitals::new(100.0, 100.0).with_defense(10.0);
        vitals.current_health = 50.0;

        vitals.apply_damage(4); // 50 - (4 - 10) = 56
        assert_eq!(vitals.current_health, 56.0);
    }

    #[test]
    fn test_heal_from_weak_hit_capped_at_max() {
        let mut vitals = CharacterVitals::new(100.0, 100.0).with_defense(10.0);
        vitals.apply_damage(0);
        assert_eq!(vitals.current_health, 100.0);
    }

    #[test]
    fn test_death_signaled_once() {
        let mut vitals = CharacterVitals::new(30.0, 100.0).with_defense(0.0);
        assert!(vitals.apply_damage(50));
        assert_eq!(vitals.current_health, 0.0);
        assert!(vitals.is_dead());

        // Повторные удары по трупу не шлют death снова
        assert!(!vitals.apply_damage(50));
        assert!(!vitals.apply_damage(1));
    }

    #[test]
    fn test_regen_tick() {
        let mut vitals = CharacterVitals::new(100.0, 100.0).with_regen(100.0, 1000.0);
        vitals.current_health = 90.0;
        vitals.stamina.current = 40.0;

        vitals.regen_tick(2.0); // +2 HP, +20 stamina
        assert_eq!(vitals.current_health, 92.0);
        assert_eq!(vitals.stamina.current, 60.0);

        vitals.regen_tick(100.0);
        assert_eq!(vitals.current_health, 100.0);
        assert_eq!(vitals.stamina.current, 100.0);
    }

    #[test]
    fn test_dead_do_not_regen() {
        let mut vitals = CharacterVitals::new(10.0, 100.0).with_defense(0.0);
        vitals.apply_damage(10);
        vitals.regen_tick(10.0);
        assert_eq!(vitals.current_health, 0.0);
    }

    #[test]
    fn test_heal_clamps() {
        let mut vitals = CharacterVitals::new(100.0, 100.0);
        vitals.current_health = 70.0;
        vitals.heal(20.0);
        assert_eq!(vitals.current_health, 90.0);
        vitals.heal(50.0);
        assert_eq!(vitals.current_health, 100.0);
    }
}
