//! Конфиги симуляции и врагов
//!
//! Default = shipped tuning. Serde: чтобы уровни могли грузить тюнинг из данных.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::ActionKind;
use crate::error::{ensure_non_negative, ensure_positive, SimulationError};

/// Глобальные параметры симуляции (tick rate, seed)
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Частота FixedUpdate (Hz)
    pub fixed_hz: f64,
    /// Seed для DeterministicRng
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_hz: 60.0,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.fixed_hz.is_finite() || self.fixed_hz <= 0.0 {
            return Err(SimulationError::invalid(
                "fixed_hz",
                format!("must be > 0, got {}", self.fixed_hz),
            ));
        }
        Ok(())
    }
}

/// Боевые и поведенческие параметры врага
///
/// Один компонент на врага (boss фазы мутируют speed/attack_power in-place).
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct EnemyConfig {
    /// Скорость ходьбы (м/с)
    pub speed: f32,
    /// Радиус перехода в Combat (метры)
    pub attack_range: f32,
    /// Сырой урон атаки (до defense цели)
    pub attack_power: f32,
    /// Отдельный cooldown атаки (секунды)
    pub attack_cooldown: f32,
    pub dash_power: f32,
    pub dash_cooldown: f32,
    pub jump_power: f32,
    pub jump_cooldown: f32,
    /// Stamina cost: attack / dash / jump
    pub attack_cost: f32,
    pub dash_cost: f32,
    pub jump_cost: f32,
    /// Сколько секунд цель должна провести в зоне до alert
    pub suspicion_threshold: f32,
    /// Пауза на waypoint (секунды)
    pub idle_duration: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            attack_range: 1.5,
            attack_power: 10.0,
            attack_cooldown: 1.0,
            dash_power: 10.0,
            dash_cooldown: 2.0,
            jump_power: 8.0,
            jump_cooldown: 3.0,
            attack_cost: 10.0,
            dash_cost: 20.0,
            jump_cost: 10.0,
            suspicion_threshold: 1.5,
            idle_duration: 3.0,
        }
    }
}

impl EnemyConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        ensure_positive("speed", self.speed)?;
        ensure_non_negative("attack_range", self.attack_range)?;
        ensure_non_negative("attack_power", self.attack_power)?;
        ensure_non_negative("attack_cooldown", self.attack_cooldown)?;
        ensure_non_negative("dash_power", self.dash_power)?;
        ensure_non_negative("dash_cooldown", self.dash_cooldown)?;
        ensure_non_negative("jump_power", self.jump_power)?;
        ensure_non_negative("jump_cooldown", self.jump_cooldown)?;
        ensure_non_negative("attack_cost", self.attack_cost)?;
        ensure_non_negative("dash_cost", self.dash_cost)?;
        ensure_non_negative("jump_cost", self.jump_cost)?;
        ensure_positive("suspicion_threshold", self.suspicion_threshold)?;
        ensure_non_negative("idle_duration", self.idle_duration)?;
        Ok(())
    }

    /// Cooldown по виду действия (Attack = отдельный attack cooldown)
    pub fn cooldown(&self, kind: ActionKind) -> f32 {
        match kind {
            ActionKind::Attack => self.attack_cooldown,
            ActionKind::Dash => self.dash_cooldown,
            ActionKind::Jump => self.jump_cooldown,
        }
    }

    pub fn action_tuning(&self) -> ActionTuning {
        ActionTuning {
            speed: self.speed,
            dash_power: self.dash_power,
            jump_power: self.jump_power,
        }
    }
}

/// Импульсы timed действий (Dash / Jump), общие для игрока и врагов
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionTuning {
    /// Горизонтальная скорость прыжка
    pub speed: f32,
    pub dash_power: f32,
    /// Вверх на Ascent, вниз на Descent
    pub jump_power: f32,
}

/// Боевые параметры игрока
///
/// Те же формы, что у врага (stamina cost + cooldown на каждое действие),
/// но свои инстансы: игрок гейтится своей stamina и своим трекером.
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct PlayerConfig {
    pub speed: f32,
    /// Радиус удара вокруг игрока (метры)
    pub attack_range: f32,
    pub attack_power: f32,
    /// 0 = бьёт на каждое нажатие
    pub attack_cooldown: f32,
    pub dash_power: f32,
    pub dash_cooldown: f32,
    pub jump_power: f32,
    pub jump_cooldown: f32,
    pub attack_cost: f32,
    pub dash_cost: f32,
    pub jump_cost: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            attack_range: 2.0,
            attack_power: 10.0,
            attack_cooldown: 0.0,
            dash_power: 12.0,
            dash_cooldown: 1.0,
            jump_power: 10.0,
            jump_cooldown: 0.5,
            attack_cost: 0.0,
            dash_cost: 20.0,
            jump_cost: 10.0,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        ensure_positive("speed", self.speed)?;
        ensure_non_negative("attack_range", self.attack_range)?;
        ensure_non_negative("attack_power", self.attack_power)?;
        ensure_non_negative("attack_cooldown", self.attack_cooldown)?;
        ensure_non_negative("dash_power", self.dash_power)?;
        ensure_non_negative("dash_cooldown", self.dash_cooldown)?;
        ensure_non_negative("jump_power", self.jump_power)?;
        ensure_non_negative("jump_cooldown", self.jump_cooldown)?;
        ensure_non_negative("attack_cost", self.attack_cost)?;
        ensure_non_negative("dash_cost", self.dash_cost)?;
        ensure_non_negative("jump_cost", self.jump_cost)?;
        Ok(())
    }

    pub fn cooldown(&self, kind: ActionKind) -> f32 {
        match kind {
            ActionKind::Attack => self.attack_cooldown,
            ActionKind::Dash => self.dash_cooldown,
            ActionKind::Jump => self.jump_cooldown,
        }
    }

    pub fn action_tuning(&self) -> ActionTuning {
        ActionTuning {
            speed: self.speed,
            dash_power: self.dash_power,
            jump_power: self.jump_power,
        }
    }
}
