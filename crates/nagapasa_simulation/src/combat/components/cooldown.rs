//! Боевые действия и их cooldown'ы.

use bevy::prelude::*;

use crate::config::{EnemyConfig, PlayerConfig};

/// Закрытый набор боевых действий
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ActionKind {
    Attack,
    Dash,
    Jump,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Attack, ActionKind::Dash, ActionKind::Jump];

    pub fn index(self) -> usize {
        match self {
            ActionKind::Attack => 0,
            ActionKind::Dash => 1,
            ActionKind::Jump => 2,
        }
    }

    /// Имя animation trigger / SFX
    pub fn animation_name(self) -> &'static str {
        match self {
            ActionKind::Attack => "Attack",
            ActionKind::Dash => "Dash",
            ActionKind::Jump => "Jump",
        }
    }

    pub fn sound_name(self) -> &'static str {
        match self {
            ActionKind::Attack => "AttackedPlayer",
            ActionKind::Dash => "Dash",
            ActionKind::Jump => "Jump",
        }
    }
}

/// Stamina cost каждого действия
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ActionCosts {
    costs: [f32; 3],
}

impl Default for ActionCosts {
    fn default() -> Self {
        Self::from_config(&EnemyConfig::default())
    }
}

impl ActionCosts {
    pub fn new(attack: f32, dash: f32, jump: f32) -> Self {
        Self {
            costs: [attack, dash, jump],
        }
    }

    pub fn from_config(config: &EnemyConfig) -> Self {
        Self::new(config.attack_cost, config.dash_cost, config.jump_cost)
    }

    pub fn from_player(config: &PlayerConfig) -> Self {
        Self::new(config.attack_cost, config.dash_cost, config.jump_cost)
    }

    pub fn cost(&self, kind: ActionKind) -> f32 {
        self.costs[kind.index()]
    }
}

/// Время последнего использования + cooldown по каждому ActionKind
///
/// Инвариант: `is_ready(kind, now) == now >= last_used[kind] + cooldown[kind]`.
/// До первого использования last_used = -inf, первый use никогда не блокируется.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ActionCooldownTracker {
    last_used: [f32; 3],
    cooldowns: [f32; 3],
}

impl Default for ActionCooldownTracker {
    fn default() -> Self {
        Self::from_config(&EnemyConfig::default())
    }
}

impl ActionCooldownTracker {
    pub fn new(attack: f32, dash: f32, jump: f32) -> Self {
        Self {
            last_used: [f32::NEG_INFINITY; 3],
            cooldowns: [attack, dash, jump],
        }
    }

    pub fn from_config(config: &EnemyConfig) -> Self {
        Self::new(
            config.cooldown(ActionKind::Attack),
            config.cooldown(ActionKind::Dash),
            config.cooldown(ActionKind::Jump),
        )
    }

    pub fn from_player(config: &PlayerConfig) -> Self {
        Self::new(
            config.cooldown(ActionKind::Attack),
            config.cooldown(ActionKind::Dash),
            config.cooldown(ActionKind::Jump),
        )
    }

    pub fn is_ready(&self, kind: ActionKind, now: f32) -> bool {
        now >= self.last_used[kind.index()] + self.cooldowns[kind.index()]
    }

    pub fn record_use(&mut self, kind: ActionKind, now: f32) {
        self.last_used[kind.index()] = now;
    }

    pub fn last_used(&self, kind: ActionKind) -> Option<f32> {
        let t = self.last_used[kind.index()];
        t.is_finite().then_some(t)
    }

    pub fn cooldown(&self, kind: ActionKind) -> f32 {
        self.cooldowns[kind.index()]
    }

    /// Секунды до готовности (0 если готово)
    pub fn remaining(&self, kind: ActionKind, now: f32) -> f32 {
        (self.last_used[kind.index()] + self.cooldowns[kind.index()] - now).max(0.0)
    }
}
