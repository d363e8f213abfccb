//! Combat decision engine: legal set → uniform random выбор → commit.
//!
//! Legal set:
//! - Attack: только stamina (`current > cost`). Свой attack cooldown проверяется
//!   при исполнении: не готов → атака "пшик" (без траты и без record).
//! - Dash / Jump: stamina + cooldown.
//!
//! Выбор: uniform среди legal, RNG детерминистичный (DeterministicRng).

use rand::Rng;

use crate::combat::{ActionCooldownTracker, ActionCosts, ActionKind, ResourcePool};
use crate::components::CharacterVitals;

/// Снимок состояния врага для выбора действия
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    pub now: f32,
    /// None: цели нет
    pub distance_to_target: Option<f32>,
    /// Action lock (ActionInProgress висит)
    pub action_locked: bool,
    pub stamina: &'a ResourcePool,
    pub cooldowns: &'a ActionCooldownTracker,
    pub costs: &'a ActionCosts,
}

/// Итог попытки исполнить выбранное действие
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Ресурсы списаны, cooldown записан
    Started,
    /// Attack выбран, но его cooldown ещё идёт
    AttackOnCooldown,
    /// spend не прошёл (stamina ушла между выбором и исполнением)
    Unaffordable,
}

pub struct CombatDecisionEngine;

impl CombatDecisionEngine {
    /// Действия, доступные прямо сейчас (порядок фиксирован: Attack, Dash, Jump)
    pub fn legal_actions(
        now: f32,
        stamina: &ResourcePool,
        cooldowns: &ActionCooldownTracker,
        costs: &ActionCosts,
    ) -> Vec<ActionKind> {
        ActionKind::ALL
            .into_iter()
            .filter(|&kind| {
                let affordable = stamina.can_afford(costs.cost(kind));
                match kind {
                    ActionKind::Attack => affordable,
                    ActionKind::Dash | ActionKind::Jump => affordable && cooldowns.is_ready(kind, now),
                }
            })
            .collect()
    }

    /// Выбрать действие (None: lock, нет цели, нечего делать)
    pub fn select_action<R: Rng>(ctx: &DecisionContext, rng: &mut R) -> Option<ActionKind> {
        if ctx.action_locked || ctx.distance_to_target.is_none() {
            return None;
        }

        let legal = Self::legal_actions(ctx.now, ctx.stamina, ctx.cooldowns, ctx.costs);
        if legal.is_empty() {
            return None;
        }

        Some(legal[rng.gen_range(0..legal.len())])
    }

    /// Списать ресурсы + записать cooldown для выбранного действия
    pub fn commit(
        kind: ActionKind,
        now: f32,
        vitals: &mut CharacterVitals,
        cooldowns: &mut ActionCooldownTracker,
        costs: &ActionCosts,
    ) -> ActionOutcome {
        if kind == ActionKind::Attack && !cooldowns.is_ready(kind, now) {
            return ActionOutcome::AttackOnCooldown;
        }

        if !vitals.stamina.spend(costs.cost(kind)) {
            return ActionOutcome::Unaffordable;
        }

        cooldowns.record_use(kind, now);
        ActionOutcome::Started
    }
}
