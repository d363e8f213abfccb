//! Enemy FSM: состояния и правила переходов.
//!
//! ```text
//! приоритет (сверху вниз, первый подходящий):
//! 1. action in flight      → ActionInProgress (остальное не проверяем)
//! 2. distance ≤ range      → Combat
//! 3. alerted               → Suspicious
//! 4. иначе                 → Patrolling (+ reseed waypoint если только что потеряли цель)
//! ```
//!
//! Терминального состояния нет: смерть снимает AI через `Dead`.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::{DetectionState, PatrolRoute};

/// Состояние врага
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum EnemyState {
    #[default]
    Patrolling,
    Suspicious,
    Combat,
    ActionInProgress,
}

/// Чистая функция перехода
///
/// `distance_to_target = None`: цели нет (дистанция считается бесконечной).
pub fn evaluate_transition(
    action_in_flight: bool,
    distance_to_target: Option<f32>,
    attack_range: f32,
    is_alerted: bool,
) -> EnemyState {
    if action_in_flight {
        return EnemyState::ActionInProgress;
    }

    if distance_to_target.is_some_and(|distance| distance <= attack_range) {
        EnemyState::Combat
    } else if is_alerted {
        EnemyState::Suspicious
    } else {
        EnemyState::Patrolling
    }
}

/// Результат резолва тика
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: EnemyState,
    /// Новый индекс waypoint если был reseed
    pub reseeded_index: Option<usize>,
}

/// Переход + reseed патруля
///
/// Reseed ровно на тике, где alert снялся и итоговое состояние Patrolling.
pub fn resolve_transition<R: Rng>(
    action_in_flight: bool,
    distance_to_target: Option<f32>,
    attack_range: f32,
    detection: &DetectionState,
    patrol: Option<&mut PatrolRoute>,
    rng: &mut R,
) -> Transition {
    let state = evaluate_transition(
        action_in_flight,
        distance_to_target,
        attack_range,
        detection.is_alerted,
    );

    let reseeded_index = match (state, patrol) {
        (EnemyState::Patrolling, Some(patrol)) if detection.became_unalerted() => patrol.reseed(rng),
        _ => None,
    };

    Transition {
        state,
        reseeded_index,
    }
}
