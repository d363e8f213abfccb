//! Enemy AI module
//!
//! Detection (suspicion + зона) → FSM transitions → per-state behavior.
//! Боевые действия выбирает CombatDecisionEngine, исполнение живёт в combat.

use bevy::prelude::*;

use crate::SimulationSet;

pub mod boss;
pub mod components;
pub mod decision;
pub mod systems;

// Re-export основных типов
pub use boss::{update_boss_phases, BossPhase};
pub use components::*;
pub use decision::{ActionOutcome, CombatDecisionEngine, DecisionContext};
pub use systems::*;

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. update_detection: suspicion level / alert
/// 2. enemy_fsm_transitions: EnemyState (+ reseed патруля)
/// 3. enemy_state_behavior: patrol / chase / decision + старт действия
/// 4. integrate_velocity: position += velocity * dt
/// 5. update_boss_phases: после урона этого тика
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        crate::configure_simulation_sets(app);

        app.register_type::<DetectionState>()
            .register_type::<DetectionZone>()
            .register_type::<PatrolRoute>()
            .register_type::<EnemyState>()
            .register_type::<BossPhase>();

        app.add_systems(
            FixedUpdate,
            (
                update_detection.in_set(SimulationSet::Detection),
                enemy_fsm_transitions.in_set(SimulationSet::Transitions),
                enemy_state_behavior.in_set(SimulationSet::Behavior),
                integrate_velocity.in_set(SimulationSet::Movement),
                update_boss_phases.in_set(SimulationSet::Phases),
            ),
        );
    }
}
