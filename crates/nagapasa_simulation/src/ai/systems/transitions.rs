//! FSM transition system.

use bevy::prelude::*;

use crate::ai::{resolve_transition, DetectionState, EnemyState, PatrolRoute};
use crate::combat::{ActionInProgress, Dead};
use crate::components::{Enemy, Player, Position};
use crate::config::EnemyConfig;
use crate::DeterministicRng;

/// Система: переходы EnemyState (после детекции, до поведения)
///
/// Action lock → ActionInProgress. Reseed патруля: на тике потери alert.
pub fn enemy_fsm_transitions(
    players: Query<&Position, (With<Player>, Without<Dead>)>,
    mut enemies: Query<
        (
            Entity,
            &Position,
            &EnemyConfig,
            &DetectionState,
            &mut EnemyState,
            Option<&mut PatrolRoute>,
            Has<ActionInProgress>,
        ),
        (With<Enemy>, Without<Dead>),
    >,
    mut rng: ResMut<DeterministicRng>,
) {
    let Ok(target) = players.single() else {
        return;
    };

    for (entity, position, config, detection, mut state, patrol, action_in_flight) in enemies.iter_mut() {
        let distance = position.distance(target);
        let transition = resolve_transition(
            action_in_flight,
            Some(distance),
            config.attack_range,
            detection,
            patrol.map(|patrol| patrol.into_inner()),
            &mut rng.rng,
        );

        if let Some(index) = transition.reseeded_index {
            crate::log(&format!("🔀 {:?} patrol reseeded to waypoint {}", entity, index));
        }

        if *state != transition.state {
            crate::log(&format!(
                "🔄 {:?}: {:?} → {:?} (distance {:.2})",
                entity, *state, transition.state, distance
            ));
            *state = transition.state;
        }
    }
}
