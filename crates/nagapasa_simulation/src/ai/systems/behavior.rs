//! Per-state behavior: patrol, suspicious chase, combat decision.

use bevy::prelude::*;

use crate::ai::{ActionOutcome, CombatDecisionEngine, DecisionContext, DetectionState, EnemyState, PatrolRoute};
use crate::combat::{
    begin_timed_action, ActionCooldownTracker, ActionCosts, ActionInProgress, ActionKind, AnimationTriggered,
    DamageRequested, Dead, SoundRequested,
};
use crate::components::{CharacterVitals, Enemy, Facing, Player, Position, Velocity};
use crate::config::EnemyConfig;
use crate::constants::SUSPICION_SPEED_MULTIPLIER;
use crate::DeterministicRng;

/// Система: поведение врага по текущему EnemyState
///
/// - Patrolling: шаг маршрута (позиция напрямую, velocity = 0)
/// - Suspicious: горизонтальный бег к last known position (speed × 1.15)
/// - Combat: стоим, смотрим на цель, decision engine → действие
/// - ActionInProgress: ничего (фазы тикает tick_actions)
pub fn enemy_state_behavior(
    mut commands: Commands,
    players: Query<(Entity, &Position), (With<Player>, Without<Enemy>, Without<Dead>)>,
    mut enemies: Query<
        (
            Entity,
            &EnemyState,
            &EnemyConfig,
            &DetectionState,
            &mut Position,
            &mut Velocity,
            &mut Facing,
            &mut CharacterVitals,
            &mut ActionCooldownTracker,
            &ActionCosts,
            Option<&mut PatrolRoute>,
            Has<ActionInProgress>,
        ),
        (With<Enemy>, Without<Dead>),
    >,
    time: Res<Time<Fixed>>,
    mut rng: ResMut<DeterministicRng>,
    mut animations: EventWriter<AnimationTriggered>,
    mut sounds: EventWriter<SoundRequested>,
    mut damage_requests: EventWriter<DamageRequested>,
) {
    let Ok((player, target)) = players.single() else {
        return;
    };

    let now = time.elapsed_secs();
    let delta = time.delta_secs();

    for (
        entity,
        state,
        config,
        detection,
        mut position,
        mut velocity,
        mut facing,
        mut vitals,
        mut cooldowns,
        costs,
        patrol,
        action_in_flight,
    ) in enemies.iter_mut()
    {
        match state {
            EnemyState::Patrolling => {
                velocity.0 = Vec2::ZERO;
                let Some(mut patrol) = patrol else {
                    continue;
                };

                let step = patrol.step(position.0, config.speed, delta);
                position.0 = step.position;
                if let Some(direction_x) = step.facing_x {
                    *facing = Facing::from_direction_x(direction_x);
                }
                if step.reached_waypoint {
                    crate::log(&format!("📍 {:?} reached waypoint, next {}", entity, patrol.current_index));
                }
            }

            EnemyState::Suspicious => {
                let direction = (detection.last_known_target_position - position.0).normalize_or_zero();
                velocity.0.x = direction.x * config.speed * SUSPICION_SPEED_MULTIPLIER;
                *facing = Facing::from_direction_x(direction.x);
            }

            EnemyState::Combat => {
                velocity.0 = Vec2::ZERO;
                *facing = Facing::from_direction_x(target.0.x - position.0.x);

                let selected = {
                    let ctx = DecisionContext {
                        now,
                        distance_to_target: Some(position.distance(target)),
                        action_locked: action_in_flight,
                        stamina: &vitals.stamina,
                        cooldowns: &*cooldowns,
                        costs,
                    };
                    CombatDecisionEngine::select_action(&ctx, &mut rng.rng)
                };
                let Some(kind) = selected else {
                    continue;
                };

                match CombatDecisionEngine::commit(kind, now, &mut vitals, &mut cooldowns, costs) {
                    ActionOutcome::Started => {}
                    ActionOutcome::AttackOnCooldown => continue,
                    ActionOutcome::Unaffordable => {
                        crate::logger::log_warning(&format!(
                            "{:?}: {:?} selected but stamina {:.1} no longer covers it",
                            entity, kind, vitals.stamina.current
                        ));
                        continue;
                    }
                }

                animations.write(AnimationTriggered {
                    entity,
                    name: kind.animation_name(),
                });
                sounds.write(SoundRequested {
                    name: kind.sound_name(),
                });

                match kind {
                    ActionKind::Attack => {
                        damage_requests.write(DamageRequested {
                            source: Some(entity),
                            target: player,
                            raw_damage: config.attack_power as i32,
                        });
                        crate::log(&format!("⚔️ {:?} attacks {:?} ({})", entity, player, config.attack_power));
                    }
                    ActionKind::Dash | ActionKind::Jump => {
                        let direction = position.direction_to(target);
                        begin_timed_action(
                            &mut commands,
                            entity,
                            kind,
                            direction,
                            &position,
                            &mut velocity,
                            &config.action_tuning(),
                        );
                        crate::log(&format!("🏃 {:?} starts {:?} towards {}", entity, kind, target.0));
                    }
                }
            }

            EnemyState::ActionInProgress => {}
        }
    }
}
