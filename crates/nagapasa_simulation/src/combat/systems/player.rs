//! Player actions: ввод хоста → stamina + cooldown гейтинг → исполнение.

use bevy::prelude::*;

use crate::ai::{ActionOutcome, CombatDecisionEngine};
use crate::combat::{
    begin_timed_action, ActionCooldownTracker, ActionCosts, ActionInProgress, ActionKind, AnimationTriggered,
    DamageRequested, Dead, PlayerActionRequested, SoundRequested,
};
use crate::components::{CharacterVitals, Enemy, Facing, Player, Position, Velocity};
use crate::config::PlayerConfig;

/// Система: исполнение PlayerActionRequested
///
/// - Action lock (Dash/Jump в полёте) → запрос отклоняется
/// - Не в legal set (stamina или cooldown) → отклоняется, ресурсы не трогаем
/// - Attack: DamageRequested каждому живому врагу в attack_range
/// - Dash: импульс по Facing, Jump: вертикально (горизонталь у хоста)
pub fn player_actions(
    mut commands: Commands,
    mut requests: EventReader<PlayerActionRequested>,
    mut players: Query<
        (
            Entity,
            &PlayerConfig,
            &Position,
            &mut Velocity,
            &Facing,
            &mut CharacterVitals,
            &mut ActionCooldownTracker,
            &ActionCosts,
            Has<ActionInProgress>,
        ),
        (With<Player>, Without<Dead>),
    >,
    enemies: Query<(Entity, &Position), (With<Enemy>, Without<Player>, Without<Dead>)>,
    time: Res<Time<Fixed>>,
    mut animations: EventWriter<AnimationTriggered>,
    mut sounds: EventWriter<SoundRequested>,
    mut damage_requests: EventWriter<DamageRequested>,
) {
    let Ok((player, config, position, mut velocity, facing, mut vitals, mut cooldowns, costs, action_in_flight)) =
        players.single_mut()
    else {
        requests.clear();
        return;
    };

    let now = time.elapsed_secs();
    // Lock ставится через Commands, в этом же тике смотрим на флаг
    let mut locked = action_in_flight;

    for request in requests.read() {
        let kind = request.kind;

        if locked {
            crate::log(&format!("🚫 Player {:?} ignored: action in progress", kind));
            continue;
        }

        let legal = CombatDecisionEngine::legal_actions(now, &vitals.stamina, &*cooldowns, costs);
        if !legal.contains(&kind) {
            crate::log(&format!(
                "🚫 Player {:?} rejected (stamina {:.1}, cooldown {:.2}s)",
                kind,
                vitals.stamina.current,
                cooldowns.remaining(kind, now)
            ));
            continue;
        }

        match CombatDecisionEngine::commit(kind, now, &mut vitals, &mut cooldowns, costs) {
            ActionOutcome::Started => {}
            ActionOutcome::AttackOnCooldown => {
                crate::log(&format!(
                    "🚫 Player attack on cooldown ({:.2}s)",
                    cooldowns.remaining(kind, now)
                ));
                continue;
            }
            ActionOutcome::Unaffordable => continue,
        }

        animations.write(AnimationTriggered {
            entity: player,
            name: kind.animation_name(),
        });

        match kind {
            ActionKind::Attack => {
                for (enemy, enemy_position) in enemies.iter() {
                    if position.distance(enemy_position) <= config.attack_range {
                        damage_requests.write(DamageRequested {
                            source: Some(player),
                            target: enemy,
                            raw_damage: config.attack_power as i32,
                        });
                        crate::log(&format!("⚔️ Player hits {:?} ({})", enemy, config.attack_power));
                    }
                }
            }
            ActionKind::Dash | ActionKind::Jump => {
                sounds.write(SoundRequested {
                    name: kind.sound_name(),
                });

                let direction = match kind {
                    ActionKind::Dash => Vec2::new(facing.sign(), 0.0),
                    _ => Vec2::ZERO,
                };
                locked = begin_timed_action(
                    &mut commands,
                    player,
                    kind,
                    direction,
                    position,
                    &mut velocity,
                    &config.action_tuning(),
                );
                crate::log(&format!("🏃 Player starts {:?}", kind));
            }
        }
    }
}
