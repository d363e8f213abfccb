//! Damage application, death handling, despawn.

use bevy::prelude::*;

use crate::combat::{
    ActionInProgress, DamageDealt, DamageRequested, EntityDied, GameOver,
};
use crate::components::{CharacterVitals, Player, Velocity};
use crate::constants::CORPSE_LINGER;

/// Компонент-маркер: entity мертв
///
/// AI/combat системы фильтруют `Without<Dead>`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Dead;

/// Despawn через timer секунд (трупы врагов)
#[derive(Component, Debug, Clone, Copy)]
pub struct DespawnAfter {
    pub timer: f32,
}

/// Щит: пока активен, урон игнорируется
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Shield {
    pub remaining: f32,
}

impl Shield {
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}

/// Система: apply damage от DamageRequested
///
/// 1. Читаем DamageRequested
/// 2. Shield активен → урон игнорируется
/// 3. CharacterVitals::apply_damage (raw - defense, clamp)
/// 4. DamageDealt + (one-shot) EntityDied
pub fn apply_damage(
    mut requests: EventReader<DamageRequested>,
    mut damage_dealt_events: EventWriter<DamageDealt>,
    mut entity_died_events: EventWriter<EntityDied>,
    mut targets: Query<(&mut CharacterVitals, Option<&Shield>), Without<Dead>>,
) {
    for request in requests.read() {
        let Ok((mut vitals, shield)) = targets.get_mut(request.target) else {
            crate::logger::log_warning(&format!(
                "DamageRequested: target {:?} has no CharacterVitals (or already dead)",
                request.target
            ));
            continue;
        };

        if shield.is_some_and(Shield::is_active) {
            crate::log(&format!("🛡️ {:?} shield absorbed {} damage", request.target, request.raw_damage));
            continue;
        }

        let before = vitals.current_health;
        let died = vitals.apply_damage(request.raw_damage);
        let health_delta = before - vitals.current_health;

        crate::log(&format!(
            "💥 {:?} → {:?}: raw {} (defense {}), health {:.1} → {:.1}",
            request.source, request.target, request.raw_damage, vitals.defense_power, before, vitals.current_health
        ));

        damage_dealt_events.write(DamageDealt {
            source: request.source,
            target: request.target,
            health_delta,
            target_died: died,
        });

        if died {
            entity_died_events.write(EntityDied {
                entity: request.target,
                killer: request.source,
            });
            crate::logger::log_info(&format!("☠️ Entity {:?} killed by {:?}", request.target, request.source));
        }
    }
}

/// Система: обработка смерти
///
/// - Отменяет action in flight (ActionInProgress снимается, velocity = 0),
///   чтобы таймер не мутировал ресурсы мертвеца
/// - Вешает Dead
/// - Игрок → GameOver, враг → DespawnAfter
pub fn handle_death(
    mut commands: Commands,
    mut death_events: EventReader<EntityDied>,
    mut bodies: Query<(Option<&mut Velocity>, Has<Player>)>,
    mut game_over_events: EventWriter<GameOver>,
) {
    for event in death_events.read() {
        let Ok((velocity, is_player)) = bodies.get_mut(event.entity) else {
            continue;
        };

        if let Some(mut velocity) = velocity {
            velocity.0 = Vec2::ZERO;
        }

        let Ok(mut entity_commands) = commands.get_entity(event.entity) else {
            continue;
        };
        entity_commands.remove::<ActionInProgress>().insert(Dead);

        if is_player {
            game_over_events.write(GameOver { player: event.entity });
            crate::logger::log_info(&format!("💀 Player {:?} died: game over", event.entity));
        } else {
            entity_commands.insert(DespawnAfter { timer: CORPSE_LINGER });
            crate::log(&format!("AI disabled for dead entity {:?}", event.entity));
        }
    }
}

/// Система: despawn трупов после таймаута
pub fn despawn_after_timeout(
    mut commands: Commands,
    mut query: Query<(Entity, &mut DespawnAfter)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut despawn) in query.iter_mut() {
        despawn.timer -= delta;
        if despawn.timer <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Система: тик щитов
pub fn tick_shields(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Shield)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut shield) in query.iter_mut() {
        shield.remaining -= delta;
        if !shield.is_active() {
            commands.entity(entity).remove::<Shield>();
            crate::log(&format!("🛡️ Shield on {:?} expired", entity));
        }
    }
}
