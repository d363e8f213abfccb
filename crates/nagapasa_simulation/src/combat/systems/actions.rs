//! Timed action execution (Dash / Jump phase timers).

use bevy::prelude::*;

use crate::combat::{ActionInProgress, ActionKind, ActionPhase, ActionStep, Dead};
use crate::components::{Position, Velocity};
use crate::config::ActionTuning;

/// Стартовая velocity действия
///
/// - Dash: импульс по направлению
/// - Jump: вверх + горизонталь (x направления * speed)
/// - Attack: мгновенный, velocity не трогаем → None
pub fn start_velocity(kind: ActionKind, direction: Vec2, tuning: &ActionTuning) -> Option<Vec2> {
    match kind {
        ActionKind::Attack => None,
        ActionKind::Dash => Some(direction * tuning.dash_power),
        ActionKind::Jump => {
            let jump_direction = Vec2::new(direction.x, 1.0).normalize_or_zero();
            Some(Vec2::new(jump_direction.x * tuning.speed, tuning.jump_power))
        }
    }
}

/// Запустить timed действие: вешает ActionInProgress (action lock) + стартовая velocity
///
/// Возвращает false для Attack (нет timed фазы).
pub fn begin_timed_action(
    commands: &mut Commands,
    entity: Entity,
    kind: ActionKind,
    direction: Vec2,
    position: &Position,
    velocity: &mut Velocity,
    tuning: &ActionTuning,
) -> bool {
    let (Some(action), Some(start)) = (
        ActionInProgress::for_kind(kind, tuning),
        start_velocity(kind, direction, tuning),
    ) else {
        return false;
    };

    velocity.0 = start;
    commands.entity(entity).insert(action.with_takeoff_y(position.0.y));
    true
}

/// Система: тик фаз действий (игрок и враги)
///
/// Jump Ascent → Descent: импульс вниз (velocity.y = -descent_speed).
/// Finished: velocity = 0, Jump приземляется на takeoff_y, action lock снимается.
pub fn tick_actions(
    mut commands: Commands,
    mut query: Query<(Entity, &mut ActionInProgress, &mut Position, &mut Velocity), Without<Dead>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut action, mut position, mut velocity) in query.iter_mut() {
        match action.tick(delta) {
            ActionStep::Continue => {}
            ActionStep::Entered(ActionPhase::JumpDescent) => {
                velocity.0.y = -action.descent_speed;
            }
            ActionStep::Entered(_) => {}
            ActionStep::Finished => {
                velocity.0 = Vec2::ZERO;
                if action.kind == ActionKind::Jump {
                    position.0.y = action.takeoff_y;
                }
                commands.entity(entity).remove::<ActionInProgress>();
                crate::log(&format!("✅ {:?} finished {:?}", entity, action.kind));
            }
        }
    }
}
