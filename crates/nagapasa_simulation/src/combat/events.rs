//! Combat events: единственный канал наружу (animation, audio, damage, death).
//!
//! Симуляция не знает про аниматор/аудио движка: пишет события, хост их читает.

use bevy::prelude::*;

use crate::combat::ActionKind;

/// Запрос на урон (damage sink)
///
/// Пишут: атака врага, hazard триггеры. Читает: apply_damage.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageRequested {
    /// Кто бьёт (None: окружение: ловушки, падение)
    pub source: Option<Entity>,
    pub target: Entity,
    /// Сырой урон до defense
    pub raw_damage: i32,
}

/// Событие: урон применён
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageDealt {
    pub source: Option<Entity>,
    pub target: Entity,
    /// Фактическое изменение health (отрицательное = net heal)
    pub health_delta: f32,
    pub target_died: bool,
}

/// Событие: entity умер (one-shot на entity)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Событие: игрок умер (хост ставит паузу / экран game over)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct GameOver {
    pub player: Entity,
}

/// Animation trigger sink (fire-and-forget)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct AnimationTriggered {
    pub entity: Entity,
    pub name: &'static str,
}

/// Audio sink (fire-and-forget)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SoundRequested {
    pub name: &'static str,
}

/// Хост: collector вошёл в trigger пикапа
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PickupCollected {
    pub collector: Entity,
    pub pickup: Entity,
}

/// Хост: entity вошёл в hazard trigger
#[derive(Event, Debug, Clone, PartialEq)]
pub struct HazardEntered {
    pub entity: Entity,
    pub hazard: Entity,
}

/// Хост: игрок нажал кнопку действия (attack / dash / jump)
///
/// Гейтится той же stamina + cooldown логикой, что и у врагов.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlayerActionRequested {
    pub kind: ActionKind,
}
