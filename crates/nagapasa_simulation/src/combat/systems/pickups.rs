//! Instant regen pickups (аптечки / флаконы stamina).

use bevy::prelude::*;

use crate::combat::{Dead, PickupCollected, SoundRequested};
use crate::components::CharacterVitals;

/// Что восстанавливает пикап
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum RegenKind {
    Health,
    Stamina,
}

/// Пикап мгновенного восстановления
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct RegenPickup {
    pub kind: RegenKind,
    /// Плоское количество (не проценты)
    pub amount: f32,
}

impl RegenPickup {
    /// Применить к vitals. Возвращает true если что-то восстановили
    /// (полный ресурс не трогаем).
    pub fn apply(&self, vitals: &mut CharacterVitals) -> bool {
        match self.kind {
            RegenKind::Health => {
                if vitals.current_health >= vitals.max_health {
                    return false;
                }
                vitals.heal(self.amount);
                true
            }
            RegenKind::Stamina => {
                if vitals.stamina.is_full() {
                    return false;
                }
                vitals.stamina.restore(self.amount);
                true
            }
        }
    }
}

/// Система: собрать пикапы
///
/// Звук "Regen" играет всегда, пикап исчезает даже если ресурс был полон.
pub fn collect_pickups(
    mut commands: Commands,
    mut events: EventReader<PickupCollected>,
    pickups: Query<&RegenPickup>,
    mut collectors: Query<&mut CharacterVitals, Without<Dead>>,
    mut sounds: EventWriter<SoundRequested>,
) {
    // Despawn отложен до конца тика: двойной trigger не должен лечить дважды
    let mut consumed: Vec<Entity> = Vec::new();

    for event in events.read() {
        if consumed.contains(&event.pickup) {
            continue;
        }
        let Ok(pickup) = pickups.get(event.pickup) else {
            continue;
        };
        let Ok(mut vitals) = collectors.get_mut(event.collector) else {
            continue;
        };

        sounds.write(SoundRequested { name: "Regen" });
        if pickup.apply(&mut vitals) {
            crate::log(&format!("✨ {:?} restored {:?} by {}", event.collector, pickup.kind, pickup.amount));
        }

        consumed.push(event.pickup);
        if let Ok(mut entity_commands) = commands.get_entity(event.pickup) {
            entity_commands.despawn();
        }
    }
}
