//! Hazard triggers (пропасти, шипы, лава).

use bevy::prelude::*;

use crate::combat::{DamageRequested, Dead, HazardEntered};
use crate::components::CharacterVitals;

/// Тип урона hazard'а
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum HazardKind {
    /// Урон = max_health - 1 (через defense почти всегда летально)
    GameOver,
    /// Фиксированный урон
    Manual(f32),
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct HazardTrigger {
    pub kind: HazardKind,
}

impl HazardTrigger {
    /// Сырой урон для конкретной жертвы (дробная часть отбрасывается)
    pub fn raw_damage(&self, victim: &CharacterVitals) -> i32 {
        let damage = match self.kind {
            HazardKind::GameOver => victim.max_health - 1.0,
            HazardKind::Manual(amount) => amount,
        };
        damage as i32
    }
}

/// Система: hazard → DamageRequested (обычный damage pipeline, defense работает)
pub fn hazard_damage(
    mut events: EventReader<HazardEntered>,
    hazards: Query<&HazardTrigger>,
    victims: Query<&CharacterVitals, Without<Dead>>,
    mut damage_requests: EventWriter<DamageRequested>,
) {
    for event in events.read() {
        let (Ok(hazard), Ok(vitals)) = (hazards.get(event.hazard), victims.get(event.entity)) else {
            continue;
        };

        let raw_damage = hazard.raw_damage(vitals);
        crate::log(&format!("⚠️ {:?} entered hazard {:?} ({:?}, raw {})", event.entity, event.hazard, hazard.kind, raw_damage));

        damage_requests.write(DamageRequested {
            source: None,
            target: event.entity,
            raw_damage,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_hazard_damage() {
        let vitals = CharacterVitals::new(120.0, 100.0);
        let hazard = HazardTrigger { kind: HazardKind::GameOver };
        assert_eq!(hazard.raw_damage(&vitals), 119);
    }

    #[test]
    fn test_manual_hazard_truncates() {
        let vitals = CharacterVitals::default();
        let hazard = HazardTrigger { kind: HazardKind::Manual(7.9) };
        assert_eq!(hazard.raw_damage(&vitals), 7);
    }
}
