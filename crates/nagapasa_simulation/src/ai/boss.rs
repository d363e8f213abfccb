//! Boss фазы: пороги по health, модификаторы необратимы.
//!
//! ```text
//! phase 1 → 2: health ≤ 66%  → speed × 1.5 + Shield 3s
//! phase 2 → 3: health ≤ 33%  → attack_power × 2
//! ```

use bevy::prelude::*;

use crate::combat::{Dead, Shield};
use crate::components::CharacterVitals;
use crate::config::EnemyConfig;
use crate::constants::{
    BOSS_PHASE_2_HEALTH, BOSS_PHASE_2_SPEED_MULTIPLIER, BOSS_PHASE_3_DAMAGE_MULTIPLIER,
    BOSS_PHASE_3_HEALTH, BOSS_SHIELD_DURATION,
};

/// Текущая фаза босса (1..=3)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct BossPhase {
    pub phase: u8,
}

impl Default for BossPhase {
    fn default() -> Self {
        Self { phase: 1 }
    }
}

impl BossPhase {
    /// Фаза, положенная по доле health (без учёта текущей)
    pub fn phase_for_health(health_fraction: f32) -> u8 {
        if health_fraction <= BOSS_PHASE_3_HEALTH {
            3
        } else if health_fraction <= BOSS_PHASE_2_HEALTH {
            2
        } else {
            1
        }
    }
}

/// Система: переход фаз босса
///
/// Перескок 1 → 3 одним ударом применяет модификаторы обеих фаз.
pub fn update_boss_phases(
    mut commands: Commands,
    mut bosses: Query<(Entity, &mut BossPhase, &mut EnemyConfig, &CharacterVitals), Without<Dead>>,
) {
    for (entity, mut boss, mut config, vitals) in bosses.iter_mut() {
        let target_phase = BossPhase::phase_for_health(vitals.health_fraction());

        while boss.phase < target_phase {
            boss.phase += 1;
            match boss.phase {
                2 => {
                    config.speed *= BOSS_PHASE_2_SPEED_MULTIPLIER;
                    commands.entity(entity).insert(Shield {
                        remaining: BOSS_SHIELD_DURATION,
                    });
                }
                3 => {
                    config.attack_power *= BOSS_PHASE_3_DAMAGE_MULTIPLIER;
                }
                _ => {}
            }
            crate::logger::log_info(&format!("👹 Boss {:?} entered phase {}", entity, boss.phase));
        }
    }
}
