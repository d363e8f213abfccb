//! Combat module
//!
//! ECS ответственность:
//! - Vitals: health, stamina (ResourcePool), defense, regen
//! - Action gating: ActionCooldownTracker + ActionCosts (враги и игрок)
//! - Player actions: PlayerActionRequested от хоста
//! - Timed actions: Dash / Jump phase timers (ActionInProgress = action lock)
//! - Damage pipeline: DamageRequested → apply_damage → DamageDealt / EntityDied
//! - Pickups и hazards (хост шлёт trigger события)
//!
//! Хост (движок) ответственность:
//! - Физика, коллизии, триггеры → PickupCollected / HazardEntered
//! - Ввод игрока → PlayerActionRequested, Facing игрока
//! - AnimationTriggered / SoundRequested → аниматор и аудио

use bevy::prelude::*;

use crate::config::PlayerConfig;
use crate::SimulationSet;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::*;
pub use events::*;
pub use systems::*;

/// Combat Plugin
///
/// Регистрирует combat события и системы в FixedUpdate.
///
/// Порядок выполнения (по SimulationSet):
/// 0. PlayerInput: player_actions (до AI этого тика)
/// 1. Actions: тик Dash / Jump фаз
/// 2. Regen: health + stamina
/// 3. Triggers: hazards → DamageRequested, пикапы
/// 4. Damage: apply_damage
/// 5. Death: handle_death (Dead, GameOver, DespawnAfter)
/// 6. Cleanup: despawn трупов, тик щитов
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        crate::configure_simulation_sets(app);

        // Регистрация событий
        app.add_event::<DamageRequested>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_event::<GameOver>()
            .add_event::<AnimationTriggered>()
            .add_event::<SoundRequested>()
            .add_event::<PickupCollected>()
            .add_event::<HazardEntered>()
            .add_event::<PlayerActionRequested>();

        app.register_type::<ResourcePool>()
            .register_type::<ActionCooldownTracker>()
            .register_type::<ActionCosts>()
            .register_type::<ActionInProgress>()
            .register_type::<Shield>()
            .register_type::<RegenPickup>()
            .register_type::<HazardTrigger>()
            .register_type::<PlayerConfig>();

        app.add_systems(
            FixedUpdate,
            (
                player_actions.in_set(SimulationSet::PlayerInput),
                tick_actions.in_set(SimulationSet::Actions),
                regenerate_vitals.in_set(SimulationSet::Regen),
                (hazard_damage, collect_pickups)
                    .chain()
                    .in_set(SimulationSet::Triggers),
                apply_damage.in_set(SimulationSet::Damage),
                handle_death.in_set(SimulationSet::Death),
                (despawn_after_timeout, tick_shields)
                    .chain()
                    .in_set(SimulationSet::Cleanup),
            ),
        );
    }
}
