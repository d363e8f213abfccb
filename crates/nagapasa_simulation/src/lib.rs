//! Nagapasa Simulation Core
//!
//! ECS-симуляция врагов на Bevy 0.16 (headless).
//!
//! Враг: detection зона → suspicion → FSM (Patrolling / Suspicious / Combat / ActionInProgress).
//! В Combat действия (Attack, Dash, Jump) гейтятся общей stamina и отдельными cooldown'ами,
//! выбор uniform random среди доступных, одновременно выполняется только одно действие.
//!
//! Движок (рендер, анимации, звук, физика) живёт снаружи и общается через events:
//! AnimationTriggered / SoundRequested наружу, PickupCollected / HazardEntered /
//! PlayerActionRequested внутрь.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod spawn;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, BossPhase, CombatDecisionEngine, DetectionState, DetectionZone, EnemyState, PatrolRoute};
pub use combat::{
    ActionCooldownTracker, ActionCosts, ActionInProgress, ActionKind, AnimationTriggered, CombatPlugin,
    DamageDealt, DamageRequested, Dead, DespawnAfter, EntityDied, GameOver, HazardEntered, HazardKind, HazardTrigger,
    PickupCollected, PlayerActionRequested, RegenKind, RegenPickup, ResourcePool, Shield, SoundRequested,
};
pub use components::*;
pub use config::{ActionTuning, EnemyConfig, PlayerConfig, SimulationConfig};
pub use error::SimulationError;
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, LogLevel, LogPrinter};
pub use spawn::{enemy_bundle, player_bundle, spawn_enemy, spawn_player, EnemySpawn};

/// Фазы FixedUpdate тика (строго последовательно)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// PlayerActionRequested (ввод хоста)
    PlayerInput,
    /// Suspicion / alert
    Detection,
    /// EnemyState transitions + patrol reseed
    Transitions,
    /// Patrol / chase / combat decision
    Behavior,
    /// Dash / Jump phase timers
    Actions,
    /// position += velocity * dt
    Movement,
    Regen,
    /// Hazards, pickups (события от хоста)
    Triggers,
    Damage,
    Death,
    /// Boss фазы (после урона этого тика)
    Phases,
    /// Despawn трупов, щиты
    Cleanup,
}

/// Порядок SimulationSet (idempotent, вызывают оба plugin'а)
pub(crate) fn configure_simulation_sets(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            SimulationSet::PlayerInput,
            SimulationSet::Detection,
            SimulationSet::Transitions,
            SimulationSet::Behavior,
            SimulationSet::Actions,
            SimulationSet::Movement,
            SimulationSet::Regen,
            SimulationSet::Triggers,
            SimulationSet::Damage,
            SimulationSet::Death,
            SimulationSet::Phases,
            SimulationSet::Cleanup,
        )
            .chain(),
    );
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Берёт SimulationConfig из ресурсов (или default), ставит fixed timestep и RNG
/// если их ещё нет.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SimulationConfig>()
            .cloned()
            .unwrap_or_default();

        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                logger::log_error(&format!("SimulationConfig rejected, using defaults: {err}"));
                SimulationConfig::default()
            }
        };

        app.insert_resource(Time::<Fixed>::from_hz(config.fixed_hz));
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(config.seed));
        }

        app.register_type::<Actor>()
            .register_type::<Player>()
            .register_type::<Enemy>()
            .register_type::<CharacterVitals>()
            .register_type::<Position>()
            .register_type::<Velocity>()
            .register_type::<Facing>()
            .register_type::<EnemyConfig>();

        app.insert_resource(config)
            // Подсистемы
            .add_plugins((CombatPlugin, AIPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    let config = SimulationConfig::with_seed(seed);
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(config.fixed_hz))
        .insert_resource(config);

    app
}

/// Snapshot мира для сравнения детерминизма
/// (Debug-представление компонентов, отсортированное по Entity index)
pub fn world_snapshot<T>(world: &mut World) -> Vec<u8>
where
    T: Component + std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
