//! Spawn helpers: враг (FSM + detection + patrol) и игрок.

use bevy::prelude::*;

use crate::ai::{BossPhase, DetectionState, DetectionZone, EnemyState, PatrolRoute};
use crate::combat::{ActionCooldownTracker, ActionCosts};
use crate::components::{CharacterVitals, Enemy, Player, Position};
use crate::config::{EnemyConfig, PlayerConfig};
use crate::error::SimulationError;

/// Параметры спавна врага
#[derive(Debug, Clone, PartialEq)]
pub struct EnemySpawn {
    pub position: Vec2,
    pub config: EnemyConfig,
    pub waypoints: Vec<Vec2>,
    /// Зона обнаружения (AABB относительно врага)
    pub zone_half_extents: Vec2,
    pub zone_offset: Vec2,
    pub vitals: CharacterVitals,
    /// Boss фазы (66% / 33%)
    pub boss: bool,
}

impl Default for EnemySpawn {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            config: EnemyConfig::default(),
            waypoints: Vec::new(),
            zone_half_extents: Vec2::new(5.0, 2.0),
            zone_offset: Vec2::ZERO,
            vitals: CharacterVitals::default(),
            boss: false,
        }
    }
}

/// Собрать bundle врага (валидация конфига + зоны)
pub fn enemy_bundle(spawn: &EnemySpawn) -> Result<impl Bundle, SimulationError> {
    spawn.config.validate()?;
    let zone = DetectionZone::new(spawn.zone_half_extents, spawn.zone_offset)?;

    Ok((
        Enemy,
        Position(spawn.position),
        spawn.vitals.clone(),
        DetectionState::new(spawn.config.suspicion_threshold),
        zone,
        PatrolRoute::new(spawn.waypoints.clone(), spawn.config.idle_duration),
        EnemyState::default(),
        ActionCooldownTracker::from_config(&spawn.config),
        ActionCosts::from_config(&spawn.config),
        spawn.config.clone(),
    ))
}

/// Спавн врага через Commands
pub fn spawn_enemy(commands: &mut Commands, spawn: EnemySpawn) -> Result<Entity, SimulationError> {
    let mut entity_commands = commands.spawn(enemy_bundle(&spawn)?);
    if spawn.boss {
        entity_commands.insert(BossPhase::default());
    }

    let entity = entity_commands.id();
    crate::log(&format!(
        "Spawned enemy {:?} at {} ({} waypoints{})",
        entity,
        spawn.position,
        spawn.waypoints.len(),
        if spawn.boss { ", boss" } else { "" }
    ));
    Ok(entity)
}

/// Собрать bundle игрока: свои stamina/cooldown инстансы из PlayerConfig
pub fn player_bundle(
    position: Vec2,
    vitals: CharacterVitals,
    config: PlayerConfig,
) -> Result<impl Bundle, SimulationError> {
    config.validate()?;

    Ok((
        Player,
        Position(position),
        vitals,
        ActionCooldownTracker::from_player(&config),
        ActionCosts::from_player(&config),
        config,
    ))
}

/// Спавн игрока (цель всех врагов)
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec2,
    vitals: CharacterVitals,
    config: PlayerConfig,
) -> Result<Entity, SimulationError> {
    let entity = commands.spawn(player_bundle(position, vitals, config)?).id();
    crate::log(&format!("Spawned player {:?} at {}", entity, position));
    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected() {
        let spawn = EnemySpawn {
            config: EnemyConfig {
                speed: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(enemy_bundle(&spawn).is_err());
    }

    #[test]
    fn test_invalid_zone_rejected() {
        let spawn = EnemySpawn {
            zone_half_extents: Vec2::new(-1.0, 1.0),
            ..Default::default()
        };
        assert!(enemy_bundle(&spawn).is_err());
    }

    #[test]
    fn test_enemy_bundle_components() {
        let mut world = World::new();
        let spawn = EnemySpawn {
            position: Vec2::new(3.0, 0.0),
            waypoints: vec![Vec2::ZERO, Vec2::X],
            ..Default::default()
        };
        let Ok(bundle) = enemy_bundle(&spawn) else {
            panic!("default spawn must be valid");
        };
        let enemy = world.spawn(bundle).id();

        assert_eq!(world.get::<Position>(enemy), Some(&Position::new(3.0, 0.0)));
        assert_eq!(world.get::<EnemyState>(enemy), Some(&EnemyState::Patrolling));
        assert_eq!(world.get::<DetectionState>(enemy).unwrap().threshold, 1.5);
        assert_eq!(world.get::<PatrolRoute>(enemy).unwrap().waypoints.len(), 2);
        // Required components от Actor
        assert!(world.get::<crate::components::Velocity>(enemy).is_some());
        assert!(world.get::<crate::components::Facing>(enemy).is_some());
    }

    #[test]
    fn test_player_bundle_has_own_gating() {
        let mut world = World::new();
        let Ok(bundle) = player_bundle(Vec2::ZERO, CharacterVitals::default(), PlayerConfig::default()) else {
            panic!("default player must be valid");
        };
        let player = world.spawn(bundle).id();

        let tracker = world.get::<ActionCooldownTracker>(player).unwrap();
        assert_eq!(tracker.cooldown(crate::combat::ActionKind::Dash), 1.0);
        let costs = world.get::<ActionCosts>(player).unwrap();
        assert_eq!(costs.cost(crate::combat::ActionKind::Dash), 20.0);
        assert!(world.get::<crate::components::Facing>(player).is_some());
    }

    #[test]
    fn test_invalid_player_config_rejected() {
        let config = PlayerConfig {
            speed: -1.0,
            ..Default::default()
        };
        assert!(player_bundle(Vec2::ZERO, CharacterVitals::default(), config).is_err());
    }
}
