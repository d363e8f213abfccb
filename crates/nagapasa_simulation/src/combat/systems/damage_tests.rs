//! Tests for damage / death systems.

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use crate::combat::{
    apply_damage, despawn_after_timeout, handle_death, tick_shields, ActionInProgress, DamageDealt,
    DamageRequested, Dead, DespawnAfter, EntityDied, GameOver, Shield,
};
use crate::components::{CharacterVitals, Enemy, Player, Velocity};

fn damage_world() -> World {
    let mut world = World::new();
    world.init_resource::<Events<DamageRequested>>();
    world.init_resource::<Events<DamageDealt>>();
    world.init_resource::<Events<EntityDied>>();
    world.init_resource::<Events<GameOver>>();
    world.insert_resource(Time::<Fixed>::default());
    world
}

fn collect<E: Event + Clone>(world: &World) -> Vec<E> {
    world
        .resource::<Events<E>>()
        .iter_current_update_events()
        .cloned()
        .collect()
}

fn request(world: &mut World, target: Entity, raw_damage: i32) {
    world.send_event(DamageRequested {
        source: None,
        target,
        raw_damage,
    });
}

#[test]
fn test_damage_subtracts_defense() {
    let mut world = damage_world();
    let target = world
        .spawn(CharacterVitals::new(100.0, 100.0).with_defense(2.0))
        .id();

    request(&mut world, target, 12);
    world.run_system_once(apply_damage).unwrap();

    let vitals = world.get::<CharacterVitals>(target).unwrap();
    assert_eq!(vitals.current_health, 90.0);

    let dealt = collect::<DamageDealt>(&world);
    assert_eq!(dealt.len(), 1);
    assert_eq!(dealt[0].health_delta, 10.0);
    assert!(!dealt[0].target_died);
    assert!(collect::<EntityDied>(&world).is_empty());
}

#[test]
fn test_lethal_damage_signals_death_once() {
    let mut world = damage_world();
    let target = world
        .spawn(CharacterVitals::new(20.0, 100.0).with_defense(0.0))
        .id();

    // Два смертельных удара в одном тике
    request(&mut world, target, 50);
    request(&mut world, target, 50);
    world.run_system_once(apply_damage).unwrap();

    let died = collect::<EntityDied>(&world);
    assert_eq!(died.len(), 1);
    assert_eq!(died[0].entity, target);
    assert_eq!(world.get::<CharacterVitals>(target).unwrap().current_health, 0.0);
}

#[test]
fn test_active_shield_ignores_damage() {
    let mut world = damage_world();
    let target = world
        .spawn((CharacterVitals::new(100.0, 100.0), Shield { remaining: 1.0 }))
        .id();

    request(&mut world, target, 40);
    world.run_system_once(apply_damage).unwrap();

    assert_eq!(world.get::<CharacterVitals>(target).unwrap().current_health, 100.0);
    assert!(collect::<DamageDealt>(&world).is_empty());
}

#[test]
fn test_player_death_sends_game_over() {
    let mut world = damage_world();
    let player = world.spawn(Player).id();
    world.get_mut::<Velocity>(player).unwrap().0 = Vec2::new(3.0, 1.0);

    world.send_event(EntityDied {
        entity: player,
        killer: None,
    });
    world.run_system_once(handle_death).unwrap();

    assert!(world.get::<Dead>(player).is_some());
    assert!(world.get::<DespawnAfter>(player).is_none());
    assert_eq!(world.get::<Velocity>(player).unwrap().0, Vec2::ZERO);

    let game_over = collect::<GameOver>(&world);
    assert_eq!(game_over, vec![GameOver { player }]);
}

#[test]
fn test_enemy_death_cancels_action_and_despawns() {
    let mut world = damage_world();
    let enemy = world
        .spawn((Enemy, ActionInProgress::dash()))
        .id();

    world.send_event(EntityDied {
        entity: enemy,
        killer: None,
    });
    world.run_system_once(handle_death).unwrap();

    assert!(world.get::<Dead>(enemy).is_some());
    assert!(world.get::<ActionInProgress>(enemy).is_none());
    assert!(collect::<GameOver>(&world).is_empty());

    // Труп лежит CORPSE_LINGER секунд
    world
        .resource_mut::<Time<Fixed>>()
        .advance_by(Duration::from_secs_f32(1.0));
    world.run_system_once(despawn_after_timeout).unwrap();
    assert!(world.get_entity(enemy).is_ok());

    world
        .resource_mut::<Time<Fixed>>()
        .advance_by(Duration::from_secs_f32(1.5));
    world.run_system_once(despawn_after_timeout).unwrap();
    assert!(world.get_entity(enemy).is_err());
}

#[test]
fn test_shield_expires() {
    let mut world = damage_world();
    let entity = world.spawn(Shield { remaining: 0.5 }).id();

    world
        .resource_mut::<Time<Fixed>>()
        .advance_by(Duration::from_secs_f32(0.25));
    world.run_system_once(tick_shields).unwrap();
    assert!(world.get::<Shield>(entity).is_some());

    world
        .resource_mut::<Time<Fixed>>()
        .advance_by(Duration::from_secs_f32(0.5));
    world.run_system_once(tick_shields).unwrap();
    assert!(world.get::<Shield>(entity).is_none());
}
