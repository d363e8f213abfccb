//! Tests for enemy FSM transitions.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::fsm::{evaluate_transition, resolve_transition, EnemyState};
use super::{DetectionState, PatrolRoute};

#[test]
fn test_enemy_state_default() {
    assert_eq!(EnemyState::default(), EnemyState::Patrolling);
}

#[test]
fn test_action_lock_suppresses_everything() {
    assert_eq!(
        evaluate_transition(true, Some(0.0), 1.5, true),
        EnemyState::ActionInProgress
    );
    assert_eq!(
        evaluate_transition(true, None, 1.5, false),
        EnemyState::ActionInProgress
    );
}

#[test]
fn test_priority_order() {
    // В радиусе атаки → Combat даже без alert
    assert_eq!(evaluate_transition(false, Some(1.5), 1.5, false), EnemyState::Combat);
    assert_eq!(evaluate_transition(false, Some(1.0), 1.5, true), EnemyState::Combat);
    assert_eq!(evaluate_transition(false, Some(5.0), 1.5, true), EnemyState::Suspicious);
    assert_eq!(evaluate_transition(false, Some(5.0), 1.5, false), EnemyState::Patrolling);
    assert_eq!(evaluate_transition(false, None, 1.5, true), EnemyState::Suspicious);
}

#[test]
fn test_reseed_once_on_release_tick() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut patrol = PatrolRoute::new(vec![Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE], 1.0);
    let mut detection = DetectionState::new(3.0);
    detection.update(true, Vec2::ZERO, 3.0);

    let mut reseeds = 0;
    for tick in 0..5 {
        detection.update(false, Vec2::ZERO, 1.0);
        let transition = resolve_transition(false, Some(10.0), 1.5, &detection, Some(&mut patrol), &mut rng);

        if transition.reseeded_index.is_some() {
            reseeds += 1;
            assert_eq!(tick, 2, "reseed должен быть на 3-м тике");
            assert_eq!(transition.state, EnemyState::Patrolling);
        }
        if tick < 2 {
            assert_eq!(transition.state, EnemyState::Suspicious);
        }
    }
    assert_eq!(reseeds, 1);
}

#[test]
fn test_no_reseed_when_release_lands_in_combat() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut patrol = PatrolRoute::new(vec![Vec2::ZERO, Vec2::X], 1.0);
    let mut detection = DetectionState::new(1.0);
    detection.update(true, Vec2::ZERO, 1.0);
    detection.update(false, Vec2::ZERO, 1.0);
    assert!(detection.became_unalerted());

    let transition = resolve_transition(false, Some(1.0), 1.5, &detection, Some(&mut patrol), &mut rng);
    assert_eq!(transition.state, EnemyState::Combat);
    assert!(transition.reseeded_index.is_none());
}
