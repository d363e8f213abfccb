//! Property tests: suspicion bounds и гистерезис на случайных последовательностях.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::detection::DetectionState;

#[test]
fn test_suspicion_stays_bounded_and_alert_flips_only_at_bounds() {
    for seed in 0..32u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let threshold = rng.gen_range(0.5..4.0);
        let mut detection = DetectionState::new(threshold);

        for _ in 0..500 {
            let inside = rng.gen_bool(0.5);
            let delta = rng.gen_range(0.0..0.5);
            detection.update(inside, Vec2::ZERO, delta);

            assert!(detection.suspicion_level >= 0.0);
            assert!(detection.suspicion_level <= threshold);

            if detection.became_alerted() {
                assert!(detection.suspicion_level >= threshold, "seed {}", seed);
            }
            if detection.became_unalerted() {
                assert!(detection.suspicion_level <= 0.0, "seed {}", seed);
            }
        }
    }
}

#[test]
fn test_three_tick_decay_releases_on_last_tick() {
    let mut detection = DetectionState::new(3.0);
    detection.update(true, Vec2::ZERO, 3.0);
    assert!(detection.is_alerted);

    detection.update(false, Vec2::ZERO, 1.0);
    assert!(detection.is_alerted && !detection.became_unalerted());
    detection.update(false, Vec2::ZERO, 1.0);
    assert!(detection.is_alerted && !detection.became_unalerted());
    detection.update(false, Vec2::ZERO, 1.0);

    assert_eq!(detection.suspicion_level, 0.0);
    assert!(!detection.is_alerted);
    assert!(detection.became_unalerted());
}
