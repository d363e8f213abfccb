//! Tests for cooldown monotonicity.

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::combat::{ActionCooldownTracker, ActionKind};

    #[test]
    fn test_cooldown_monotonicity_random() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..200 {
            let cooldowns = [
                rng.gen_range(0.1..5.0),
                rng.gen_range(0.1..5.0),
                rng.gen_range(0.1..5.0),
            ];
            let mut tracker = ActionCooldownTracker::new(cooldowns[0], cooldowns[1], cooldowns[2]);
            let kind = ActionKind::ALL[rng.gen_range(0..3)];
            let t0: f32 = rng.gen_range(0.0..100.0);
            tracker.record_use(kind, t0);

            let cooldown = tracker.cooldown(kind);
            // Внутри окна: не готово
            for step in 0..20 {
                let t = t0 + cooldown * (step as f32 / 20.0) * 0.999;
                assert!(!tracker.is_ready(kind, t), "ready too early at t={} (t0={}, cd={})", t, t0, cooldown);
            }
            // На границе и после: готово
            assert!(tracker.is_ready(kind, t0 + cooldown));
            assert!(tracker.is_ready(kind, t0 + cooldown + rng.gen_range(0.0..10.0)));
        }
    }

    #[test]
    fn test_record_use_overwrites_previous() {
        let mut tracker = ActionCooldownTracker::new(1.0, 1.0, 1.0);
        tracker.record_use(ActionKind::Jump, 0.0);
        tracker.record_use(ActionKind::Jump, 5.0);
        assert!(!tracker.is_ready(ActionKind::Jump, 5.5));
        assert_eq!(tracker.last_used(ActionKind::Jump), Some(5.0));
    }
}
