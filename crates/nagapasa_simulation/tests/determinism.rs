//! Тесты детерминизма
//!
//! Одинаковый seed → идентичные позиции, vitals и состояния врагов.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use nagapasa_simulation::*;

/// Запускает бой 3 врагов против игрока и возвращает snapshot мира
fn run_simulation(seed: u64, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(timestep));

    app.world_mut().spawn((
        Player,
        Position::new(0.0, 0.0),
        CharacterVitals::new(500.0, 100.0),
    ));

    for i in 0..3 {
        let spawn = EnemySpawn {
            position: Vec2::new(-3.0 + i as f32 * 3.0, 0.0),
            waypoints: vec![Vec2::new(-6.0, 0.0), Vec2::new(6.0, 0.0)],
            ..Default::default()
        };
        let bundle = enemy_bundle(&spawn).expect("valid enemy spawn");
        app.world_mut().spawn(bundle);
    }

    for _ in 0..tick_count {
        app.update();
    }

    let world = app.world_mut();
    let mut snapshot = world_snapshot::<Position>(world);
    snapshot.extend(world_snapshot::<CharacterVitals>(world));
    snapshot.extend(world_snapshot::<EnemyState>(world));
    snapshot.extend(world_snapshot::<ActionCooldownTracker>(world));
    snapshot
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: usize = 600;

    let snapshot1 = run_simulation(SEED, TICK_COUNT);
    let snapshot2 = run_simulation(SEED, TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICK_COUNT: usize = 300;

    // Запускаем 3 раза: все должны быть идентичны
    let snapshots: Vec<_> = (0..3).map(|_| run_simulation(SEED, TICK_COUNT)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}
