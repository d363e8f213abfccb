//! Headless симуляция Nagapasa
//!
//! Один враг патрулирует, игрок стоит в зоне обнаружения: alert → бой.
//! Игрок отбивается атакой раз в полсекунды, бой идёт до смерти одного из них.

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use nagapasa_simulation::*;

fn main() {
    let seed = 42;
    println!("Starting Nagapasa headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    // Ровно один fixed тик на update (без привязки к wall clock)
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(timestep));

    let world = app.world_mut();
    let (player, enemy) = {
        let mut commands = world.commands();
        let player = spawn_player(
            &mut commands,
            Vec2::new(4.0, 0.0),
            CharacterVitals::new(100.0, 100.0),
            PlayerConfig::default(),
        );
        let enemy = spawn_enemy(
            &mut commands,
            EnemySpawn {
                position: Vec2::ZERO,
                waypoints: vec![Vec2::new(-3.0, 0.0), Vec2::new(3.0, 0.0)],
                ..Default::default()
            },
        );
        (player, enemy)
    };
    world.flush();

    let (player, enemy) = match (player, enemy) {
        (Ok(player), Ok(enemy)) => (player, enemy),
        (Err(err), _) | (_, Err(err)) => {
            log_error(&format!("Failed to spawn actors: {err}"));
            return;
        }
    };

    // 3000 тиков симуляции (50 секунд при 60Hz)
    for tick in 0..3000 {
        if tick % 30 == 0 {
            app.world_mut().send_event(PlayerActionRequested { kind: ActionKind::Attack });
        }
        app.update();

        if tick % 300 == 0 {
            let world = app.world();
            let player_health = world.get::<CharacterVitals>(player).map(|v| v.current_health);
            let enemy_state = world.get::<EnemyState>(enemy).copied();
            println!("Tick {}: player health {:?}, enemy {:?}", tick, player_health, enemy_state);
        }

        if app.world().get::<Dead>(player).is_some() {
            println!("Tick {}: player is dead", tick);
            break;
        }
        if app.world().get::<Dead>(enemy).is_some() {
            println!("Tick {}: enemy is dead", tick);
            break;
        }
    }

    println!("Simulation complete!");
}
