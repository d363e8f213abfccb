//! Kinematic movement: position += velocity * dt.

use bevy::prelude::*;

use crate::combat::Dead;
use crate::components::{Position, Velocity};

/// Система: интеграция velocity (физики нет, коллизии решает хост)
pub fn integrate_velocity(
    mut query: Query<(&mut Position, &Velocity), Without<Dead>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut position, velocity) in query.iter_mut() {
        position.0 += velocity.0 * delta;
    }
}
