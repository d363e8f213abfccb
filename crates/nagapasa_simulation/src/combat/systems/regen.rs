//! Regen системы.

use bevy::prelude::*;

use crate::combat::Dead;
use crate::components::CharacterVitals;

/// Система: regenerate health + stamina для живых акторов
///
/// Работает в FixedUpdate для детерминизма. Rate в "процентах" (rate / 100 в секунду).
pub fn regenerate_vitals(
    mut query: Query<&mut CharacterVitals, Without<Dead>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for mut vitals in query.iter_mut() {
        vitals.regen_tick(delta);
    }
}
