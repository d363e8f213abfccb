//! Perception: suspicion по зоне обнаружения.

use bevy::prelude::*;

use crate::ai::{DetectionState, DetectionZone};
use crate::combat::Dead;
use crate::components::{Enemy, Player, Position};

/// Система: обновление DetectionState всех врагов
///
/// Цель = единственный живой Player. Нет игрока → тик детекции пропускается
/// (лог один раз, пока игрок не появится).
pub fn update_detection(
    players: Query<&Position, (With<Player>, Without<Dead>)>,
    mut enemies: Query<(Entity, &Position, &DetectionZone, &mut DetectionState), (With<Enemy>, Without<Dead>)>,
    time: Res<Time<Fixed>>,
    mut missing_logged: Local<bool>,
) {
    let Ok(target) = players.single() else {
        if !*missing_logged {
            crate::log("Detection: no live player, skipping AI tick");
            *missing_logged = true;
        }
        return;
    };
    *missing_logged = false;

    let delta = time.delta_secs();

    for (entity, position, zone, mut detection) in enemies.iter_mut() {
        let inside = zone.contains(position.0, target.0);
        detection.update(inside, target.0, delta);

        if detection.became_alerted() {
            crate::log(&format!("👁️ {:?} alerted, target at {}", entity, target.0));
        } else if detection.became_unalerted() {
            crate::log(&format!("👻 {:?} lost the target", entity));
        }
    }
}
