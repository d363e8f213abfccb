//! Тайминги и множители врагов (значения из тюнинга уровней)

/// Дистанция "дошёл до waypoint" (метры)
pub const WAYPOINT_REACH_DISTANCE: f32 = 0.1;

/// Множитель скорости в Suspicious (идём к last known position чуть быстрее)
pub const SUSPICION_SPEED_MULTIPLIER: f32 = 1.15;

/// Dash: длительность импульса (секунды)
pub const DASH_DURATION: f32 = 0.3;

/// Jump: время в воздухе до импульса вниз (секунды)
pub const JUMP_MID_AIR_TIME: f32 = 0.5;

/// Jump: приземление после импульса вниз (секунды)
pub const JUMP_LANDING_TIME: f32 = 0.3;

/// Regen rate задаётся в "процентах": rate / 100 единиц в секунду
pub const REGEN_RATE_SCALE: f32 = 100.0;

/// Сколько труп врага остаётся в мире до despawn (секунды)
pub const CORPSE_LINGER: f32 = 2.0;

/// Boss: пороги фаз (доля от max health)
pub const BOSS_PHASE_2_HEALTH: f32 = 0.66;
pub const BOSS_PHASE_3_HEALTH: f32 = 0.33;

/// Boss: модификаторы фаз
pub const BOSS_PHASE_2_SPEED_MULTIPLIER: f32 = 1.5;
pub const BOSS_PHASE_3_DAMAGE_MULTIPLIER: f32 = 2.0;
pub const BOSS_SHIELD_DURATION: f32 = 3.0;
