//! Timed actions (Dash / Jump) как явный phase timer.
//!
//! # Phases
//!
//! ```text
//! Dash:  Dashing (0.3s, impulse к цели) → finished (velocity = 0)
//! Jump:  Ascent (0.5s, вверх) → Descent (0.3s, импульс вниз) → finished (velocity = 0)
//! ```
//!
//! Гравитации нет (физика у хоста), поэтому приземление возвращает y на высоту отрыва.
//!
//! Пока компонент висит на entity: action lock: FSM стоит в ActionInProgress,
//! новое действие не выбирается. Смерть снимает компонент (cancel).

use bevy::prelude::*;

use crate::combat::ActionKind;
use crate::config::ActionTuning;
use crate::constants::{DASH_DURATION, JUMP_LANDING_TIME, JUMP_MID_AIR_TIME};

/// Фаза выполняемого действия
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum ActionPhase {
    /// Dash impulse
    Dashing,
    /// Jump: подъём (mid-air)
    JumpAscent,
    /// Jump: импульс вниз + приземление
    JumpDescent,
}

/// Что произошло с действием за тик
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionStep {
    /// Фаза продолжается
    Continue,
    /// Перешли в новую фазу (caller применяет её velocity)
    Entered(ActionPhase),
    /// Действие завершено (caller снимает компонент, обнуляет velocity)
    Finished,
}

/// Action lock + phase timer
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ActionInProgress {
    pub kind: ActionKind,
    pub phase: ActionPhase,
    /// Оставшееся время текущей фазы (секунды)
    pub phase_timer: f32,
    /// Импульс вниз при входе в JumpDescent
    pub descent_speed: f32,
    /// Высота отрыва (Jump приземляется сюда)
    pub takeoff_y: f32,
}

impl ActionInProgress {
    pub fn dash() -> Self {
        Self {
            kind: ActionKind::Dash,
            phase: ActionPhase::Dashing,
            phase_timer: DASH_DURATION,
            descent_speed: 0.0,
            takeoff_y: 0.0,
        }
    }

    pub fn jump(descent_speed: f32) -> Self {
        Self {
            kind: ActionKind::Jump,
            phase: ActionPhase::JumpAscent,
            phase_timer: JUMP_MID_AIR_TIME,
            descent_speed,
            takeoff_y: 0.0,
        }
    }

    pub fn with_takeoff_y(mut self, takeoff_y: f32) -> Self {
        self.takeoff_y = takeoff_y;
        self
    }

    /// Timed версия действия (Attack мгновенный → None)
    pub fn for_kind(kind: ActionKind, tuning: &ActionTuning) -> Option<Self> {
        match kind {
            ActionKind::Attack => None,
            ActionKind::Dash => Some(Self::dash()),
            ActionKind::Jump => Some(Self::jump(tuning.jump_power)),
        }
    }

    /// Продвинуть таймер на delta
    pub fn tick(&mut self, delta: f32) -> ActionStep {
        self.phase_timer -= delta;
        if self.phase_timer > 0.0 {
            return ActionStep::Continue;
        }

        match self.phase {
            ActionPhase::Dashing | ActionPhase::JumpDescent => ActionStep::Finished,
            ActionPhase::JumpAscent => {
                self.phase = ActionPhase::JumpDescent;
                self.phase_timer = JUMP_LANDING_TIME;
                ActionStep::Entered(ActionPhase::JumpDescent)
            }
        }
    }
}
