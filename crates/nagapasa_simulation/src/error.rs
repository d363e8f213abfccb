//! Ошибки конструирования симуляции (конфиги, спавн)
//!
//! Runtime пути не возвращают ошибок: missing target, гонка stamina и
//! out-of-range числа чинятся локально (лог / clamp / следующий тик).

/// Ошибки уровня конфигурации
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Параметр конфига вне допустимого диапазона
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
}

impl SimulationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Проверка: значение конечно и >= 0
pub(crate) fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), SimulationError> {
    if !value.is_finite() {
        return Err(SimulationError::invalid(field, format!("must be finite, got {}", value)));
    }
    if value < 0.0 {
        return Err(SimulationError::invalid(field, format!("must be >= 0, got {}", value)));
    }
    Ok(())
}

/// Проверка: значение конечно и > 0
pub(crate) fn ensure_positive(field: &'static str, value: f32) -> Result<(), SimulationError> {
    ensure_non_negative(field, value)?;
    if value == 0.0 {
        return Err(SimulationError::invalid(field, "must be > 0"));
    }
    Ok(())
}
