use crate::model::{EmployeeId, EMPLOYEES_PER_SHIFT};
use thiserror::Error;

/// Options de planification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOptions {
    /// Nom symbolique de la règle donnant l'effectif par shift.
    pub rule_name: String,
    /// Format `chrono` des dates de début de semaine.
    pub date_format: String,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            rule_name: EMPLOYEES_PER_SHIFT.to_string(),
            date_format: "%Y/%m/%d".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("input unavailable: {0}")]
    InputUnavailable(String),
    #[error("rule misconfigured: {0}")]
    RuleMisconfigured(String),
    #[error("employee id not found: {0}")]
    UnknownEmployee(EmployeeId),
    #[error("could not parse start date {value:?} of week {week} (expected format {format:?}; every week of the window is checked)")]
    DateFormatError {
        week: u32,
        value: String,
        format: String,
    },
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}
