use crate::model::SCHEDULE_DAYS;
use serde::Serialize;
use std::fmt;

/// Déficit de couverture sur la fenêtre complète.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShortfallNote {
    pub staff_count: i32,
    pub shortfall: i64,
}

impl fmt::Display for ShortfallNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NOTE:  There are not enough employees to cover required shift of {} employees per shift.  Need to schedule {} more shifts.",
            self.staff_count, self.shortfall
        )
    }
}

pub fn required_shifts(staff_count: i32) -> i64 {
    i64::from(staff_count) * SCHEDULE_DAYS
}

/// Note consultative si les créneaux pourvus n'atteignent pas l'objectif.
pub fn diagnose(staff_count: i32, actual_shifts: u64) -> Option<ShortfallNote> {
    let required = required_shifts(staff_count);
    let actual = i64::try_from(actual_shifts).unwrap_or(i64::MAX);
    (actual < required).then(|| ShortfallNote {
        staff_count,
        shortfall: required - actual,
    })
}
