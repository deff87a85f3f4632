use super::TimeOffIndex;
use crate::model::{Employee, WeekSchedule, DAYS_PER_WEEK, SCHEDULE_WEEKS};
use tracing::debug;

/// Position dans le roster ordonné ; avance d'un cran par créneau examiné.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationCursor {
    position: usize,
    roster_len: usize,
}

impl RotationCursor {
    pub fn new(roster_len: usize) -> Self {
        Self {
            position: 0,
            roster_len,
        }
    }

    /// Index du candidat courant dans le roster.
    pub fn current(self) -> usize {
        self.position
    }

    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            position: (self.position + 1) % self.roster_len,
            ..self
        }
    }
}

/// Résultat d'une rotation complète sur la fenêtre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    pub weeks: Vec<WeekSchedule>,
    /// Créneaux effectivement pourvus.
    pub actual_shifts: u64,
    /// Créneaux examinés, pourvus ou non.
    pub slots_considered: u64,
    pub cursor: RotationCursor,
}

/// Affecte les créneaux en round-robin sur le roster ordonné.
///
/// Un candidat en congé, ou déjà planifié ce jour-là (roster plus court que
/// l'effectif), laisse le créneau vide ; le curseur avance quand même.
pub fn assign(employees: &[Employee], staff_count: i32, time_off: &TimeOffIndex) -> Rotation {
    let mut cursor = RotationCursor::new(employees.len());
    let mut actual_shifts = 0u64;
    let mut slots_considered = 0u64;

    if employees.is_empty() {
        return Rotation {
            weeks: Vec::new(),
            actual_shifts,
            slots_considered,
            cursor,
        };
    }

    let slots_per_day = staff_count.max(0);
    let mut weeks = Vec::with_capacity(SCHEDULE_WEEKS.count());

    for week in SCHEDULE_WEEKS {
        let mut schedule = WeekSchedule::new(week);
        for day in 1..=DAYS_PER_WEEK {
            for _ in 0..slots_per_day {
                let candidate = &employees[cursor.current()];
                if time_off.is_off(candidate.id, week, day) {
                    debug!("week {week} day {day}: {} on time off, slot dropped", candidate.id);
                } else if schedule.has_day(candidate.id, day) {
                    debug!("week {week} day {day}: {} already scheduled, slot dropped", candidate.id);
                } else {
                    schedule.push_day(candidate.id, day);
                    actual_shifts += 1;
                }
                slots_considered += 1;
                cursor = cursor.advance();
            }
        }
        weeks.push(schedule);
    }

    Rotation {
        weeks,
        actual_shifts,
        slots_considered,
        cursor,
    }
}
