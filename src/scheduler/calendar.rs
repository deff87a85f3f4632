use super::{util, ScheduleError, WeekLookup};
use crate::model::{CalendarEvent, Employee, EmployeeId, WeekSchedule};

/// Projette les jours attribués à `employee_id` en évènements datés.
///
/// Échoue dès qu'une semaine de la fenêtre n'a pas de date de début
/// exploitable, y compris une semaine où l'employé ne travaille pas.
pub fn project(
    employee_id: EmployeeId,
    weeks: &[WeekSchedule],
    lookup: &WeekLookup,
    employees: &[Employee],
    date_format: &str,
) -> Result<(String, Vec<CalendarEvent>), ScheduleError> {
    let name = employees
        .iter()
        .find(|e| e.id == employee_id)
        .map(|e| e.name.clone())
        .ok_or(ScheduleError::UnknownEmployee(employee_id))?;

    let mut events = Vec::new();
    for week in weeks {
        let raw = lookup.start_date(week.week).ok_or_else(|| {
            ScheduleError::InputUnavailable(format!(
                "no start date for week {} (every week of the window is checked)",
                week.week
            ))
        })?;
        let start = util::parse_week_start(week.week, raw, date_format)?;

        if let Some(days) = week.days_for(employee_id) {
            events.extend(days.iter().map(|d| CalendarEvent::work(util::day_date(start, *d))));
        }
    }

    Ok((name, events))
}
