mod assignment;
mod calendar;
mod diagnostics;
mod resolver;
mod types;
mod util;

pub use assignment::{assign, Rotation, RotationCursor};
pub use calendar::project;
pub use diagnostics::{diagnose, required_shifts, ShortfallNote};
pub use resolver::{ResolvedInputs, TimeOffIndex, WeekLookup};
pub use types::{ScheduleError, ScheduleOptions};

use crate::model::{CalendarView, Employee, EmployeeId, WeekSchedule};
use crate::storage::{DataSource, ScheduleSink};
use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};

/// Planning complet de la fenêtre, prêt à être soumis.
#[derive(Debug, Clone, Serialize)]
pub struct SchedulePlan {
    pub weeks: Vec<WeekSchedule>,
    pub staff_count: i32,
    pub actual_shifts: u64,
    pub required_shifts: i64,
    pub note: Option<ShortfallNote>,
}

/// Scheduler : enchaîne résolution, rotation, projection et diagnostic
/// au-dessus d'une source de données.
pub struct Scheduler<'a> {
    source: &'a dyn DataSource,
    opts: ScheduleOptions,
}

impl<'a> Scheduler<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self::with_options(source, ScheduleOptions::default())
    }

    pub fn with_options(source: &'a dyn DataSource, opts: ScheduleOptions) -> Self {
        Self { source, opts }
    }

    pub fn options(&self) -> &ScheduleOptions {
        &self.opts
    }

    /// Roster trié par nom, tel qu'utilisé par la rotation.
    pub fn list_employees(&self) -> Result<Vec<Employee>, ScheduleError> {
        resolver::ordered_roster(self.source)
    }

    /// Calcule la rotation complète sans projection.
    pub fn build_schedule(&self) -> Result<SchedulePlan, ScheduleError> {
        let inputs = resolver::resolve(self.source, &self.opts)?;
        Ok(plan_from(&inputs))
    }

    /// Calendrier de l'employé `employee_id`, avec la note de déficit éventuelle.
    pub fn get_schedule(&self, employee_id: EmployeeId) -> Result<CalendarView, ScheduleError> {
        let inputs = resolver::resolve(self.source, &self.opts)?;
        let plan = plan_from(&inputs);
        let (employee_name, events) = calendar::project(
            employee_id,
            &plan.weeks,
            &inputs.weeks,
            &inputs.employees,
            &self.opts.date_format,
        )?;
        info!("Projected {} events for employee {employee_id}", events.len());
        Ok(CalendarView {
            employee_name,
            events,
            note: plan.note.map(|n| n.to_string()),
        })
    }
}

fn plan_from(inputs: &ResolvedInputs) -> SchedulePlan {
    let rotation = assignment::assign(&inputs.employees, inputs.staff_count, &inputs.time_off);
    let note = diagnostics::diagnose(inputs.staff_count, rotation.actual_shifts);
    if let Some(n) = &note {
        warn!("Staffing shortfall of {} shifts", n.shortfall);
    }
    SchedulePlan {
        weeks: rotation.weeks,
        staff_count: inputs.staff_count,
        actual_shifts: rotation.actual_shifts,
        required_shifts: diagnostics::required_shifts(inputs.staff_count),
        note,
    }
}

/// Format d'échange : un objet JSON par semaine.
pub fn serialize_schedule(weeks: &[WeekSchedule]) -> anyhow::Result<String> {
    serde_json::to_string(weeks).context("serializing schedule")
}

pub fn submit_schedule(plan: &SchedulePlan, sink: &dyn ScheduleSink) -> anyhow::Result<String> {
    let payload = serialize_schedule(&plan.weeks)?;
    let response = sink.submit(&payload)?;
    info!("Submitted schedule for {} weeks", plan.weeks.len());
    Ok(response)
}
