#![forbid(unsafe_code)]
//! Rotaplan — rotation d'équipes sur quatre semaines et projection calendrier.
//!
//! - Sources de données abstraites (fichiers JSON, mémoire).
//! - Rotation round-robin avec curseur persistant sur toute la fenêtre.
//! - Congés : le créneau est perdu, pas de remplaçant.
//! - Projection des jours attribués d'un employé en évènements datés.
//! - Diagnostic de déficit de couverture.

pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;
pub mod storage;

pub use model::{
    CalendarEvent, CalendarView, Employee, EmployeeDays, EmployeeId, RuleDefinition, ShiftRule,
    TimeOffRequest, WeekRecord, WeekSchedule,
};
pub use render::{ScheduleRenderer, TextRenderer};
pub use scheduler::{
    serialize_schedule, submit_schedule, ScheduleError, ScheduleOptions, SchedulePlan, Scheduler,
    ShortfallNote,
};
pub use storage::{DataSource, JsonDirSource, JsonFileSink, MemorySource, ScheduleSink};
