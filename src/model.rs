use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Semaines couvertes par la fenêtre de planification (numérotation ISO 2015).
pub const SCHEDULE_WEEKS: RangeInclusive<u32> = 23..=26;
/// Jours par semaine ; un jour est numéroté de 1 à 7.
pub const DAYS_PER_WEEK: u8 = 7;
/// Nombre total de jours de la fenêtre (4 semaines × 7 jours).
pub const SCHEDULE_DAYS: i64 = 28;
/// Nom symbolique de la seule règle modélisée.
pub const EMPLOYEES_PER_SHIFT: &str = "EMPLOYEES_PER_SHIFT";
/// Titre constant des évènements produits.
pub const WORK_TITLE: &str = "Work";

/// Identifiant fort pour Employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employé du roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
}

impl Employee {
    pub fn new<N: Into<String>>(id: i64, name: N) -> Self {
        Self {
            id: EmployeeId::new(id),
            name: name.into(),
        }
    }
}

/// Définition de règle : associe un nom symbolique à un identifiant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub id: i64,
    #[serde(rename = "value")]
    pub name: String,
}

/// Règle de shift configurée.
///
/// `employee_id` restreint en théorie la règle à un employé ; la rotation ne
/// le consulte pas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRule {
    pub id: i64,
    pub rule_id: i64,
    pub value: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<EmployeeId>,
}

/// Demande de congé : l'employé est indisponible chaque (semaine, jour) listé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    pub employee_id: EmployeeId,
    pub week: u32,
    #[serde(default)]
    pub days: Vec<u8>,
}

/// Semaine du calendrier ; la date de début reste brute jusqu'à la projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRecord {
    #[serde(rename = "id")]
    pub week: u32,
    pub start_date: String,
}

/// Jours attribués à un employé pour une semaine, dans l'ordre d'attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDays {
    pub employee_id: EmployeeId,
    #[serde(rename = "schedule")]
    pub days: Vec<u8>,
}

/// Planning d'une semaine produit par la rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WeekSchedule {
    pub week: u32,
    pub schedules: Vec<EmployeeDays>,
}

impl WeekSchedule {
    pub fn new(week: u32) -> Self {
        Self {
            week,
            schedules: Vec::new(),
        }
    }

    pub fn days_for(&self, id: EmployeeId) -> Option<&[u8]> {
        self.schedules
            .iter()
            .find(|e| e.employee_id == id)
            .map(|e| e.days.as_slice())
    }

    pub fn has_day(&self, id: EmployeeId, day: u8) -> bool {
        self.days_for(id).is_some_and(|days| days.contains(&day))
    }

    /// Ajoute `day` à la liste de l'employé (créée au premier jour attribué).
    pub fn push_day(&mut self, id: EmployeeId, day: u8) {
        match self.schedules.iter_mut().find(|e| e.employee_id == id) {
            Some(entry) => entry.days.push(day),
            None => self.schedules.push(EmployeeDays {
                employee_id: id,
                days: vec![day],
            }),
        }
    }

    /// Total des jours attribués sur la semaine, tous employés confondus.
    pub fn assigned_days(&self) -> usize {
        self.schedules.iter().map(|e| e.days.len()).sum()
    }
}

/// Évènement de calendrier pour l'employé demandé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub date: NaiveDate,
}

impl CalendarEvent {
    pub fn work(date: NaiveDate) -> Self {
        Self {
            title: WORK_TITLE.to_string(),
            date,
        }
    }
}

/// Vue calendrier renvoyée à l'appelant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarView {
    pub employee_name: String,
    pub events: Vec<CalendarEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
