use super::{ScheduleError, ScheduleOptions};
use crate::model::{Employee, EmployeeId, TimeOffRequest, WeekRecord};
use crate::storage::DataSource;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Index des congés : (employé, semaine, jour) → indisponible.
#[derive(Debug, Clone, Default)]
pub struct TimeOffIndex {
    slots: HashSet<(EmployeeId, u32, u8)>,
}

impl TimeOffIndex {
    pub fn from_requests(requests: &[TimeOffRequest]) -> Self {
        let slots = requests
            .iter()
            .flat_map(|r| r.days.iter().map(move |d| (r.employee_id, r.week, *d)))
            .collect();
        Self { slots }
    }

    pub fn is_off(&self, employee: EmployeeId, week: u32, day: u8) -> bool {
        self.slots.contains(&(employee, week, day))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Numéro de semaine → date de début brute.
#[derive(Debug, Clone, Default)]
pub struct WeekLookup {
    starts: HashMap<u32, String>,
}

impl WeekLookup {
    /// En cas de doublon, la première semaine listée l'emporte.
    pub fn from_records(records: &[WeekRecord]) -> Self {
        let mut starts = HashMap::with_capacity(records.len());
        for r in records {
            starts.entry(r.week).or_insert_with(|| r.start_date.clone());
        }
        Self { starts }
    }

    pub fn start_date(&self, week: u32) -> Option<&str> {
        self.starts.get(&week).map(String::as_str)
    }
}

/// Entrées validées, prêtes pour la rotation.
#[derive(Debug, Clone)]
pub struct ResolvedInputs {
    /// Roster trié par nom ; l'ordre définit la rotation.
    pub employees: Vec<Employee>,
    pub staff_count: i32,
    pub time_off: TimeOffIndex,
    pub weeks: WeekLookup,
}

/// Roster trié par nom, sans tenir compte de la casse.
///
/// À nom égal sans casse, l'ordre binaire départage ; à nom identique, l'ordre
/// source est conservé (tri stable).
pub fn ordered_roster(source: &dyn DataSource) -> Result<Vec<Employee>, ScheduleError> {
    let mut employees = source.fetch_employees()?;
    employees.sort_by_cached_key(|e| (e.name.to_lowercase(), e.name.clone()));
    Ok(employees)
}

pub(super) fn resolve(
    source: &dyn DataSource,
    opts: &ScheduleOptions,
) -> Result<ResolvedInputs, ScheduleError> {
    let employees = ordered_roster(source)?;
    if employees.is_empty() {
        return Err(ScheduleError::InputUnavailable(
            "no employee information".to_string(),
        ));
    }

    let definitions = source.fetch_rule_definitions()?;
    let Some(definition) = definitions.iter().find(|d| d.name == opts.rule_name) else {
        return Err(ScheduleError::RuleMisconfigured(format!(
            "rule definition not found: {}",
            opts.rule_name
        )));
    };

    let rules = source.fetch_shift_rules()?;
    let Some(rule) = rules.iter().find(|r| r.rule_id == definition.id) else {
        return Err(ScheduleError::RuleMisconfigured(format!(
            "rule not configured: {}",
            opts.rule_name
        )));
    };
    if let Some(scoped) = rule.employee_id {
        // TODO: appliquer les règles ciblées une fois le sens tranché (seulement / sauf cet employé).
        debug!("shift rule {} is scoped to employee {scoped}; scope ignored", rule.id);
    }

    let time_off = TimeOffIndex::from_requests(&source.fetch_time_off_requests()?);
    let weeks = WeekLookup::from_records(&source.fetch_week_calendar()?);

    info!(
        "Resolved {} employees, {} per shift, {} time-off slots",
        employees.len(),
        rule.value,
        time_off.len()
    );

    Ok(ResolvedInputs {
        employees,
        staff_count: rule.value,
        time_off,
        weeks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RuleDefinition, ShiftRule};
    use crate::storage::MemorySource;

    fn source() -> MemorySource {
        MemorySource {
            employees: vec![Employee::new(1, "Zoe"), Employee::new(2, "Adam")],
            rule_definitions: vec![RuleDefinition {
                id: 7,
                name: "EMPLOYEES_PER_SHIFT".into(),
            }],
            shift_rules: vec![ShiftRule {
                id: 1,
                rule_id: 7,
                value: 3,
                employee_id: None,
            }],
            time_off_requests: vec![TimeOffRequest {
                employee_id: EmployeeId::new(1),
                week: 23,
                days: vec![2, 4],
            }],
            weeks: vec![WeekRecord {
                week: 23,
                start_date: "2015/06/01".into(),
            }],
        }
    }

    #[test]
    fn resolves_sorted_roster_and_staff_count() {
        let inputs = resolve(&source(), &ScheduleOptions::default()).unwrap();
        let names: Vec<_> = inputs.employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Adam", "Zoe"]);
        assert_eq!(inputs.staff_count, 3);
        assert!(inputs.time_off.is_off(EmployeeId::new(1), 23, 4));
        assert!(!inputs.time_off.is_off(EmployeeId::new(1), 24, 4));
        assert_eq!(inputs.weeks.start_date(23), Some("2015/06/01"));
    }

    #[test]
    fn roster_order_ignores_case() {
        let mut s = source();
        s.employees = vec![
            Employee::new(1, "bob"),
            Employee::new(2, "Alice"),
            Employee::new(3, "Carl"),
            Employee::new(4, "Bob"),
            Employee::new(5, "alice"),
        ];
        let names: Vec<_> = ordered_roster(&s)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Alice", "alice", "Bob", "bob", "Carl"]);
    }

    #[test]
    fn empty_roster_fails_first() {
        let mut s = source();
        s.employees.clear();
        s.rule_definitions.clear();
        let err = resolve(&s, &ScheduleOptions::default()).unwrap_err();
        assert!(matches!(err, ScheduleError::InputUnavailable(_)));
    }

    #[test]
    fn missing_definition_then_missing_rule() {
        let mut s = source();
        s.rule_definitions[0].name = "MAX_SHIFTS".into();
        let err = resolve(&s, &ScheduleOptions::default()).unwrap_err();
        assert!(err.to_string().contains("rule definition not found"));

        let mut s = source();
        s.shift_rules[0].rule_id = 8;
        let err = resolve(&s, &ScheduleOptions::default()).unwrap_err();
        assert!(err.to_string().contains("rule not configured"));
    }

    #[test]
    fn non_positive_staff_count_passes_through() {
        let mut s = source();
        s.shift_rules[0].value = -1;
        s.shift_rules[0].employee_id = Some(EmployeeId::new(2));
        let inputs = resolve(&s, &ScheduleOptions::default()).unwrap();
        assert_eq!(inputs.staff_count, -1);
    }
}
