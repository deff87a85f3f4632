use crate::model::{Employee, RuleDefinition, ShiftRule, TimeOffRequest, WeekRecord};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Accès aux données d'entrée de la planification.
pub trait DataSource {
    fn fetch_employees(&self) -> anyhow::Result<Vec<Employee>>;
    fn fetch_time_off_requests(&self) -> anyhow::Result<Vec<TimeOffRequest>>;
    fn fetch_rule_definitions(&self) -> anyhow::Result<Vec<RuleDefinition>>;
    fn fetch_shift_rules(&self) -> anyhow::Result<Vec<ShiftRule>>;
    fn fetch_week_calendar(&self) -> anyhow::Result<Vec<WeekRecord>>;
}

/// Destination du planning sérialisé.
pub trait ScheduleSink {
    /// Soumet le planning ; renvoie la réponse du support.
    fn submit(&self, payload: &str) -> anyhow::Result<String>;
}

pub const EMPLOYEES_FILE: &str = "employees.json";
pub const TIME_OFF_FILE: &str = "time-off-requests.json";
pub const RULE_DEFINITIONS_FILE: &str = "rule-definitions.json";
pub const SHIFT_RULES_FILE: &str = "shift-rules.json";
pub const WEEKS_FILE: &str = "weeks.json";

/// Source lisant un fichier JSON par collection dans un répertoire.
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn open<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            anyhow::bail!("data directory not found: {}", dir.display());
        }
        Ok(Self { dir })
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> anyhow::Result<Vec<T>> {
        let path = self.dir.join(file);
        let data = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&data).with_context(|| format!("parsing {file}"))
    }
}

impl DataSource for JsonDirSource {
    fn fetch_employees(&self) -> anyhow::Result<Vec<Employee>> {
        self.read(EMPLOYEES_FILE)
    }
    fn fetch_time_off_requests(&self) -> anyhow::Result<Vec<TimeOffRequest>> {
        self.read(TIME_OFF_FILE)
    }
    fn fetch_rule_definitions(&self) -> anyhow::Result<Vec<RuleDefinition>> {
        self.read(RULE_DEFINITIONS_FILE)
    }
    fn fetch_shift_rules(&self) -> anyhow::Result<Vec<ShiftRule>> {
        self.read(SHIFT_RULES_FILE)
    }
    fn fetch_week_calendar(&self) -> anyhow::Result<Vec<WeekRecord>> {
        self.read(WEEKS_FILE)
    }
}

/// Source en mémoire (intégration dans un autre service, tests).
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub employees: Vec<Employee>,
    pub time_off_requests: Vec<TimeOffRequest>,
    pub rule_definitions: Vec<RuleDefinition>,
    pub shift_rules: Vec<ShiftRule>,
    pub weeks: Vec<WeekRecord>,
}

impl DataSource for MemorySource {
    fn fetch_employees(&self) -> anyhow::Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }
    fn fetch_time_off_requests(&self) -> anyhow::Result<Vec<TimeOffRequest>> {
        Ok(self.time_off_requests.clone())
    }
    fn fetch_rule_definitions(&self) -> anyhow::Result<Vec<RuleDefinition>> {
        Ok(self.rule_definitions.clone())
    }
    fn fetch_shift_rules(&self) -> anyhow::Result<Vec<ShiftRule>> {
        Ok(self.shift_rules.clone())
    }
    fn fetch_week_calendar(&self) -> anyhow::Result<Vec<WeekRecord>> {
        Ok(self.weeks.clone())
    }
}

/// Soumission vers un fichier, écrit de manière atomique.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ScheduleSink for JsonFileSink {
    fn submit(&self, payload: &str) -> anyhow::Result<String> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(payload.as_bytes())?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(format!(
            "schedule written to {} ({} bytes)",
            self.path.display(),
            payload.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_dir_source_reads_wire_shapes() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(EMPLOYEES_FILE),
            r#"[{"id": 1, "name": "Zoe"}, {"id": 2, "name": "Adam"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(RULE_DEFINITIONS_FILE),
            r#"[{"id": 7, "value": "EMPLOYEES_PER_SHIFT"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(SHIFT_RULES_FILE),
            r#"[{"id": 1, "rule_id": 7, "value": 2}]"#,
        )
        .unwrap();
        fs::write(dir.path().join(WEEKS_FILE), r#"[{"id": 23, "start_date": "2015/06/01"}]"#)
            .unwrap();

        let source = JsonDirSource::open(dir.path()).unwrap();
        let employees = source.fetch_employees().unwrap();
        assert_eq!(employees[1], Employee::new(2, "Adam"));
        assert_eq!(source.fetch_rule_definitions().unwrap()[0].name, "EMPLOYEES_PER_SHIFT");
        assert_eq!(source.fetch_shift_rules().unwrap()[0].employee_id, None);
        assert_eq!(source.fetch_week_calendar().unwrap()[0].week, 23);

        let err = source.fetch_time_off_requests().unwrap_err();
        assert!(format!("{err:#}").contains(TIME_OFF_FILE));
    }

    #[test]
    fn open_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        assert!(JsonDirSource::open(dir.path().join("absent")).is_err());
    }

    #[test]
    fn file_sink_replaces_previous_payload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        let sink = JsonFileSink::new(&path);
        sink.submit("[]").unwrap();
        let response = sink.submit(r#"[{"week":23,"schedules":[]}]"#).unwrap();
        assert!(response.contains("schedule.json"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"[{"week":23,"schedules":[]}]"#
        );
    }
}
