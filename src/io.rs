use crate::model::{CalendarEvent, WeekSchedule};
use anyhow::Context;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Export CSV des évènements: header `title,date`
pub fn export_events_csv<P: AsRef<Path>>(path: P, events: &[CalendarEvent]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut w = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    w.write_record(["title", "date"])?;
    for e in events {
        let date = e.date.format("%Y-%m-%d").to_string();
        w.write_record([e.title.as_str(), date.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, weeks: &[WeekSchedule]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(weeks)?;
    fs::write(path, s)?;
    Ok(())
}
