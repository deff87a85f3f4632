use crate::model::CalendarView;
use crate::scheduler::ScheduleError;

/// Permet de customiser le rendu de la vue calendrier (texte, HTML, etc.).
pub trait ScheduleRenderer {
    fn render(&self, view: &CalendarView) -> String;

    /// Rendu d'un échec : le message remplace le planning.
    fn render_error(&self, err: &ScheduleError) -> String {
        format!("{err}\n")
    }
}

/// Rendu texte brut pour le terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl ScheduleRenderer for TextRenderer {
    fn render(&self, view: &CalendarView) -> String {
        let mut out = format!("Schedule for {}\n", view.employee_name);
        if view.events.is_empty() {
            out.push_str("  (no shifts)\n");
        }
        for e in &view.events {
            out.push_str(&format!("  {} {} ({})\n", e.date, e.title, e.date.format("%a")));
        }
        if let Some(note) = &view.note {
            out.push('\n');
            out.push_str(note);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CalendarEvent;
    use chrono::NaiveDate;

    #[test]
    fn renders_events_and_note() {
        let view = CalendarView {
            employee_name: "Dana".into(),
            events: vec![CalendarEvent::work(NaiveDate::from_ymd_opt(2015, 6, 3).unwrap())],
            note: Some("NOTE: short".into()),
        };
        assert_eq!(
            TextRenderer.render(&view),
            "Schedule for Dana\n  2015-06-03 Work (Wed)\n\nNOTE: short\n"
        );
    }

    #[test]
    fn renders_error_instead_of_schedule() {
        let err = ScheduleError::InputUnavailable("no employee information".into());
        assert_eq!(
            TextRenderer.render_error(&err),
            "input unavailable: no employee information\n"
        );
    }
}
