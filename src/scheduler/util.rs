use super::ScheduleError;
use chrono::{Duration, NaiveDate};

pub(super) fn parse_week_start(week: u32, raw: &str, format: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(raw.trim(), format).map_err(|_| ScheduleError::DateFormatError {
        week,
        value: raw.to_string(),
        format: format.to_string(),
    })
}

/// Date du jour `day` (1 = premier jour de la semaine).
pub(super) fn day_date(start: NaiveDate, day: u8) -> NaiveDate {
    start + Duration::days(i64::from(day) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_offsets_are_one_based() {
        let start = parse_week_start(23, "2015/06/01", "%Y/%m/%d").unwrap();
        assert_eq!(day_date(start, 1), NaiveDate::from_ymd_opt(2015, 6, 1).unwrap());
        assert_eq!(day_date(start, 7), NaiveDate::from_ymd_opt(2015, 6, 7).unwrap());
    }

    #[test]
    fn crosses_month_boundary() {
        let start = parse_week_start(26, "2015/06/29", "%Y/%m/%d").unwrap();
        assert_eq!(day_date(start, 4), NaiveDate::from_ymd_opt(2015, 7, 2).unwrap());
    }

    #[test]
    fn rejects_other_layouts() {
        let err = parse_week_start(23, "2016-06-01", "%Y/%m/%d").unwrap_err();
        assert!(matches!(err, ScheduleError::DateFormatError { week: 23, .. }));
    }
}
