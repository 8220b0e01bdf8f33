//! Calendar-day range filters and time-of-day helpers.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Timelike,
    Utc,
};
use thiserror::Error;

use crate::query::QueryParams;

pub const START_DATE_KEY: &str = "start_date";
pub const END_DATE_KEY: &str = "end_date";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("start date {start} is after end date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
    #[error("invalid time of day: {0}")]
    InvalidTime(String),
    #[error("local time {0} does not exist in the configured offset")]
    Unrepresentable(NaiveDateTime),
}

/// Inclusive calendar-day range used by the report endpoints.
///
/// Either bound may be open. When both are present `start_date <= end_date`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateFilterQuery {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl DateFilterQuery {
    pub fn new(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, DateError> {
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(DateError::InvertedRange { start, end });
            }
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Range covering a single day.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start_date: Some(date),
            end_date: Some(date),
        }
    }

    /// Builds a range from timestamps, keeping only their calendar day.
    pub fn from_datetimes(
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<Self, DateError> {
        Self::new(start.map(|d| d.date()), end.map(|d| d.date()))
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// First instant of `start_date` in `offset`.
    pub fn start_bound(&self, offset: FixedOffset) -> Result<Option<DateTime<Utc>>, DateError> {
        self.start_date
            .map(|date| start_of_day(date, offset))
            .transpose()
    }

    /// Last millisecond of `end_date` in `offset`.
    pub fn end_bound(&self, offset: FixedOffset) -> Result<Option<DateTime<Utc>>, DateError> {
        self.end_date
            .map(|date| end_of_day(date, offset))
            .transpose()
    }

    /// Appends `start_date`/`end_date` as ISO-8601 UTC timestamps.
    pub fn apply(&self, params: &mut QueryParams, offset: FixedOffset) -> Result<(), DateError> {
        if let Some(start) = self.start_bound(offset)? {
            params.push(START_DATE_KEY, to_iso_string(&start));
        }
        if let Some(end) = self.end_bound(offset)? {
            params.push(END_DATE_KEY, to_iso_string(&end));
        }
        Ok(())
    }
}

fn localize(local: NaiveDateTime, offset: FixedOffset) -> Result<DateTime<Utc>, DateError> {
    offset
        .from_local_datetime(&local)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(DateError::Unrepresentable(local))
}

/// 00:00:00.000 of `date` in `offset`, as UTC.
pub fn start_of_day(date: NaiveDate, offset: FixedOffset) -> Result<DateTime<Utc>, DateError> {
    localize(date.and_time(NaiveTime::MIN), offset)
}

/// 23:59:59.999 of `date` in `offset`, as UTC.
pub fn end_of_day(date: NaiveDate, offset: FixedOffset) -> Result<DateTime<Utc>, DateError> {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| DateError::InvalidTime("23:59:59.999".to_string()))?;
    localize(date.and_time(last_milli), offset)
}

/// Renders a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn to_iso_string(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns whether `at` is strictly later than the `HH:MM:SS` time in
/// `time_str`, comparing hours, then minutes, then seconds.
pub fn is_time_after(time_str: &str, at: NaiveTime) -> Result<bool, DateError> {
    let target = NaiveTime::parse_from_str(time_str.trim(), "%H:%M:%S")
        .map_err(|_| DateError::InvalidTime(time_str.to_string()))?;
    // Sub-second precision never counts towards being late.
    let at = NaiveTime::from_hms_opt(at.hour(), at.minute(), at.second())
        .ok_or_else(|| DateError::InvalidTime(at.to_string()))?;
    Ok(at > target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn single_day_range_covers_whole_day() {
        let mut params = QueryParams::new();
        DateFilterQuery::day(date(2024, 1, 5))
            .apply(&mut params, utc())
            .unwrap();

        assert_eq!(params.get(START_DATE_KEY), Some("2024-01-05T00:00:00.000Z"));
        assert_eq!(params.get(END_DATE_KEY), Some("2024-01-05T23:59:59.999Z"));
    }

    #[test]
    fn time_of_day_is_discarded() {
        let start = date(2024, 1, 5).and_hms_opt(15, 42, 7).unwrap();
        let end = date(2024, 1, 6).and_hms_opt(1, 2, 3).unwrap();
        let range = DateFilterQuery::from_datetimes(Some(start), Some(end)).unwrap();

        assert_eq!(
            range.start_bound(utc()).unwrap().map(|d| to_iso_string(&d)),
            Some("2024-01-05T00:00:00.000Z".to_string())
        );
        assert_eq!(
            range.end_bound(utc()).unwrap().map(|d| to_iso_string(&d)),
            Some("2024-01-06T23:59:59.999Z".to_string())
        );
    }

    #[test]
    fn local_days_are_converted_to_utc() {
        let jakarta = FixedOffset::east_opt(7 * 3600).unwrap();
        let bound = start_of_day(date(2024, 1, 5), jakarta).unwrap();
        assert_eq!(to_iso_string(&bound), "2024-01-04T17:00:00.000Z");
    }

    #[test]
    fn open_bounds_are_omitted() {
        let mut params = QueryParams::new();
        DateFilterQuery::new(None, Some(date(2024, 2, 1)))
            .unwrap()
            .apply(&mut params, utc())
            .unwrap();
        assert_eq!(params.get(START_DATE_KEY), None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = DateFilterQuery::new(Some(date(2024, 3, 2)), Some(date(2024, 3, 1))).unwrap_err();
        assert!(matches!(err, DateError::InvertedRange { .. }));
    }

    #[test]
    fn time_comparison_checks_each_component() {
        let at = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
        assert!(is_time_after("08:00:00", at(8, 0, 1)).unwrap());
        assert!(is_time_after("08:00:00", at(9, 0, 0)).unwrap());
        assert!(!is_time_after("08:00:00", at(8, 0, 0)).unwrap());
        assert!(!is_time_after("08:30:00", at(8, 29, 59)).unwrap());
        assert!(is_time_after("bogus", at(8, 0, 0)).is_err());
    }
}
