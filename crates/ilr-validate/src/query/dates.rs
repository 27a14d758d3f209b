//! Date-range helpers.

use chrono::{Months, NaiveDate};

/// Inclusive date range; a missing end means the range is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn open(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    fn end_or_max(&self) -> NaiveDate {
        self.end.unwrap_or(NaiveDate::MAX)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end_or_max()
    }

    /// Ranges overlap when they share at least one day.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end_or_max() && other.start <= self.end_or_max()
    }
}

/// Latest of the given dates.
pub fn latest(dates: impl IntoIterator<Item = NaiveDate>) -> Option<NaiveDate> {
    dates.into_iter().max()
}

pub fn earliest(dates: impl IntoIterator<Item = NaiveDate>) -> Option<NaiveDate> {
    dates.into_iter().min()
}

/// `date` moved back by whole calendar months (clamped to month end).
pub fn months_before(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(months))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn touching_ranges_overlap() {
        let first = DateRange::new(date(2019, 8, 1), Some(date(2019, 12, 31)));
        let second = DateRange::new(date(2019, 12, 31), None);
        assert!(first.overlaps(&second));
        assert!(second.overlaps(&first));
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let first = DateRange::new(date(2019, 8, 1), Some(date(2019, 12, 31)));
        let second = DateRange::open(date(2020, 1, 1));
        assert!(!first.overlaps(&second));
    }

    #[test]
    fn open_ranges_contain_future_dates() {
        let range = DateRange::open(date(2019, 8, 1));
        assert!(range.is_open());
        assert!(range.contains(date(2030, 1, 1)));
        assert!(!range.contains(date(2019, 7, 31)));
    }

    #[test]
    fn months_before_clamps_to_month_end() {
        assert_eq!(months_before(date(2020, 4, 30), 2), Some(date(2020, 2, 29)));
        assert_eq!(months_before(date(2019, 10, 1), 2), Some(date(2019, 8, 1)));
    }

    #[test]
    fn latest_and_earliest() {
        let dates = [date(2019, 8, 1), date(2020, 1, 1), date(2019, 9, 1)];
        assert_eq!(latest(dates), Some(date(2020, 1, 1)));
        assert_eq!(earliest(dates), Some(date(2019, 8, 1)));
        assert_eq!(latest(Vec::new()), None);
    }
}
