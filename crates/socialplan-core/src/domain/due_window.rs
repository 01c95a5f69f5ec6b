use chrono::{Days, NaiveDate};

use crate::error::DomainError;

/// Inclusive window of due dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DueDateRange {
    /// Build a window from explicit bounds. `end` may equal `start` but not
    /// precede it.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::Validation(
                "End date cannot be earlier than start date".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Window between `today` and `today + days`.
    ///
    /// A negative offset looks backwards: the bounds are ordered so that
    /// `-7` covers the last week up to and including `today`.
    pub fn around(today: NaiveDate, days: i64) -> Result<Self, DomainError> {
        let span = Days::new(days.unsigned_abs());
        let target = if days >= 0 {
            today.checked_add_days(span)
        } else {
            today.checked_sub_days(span)
        }
        .ok_or_else(|| {
            DomainError::Validation(format!("{days} days from today is out of range"))
        })?;

        Ok(Self {
            start: today.min(target),
            end: today.max(target),
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rejects_reversed_bounds() {
        let err = DueDateRange::new(date(2025, 1, 5), date(2025, 1, 1)).unwrap_err();
        assert_eq!(err.to_string(), "End date cannot be earlier than start date");
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = DueDateRange::new(date(2025, 1, 1), date(2025, 1, 5)).unwrap();
        assert!(range.contains(date(2025, 1, 1)));
        assert!(range.contains(date(2025, 1, 5)));
        assert!(!range.contains(date(2024, 12, 31)));
        assert!(!range.contains(date(2025, 1, 6)));
    }

    #[test]
    fn single_day_window() {
        let day = date(2025, 6, 1);
        let range = DueDateRange::new(day, day).unwrap();
        assert!(range.contains(day));
    }

    #[test]
    fn around_forward() {
        let range = DueDateRange::around(date(2025, 1, 30), 3).unwrap();
        assert_eq!(range.start(), date(2025, 1, 30));
        assert_eq!(range.end(), date(2025, 2, 2));
    }

    #[test]
    fn around_backward_is_normalized() {
        let range = DueDateRange::around(date(2025, 1, 10), -7).unwrap();
        assert_eq!(range.start(), date(2025, 1, 3));
        assert_eq!(range.end(), date(2025, 1, 10));
    }

    #[test]
    fn around_zero_is_today_only() {
        let today = date(2025, 1, 10);
        let range = DueDateRange::around(today, 0).unwrap();
        assert_eq!((range.start(), range.end()), (today, today));
    }

    #[test]
    fn around_overflow_is_a_validation_error() {
        let err = DueDateRange::around(date(2025, 1, 10), i64::MAX).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
