//! Business-day calendar.
//!
//! Classifies calendar dates as business days or not (weekends and a
//! fixed holiday table) and provides business-day distance and offset
//! arithmetic for lead-time scheduling.
//!
//! # Time Model
//! All operations work on `chrono::NaiveDate`, so time-of-day can never
//! leak into a comparison — a "date" here is always a whole day.
//!
//! # Holiday Model
//! Holidays are fixed (month, day) pairs that repeat every year. The
//! default table deliberately pins floating US holidays to fixed dates
//! (e.g. Labor Day as September 4) to match shop practice; it is not a
//! real federal holiday calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A recurring holiday, as a fixed (month, day) pair.
///
/// Month and day are 1-based. No year awareness: the pair is treated as
/// a non-business day every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Month (1 = January).
    pub month: u32,
    /// Day of month (1-based).
    pub day: u32,
}

impl Holiday {
    /// Creates a holiday from a 1-based month and day.
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Whether the given date falls on this holiday.
    #[inline]
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

/// Weekend- and holiday-aware business-day calendar.
///
/// The holiday table is injected configuration: `Default` carries the
/// shop's simplified US table, and tests or other deployments can build
/// a calendar with any table (or none) without touching global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCalendar {
    /// Non-business days in addition to weekends.
    pub holidays: Vec<Holiday>,
}

impl BusinessCalendar {
    /// Creates a calendar with no holidays (weekends only).
    pub fn new() -> Self {
        Self {
            holidays: Vec::new(),
        }
    }

    /// Creates a calendar with the given holiday table.
    pub fn with_holidays(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }

    /// Adds a holiday.
    pub fn with_holiday(mut self, month: u32, day: u32) -> Self {
        self.holidays.push(Holiday::new(month, day));
        self
    }

    /// Whether the date is a Saturday or Sunday.
    #[inline]
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Whether the date's (month, day) appears in the holiday table.
    #[inline]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.matches(date))
    }

    /// Whether the date is a business day (not weekend, not holiday).
    #[inline]
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Counts business days in the inclusive walk between two dates.
    ///
    /// Symmetric in its arguments: if `a > b` they are swapped before
    /// counting. For the same date on both sides, returns 1 if that day
    /// is a business day, else 0.
    pub fn business_days_between(&self, a: NaiveDate, b: NaiveDate) -> u32 {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        let mut days = 0;
        let mut current = start;
        while current <= end {
            if self.is_business_day(current) {
                days += 1;
            }
            match current.succ_opt() {
                Some(next) => current = next,
                None => break, // end of representable time
            }
        }
        days
    }

    /// Advances a date by `n` business days.
    ///
    /// Steps one calendar day at a time, counting only business days,
    /// until `n` have been consumed. `n = 0` returns the input date
    /// unchanged — even if that date is itself a weekend or holiday.
    pub fn add_business_days(&self, date: NaiveDate, n: u32) -> NaiveDate {
        let mut current = date;
        let mut remaining = n;
        while remaining > 0 {
            match current.succ_opt() {
                Some(next) => current = next,
                None => break, // end of representable time
            }
            if self.is_business_day(current) {
                remaining -= 1;
            }
        }
        current
    }

    /// Business days from today (local clock) to the target date.
    ///
    /// Display-only wrapper over [`business_days_between`]: the single
    /// wall-clock-dependent entry point, kept out of the deterministic
    /// core so everything else stays reproducible.
    ///
    /// [`business_days_between`]: BusinessCalendar::business_days_between
    pub fn business_days_until(&self, target: NaiveDate) -> u32 {
        let today = chrono::Local::now().date_naive();
        self.business_days_between(today, target)
    }
}

impl Default for BusinessCalendar {
    /// The shop's simplified US holiday table.
    ///
    /// Floating holidays are pinned: Memorial Day as May 31, Labor Day
    /// as September 4, Thanksgiving as November 24.
    fn default() -> Self {
        Self::with_holidays(vec![
            Holiday::new(1, 1),   // New Year's Day
            Holiday::new(5, 31),  // Memorial Day (pinned)
            Holiday::new(7, 4),   // Independence Day
            Holiday::new(9, 4),   // Labor Day (pinned)
            Holiday::new(11, 24), // Thanksgiving (pinned)
            Holiday::new(12, 25), // Christmas Day
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_detection() {
        let cal = BusinessCalendar::new();
        assert!(cal.is_weekend(date(2025, 1, 4))); // Saturday
        assert!(cal.is_weekend(date(2025, 1, 5))); // Sunday
        assert!(!cal.is_weekend(date(2025, 1, 6))); // Monday
        assert!(!cal.is_weekend(date(2025, 1, 10))); // Friday
    }

    #[test]
    fn test_holiday_detection_year_independent() {
        let cal = BusinessCalendar::default();
        assert!(cal.is_holiday(date(2025, 12, 25)));
        assert!(cal.is_holiday(date(2031, 12, 25)));
        assert!(cal.is_holiday(date(2025, 7, 4)));
        assert!(!cal.is_holiday(date(2025, 7, 5)));
    }

    #[test]
    fn test_business_day() {
        let cal = BusinessCalendar::default();
        assert!(cal.is_business_day(date(2025, 1, 6))); // ordinary Monday
        assert!(!cal.is_business_day(date(2025, 1, 4))); // Saturday
        assert!(!cal.is_business_day(date(2025, 12, 25))); // holiday (Thursday)
    }

    #[test]
    fn test_between_same_day() {
        let cal = BusinessCalendar::default();
        let monday = date(2025, 1, 6);
        let saturday = date(2025, 1, 4);
        assert_eq!(cal.business_days_between(monday, monday), 1);
        assert_eq!(cal.business_days_between(saturday, saturday), 0);
    }

    #[test]
    fn test_between_skips_weekend() {
        let cal = BusinessCalendar::default();
        let monday = date(2025, 1, 6);
        let friday = date(2025, 1, 10);
        let next_monday = date(2025, 1, 13);
        // Inclusive walk: Mon..Fri = 5 business days
        assert_eq!(cal.business_days_between(monday, friday), 5);
        // Weekend contributes nothing
        assert_eq!(cal.business_days_between(monday, next_monday), 6);
    }

    #[test]
    fn test_between_is_symmetric() {
        let cal = BusinessCalendar::default();
        let a = date(2025, 1, 6);
        let b = date(2025, 1, 17);
        assert_eq!(
            cal.business_days_between(a, b),
            cal.business_days_between(b, a)
        );
    }

    #[test]
    fn test_between_skips_holiday() {
        let cal = BusinessCalendar::default();
        // 2024-12-23 (Mon) .. 2024-12-27 (Fri), Christmas on Wednesday
        assert_eq!(
            cal.business_days_between(date(2024, 12, 23), date(2024, 12, 27)),
            4
        );
    }

    #[test]
    fn test_add_zero_is_identity() {
        let cal = BusinessCalendar::default();
        let saturday = date(2025, 1, 4);
        assert_eq!(cal.add_business_days(saturday, 0), saturday);
    }

    #[test]
    fn test_add_skips_weekend() {
        let cal = BusinessCalendar::default();
        let friday = date(2025, 1, 10);
        // Next business day after Friday is Monday
        assert_eq!(cal.add_business_days(friday, 1), date(2025, 1, 13));
        assert_eq!(cal.add_business_days(date(2025, 1, 6), 5), date(2025, 1, 13));
    }

    #[test]
    fn test_add_skips_holiday() {
        let cal = BusinessCalendar::default();
        // 2024-12-24 is a Tuesday; Christmas Wednesday is skipped
        assert_eq!(
            cal.add_business_days(date(2024, 12, 24), 1),
            date(2024, 12, 26)
        );
    }

    #[test]
    fn test_add_then_between_round_trip() {
        let cal = BusinessCalendar::default();
        let start = date(2025, 1, 6); // business-day Monday
        for n in 1..=10 {
            let end = cal.add_business_days(start, n);
            // Inclusive count: the start day itself is day 1
            assert_eq!(cal.business_days_between(start, end), n + 1);
        }
    }

    #[test]
    fn test_injected_holiday_table() {
        let cal = BusinessCalendar::new().with_holiday(1, 7);
        assert!(!cal.is_business_day(date(2025, 1, 7))); // Tuesday, custom holiday
        // Default holidays absent from a custom table
        assert!(cal.is_business_day(date(2025, 12, 25)));
        assert_eq!(cal.add_business_days(date(2025, 1, 6), 1), date(2025, 1, 8));
    }
}
