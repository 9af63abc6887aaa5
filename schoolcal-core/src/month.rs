//! The month currently on display.

use crate::error::{CalendarError, CalendarResult};
use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;

pub const DAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, held as its first day so every cursor is a month chrono
/// can represent in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    first: NaiveDate,
}

fn out_of_range() -> CalendarError {
    CalendarError::Validation("Month is outside the supported date range".into())
}

impl MonthCursor {
    /// `month0` is zero-based (0 = January).
    pub fn new(year: i32, month0: u32) -> CalendarResult<Self> {
        if month0 > 11 {
            return Err(CalendarError::InvalidMonth(month0));
        }
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or_else(out_of_range)?;
        Ok(MonthCursor { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        MonthCursor {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    /// Parse `YYYY-MM`
    pub fn parse(s: &str) -> CalendarResult<Self> {
        let invalid = || CalendarError::Validation(format!("Invalid month '{}'. Expected YYYY-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Self::new(year, month - 1)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    /// Move `months` forward (or back, when negative) in one step.
    pub fn offset(self, months: i32) -> CalendarResult<Self> {
        let step = Months::new(months.unsigned_abs());
        let first = if months >= 0 {
            self.first.checked_add_months(step)
        } else {
            self.first.checked_sub_months(step)
        };

        first.map(|first| MonthCursor { first }).ok_or_else(out_of_range)
    }

    pub fn next(self) -> CalendarResult<Self> {
        self.offset(1)
    }

    pub fn prev(self) -> CalendarResult<Self> {
        self.offset(-1)
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        // Stays inside the month, so it cannot leave chrono's range
        self.first + Days::new(u64::from(self.days_in_month() - 1))
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.month() {
            2 if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of the 1st, 0 = Sunday
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// e.g. "March 2024"
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0() as usize], self.year())
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month0() + 1)
    }
}
