use core::fmt;

use crate::sheet::holiday;
use crate::time::{InvalidMonth, Month, WeekDay, Year};

/// Identity of the month a sheet is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    year: Year,
    month: Month,
}

impl MonthKey {
    #[must_use]
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Builds a key from raw numbers, rejecting months outside of `1..=12`.
    ///
    /// The year is unbounded on purpose, historical and even negative years
    /// are accepted mechanically.
    pub fn from_numbers(year: i64, month: usize) -> Result<Self, InvalidMonth> {
        Ok(Self::new(Year::new(year), Month::try_from(month)?))
    }

    #[must_use]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub const fn days_in_month(&self) -> usize {
        self.year.number_of_days_in_month(self.month)
    }

    /// Resolves the month into its ordered list of days.
    ///
    /// The weekday of the first day is computed once, every following day
    /// increments it modulo 7. A day is non-working when it falls on a
    /// weekend or is listed in the public holiday table for this month.
    #[must_use]
    pub fn resolve(&self) -> Vec<DayEntry> {
        let mut week_day = self.year.week_day(self.month, 1);

        (1..=self.days_in_month())
            .map(|day| {
                let entry = DayEntry {
                    week_day,
                    day,
                    worked: false,
                    non_working: week_day.is_weekend()
                        || holiday::is_public_holiday(self.month, day),
                };

                week_day = week_day.next();
                entry
            })
            .collect()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

/// One row of calendar data for a single day of the target month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEntry {
    week_day: WeekDay,
    day: usize,
    worked: bool,
    non_working: bool,
}

impl DayEntry {
    #[must_use]
    pub const fn week_day(&self) -> WeekDay {
        self.week_day
    }

    #[must_use]
    pub const fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    pub const fn is_worked(&self) -> bool {
        self.worked
    }

    pub fn set_worked(&mut self, worked: bool) {
        self.worked = worked;
    }

    /// Whether the day gets a highlighted background (weekend or holiday).
    #[must_use]
    pub const fn is_non_working(&self) -> bool {
        self.non_working
    }

    /// The cell label, for example "Vendredi 1".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.week_day.name(), self.day)
    }
}
