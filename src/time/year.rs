use derive_more::Display;

use crate::time::{Month, WeekDay};

/// A proleptic gregorian calendar year.
///
/// Any integer is accepted, including years before the common era.
/// There is deliberately no range validation beyond the month bounds
/// enforced by [`Month`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Year(i64);

/// Days between 1970-01-01 and the given date, negative for earlier dates.
///
/// Epoch-offset calculation over 400-year eras, see
/// <https://howardhinnant.github.io/date_algorithms.html#days_from_civil>
const fn days_from_civil(year: i64, month: usize, day: usize) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (month + 9) % 12; // March = 0, ..., February = 11
    let doy = ((153 * mp + 2) / 5 + day - 1) as i64; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

    era * 146097 + doe - 719_468
}

impl Year {
    #[must_use]
    pub const fn new(year: i64) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// A leap year is a calendar year that contains an additional day added
    /// to February, so it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        self.0 % 4 == 0 && (self.0 % 100 != 0 || self.0 % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Calculate the weekday of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid for the month.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let days = days_from_civil(self.0, month.as_usize(), day);

        // 1970-01-01 is a thursday, so an offset of 3 makes
        // mondays a multiple of 7
        match WeekDay::from_number(((days + 3).rem_euclid(7) + 1) as usize) {
            Some(week_day) => week_day,
            None => unreachable!(),
        }
    }
}

impl From<i64> for Year {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Year> for i64 {
    fn from(value: Year) -> Self {
        value.as_i64()
    }
}
