use std::collections::BTreeSet;
use std::str::FromStr;

use thiserror::Error;

use crate::sheet::DayEntry;

/// The set of day numbers the sheet marks as worked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkedDays(BTreeSet<usize>);

impl WorkedDays {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    #[must_use]
    pub fn contains(&self, day: usize) -> bool {
        self.0.contains(&day)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for WorkedDays {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{token}\" is not a valid day number")]
pub struct MalformedDayList {
    token: String,
}

impl FromStr for WorkedDays {
    type Err = MalformedDayList;

    /// Parses a comma separated day list like `"1,4,5"`.
    ///
    /// An empty input yields the empty set. Tokens are not trimmed, every
    /// one of them has to be a plain integer.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if string.is_empty() {
            return Ok(Self::new());
        }

        string
            .split(',')
            .map(|token| {
                token.parse::<usize>().map_err(|_| MalformedDayList {
                    token: token.to_string(),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("day {day} is out of range (the month has {days_in_month} days)")]
pub struct InvalidDayNumber {
    day: usize,
    days_in_month: usize,
}

/// Marks every resolved day as worked iff its number is in `worked`.
///
/// The set is validated against the day count of the resolved month, not
/// against a fixed `1..=31` range.
pub fn annotate(entries: &mut [DayEntry], worked: &WorkedDays) -> Result<(), InvalidDayNumber> {
    let days_in_month = entries.len();

    if let Some(day) = worked.iter().find(|&day| day == 0 || day > days_in_month) {
        return Err(InvalidDayNumber { day, days_in_month });
    }

    for entry in entries {
        entry.set_worked(worked.contains(entry.day()));
    }

    Ok(())
}
