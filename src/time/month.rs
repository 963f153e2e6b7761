use core::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub const fn months() -> [Self; 12] {
        [
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    /// The french month name, as it appears on the sheet.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::January => "Janvier",
            Self::February => "Février",
            Self::March => "Mars",
            Self::April => "Avril",
            Self::May => "Mai",
            Self::June => "Juin",
            Self::July => "Juillet",
            Self::August => "Août",
            Self::September => "Septembre",
            Self::October => "Octobre",
            Self::November => "Novembre",
            Self::December => "Décembre",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_usize().fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("month {0} is not a valid month (expected a value between 1 and 12)")]
pub struct InvalidMonth(pub usize);

impl TryFrom<usize> for Month {
    type Error = InvalidMonth;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::months()
            .into_iter()
            .find(|month| month.as_usize() == value)
            .ok_or(InvalidMonth(value))
    }
}

impl From<Month> for usize {
    fn from(month: Month) -> Self {
        month.as_usize()
    }
}
