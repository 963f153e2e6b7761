use crate::time::Month;

/// The french public holidays that fall on the same date every year.
///
/// Immutable reference data for the lifetime of the process. Movable
/// holidays (easter and its offsets) are not part of the table, the day
/// numbers must be valid in every year.
#[must_use]
pub const fn public_holidays(month: Month) -> &'static [usize] {
    match month {
        Month::January => &[1],
        Month::April => &[21],
        Month::May => &[1, 8, 29],
        Month::June => &[9],
        Month::July => &[14],
        Month::August => &[15],
        Month::November => &[1, 11],
        Month::December => &[25],
        _ => &[],
    }
}

#[must_use]
pub const fn is_public_holiday(month: Month, day: usize) -> bool {
    let days = public_holidays(month);

    let mut i = 0;
    while i < days.len() {
        if days[i] == day {
            return true;
        }

        i += 1;
    }

    false
}
