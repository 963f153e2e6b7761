use pretty_assertions::assert_eq;

use cra_sheet::sheet::{holiday, MonthKey};
use cra_sheet::time::{Month, WeekDay, Year};

#[test]
fn day_count_matches_the_calendar() {
    for (year, month, expected) in [
        (2024, 4, 30),
        (2024, 2, 29),
        (2023, 2, 28),
        (2000, 2, 29),
        (1900, 2, 28),
        (2024, 12, 31),
    ] {
        let key = MonthKey::from_numbers(year, month).unwrap();
        assert_eq!(
            key.resolve().len(),
            expected,
            "{:04}-{:02} should have {} days",
            year,
            month,
            expected
        );
    }
}

#[test]
fn day_numbers_are_contiguous_and_ordered() {
    for month in 1..=12 {
        let entries = MonthKey::from_numbers(2024, month).unwrap().resolve();

        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry.day(), index + 1);
        }
    }
}

#[test]
fn first_weekday_matches_known_dates() {
    // 2024-11-01 is a friday
    let entries = MonthKey::from_numbers(2024, 11).unwrap().resolve();
    assert_eq!(entries[0].week_day(), WeekDay::Friday);
    assert_eq!(entries[0].label(), "Vendredi 1");

    // 2024-01-01 is a monday
    let entries = MonthKey::from_numbers(2024, 1).unwrap().resolve();
    assert_eq!(entries[0].week_day(), WeekDay::Monday);
}

/// The `time` crate serves as an independent calendar ground truth.
#[test]
fn resolver_agrees_with_the_time_crate() {
    for year in 1970..=2100 {
        for month in 1..=12usize {
            let entries = MonthKey::from_numbers(year, month).unwrap().resolve();

            let oracle_month = time::Month::try_from(month as u8).unwrap();
            let oracle_days = time::util::days_in_year_month(year as i32, oracle_month) as usize;
            assert_eq!(entries.len(), oracle_days, "{:04}-{:02}", year, month);

            for entry in &entries {
                let date = time::Date::from_calendar_date(
                    year as i32,
                    oracle_month,
                    entry.day() as u8,
                )
                .unwrap();

                assert_eq!(
                    entry.week_day().as_usize(),
                    date.weekday().number_days_from_monday() as usize + 1,
                    "weekday of {:04}-{:02}-{:02}",
                    year,
                    month,
                    entry.day()
                );
            }
        }
    }
}

#[test]
fn weekends_and_holidays_are_non_working() {
    for month in Month::months() {
        let key = MonthKey::new(Year::new(2024), month);

        for entry in key.resolve() {
            let expected = entry.week_day().is_weekend()
                || holiday::public_holidays(month).contains(&entry.day());

            assert_eq!(
                entry.is_non_working(),
                expected,
                "2024-{:02}-{:02}",
                month.as_usize(),
                entry.day()
            );
        }
    }
}

#[test]
fn may_holidays_fall_on_weekdays_in_2024() {
    // the 1st, 8th and 29th of may 2024 are all wednesdays
    let entries = MonthKey::from_numbers(2024, 5).unwrap().resolve();

    for day in [1, 8, 29] {
        let entry = &entries[day - 1];
        assert_eq!(entry.week_day(), WeekDay::Wednesday);
        assert!(entry.is_non_working(), "may {} should be non-working", day);
    }

    // a plain wednesday in between stays a working day
    assert!(!entries[14].is_non_working());
}

#[test]
fn resolving_twice_yields_identical_sequences() {
    for (year, month) in [(2024, 2), (1999, 12), (-45, 3)] {
        let key = MonthKey::from_numbers(year, month).unwrap();
        assert_eq!(key.resolve(), key.resolve());
    }
}

#[test]
fn historical_years_are_accepted() {
    // no range validation beyond the month bounds
    let entries = MonthKey::from_numbers(-753, 4).unwrap().resolve();
    assert_eq!(entries.len(), 30);

    let entries = MonthKey::from_numbers(0, 2).unwrap().resolve();
    // year 0 is a leap year in the proleptic gregorian calendar
    assert_eq!(entries.len(), 29);
}
