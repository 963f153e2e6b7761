mod calendar;
pub use calendar::*;
mod grid;
pub use grid::*;
mod worked_days;
pub use worked_days::*;

pub mod holiday;

/// Resolves, annotates and lays out the attendance grid for one month.
///
/// This is the whole pipeline up to the renderer: calendar resolution,
/// worked day annotation and the column split. Month validation already
/// happened when the [`MonthKey`] was built.
pub fn attendance_grid(month: MonthKey, worked: &WorkedDays) -> Result<GridPlan, InvalidDayNumber> {
    let mut entries = month.resolve();
    annotate(&mut entries, worked)?;

    Ok(build_grid(&entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_attendance_grid() {
        let month = MonthKey::from_numbers(2024, 11).unwrap();
        let worked: WorkedDays = "1,4,5,6,7,8".parse().unwrap();

        let plan = attendance_grid(month, &worked).unwrap();

        assert_eq!(plan.row_count(), 15);
        assert_eq!(plan.worked_total(), 6);
    }

    #[test]
    fn test_attendance_grid_rejects_invalid_days() {
        let month = MonthKey::from_numbers(2024, 2).unwrap();
        let worked: WorkedDays = [30].into_iter().collect();

        assert!(attendance_grid(month, &worked).is_err());
    }
}
