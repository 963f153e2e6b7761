use crate::sheet::DayEntry;

/// The marker drawn in a presence cell of a worked day.
pub const PRESENT_MARK: &str = "x";

/// A rendering-ready cell: its text and whether the background is
/// highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridCell {
    text: String,
    filled: bool,
}

impl GridCell {
    fn day(entry: &DayEntry) -> Self {
        Self {
            text: entry.label(),
            filled: entry.is_non_working(),
        }
    }

    fn presence(entry: &DayEntry) -> Self {
        Self {
            text: if entry.is_worked() {
                PRESENT_MARK.to_string()
            } else {
                String::new()
            },
            filled: entry.is_non_working(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.filled
    }
}

/// One visual row: day label and presence mark for the left column pair,
/// followed by the same two cells for the right column pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    cells: [GridCell; 4],
}

impl GridRow {
    #[must_use]
    pub const fn cells(&self) -> &[GridCell; 4] {
        &self.cells
    }
}

/// The fully laid out two column table, built once per sheet and consumed
/// by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlan {
    rows: Vec<GridRow>,
    worked_total: usize,
}

impl GridPlan {
    pub fn rows(&self) -> impl Iterator<Item = &GridRow> {
        self.rows.iter()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The number of worked days in the whole month, independent of where
    /// (or whether) an entry was placed in the grid.
    #[must_use]
    pub const fn worked_total(&self) -> usize {
        self.worked_total
    }
}

/// Splits the annotated day list into the paired column grid.
///
/// The left column holds the first `ceil(n / 2)` days, the right column is
/// offset by exactly that row count. With 28 to 31 days per month this
/// gives 14 to 16 rows; an odd day count leaves the last right pair blank.
/// Blank overflow cells are never highlighted.
#[must_use]
pub fn build_grid(entries: &[DayEntry]) -> GridPlan {
    let row_count = entries.len().div_ceil(2);

    let rows = (0..row_count)
        .map(|i| {
            let left = &entries[i];
            let right = entries.get(i + row_count);

            GridRow {
                cells: [
                    GridCell::day(left),
                    GridCell::presence(left),
                    right.map(GridCell::day).unwrap_or_default(),
                    right.map(GridCell::presence).unwrap_or_default(),
                ],
            }
        })
        .collect();

    GridPlan {
        rows,
        worked_total: entries.iter().filter(|entry| entry.is_worked()).count(),
    }
}
