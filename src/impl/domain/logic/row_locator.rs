//! Linear scans over the raw cell grid, used only by the mutation
//! operations to find the physical row for an overwrite. Read paths never
//! come here; they work on the typed snapshot.
//!
//! Returned indices are 1-based sheet rows; the header is row 1, so the
//! first data row is row 2.

use crate::domain::entities::{expense::ExpenseEntry, project::ProjectId};

/// Finds the first data row whose identifier column matches the given
/// project id after canonicalization.
pub(crate) fn locate_project_row(grid: &[Vec<String>], id: &ProjectId) -> Option<usize> {
    grid.iter().enumerate().skip(1).find_map(|(i, row)| {
        let cell = row.first()?;
        match ProjectId::canonicalize(cell) {
            Some(candidate) if &candidate == id => Some(i + 1),
            _ => None,
        }
    })
}

/// Finds the first data row matching `(project_id, week_number)`. Rows with
/// malformed week cells are skipped, matching the original scan behavior.
pub(crate) fn locate_expense_row(
    grid: &[Vec<String>],
    id: &ProjectId,
    week_number: u32,
) -> Option<usize> {
    grid.iter().enumerate().skip(1).find_map(|(i, row)| {
        let id_cell = row.first()?;
        let week_cell = row.get(1)?;
        let candidate = ProjectId::canonicalize(id_cell)?;
        let week = ExpenseEntry::week_from_cell(week_cell)?;
        (&candidate == id && week == week_number).then(|| i + 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn finds_project_row_by_canonical_identifier() {
        let grid = grid(&[
            &["id", "name", "initial_budget", "start_date"],
            &["001", "Casa Alpha", "100", "2024-01-10"],
            &["7", "Casa Beta", "50", "2024-02-01"],
        ]);
        // The cell holds the bare integer; the key is zero-padded.
        assert_eq!(locate_project_row(&grid, &ProjectId::new("007")), Some(3));
        assert_eq!(locate_project_row(&grid, &ProjectId::new("001")), Some(2));
        assert_eq!(locate_project_row(&grid, &ProjectId::new("999")), None);
    }

    #[test]
    fn header_row_is_never_matched() {
        let grid = grid(&[&["id", "name"], &["id", "stray"]]);
        // A data row literally holding "id" is a match; the header is not.
        assert_eq!(locate_project_row(&grid, &ProjectId::new("id")), Some(2));
    }

    #[test]
    fn finds_expense_row_by_pair() {
        let grid = grid(&[
            &["project_id", "week_number", "reference_date", "amount"],
            &["001", "1", "2024-01-10", "10.0"],
            &["001", "2", "2024-01-17", "12.0"],
            &["002", "1", "2024-01-10", "9.0"],
        ]);
        assert_eq!(locate_expense_row(&grid, &ProjectId::new("001"), 2), Some(3));
        assert_eq!(locate_expense_row(&grid, &ProjectId::new("002"), 1), Some(4));
        assert_eq!(locate_expense_row(&grid, &ProjectId::new("002"), 2), None);
    }

    #[test]
    fn rows_with_malformed_cells_are_skipped() {
        let grid = grid(&[
            &["project_id", "week_number", "reference_date", "amount"],
            &["", "1", "2024-01-10", "10.0"],
            &["001", "one", "2024-01-17", "12.0"],
            &["001", "1", "2024-01-24", "14.0"],
        ]);
        assert_eq!(locate_expense_row(&grid, &ProjectId::new("001"), 1), Some(4));
    }

    #[test]
    fn short_rows_do_not_panic() {
        let grid = grid(&[&["project_id", "week_number"], &["001"]]);
        assert_eq!(locate_expense_row(&grid, &ProjectId::new("001"), 1), None);
    }
}
