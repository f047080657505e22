//! The 6×5 letter grid and the focus cursor

use crate::core::{Feedback, WORD_LEN};

/// Number of guesses per game
pub const MAX_ROWS: usize = 6;

/// Number of letters per guess
pub const ROW_LEN: usize = WORD_LEN;

/// Position of the next editable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    pub col: usize,
    pub row: usize,
}

impl Focus {
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Move one column right, staying on the last column
    #[must_use]
    pub const fn advanced(self) -> Self {
        if self.col + 1 < ROW_LEN {
            Self::new(self.col + 1, self.row)
        } else {
            self
        }
    }

    /// Move one column left, staying on the first column
    #[must_use]
    pub const fn retreated(self) -> Self {
        Self::new(self.col.saturating_sub(1), self.row)
    }

    #[must_use]
    pub const fn is_last_col(self) -> bool {
        self.col == ROW_LEN - 1
    }
}

/// Entered letters plus the evaluation of each submitted row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Option<char>; ROW_LEN]; MAX_ROWS],
    feedback: [Option<Feedback>; MAX_ROWS],
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letter at a cell, `None` when empty or out of bounds
    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    pub(crate) fn set(&mut self, at: Focus, letter: char) {
        self.cells[at.row][at.col] = Some(letter);
    }

    pub(crate) fn clear(&mut self, at: Focus) {
        self.cells[at.row][at.col] = None;
    }

    /// Letters of a row in order
    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<char>; ROW_LEN] {
        &self.cells[row]
    }

    /// A row as a lowercase string, skipping empty cells
    #[must_use]
    pub fn row_word(&self, row: usize) -> String {
        self.cells[row]
            .iter()
            .flatten()
            .map(char::to_ascii_lowercase)
            .collect()
    }

    /// Evaluation of a submitted row
    #[must_use]
    pub fn feedback(&self, row: usize) -> Option<&Feedback> {
        self.feedback.get(row)?.as_ref()
    }

    pub(crate) fn set_feedback(&mut self, row: usize, feedback: Feedback) {
        self.feedback[row] = Some(feedback);
    }

    /// True when no cell holds a letter
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_advance_clamps_at_last_column() {
        let mut focus = Focus::default();
        for _ in 0..10 {
            focus = focus.advanced();
        }
        assert_eq!(focus, Focus::new(ROW_LEN - 1, 0));
        assert!(focus.is_last_col());
    }

    #[test]
    fn focus_retreat_clamps_at_first_column() {
        let focus = Focus::new(0, 3).retreated();
        assert_eq!(focus, Focus::new(0, 3));
        assert_eq!(Focus::new(2, 3).retreated(), Focus::new(1, 3));
    }

    #[test]
    fn grid_cells_and_row_word() {
        let mut grid = Grid::new();
        assert!(grid.is_empty());

        for (col, letter) in "CIG".chars().enumerate() {
            grid.set(Focus::new(col, 1), letter);
        }
        assert_eq!(grid.cell(1, 1), Some('I'));
        assert_eq!(grid.cell(3, 1), None);
        assert_eq!(grid.row_word(1), "cig");
        assert!(!grid.is_empty());

        grid.clear(Focus::new(2, 1));
        assert_eq!(grid.row_word(1), "ci");
    }

    #[test]
    fn grid_cell_out_of_bounds_is_none() {
        let grid = Grid::new();
        assert_eq!(grid.cell(ROW_LEN, 0), None);
        assert_eq!(grid.cell(0, MAX_ROWS), None);
    }
}
