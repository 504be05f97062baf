use std::fmt::Display;

use itertools::Itertools;

/// A fixed `rows × cols` board of optional values, stored row-major.
///
/// Cells start out empty. Only [`GameSession`](super::GameSession) writes to
/// the grids it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<T>>,
}

impl<T: Copy> Grid<T> {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The value at `(row, col)`, or `None` if the cell is empty or off the
    /// board.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    /// One whole row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is off the board.
    pub fn row(&self, row: usize) -> &[Option<T>] {
        assert!(row < self.rows, "row {row} is off the board");
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// True if no cell of `row` is empty.
    pub fn row_full(&self, row: usize) -> bool {
        row < self.rows && self.row(row).iter().all(Option::is_some)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Option<T>) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = value;
    }
}

/// One line per row, with `.` for empty cells.
impl Display for Grid<char> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let board = (0..self.rows)
            .map(|r| {
                self.row(r)
                    .iter()
                    .map(|c| c.unwrap_or('.'))
                    .collect::<String>()
            })
            .join("\n");
        f.write_str(&board)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cells_start_empty() {
        let grid: Grid<char> = Grid::new(2, 3);
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.get(5, 5), None);
        assert!(!grid.row_full(0));
        assert_eq!(grid.to_string(), "...\n...");
    }

    #[test]
    fn rows_fill_up() {
        let mut grid = Grid::new(2, 3);
        for (col, ch) in "ZAP".chars().enumerate() {
            grid.set(1, col, Some(ch));
        }
        assert!(grid.row_full(1));
        assert!(!grid.row_full(0));
        assert!(!grid.row_full(2));
        assert_eq!(grid.row(1), [Some('Z'), Some('A'), Some('P')]);
        assert_eq!(grid.to_string(), "...\nZAP");
    }
}
