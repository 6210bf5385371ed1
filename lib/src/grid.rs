//! The grid.

use crate::error::Error;

/// The state of a dead cell.
pub const DEAD: u8 = 0;
/// The state of a living cell.
pub const ALIVE: u8 = 1;

/// The largest number of rows or columns a grid may have.
pub const MAX_SIDE: isize = 4096;

/// A fixed-size grid of cells surrounded by a ring of dead cells.
///
/// The cells are stored in a flat buffer of length
/// `(rows + 2) * (columns + 2)`. The outermost ring of the buffer is a
/// void barrier: it is never written by the rule, so every interior cell
/// has eight neighbors inside the buffer and the neighbor census needs no
/// bounds checks. Nothing wraps around the edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows of the interior.
    rows: usize,

    /// Number of columns of the interior.
    columns: usize,

    /// All cells, including the border, row by row.
    cells: Box<[u8]>,

    /// Offsets from an interior cell to its eight neighbors in [`cells`](#structfield.cells).
    offsets: [isize; 8],
}

impl Grid {
    /// Creates a new grid where all cells are dead.
    ///
    /// Returns an error if the number of rows or columns is not positive,
    /// or larger than [`MAX_SIDE`].
    pub fn new(rows: isize, columns: isize) -> Result<Self, Error> {
        if rows <= 0 || columns <= 0 {
            return Err(Error::NonPositiveError);
        }
        if rows > MAX_SIDE || columns > MAX_SIDE {
            return Err(Error::SizeError);
        }
        let (rows, columns) = (rows as usize, columns as usize);
        let row_length = columns as isize + 2;
        Ok(Grid {
            rows,
            columns,
            cells: vec![DEAD; (rows + 2) * (columns + 2)].into_boxed_slice(),
            offsets: [
                -row_length - 1,
                -row_length,
                -row_length + 1,
                -1,
                1,
                row_length - 1,
                row_length,
                row_length + 1,
            ],
        })
    }

    /// Number of rows, not counting the border.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, not counting the border.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Length of a row in the buffer, including the two border cells.
    pub fn row_length(&self) -> usize {
        self.columns + 2
    }

    /// Offsets from a cell index to the indices of its eight neighbors.
    pub fn offsets(&self) -> &[isize; 8] {
        &self.offsets
    }

    /// The whole buffer, including the border.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Kills every cell, including the border.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    /// The index in the buffer of the interior cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the interior.
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.columns,
            "cell ({}, {}) is outside a {}x{} grid",
            row,
            col,
            self.rows,
            self.columns
        );
        (row + 1) * self.row_length() + col + 1
    }

    /// The state of the interior cell at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index_of(row, col)]
    }

    /// Sets the state of the interior cell at `(row, col)`.
    ///
    /// Any non-zero `value` is stored as [`ALIVE`].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        let index = self.index_of(row, col);
        self.cells[index] = if value == DEAD { DEAD } else { ALIVE };
    }

    /// Number of living neighbors of the cell at `index`.
    ///
    /// `index` must come from [`index_of`](Self::index_of); the border
    /// keeps every neighbor inside the buffer.
    #[inline]
    pub fn neighbor_census(&self, index: usize) -> u8 {
        self.offsets
            .iter()
            .map(|&offset| self.cells[index.wrapping_add_signed(offset)])
            .sum()
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != DEAD).count()
    }

    /// Whether every cell of the border ring is dead.
    pub fn is_border_clear(&self) -> bool {
        let row_length = self.row_length();
        let last_row = self.rows + 1;
        self.cells.iter().enumerate().all(|(i, &cell)| {
            let (row, col) = (i / row_length, i % row_length);
            let on_border = row == 0 || row == last_row || col == 0 || col == row_length - 1;
            !on_border || cell == DEAD
        })
    }

    /// Copies all cells from another grid of the same size.
    pub(crate) fn copy_from(&mut self, other: &Grid) {
        self.cells.copy_from_slice(&other.cells);
    }

    /// Sets a cell by its index in the buffer.
    #[inline]
    pub(crate) fn set_index(&mut self, index: usize, value: u8) {
        self.cells[index] = value;
    }
}
