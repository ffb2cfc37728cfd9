//! Letter grid and write cursor

/// A single grid cell: a lowercase letter or empty
pub type Cell = Option<u8>;

/// Fixed-size grid of guessed letters (rows × columns)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Panics
    /// Panics if `rows * columns` overflows `usize`. `GameConfig::build`
    /// bounds both dimensions well below that.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        let Some(len) = rows.checked_mul(columns) else {
            panic!("grid of {rows}x{columns} cells is too large");
        };
        Self {
            rows,
            columns,
            cells: vec![None; len],
        }
    }

    /// Number of rows (guess attempts)
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (letters per guess)
    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Cell at a position, `None` when outside the grid
    #[must_use]
    #[allow(clippy::option_option)] // Outer: inside the grid, inner: cell content
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.columns).then(|| self.cells[row * self.columns + col])
    }

    /// Cells of one row
    ///
    /// # Panics
    /// Panics if `row` is outside the grid
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.rows, "row {row} out of range");
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Iterate over all rows in order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact(0) panics
        self.cells.chunks_exact(self.columns.max(1))
    }

    /// Render a row as text, empty cells shown as `fill`
    #[must_use]
    pub fn row_text(&self, row: usize, fill: char) -> String {
        self.row(row)
            .iter()
            .map(|cell| cell.map_or(fill, char::from))
            .collect()
    }

    /// Copy of this grid with one cell replaced
    ///
    /// The receiver is left untouched; callers publish the returned grid as
    /// the next snapshot.
    #[must_use]
    pub(crate) fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Self {
        debug_assert!(row < self.rows && col < self.columns);
        let mut next = self.clone();
        next.cells[row * self.columns + col] = cell;
        next
    }
}

/// Position of the next writable cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Active row, equals the row count once every row is submitted
    pub row: usize,
    /// Active column, equals the column count when the row is full
    pub col: usize,
}

impl Cursor {
    /// Whether the cursor points exactly at this cell
    #[inline]
    #[must_use]
    pub const fn is_at(self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }
}
