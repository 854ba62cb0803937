// grid.rs - Grid types for the Lights Out board

use crate::error::{BoardError, Result};

/// Position of a single cell, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Shape of a board. Fixed for the lifetime of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Validates dimensions coming from signed input (config, CLI).
    ///
    /// Zero is allowed and gives an empty board; negatives are rejected.
    pub fn from_signed(rows: i64, cols: i64) -> Result<Self> {
        match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(r), Ok(c)) => Self::new(r, c).checked(),
            _ => Err(BoardError::InvalidDimensions { rows, cols }),
        }
    }

    /// Fails unless the cell count fits in a single allocation (`isize::MAX` bytes).
    pub fn checked(self) -> Result<Self> {
        match self.cell_count() {
            Some(n) if n <= isize::MAX as usize => Ok(self),
            _ => Err(self.invalid()),
        }
    }

    /// `None` when `rows * cols` overflows.
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn invalid(&self) -> BoardError {
        BoardError::InvalidDimensions {
            rows: saturating_i64(self.rows),
            cols: saturating_i64(self.cols),
        }
    }

    /// Empty storage with room for every cell. Allocation failure is an error, not a panic.
    fn alloc_cells(self) -> Result<Vec<bool>> {
        let len = self.checked()?.cell_count().unwrap_or(0);
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| self.invalid())?;
        Ok(cells)
    }
}

fn saturating_i64(v: usize) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// Immutable snapshot of the board.
///
/// Cells are stored row-major. There is no way to flip a cell in place:
/// [`crate::toggle_at`] hands back a new grid and leaves this one untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl Grid {
    /// Every cell unlit.
    pub fn unlit(rows: usize, cols: usize) -> Result<Self> {
        let dims = Dimensions::new(rows, cols);
        let mut cells = dims.alloc_cells()?;
        cells.resize(rows * cols, false);
        Ok(Self { dims, cells })
    }

    /// Builds a grid from explicit rows. All rows must have the same width.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let dims = Dimensions::new(rows.len(), cols);
        let mut cells = dims.alloc_cells()?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(BoardError::RaggedRows {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(Self { dims, cells })
    }

    /// Builds a grid by asking `f` for every cell in row-major order.
    pub(crate) fn from_fn(dims: Dimensions, mut f: impl FnMut(Coord) -> bool) -> Result<Self> {
        let mut cells = dims.alloc_cells()?;
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                cells.push(f(Coord::new(row, col)));
            }
        }
        Ok(Self { dims, cells })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.dims.contains(coord)
    }

    /// `None` when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.index(coord).map(|i| self.cells[i])
    }

    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.get(Coord::new(row, col)).unwrap_or(false)
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// Row slices, top to bottom. For table-style renderers that build markup row by row.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let cols = self.dims.cols;
        (0..self.dims.rows).map(move |r| &self.cells[r * cols..(r + 1) * cols])
    }

    /// One renderable cell per position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let cols = self.dims.cols;
        self.cells.iter().enumerate().map(move |(i, &lit)| CellView {
            coord: Coord::new(i / cols, i % cols),
            lit,
        })
    }

    pub(crate) fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.dims.cols + coord.col)
    }

    pub(crate) fn flip(&mut self, index: usize) {
        self.cells[index] = !self.cells[index];
    }
}

/// What a presentation layer needs to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub coord: Coord,
    pub lit: bool,
}

impl CellView {
    /// Style classes for markup renderers: `"Cell"`, plus `"Cell-lit"` when lit.
    pub fn class_name(&self) -> &'static str {
        if self.lit { "Cell Cell-lit" } else { "Cell" }
    }
}

/// Receiver of cell activations (a click on a cell).
pub trait Activate {
    fn activate(&mut self, coord: Coord) -> Result<()>;
}

impl<F> Activate for F
where
    F: FnMut(Coord) -> Result<()>,
{
    fn activate(&mut self, coord: Coord) -> Result<()> {
        self(coord)
    }
}

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    fn test_from_signed() {
        assert_eq!(Dimensions::from_signed(3, 4), Ok(Dimensions::new(3, 4)));
        assert_eq!(Dimensions::from_signed(0, 7), Ok(Dimensions::new(0, 7)));
        assert_eq!(
            Dimensions::from_signed(-1, 4),
            Err(BoardError::InvalidDimensions { rows: -1, cols: 4 })
        );
        assert_eq!(
            Dimensions::from_signed(2, -5),
            Err(BoardError::InvalidDimensions { rows: 2, cols: -5 })
        );
    }

    #[test]
    fn test_overflowing_dimensions() {
        assert!(matches!(
            Grid::unlit(usize::MAX, 2),
            Err(BoardError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_unallocatable_dimensions() {
        // product fits in usize but exceeds isize::MAX bytes
        let dims = Dimensions::new(usize::MAX / 2, 2);
        assert!(dims.cell_count().is_some());
        assert!(matches!(dims.checked(), Err(BoardError::InvalidDimensions { .. })));
        assert!(matches!(
            Grid::unlit(usize::MAX / 2, 2),
            Err(BoardError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::from_fn(dims, |_| false),
            Err(BoardError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_cell_count_and_is_empty() {
        assert_eq!(Dimensions::new(3, 4).cell_count(), Some(12));
        assert_eq!(Dimensions::new(usize::MAX, 2).cell_count(), None);
        assert!(!Dimensions::new(usize::MAX, 2).is_empty());
        assert!(Dimensions::new(usize::MAX, 0).is_empty());
        assert!(Dimensions::new(0, 5).is_empty());
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[[true, false, false], [false, false, true]]).unwrap();
        assert_eq!(grid.dimensions(), Dimensions::new(2, 3));
        assert!(grid.is_lit(0, 0));
        assert!(grid.is_lit(1, 2));
        assert!(!grid.is_lit(1, 0));
        assert_eq!(grid.lit_count(), 2);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![true, true], vec![false]];
        assert_eq!(
            Grid::from_rows(&rows[..]),
            Err(BoardError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::unlit(2, 2).unwrap();
        assert_eq!(grid.get(Coord::new(1, 1)), Some(false));
        assert_eq!(grid.get(Coord::new(2, 0)), None);
        assert_eq!(grid.get(Coord::new(0, 2)), None);
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::from_rows(&[[true, false], [false, true], [true, true]]).unwrap();
        let cells: Vec<_> = grid.cells().map(|c| (c.coord.row, c.coord.col, c.lit)).collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, true),
                (0, 1, false),
                (1, 0, false),
                (1, 1, true),
                (2, 0, true),
                (2, 1, true),
            ]
        );
    }

    #[test]
    fn test_rows_iter() {
        let grid = Grid::from_rows(&[[true, false], [false, true]]).unwrap();
        let rows: Vec<&[bool]> = grid.rows_iter().collect();
        assert_eq!(rows, vec![&[true, false][..], &[false, true][..]]);

        assert_eq!(Grid::unlit(0, 4).unwrap().rows_iter().count(), 0);
        let narrow = Grid::unlit(3, 0).unwrap();
        assert!(narrow.rows_iter().all(|r| r.is_empty()));
        assert_eq!(narrow.rows_iter().count(), 3);
    }

    #[test]
    fn test_empty_rows_keep_row_count() {
        // 3 rows of width zero
        let grid = Grid::unlit(3, 0).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 0);
        assert_eq!(grid.cells().count(), 0);
    }

    #[test]
    fn test_class_name() {
        let lit = CellView { coord: Coord::new(0, 0), lit: true };
        let unlit = CellView { coord: Coord::new(0, 1), lit: false };
        assert_eq!(lit.class_name(), "Cell Cell-lit");
        assert_eq!(unlit.class_name(), "Cell");
    }

    #[test]
    fn test_closure_activate() {
        let mut seen = Vec::new();
        let mut handler = |coord: Coord| -> Result<()> {
            seen.push(coord);
            Ok(())
        };
        handler.activate(Coord::new(1, 2)).unwrap();
        handler.activate((0, 0).into()).unwrap();
        assert_eq!(seen, vec![Coord::new(1, 2), Coord::new(0, 0)]);
    }
}
