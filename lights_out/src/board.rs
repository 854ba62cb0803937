use rand::Rng;
use tracing::{debug, trace};

use crate::error::{BoardError, Result};
use crate::grid::{Coord, Dimensions, Grid};

/// Chance of any single cell starting lit.
pub const LIT_PROBABILITY: f64 = 0.5;

/// Offsets of the cells flipped together with the activated one (up, down, left, right).
const NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// New random board. Each cell is lit independently with probability 0.5.
pub fn create_board(rows: usize, cols: usize) -> Result<Grid> {
    create_board_with(rows, cols, &mut rand::thread_rng())
}

/// Same as [`create_board`] with a caller supplied random source.
pub fn create_board_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
    let grid = Grid::from_fn(Dimensions::new(rows, cols), |_| rng.gen_bool(LIT_PROBABILITY))?;
    debug!(
        "Created {rows}x{cols} board with {} lit cells.",
        grid.lit_count()
    );
    Ok(grid)
}

/// Returns a copy of `grid` with the cell at (`row`, `col`) and its in-bounds
/// orthogonal neighbours inverted. `grid` itself is not modified.
///
/// Neighbours past the edge are skipped. A centre outside the grid is an
/// [`BoardError::OutOfRange`] error.
pub fn toggle_at(grid: &Grid, row: usize, col: usize) -> Result<Grid> {
    let centre = grid.index(Coord::new(row, col)).ok_or(BoardError::OutOfRange {
        row,
        col,
        rows: grid.rows(),
        cols: grid.cols(),
    })?;

    let mut next = grid.clone();
    next.flip(centre);

    let mut flipped = 1;
    for (dr, dc) in NEIGHBOURS {
        // underflow at row/col 0 lands on None and is skipped like any other edge
        let neighbour = row
            .checked_add_signed(dr)
            .zip(col.checked_add_signed(dc))
            .and_then(|(r, c)| next.index(Coord::new(r, c)));
        if let Some(i) = neighbour {
            next.flip(i);
            flipped += 1;
        }
    }

    trace!("Toggled ({row}, {col}): {flipped} cells flipped.");
    Ok(next)
}
