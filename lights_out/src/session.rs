use rand::Rng;
use tracing::debug;

use crate::board::{create_board_with, toggle_at};
use crate::error::Result;
use crate::grid::{Activate, Coord, Dimensions, Grid};

/// Owner of the current board.
///
/// Each activation replaces the held grid with the toggled snapshot.
/// Sessions never share a grid; cloning one clones its board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    grid: Grid,
}

impl Session {
    pub fn new(dims: Dimensions) -> Result<Self> {
        Self::with_rng(dims, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(dims: Dimensions, rng: &mut R) -> Result<Self> {
        let grid = create_board_with(dims.rows, dims.cols, rng)?;
        Ok(Self { grid })
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    pub fn lit_count(&self) -> usize {
        self.grid.lit_count()
    }

    /// Throws the current board away and deals a fresh one of the same size.
    pub fn reset(&mut self) -> Result<()> {
        self.reset_with(&mut rand::thread_rng())
    }

    pub fn reset_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let dims = self.dimensions();
        debug!("Resetting {}x{} board.", dims.rows, dims.cols);
        self.grid = create_board_with(dims.rows, dims.cols, rng)?;
        Ok(())
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl Activate for Session {
    fn activate(&mut self, coord: Coord) -> Result<()> {
        self.grid = toggle_at(&self.grid, coord.row, coord.col)?;
        Ok(())
    }
}
