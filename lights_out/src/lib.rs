//! Board model for a Lights Out puzzle.
//!
//! A [`Grid`] is an immutable snapshot of lit/unlit cells. [`toggle_at`] flips a
//! cell and its orthogonal neighbours and returns the next snapshot;
//! [`Session`] holds the current one for a UI.

mod board;
mod error;
mod grid;
mod session;

pub use board::{LIT_PROBABILITY, create_board, create_board_with, toggle_at};
pub use error::{BoardError, Result};
pub use grid::{Activate, CellView, Coord, Dimensions, Grid};
pub use session::Session;
