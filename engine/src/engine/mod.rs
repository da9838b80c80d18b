// engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod board;
mod constants;
mod error;
mod geometry;
mod grid;
mod pieces;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use board::{Board, DropResult, SimPlacement};
pub use constants::{CELLS_PER_PIECE, H, TOKEN_SEPARATOR, W};
pub use error::EngineError;
pub use geometry::{extent, max_left_col};
pub use grid::{
    Grid, clear_lines_grid, empty_grid, fits_on_grid, occupied_rows, settle_row, top_span,
};
pub use pieces::Kind;
