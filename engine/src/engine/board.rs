// engine/src/engine/board.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{H, W};
use crate::engine::error::EngineError;
use crate::engine::geometry::extent;
use crate::engine::grid::{
    Grid, clear_lines_grid, clear_lines_inplace, empty_grid, fits_on_grid, lock_on_grid,
    occupied_rows, settle_row, top_span,
};
use crate::engine::pieces::Kind;

/// Outcome of the pure transition kernel.
#[derive(Clone, Copy, Debug)]
pub struct SimPlacement {
    pub grid_after_lock: Grid,
    pub grid_after_clear: Grid,
    /// Row the anchor settled at (before clearing).
    pub row: usize,
    pub cleared_rows: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DropResult {
    pub row: usize,
    pub cleared_rows: u32,
}

/// One simulation run: a single grid plus running counters.
#[derive(Clone, Debug)]
pub struct Board {
    pub grid: Grid,
    pub pieces: u64,
    pub rows_cleared: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: empty_grid(),
            pieces: 0,
            rows_cleared: 0,
        }
    }

    /// Pure predicate; see `fits_on_grid`.
    #[inline]
    pub fn can_place(&self, kind: Kind, start_row: i32, col: i32) -> bool {
        fits_on_grid(&self.grid, kind, start_row, col)
    }

    // -------------------------------------------------------------------------
    // Pure transition kernel
    // -------------------------------------------------------------------------

    pub fn simulate_drop(
        grid_in: &Grid,
        kind: Kind,
        col: usize,
    ) -> Result<SimPlacement, EngineError> {
        let (_piece_h, piece_w) = extent(kind);
        if col.saturating_add(piece_w as usize) > W {
            return Err(EngineError::OutOfBounds { kind, col });
        }

        let row = settle_row(grid_in, kind, col);
        if row < 0 {
            return Err(EngineError::InvalidPlacement { kind, row, col });
        }
        let row = row as usize;

        let mut grid_lock = *grid_in;
        lock_on_grid(&mut grid_lock, kind, row, col);

        let (grid_clear, cleared) = clear_lines_grid(&grid_lock);

        Ok(SimPlacement {
            grid_after_lock: grid_lock,
            grid_after_clear: grid_clear,
            row,
            cleared_rows: cleared,
        })
    }

    // -------------------------------------------------------------------------
    // Mutating path
    // -------------------------------------------------------------------------

    /// Drops `kind` at `col`, locks it, then clears full rows.
    ///
    /// Fails without touching the grid when the shape would leave `[0, W)` or when there is
    /// no vertical room left.
    pub fn drop_piece(&mut self, kind: Kind, col: usize) -> Result<DropResult, EngineError> {
        let sim = Self::simulate_drop(&self.grid, kind, col)?;

        // Valid placement: commit post-clear grid.
        self.grid = sim.grid_after_clear;
        self.rows_cleared += u64::from(sim.cleared_rows);
        self.pieces += 1;

        Ok(DropResult {
            row: sim.row,
            cleared_rows: sim.cleared_rows,
        })
    }

    pub fn clear_filled_rows(&mut self) -> u32 {
        let cleared = clear_lines_inplace(&mut self.grid);
        self.rows_cleared += u64::from(cleared);
        cleared
    }

    /// Count of non-empty rows (see `occupied_rows` for the convention).
    pub fn height(&self) -> u32 {
        occupied_rows(&self.grid)
    }

    pub fn top_span(&self) -> u32 {
        top_span(&self.grid)
    }

    /// Debug dump of the rows from the topmost occupied one down to the floor.
    pub fn render_ascii(&self) -> String {
        let first = H - self.top_span() as usize;
        let mut s = String::new();
        for r in first..H {
            s.push('|');
            for c in 0..W {
                s.push(if self.grid[r][c] { '#' } else { '.' });
            }
            s.push_str("|\n");
        }
        s.push('+');
        s.push_str(&"-".repeat(W));
        s.push_str("+\n");
        s.push_str(&format!(
            "pieces={} rows_cleared={} height={} span={}\n",
            self.pieces,
            self.rows_cleared,
            self.height(),
            self.top_span()
        ));
        s
    }
}
