// engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;
pub mod line;

// Flat re-exports for the CLI and integration tests.
pub use engine::{
    Board, DropResult, EngineError, Grid, H, Kind, SimPlacement, W, empty_grid, extent,
};
pub use line::{
    LineOutcome, PieceCommand, generate_line, parse_line, process_line, process_lines,
    random_command, simulate_line,
};
