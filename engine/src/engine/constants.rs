// engine/src/engine/constants.rs
#![forbid(unsafe_code)]

/// Grid height in rows. Row 0 is the top, row `H - 1` is the floor.
pub const H: usize = 100;
/// Grid width in columns.
pub const W: usize = 10;

/// Every shape in the registry is made of exactly this many cells.
pub const CELLS_PER_PIECE: usize = 4;

/// Token separator inside one input line.
pub const TOKEN_SEPARATOR: char = ',';
