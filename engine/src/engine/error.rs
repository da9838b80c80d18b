// engine/src/engine/error.rs
#![forbid(unsafe_code)]

//! Engine error taxonomy.
//!
//! Every variant is fatal for the line being processed: nothing in the engine retries or
//! recovers, callers propagate the first failure.

use std::fmt;

use crate::engine::pieces::Kind;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// Token's leading character is not a registered shape.
    UnknownShape { glyph: char },

    /// Some cell of the shape would land outside `[0, W)`.
    OutOfBounds { kind: Kind, col: usize },

    /// The computed settle row is above row 0: the grid has no vertical room left.
    InvalidPlacement { kind: Kind, row: i32, col: usize },

    /// Token (or line) is malformed, e.g. missing or non-numeric column digits.
    InvalidInput { token: String, reason: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownShape { glyph } => write!(f, "Unknown piece: {}", glyph),
            // Shapes are printed as their offset list, e.g. `[(0, 0), (0, 1), ...]`.
            EngineError::OutOfBounds { kind, col } => write!(
                f,
                "Piece {:?} at column {} goes out of bounds",
                kind.cells(),
                col
            ),
            EngineError::InvalidPlacement { kind, row, col } => write!(
                f,
                "Cannot place piece {:?} at row {}, column {}",
                kind.cells(),
                row,
                col
            ),
            EngineError::InvalidInput { token, reason } => {
                write!(f, "Invalid token {:?}: {}", token, reason)
            }
        }
    }
}

impl std::error::Error for EngineError {}
