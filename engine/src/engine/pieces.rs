// engine/src/engine/pieces.rs
#![forbid(unsafe_code)]

use std::fmt;

use crate::engine::constants::CELLS_PER_PIECE;
use crate::engine::error::EngineError;

/// The seven registered shapes. Shapes never rotate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    Q,
    Z,
    S,
    T,
    I,
    L,
    J,
}

impl Kind {
    pub fn all() -> &'static [Kind] {
        use Kind::*;
        &[Q, Z, S, T, I, L, J]
    }

    pub fn glyph(self) -> char {
        use Kind::*;
        match self {
            Q => 'Q',
            Z => 'Z',
            S => 'S',
            T => 'T',
            I => 'I',
            L => 'L',
            J => 'J',
        }
    }

    /// Inverse of `glyph()`. Lookup is case-sensitive.
    pub fn from_glyph(c: char) -> Result<Self, EngineError> {
        use Kind::*;
        match c {
            'Q' => Ok(Q),
            'Z' => Ok(Z),
            'S' => Ok(S),
            'T' => Ok(T),
            'I' => Ok(I),
            'L' => Ok(L),
            'J' => Ok(J),
            _ => Err(EngineError::UnknownShape { glyph: c }),
        }
    }

    /// Cell offsets as (dy, dx) relative to the anchor at (0, 0).
    ///
    /// IMPORTANT: these tables are part of the external contract; reference outputs
    /// depend on the exact offsets (including the listing order used in error messages).
    #[inline]
    pub fn cells(self) -> &'static [(i32, i32); CELLS_PER_PIECE] {
        use Kind::*;
        match self {
            Q => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Z => &[(0, 0), (0, 1), (1, 1), (1, 2)],
            S => &[(1, 0), (1, 1), (0, 1), (0, 2)],
            T => &[(0, 0), (0, 1), (0, 2), (1, 1)],
            I => &[(0, 0), (0, 1), (0, 2), (0, 3)],
            L => &[(0, 0), (1, 0), (2, 0), (2, 1)],
            J => &[(0, 1), (1, 1), (2, 1), (2, 0)],
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
