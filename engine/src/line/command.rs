// engine/src/line/command.rs
#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::engine::{EngineError, Kind, TOKEN_SEPARATOR};

/// One drop instruction: `<glyph><column>`, e.g. `Q0` or `I12`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PieceCommand {
    pub kind: Kind,
    pub col: usize,
}

impl PieceCommand {
    pub fn new(kind: Kind, col: usize) -> Self {
        Self { kind, col }
    }
}

fn invalid(token: &str, reason: impl Into<String>) -> EngineError {
    EngineError::InvalidInput {
        token: token.to_string(),
        reason: reason.into(),
    }
}

impl FromStr for PieceCommand {
    type Err = EngineError;

    /// The shape is resolved before the column, so `H0` reports an unknown shape even
    /// though its column is fine, and `Hx` does too.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let glyph = chars.next().ok_or_else(|| invalid(token, "empty token"))?;
        let kind = Kind::from_glyph(glyph)?;

        let digits = chars.as_str();
        if digits.is_empty() {
            return Err(invalid(token, "missing column"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(token, "column must be a non-negative base-10 integer"));
        }
        let col = digits
            .parse::<usize>()
            .map_err(|e| invalid(token, format!("column {}", e)))?;

        Ok(Self { kind, col })
    }
}

impl fmt::Display for PieceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.glyph(), self.col)
    }
}

/// Split a raw input line into tokens: the line and every token are trimmed.
/// An empty line yields one empty token (which then fails to parse).
pub fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.trim().split(TOKEN_SEPARATOR).map(str::trim)
}

pub fn parse_line(line: &str) -> Result<Vec<PieceCommand>, EngineError> {
    tokens(line).map(PieceCommand::from_str).collect()
}
