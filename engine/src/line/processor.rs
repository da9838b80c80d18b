// engine/src/line/processor.rs
#![forbid(unsafe_code)]

use rayon::prelude::*;

use crate::engine::{Board, EngineError};
use crate::line::command::{PieceCommand, tokens};

/// Result of one simulation run (one input line).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LineOutcome {
    /// Non-empty row count; this is the value written to the output.
    pub height: u32,
    /// Floor-to-topmost-block distance, kept for diagnostics only.
    pub span: u32,
    pub pieces: u64,
    pub rows_cleared: u64,
}

impl LineOutcome {
    pub fn from_board(b: &Board) -> Self {
        Self {
            height: b.height(),
            span: b.top_span(),
            pieces: b.pieces,
            rows_cleared: b.rows_cleared,
        }
    }
}

/// Apply already-parsed commands to a fresh board.
pub fn run_commands(cmds: &[PieceCommand]) -> Result<Board, EngineError> {
    let mut board = Board::new();
    for cmd in cmds {
        board.drop_piece(cmd.kind, cmd.col)?;
    }
    Ok(board)
}

/// Run one input line on a fresh board and hand back the final board.
///
/// Tokens are parsed and dropped one at a time, so the first failing token in line order
/// decides the error (a bad column early in the line wins over an unknown shape later on).
pub fn simulate_line(line: &str) -> Result<Board, EngineError> {
    let mut board = Board::new();
    for token in tokens(line) {
        let cmd: PieceCommand = token.parse()?;
        board.drop_piece(cmd.kind, cmd.col)?;
    }
    Ok(board)
}

pub fn process_line(line: &str) -> Result<LineOutcome, EngineError> {
    simulate_line(line).map(|b| LineOutcome::from_board(&b))
}

/// Simulate many independent lines. Results are always in input order; `parallel` only
/// changes how they are computed.
pub fn process_lines<S>(lines: &[S], parallel: bool) -> Vec<Result<LineOutcome, EngineError>>
where
    S: AsRef<str> + Sync,
{
    if parallel {
        lines.par_iter().map(|l| process_line(l.as_ref())).collect()
    } else {
        lines.iter().map(|l| process_line(l.as_ref())).collect()
    }
}
