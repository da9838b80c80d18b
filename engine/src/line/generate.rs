// engine/src/line/generate.rs
#![forbid(unsafe_code)]

use rand::Rng;
use rand::seq::SliceRandom;

use crate::engine::{Kind, TOKEN_SEPARATOR, max_left_col};
use crate::line::command::PieceCommand;

/// Draw one command: a uniformly chosen shape at a uniformly chosen column that keeps it
/// inside the grid.
pub fn random_command<R: Rng>(rng: &mut R) -> PieceCommand {
    let kind = *Kind::all().choose(rng).unwrap_or(&Kind::Q);
    let col = rng.gen_range(0..=max_left_col(kind)) as usize;
    PieceCommand::new(kind, col)
}

/// Synthesize one input line of `pieces` tokens.
///
/// Generated lines can only fail by running out of vertical room.
pub fn generate_line<R: Rng>(rng: &mut R, pieces: usize) -> String {
    let mut out = String::with_capacity(pieces * 3);
    for i in 0..pieces {
        if i > 0 {
            out.push(TOKEN_SEPARATOR);
        }
        out.push_str(&random_command(rng).to_string());
    }
    out
}
