// engine/src/line/mod.rs
#![forbid(unsafe_code)]

//! Line-level plumbing around the engine: token parsing, per-line simulation runs, and
//! random input synthesis.

mod command;
mod generate;
mod processor;

pub use command::{PieceCommand, parse_line, tokens};
pub use generate::{generate_line, random_command};
pub use processor::{LineOutcome, process_line, process_lines, run_commands, simulate_line};
