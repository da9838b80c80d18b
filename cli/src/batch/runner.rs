// cli/src/batch/runner.rs
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use stack_engine::{EngineError, LineOutcome, process_lines, simulate_line};

use super::sinks::HeightSink;
use super::stats::{BatchStats, FinalReport};

/// Fixed internal cadence for progress-bar live message updates.
const LIVE_EVERY: u64 = 200;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Used only for logs and the final report string.
    pub input_label: String,

    /// Evaluate lines on the rayon pool; output order is unchanged.
    pub parallel: bool,

    /// Dump each final board to stderr (forces sequential evaluation).
    pub render: bool,

    /// 0 = final summary only
    /// 1 = progress bar
    /// 2 = progress bar (per-line debug logs come from the log filter)
    pub verbosity: u8,
}

pub struct Runner {
    cfg: RunnerConfig,
    sink: Box<dyn HeightSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, sink: Box<dyn HeightSink>) -> Self {
        Self { cfg, sink }
    }

    /// Process every line in order, handing each height to the sink.
    ///
    /// Stops at the first failing line. Heights for the lines before it have already been
    /// written (and flushed) when the error is returned.
    pub fn run<S>(&mut self, lines: &[S]) -> Result<FinalReport>
    where
        S: AsRef<str> + Sync,
    {
        let cfg = self.cfg.clone();
        let parallel = cfg.parallel && !cfg.render;
        if cfg.parallel && cfg.render {
            log::warn!("--render evaluates lines sequentially; ignoring --parallel");
        }

        // Progress bar is UI only; runner logic does not depend on it.
        let pb = if cfg.verbosity >= 1 && !self.sink.is_stdout() {
            let pb = ProgressBar::new(lines.len() as u64);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
                )?
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut stats = BatchStats::new();

        let results: Box<dyn Iterator<Item = Result<LineOutcome, EngineError>> + '_> = if parallel {
            log::info!("evaluating {} lines in parallel", lines.len());
            Box::new(process_lines(lines, true).into_iter())
        } else {
            let render = cfg.render;
            let pb_ref = pb.clone();
            Box::new(lines.iter().map(move |l| -> Result<LineOutcome, EngineError> {
                let board = simulate_line(l.as_ref())?;
                if render {
                    let dump = board.render_ascii();
                    match pb_ref {
                        Some(ref pb) => pb.suspend(|| eprint!("{}", dump)),
                        None => eprint!("{}", dump),
                    }
                }
                Ok(LineOutcome::from_board(&board))
            }))
        };

        for (i, (line, result)) in lines.iter().zip(results).enumerate() {
            let line_no = i + 1;

            let outcome = match result {
                Ok(o) => o,
                Err(e) => {
                    self.sink.finish().with_context(|| {
                        format!("failed to flush {}", self.sink.describe())
                    })?;
                    if let Some(pb) = pb {
                        pb.abandon_with_message(format!("failed at line {}", line_no));
                    }
                    return Err(e).with_context(|| {
                        format!(
                            "{}:{}: cannot process line {:?}",
                            cfg.input_label,
                            line_no,
                            abbreviate(line.as_ref())
                        )
                    });
                }
            };

            log::debug!(
                "line {}: height={} span={} pieces={} cleared={}",
                line_no,
                outcome.height,
                outcome.span,
                outcome.pieces,
                outcome.rows_cleared
            );

            self.sink
                .on_height(outcome.height)
                .with_context(|| format!("failed to write to {}", self.sink.describe()))?;
            stats.on_line(&outcome);

            if let Some(ref pb) = pb {
                pb.inc(1);
                if stats.lines_done % LIVE_EVERY == 0 {
                    pb.set_message(stats.live_msg());
                }
            }
        }

        self.sink
            .finish()
            .with_context(|| format!("failed to flush {}", self.sink.describe()))?;

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        let report = stats.final_report(&cfg.input_label, &self.sink.describe(), parallel);
        log::info!(
            "processed {} lines from {} into {}",
            report.lines_done,
            report.input,
            report.output
        );
        Ok(report)
    }
}

/// Keep error messages readable for very long lines.
fn abbreviate(line: &str) -> String {
    const MAX: usize = 60;
    let line = line.trim();
    if line.chars().count() <= MAX {
        line.to_string()
    } else {
        let head: String = line.chars().take(MAX).collect();
        format!("{}...", head)
    }
}
