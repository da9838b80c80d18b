// cli/src/batch/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

use stack_engine::LineOutcome;

#[derive(Clone, Debug)]
pub struct BatchStats {
    pub lines_done: u64,
    pub pieces: u64,
    pub rows_cleared: u64,

    // height aggregates
    pub sum_height: u64,
    pub max_height: u32,

    /// Lines whose non-empty row count differs from their floor-to-top span.
    pub gapped_lines: u64,

    t0: Instant,
}

impl BatchStats {
    pub fn new() -> Self {
        Self {
            lines_done: 0,
            pieces: 0,
            rows_cleared: 0,
            sum_height: 0,
            max_height: 0,
            gapped_lines: 0,
            t0: Instant::now(),
        }
    }

    /// Call once per successfully processed line.
    pub fn on_line(&mut self, o: &LineOutcome) {
        self.lines_done += 1;
        self.pieces += o.pieces;
        self.rows_cleared += o.rows_cleared;
        self.sum_height += u64::from(o.height);
        self.max_height = self.max_height.max(o.height);
        if o.height != o.span {
            self.gapped_lines += 1;
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn lines_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.lines_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn avg_height(&self) -> f64 {
        if self.lines_done > 0 {
            self.sum_height as f64 / self.lines_done as f64
        } else {
            0.0
        }
    }

    pub fn avg_pieces(&self) -> f64 {
        if self.lines_done > 0 {
            self.pieces as f64 / self.lines_done as f64
        } else {
            0.0
        }
    }

    pub fn live_msg(&self) -> String {
        format!(
            "lps={:.1} pieces={} cleared={} maxH={} avgH={:.2}",
            self.lines_per_sec(),
            self.pieces,
            self.rows_cleared,
            self.max_height,
            self.avg_height(),
        )
    }

    pub fn final_report(&self, input: &str, output: &str, parallel: bool) -> FinalReport {
        FinalReport {
            input: input.to_string(),
            output: output.to_string(),
            parallel,
            lines_done: self.lines_done,
            elapsed_s: self.elapsed_secs(),
            lines_per_s: self.lines_per_sec(),
            pieces: self.pieces,
            avg_pieces: self.avg_pieces(),
            rows_cleared: self.rows_cleared,
            max_height: self.max_height,
            avg_height: self.avg_height(),
            gapped_lines: self.gapped_lines,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FinalReport {
    pub input: String,
    pub output: String,
    pub parallel: bool,

    pub lines_done: u64,
    pub elapsed_s: f64,
    pub lines_per_s: f64,

    pub pieces: u64,
    pub avg_pieces: f64,
    pub rows_cleared: u64,

    pub max_height: u32,
    pub avg_height: f64,
    pub gapped_lines: u64,
}

impl FinalReport {
    /// One-line summary (useful for logs / grep).
    pub fn summary_line(&self) -> String {
        format!(
            "DONE: input={} output={} parallel={} lines={} elapsed={:.3}s lines/s={:.1} pieces={} avg_pieces={:.2} rows_cleared={} max_h={} avg_h={:.2} gapped_lines={}",
            self.input,
            self.output,
            self.parallel,
            self.lines_done,
            self.elapsed_s,
            self.lines_per_s,
            self.pieces,
            self.avg_pieces,
            self.rows_cleared,
            self.max_height,
            self.avg_height,
            self.gapped_lines,
        )
    }
}
