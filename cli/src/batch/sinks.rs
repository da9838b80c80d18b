// cli/src/batch/sinks.rs
#![forbid(unsafe_code)]

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sink interface for per-line results. Runner calls it strictly in input order.
pub trait HeightSink {
    fn on_height(&mut self, height: u32) -> io::Result<()>;

    /// Called once after the last line (and before returning an error).
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Human-readable destination for logs and the final summary.
    fn describe(&self) -> String;

    /// True if the sink shares stdout with the final summary.
    fn is_stdout(&self) -> bool {
        false
    }
}

/// Appends `"<height>\n"` per line to a file.
///
/// Any file left at `path` by a previous run is removed on construction, so runs never
/// accumulate. The file itself is only created by the first height, so a run with no input
/// lines leaves no output behind.
pub struct FileSink {
    path: PathBuf,
    out: Option<BufWriter<File>>,
}

impl FileSink {
    pub fn create(path: &Path) -> io::Result<Self> {
        match fs::remove_file(path) {
            Ok(()) => log::debug!("removed previous output {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        Ok(Self {
            path: path.to_path_buf(),
            out: None,
        })
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        if self.out.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            self.out = Some(BufWriter::new(file));
        }
        match self.out.as_mut() {
            Some(out) => Ok(out),
            None => Err(io::Error::other("output writer missing")),
        }
    }
}

impl HeightSink for FileSink {
    fn on_height(&mut self, height: u32) -> io::Result<()> {
        writeln!(self.writer()?, "{}", height)
    }

    fn finish(&mut self) -> io::Result<()> {
        match self.out.as_mut() {
            Some(out) => out.flush(),
            None => Ok(()),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Writes heights to stdout (one per line).
#[derive(Default)]
pub struct StdoutSink;

impl HeightSink for StdoutSink {
    fn on_height(&mut self, height: u32) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", height)
    }

    fn finish(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }

    fn describe(&self) -> String {
        "<stdout>".to_string()
    }

    fn is_stdout(&self) -> bool {
        true
    }
}
