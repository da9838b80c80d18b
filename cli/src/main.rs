// cli/src/main.rs
#![forbid(unsafe_code)]

mod batch;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::batch::stats::FinalReport;
use crate::batch::{FileSink, HeightSink, Runner, RunnerConfig, StdoutSink};
use stack_engine::generate_line;

#[derive(Parser, Debug)]
#[command(name = "stack_cli")]
#[command(about = "Drop falling-block pieces per input line and report the stack height")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments for the default `run` command.
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate every input line and append one height per line to the output.
    Run(RunArgs),
    /// Write a random input file (valid columns only).
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    // ---------------- io ----------------
    /// Input file: one comma-separated list of tokens (e.g. `Q0,I4`) per line.
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,

    /// Output file. Removed at start, then appended once per input line.
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Write heights to stdout instead of --output.
    #[arg(long, default_value_t = false)]
    stdout: bool,

    // ---------------- evaluation ----------------
    /// Evaluate lines in parallel (output order is unchanged).
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Dump each final board as ASCII to stderr (implies sequential evaluation).
    #[arg(long, default_value_t = false)]
    render: bool,

    // ---------------- output / reporting ----------------
    /// Verbosity: 0=summary only, 1=progress bar, 2=progress bar + per-line debug log.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of lines to write.
    #[arg(long, default_value_t = 100)]
    lines: usize,

    /// Tokens per line.
    #[arg(long, default_value_t = 20)]
    pieces: usize,

    /// RNG seed. If omitted, a fixed default is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Destination file; stdout if omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Default log filter for a verbosity level; `RUST_LOG` overrides it.
fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 | 1 => "warn",
        _ => "debug",
    }
}

fn init_logging(verbosity: u8) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_level(verbosity)),
    )
    .init();
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    BufReader::new(file)
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.with_context(|| format!("{}:{}: cannot read line", path.display(), i + 1))
        })
        .collect()
}

fn prepare_sink(args: &RunArgs) -> Result<Box<dyn HeightSink>> {
    if args.stdout {
        return Ok(Box::new(StdoutSink));
    }
    let sink = FileSink::create(&args.output)
        .with_context(|| format!("cannot prepare {}", args.output.display()))?;
    Ok(Box::new(sink))
}

/// The previous output is cleared before the input is even opened, so a failed run never
/// leaves stale heights behind.
fn run_batch(args: &RunArgs) -> Result<FinalReport> {
    let sink = prepare_sink(args)?;

    let lines = read_lines(&args.input)?;
    log::info!("read {} lines from {}", lines.len(), args.input.display());

    let cfg = RunnerConfig {
        input_label: args.input.display().to_string(),
        parallel: args.parallel,
        render: args.render,
        verbosity: args.verbosity,
    };

    let mut runner = Runner::new(cfg, sink);
    runner.run(&lines)
}

fn run(args: RunArgs) -> Result<()> {
    let report = run_batch(&args)?;

    // Keep stdout clean when it carries the heights.
    if args.stdout {
        eprintln!("{}", report.summary_line());
    } else {
        println!("{}", report.summary_line());
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or(12345);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut out: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(BufWriter::new(
            fs::File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for _ in 0..args.lines {
        writeln!(out, "{}", generate_line(&mut rng, args.pieces))?;
    }
    out.flush()?;

    log::info!(
        "generated {} lines x {} pieces (seed={})",
        args.lines,
        args.pieces,
        seed
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Run(args)) => {
            init_logging(args.verbosity);
            run(args)
        }
        Some(Commands::Generate(args)) => {
            init_logging(0);
            generate(args)
        }
        None => {
            init_logging(cli.run.verbosity);
            run(cli.run)
        }
    }
}
