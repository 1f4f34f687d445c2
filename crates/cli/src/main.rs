// ABOUTME: CLI that runs the names, quotes and words parsers in sequence.
// ABOUTME: Prints a progress report or a JSON summary and exits non-zero if any step or file is missing.

mod orchestrator;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use randgen_harvest::app::init_logging;

use crate::orchestrator::{plan, Orchestrator};

/// Run every data parser and check the files they write.
#[derive(Parser, Debug)]
#[command(name = "run-parsers")]
#[command(about = "Run the randgen data parsers and report their results", long_about = None)]
struct Args {
    /// Directory holding the parser executables (default: this executable's directory)
    #[arg(long)]
    bin_dir: Option<PathBuf>,

    /// Directory the parsers write their JSON files to.
    #[arg(long, default_value = randgen_harvest::output::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Pause between parsers in milliseconds.
    #[arg(long, default_value_t = 1000)]
    pause_ms: u64,

    /// Run only the given step (names, quotes, words). Repeatable.
    #[arg(long = "only")]
    only: Vec<String>,

    /// Print a JSON summary instead of the text report.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Extra arguments passed to every parser, after `--`.
    #[arg(last = true)]
    parser_args: Vec<String>,
}

fn default_bin_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    exe.parent()
        .map(PathBuf::from)
        .context("running executable has no parent directory")
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    init_logging(&args.log_level);

    let steps = plan(&args.only)?;
    let bin_dir = match args.bin_dir {
        Some(dir) => dir,
        None => default_bin_dir()?,
    };

    let orchestrator = Orchestrator {
        bin_dir,
        data_dir: args.data_dir,
        pause: Duration::from_millis(args.pause_ms),
        parser_args: args.parser_args,
    };

    let summary = if args.json {
        let summary = orchestrator.run(&steps, &mut io::sink())?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        summary
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let summary = orchestrator.run(&steps, &mut out)?;
        out.flush()?;
        summary
    };

    Ok(if summary.ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
