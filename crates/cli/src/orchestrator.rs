// ABOUTME: Runs the parser binaries one after another and checks the files they produce.
// ABOUTME: Collects per-step outcomes and output file sizes into a RunSummary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use randgen_harvest::{NAMES_FILE, QUOTES_FILE, WORDS_FILE};
use serde::Serialize;
use tracing::{info, warn};

const RULE: &str = "============================================================";

/// One parser run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub key: &'static str,
    pub program: &'static str,
    pub description: &'static str,
    pub output_file: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        key: "names",
        program: "parse-names",
        description: "Russian names",
        output_file: NAMES_FILE,
    },
    Step {
        key: "quotes",
        program: "parse-quotes",
        description: "Quotes",
        output_file: QUOTES_FILE,
    },
    Step {
        key: "words",
        program: "parse-words",
        description: "Russian words",
        output_file: WORDS_FILE,
    },
];

/// Steps to run, in the fixed order. An empty `only` selects all of them.
pub fn plan(only: &[String]) -> Result<Vec<Step>> {
    for key in only {
        if !STEPS.iter().any(|s| s.key == key) {
            bail!("unknown step {:?} (expected one of names, quotes, words)", key);
        }
    }
    Ok(STEPS
        .iter()
        .filter(|s| only.is_empty() || only.iter().any(|k| k == s.key))
        .copied()
        .collect())
}

/// Path of `program` inside `bin_dir`, with the platform executable suffix.
pub fn executable_path(bin_dir: &Path, program: &str) -> PathBuf {
    bin_dir.join(format!("{}{}", program, std::env::consts::EXE_SUFFIX))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Succeeded {
        stdout: String,
    },
    Failed {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    Missing,
    LaunchError {
        message: String,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub key: String,
    pub program: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    /// `None` when the file does not exist.
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub started_at: String,
    pub steps: Vec<StepReport>,
    pub files: Vec<FileReport>,
    pub total_bytes: u64,
    pub elapsed_secs: f64,
}

impl RunSummary {
    /// True when every step succeeded and every expected file exists.
    pub fn ok(&self) -> bool {
        self.steps.iter().all(|s| s.outcome.is_success())
            && self.files.iter().all(|f| f.size.is_some())
    }
}

#[derive(Debug, Clone)]
pub struct Orchestrator {
    pub bin_dir: PathBuf,
    pub data_dir: PathBuf,
    pub pause: Duration,
    /// Extra arguments handed to every parser.
    pub parser_args: Vec<String>,
}

impl Orchestrator {
    pub fn output_path(&self, step: &Step) -> PathBuf {
        self.data_dir.join(step.output_file)
    }

    /// Runs one parser with `--output` pointing into the data directory.
    pub fn run_step(&self, step: &Step) -> StepReport {
        let start = Instant::now();
        let exe = executable_path(&self.bin_dir, step.program);

        let outcome = if !exe.is_file() {
            warn!(program = %exe.display(), "parser not found");
            Outcome::Missing
        } else {
            info!(program = %exe.display(), "starting parser");
            let result = Command::new(&exe)
                .arg("--output")
                .arg(self.output_path(step))
                .args(&self.parser_args)
                .output();
            match result {
                Ok(out) if out.status.success() => Outcome::Succeeded {
                    stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                },
                Ok(out) => {
                    warn!(program = step.program, status = ?out.status.code(), "parser failed");
                    Outcome::Failed {
                        code: out.status.code(),
                        stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                        stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
                    }
                }
                Err(e) => {
                    warn!(program = step.program, error = %e, "could not launch parser");
                    Outcome::LaunchError {
                        message: e.to_string(),
                    }
                }
            }
        };

        StepReport {
            key: step.key.to_string(),
            program: step.program.to_string(),
            outcome,
            elapsed_ms: start.elapsed().as_millis(),
        }
    }

    /// Size of each step's output file, if present.
    pub fn check_files(&self, steps: &[Step]) -> Vec<FileReport> {
        steps
            .iter()
            .map(|step| {
                let path = self.output_path(step);
                FileReport {
                    size: std::fs::metadata(&path)
                        .ok()
                        .filter(|m| m.is_file())
                        .map(|m| m.len()),
                    path: path.display().to_string(),
                }
            })
            .collect()
    }

    /// Runs `steps` in order, writing the progress report to `out`.
    pub fn run(&self, steps: &[Step], out: &mut dyn Write) -> Result<RunSummary> {
        let started_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        writeln!(out, "randgen data harvest")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "started: {}", started_at)?;
        writeln!(out, "{}", RULE)?;

        let start = Instant::now();
        let mut reports = Vec::with_capacity(steps.len());
        for (i, step) in steps.iter().enumerate() {
            writeln!(out, "\n{}\n{}: {}\n{}", RULE, step.key, step.description, RULE)?;

            let report = self.run_step(step);
            print_outcome(out, step, &report.outcome)?;
            let ran = report.outcome != Outcome::Missing;
            reports.push(report);

            if ran && i + 1 < steps.len() && !self.pause.is_zero() {
                thread::sleep(self.pause);
            }
        }
        let elapsed_secs = start.elapsed().as_secs_f64();

        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "finished in {:.2} seconds", elapsed_secs)?;
        writeln!(out, "{}", RULE)?;

        let files = self.check_files(steps);
        writeln!(out, "\nresults:")?;
        for file in &files {
            match file.size {
                Some(size) => writeln!(out, "  ok {} - {} bytes", file.path, size)?,
                None => writeln!(out, "  missing {} - file not found", file.path)?,
            }
        }
        let total_bytes = files.iter().filter_map(|f| f.size).sum();
        writeln!(out, "total: {} bytes", total_bytes)?;

        Ok(RunSummary {
            started_at,
            steps: reports,
            files,
            total_bytes,
            elapsed_secs,
        })
    }
}

fn print_outcome(out: &mut dyn Write, step: &Step, outcome: &Outcome) -> std::io::Result<()> {
    match outcome {
        Outcome::Succeeded { stdout } => {
            writeln!(out, "ok: {}", step.description)?;
            write!(out, "{}", stdout)
        }
        Outcome::Failed {
            code,
            stdout,
            stderr,
        } => {
            match code {
                Some(c) => writeln!(out, "failed: {} (exit code {})", step.description, c)?,
                None => writeln!(out, "failed: {} (terminated by signal)", step.description)?,
            }
            writeln!(out, "stdout: {}", stdout)?;
            writeln!(out, "stderr: {}", stderr)
        }
        Outcome::Missing => writeln!(out, "not found: {}", step.program),
        Outcome::LaunchError { message } => {
            writeln!(out, "error launching {}: {}", step.program, message)
        }
    }
}
