// ABOUTME: Shared plumbing for the parser binaries: common flags, logging setup and wiring helpers.
// ABOUTME: Turns CommonArgs into a Harvester, a SourceCatalog and the output path.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::client::Harvester;
use crate::error::HarvestError;
use crate::options::HarvesterBuilder;
use crate::output::DEFAULT_DATA_DIR;
use crate::sources::{load_builtin_catalog, load_catalog_file, SourceCatalog};

/// Flags accepted by every parser binary.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Output file path (default: src/data/<dataset file>)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Source catalogue JSON to use instead of the built-in one
    #[arg(long = "sources")]
    pub sources: Option<PathBuf>,

    /// Pause between requests in milliseconds, replacing per-source delays
    #[arg(long = "delay-ms")]
    pub delay_ms: Option<u64>,

    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,
}

impl CommonArgs {
    pub fn harvester(&self) -> Harvester {
        let mut builder = HarvesterBuilder::new();
        if let Some(ms) = self.delay_ms {
            builder = builder.delay(Duration::from_millis(ms));
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(ua) = &self.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        builder.build()
    }

    /// The `--sources` catalogue, or the built-in one.
    pub fn catalog(&self) -> Result<SourceCatalog, HarvestError> {
        match &self.sources {
            Some(path) => load_catalog_file(path),
            None => Ok(load_builtin_catalog()),
        }
    }

    pub fn output_path(&self, default_file: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Path::new(DEFAULT_DATA_DIR).join(default_file))
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
