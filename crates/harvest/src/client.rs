// ABOUTME: The Harvester struct that owns the HTTP client and walks a list of sources.
// ABOUTME: Fetches pages one at a time with a politeness delay, skipping pages that fail.

use scraper::Html;
use tracing::{info, warn};

use crate::error::HarvestError;
use crate::options::{HarvesterBuilder, Options, DEFAULT_DELAY};
use crate::resource::fetch;
use crate::sources::Source;

/// Outcome of a [`Harvester::sweep`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Pages fetched and handed to the visitor.
    pub visited: usize,
    /// Pages skipped, with the error message.
    pub failed: Vec<(String, String)>,
}

impl SweepReport {
    pub fn all_failed(&self) -> bool {
        self.visited == 0 && !self.failed.is_empty()
    }
}

/// Sequential page fetcher shared by all parsers.
#[derive(Debug, Clone)]
pub struct Harvester {
    http: reqwest::Client,
    opts: Options,
}

impl Harvester {
    /// Create a new harvester from options.
    ///
    /// Falls back to a default reqwest client if the configured one cannot be built.
    pub fn new(opts: Options) -> Self {
        let http = match &opts.http_client {
            Some(client) => client.clone(),
            None => reqwest::Client::builder()
                .user_agent(opts.user_agent.clone())
                .timeout(opts.timeout)
                .build()
                .unwrap_or_else(|e| {
                    warn!(error = %e, "failed to build configured HTTP client, using defaults");
                    reqwest::Client::new()
                }),
        };
        Self { http, opts }
    }

    /// Start building a harvester.
    pub fn builder() -> HarvesterBuilder {
        HarvesterBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Pause to observe after visiting `source`.
    pub fn delay_for(&self, source: &Source) -> std::time::Duration {
        self.opts
            .delay
            .or_else(|| source.delay())
            .unwrap_or(DEFAULT_DELAY)
    }

    /// Fetch a page and decode it to text.
    pub async fn fetch_html(&self, url: &str) -> Result<String, HarvestError> {
        let page = fetch(&self.http, url, &self.opts.headers).await?;
        Ok(page.html())
    }

    /// Visit every source in order.
    ///
    /// Each page is fetched, parsed and passed to `visit`. A page that fails to
    /// fetch is logged and skipped. The harvester sleeps between consecutive
    /// requests but not after the last one.
    pub async fn sweep<F>(&self, sources: &[Source], mut visit: F) -> SweepReport
    where
        F: FnMut(&Source, &Html),
    {
        let mut report = SweepReport::default();

        for (i, source) in sources.iter().enumerate() {
            info!(url = %source.url, "processing");

            match self.fetch_html(&source.url).await {
                Ok(body) => {
                    let doc = Html::parse_document(&body);
                    visit(source, &doc);
                    report.visited += 1;
                }
                Err(e) => {
                    warn!(url = %source.url, error = %e, "skipping source");
                    report.failed.push((source.url.clone(), e.to_string()));
                }
            }

            if i + 1 < sources.len() {
                let pause = self.delay_for(source);
                if !pause.is_zero() {
                    tokio::time::sleep(pause).await;
                }
            }
        }

        report
    }
}
