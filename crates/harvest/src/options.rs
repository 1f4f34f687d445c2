// ABOUTME: Configuration options for the harvesters and the HarvesterBuilder fluent API.
// ABOUTME: Holds timeout, user-agent, politeness delay and extra headers shared by every parser.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Harvester;

/// User-Agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between requests when neither the options nor the source set one.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Configuration options for a [`Harvester`].
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    /// When set, replaces every per-source delay.
    pub delay: Option<Duration>,
    pub headers: HashMap<String, String>,
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            delay: None,
            headers: HashMap::new(),
            http_client: None,
        }
    }
}

/// Builder for constructing Harvester instances with custom configuration.
#[derive(Debug, Clone)]
pub struct HarvesterBuilder {
    opts: Options,
}

impl HarvesterBuilder {
    /// Create a new HarvesterBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Override the pause between requests for every source.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.opts.delay = Some(delay);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Use a custom HTTP client. Timeout and user-agent options are ignored for it.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Harvester with the configured options.
    pub fn build(self) -> Harvester {
        Harvester::new(self.opts)
    }
}

impl Default for HarvesterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
