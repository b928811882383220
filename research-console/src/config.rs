//! Command line and environment configuration

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/research";

/// Credentials the external pipeline expects in its own environment.
/// Shown on the settings view; never read here.
pub const PIPELINE_ENV_TEMPLATE: &str = "GROQ_API_KEY=your_key_here\nTAVILY_SEARCH_API=your_key_here";

#[derive(Parser, Debug, Clone)]
#[command(name = "research-console")]
#[command(about = "Terminal control surface for the multi-agent research pipeline")]
pub struct Cli {
    /// Research endpoint that runs the pipeline
    #[arg(long, env = "RESEARCH_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Milliseconds between simulated stage advances
    #[arg(long, env = "RESEARCH_TICK_MS", default_value_t = 1500)]
    pub tick_ms: u64,

    /// Give up on a request after this many seconds (no limit by default)
    #[arg(long, env = "RESEARCH_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log file path
    #[arg(long, env = "RESEARCH_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub tick_interval: Duration,
    pub request_timeout: Option<Duration>,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let endpoint = cli.endpoint.trim().to_string();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            bail!("endpoint must be an http(s) URL, got '{}'", cli.endpoint);
        }
        if cli.tick_ms == 0 {
            bail!("--tick-ms must be greater than zero");
        }
        if cli.timeout_secs == Some(0) {
            bail!("--timeout-secs must be greater than zero");
        }

        Ok(Self {
            endpoint,
            tick_interval: Duration::from_millis(cli.tick_ms),
            request_timeout: cli.timeout_secs.map(Duration::from_secs),
            log_file: cli.log_file.unwrap_or_else(default_log_file),
        })
    }

    /// Load `.env`, then parse arguments and environment
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_cli(Cli::parse())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            tick_interval: Duration::from_millis(1500),
            request_timeout: None,
            log_file: default_log_file(),
        }
    }
}

/// Get the default log file path
pub fn default_log_file() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "research-console", "research-console") {
        proj_dirs.data_dir().join("research-console.log")
    } else {
        PathBuf::from("research-console.log")
    }
}

/// Route tracing output to `path`; the terminal belongs to the TUI
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create log directory '{}'", parent.display())
            })?;
        }
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
