use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SERVER: &str = "http://localhost:5000";
pub const PREDICT_PATH: &str = "/api/predict";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Command-line flags for the `tsent` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "tsent", version, about = "Terminal client for a sentiment classification service")]
pub struct Cli {
    /// Base URL of the classification server
    #[arg(long, default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Seconds to wait for the server before giving up
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Directory for log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Classify this text once, print the verdict, and exit
    #[arg(long)]
    pub text: Option<String>,
}

/// Resolved settings for talking to the classification server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(server: impl Into<String>, timeout: Duration) -> Self {
        Self {
            server: server.into(),
            timeout,
        }
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.server.trim().trim_end_matches('/'), PREDICT_PATH)
    }
}

impl From<&Cli> for ClientConfig {
    fn from(cli: &Cli) -> Self {
        Self::new(cli.server.clone(), Duration::from_secs(cli.timeout_secs))
    }
}

impl Cli {
    /// Where log files go: `--log-dir`, else the platform data dir, else the temp dir.
    pub fn resolve_log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }
        directories::ProjectDirs::from("", "", "tsent")
            .map(|dirs| dirs.data_local_dir().join("logs"))
            .unwrap_or_else(|| std::env::temp_dir().join("tsent").join("logs"))
    }
}
