use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub source: SourceConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub location: SourceLocation,
}

/// Where the dashboard document comes from.
///
/// Parsed from `DASHBOARD_SOURCE`: `mock`, `file:<path>`, a bare path, or an
/// `http(s)://` URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum SourceLocation {
    Mock,
    File(PathBuf),
    Http(String),
}

impl SourceLocation {
    pub fn kind(&self) -> &'static str {
        match self {
            SourceLocation::Mock => "mock",
            SourceLocation::File(_) => "file",
            SourceLocation::Http(_) => "http",
        }
    }
}

impl FromStr for SourceLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("source location cannot be empty".to_string());
        }

        if trimmed.eq_ignore_ascii_case("mock") {
            return Ok(SourceLocation::Mock);
        }

        let lower = trimmed.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(SourceLocation::Http(trimmed.to_string()));
        }

        let path = trimmed.strip_prefix("file:").unwrap_or(trimmed);
        if path.is_empty() {
            return Err("file source needs a path".to_string());
        }
        Ok(SourceLocation::File(PathBuf::from(path)))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Mock => write!(f, "mock"),
            SourceLocation::File(path) => write!(f, "file:{}", path.display()),
            SourceLocation::Http(url) => write!(f, "{url}"),
        }
    }
}

/// Settings for the simulated CSV uploader.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    pub max_file_size: usize,
    /// Interval between simulated progress steps.
    pub tick_interval_ms: u64,
    /// Pause between reaching 100% and reporting completion.
    pub completion_delay_ms: u64,
    pub tracked_uploads: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024,
            tick_interval_ms: 300,
            completion_delay_ms: 500,
            tracked_uploads: 256,
        }
    }
}

const DEFAULT_SOURCE_PATH: &str = "output.json";

impl Default for Config {
    fn default() -> Self {
        let upload_defaults = UploadConfig::default();

        Self {
            server: ServerConfig {
                host: env::var("CQSBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("CQSBOARD_PORT", 3000),
            },
            source: SourceConfig {
                location: parse_env_or(
                    "DASHBOARD_SOURCE",
                    SourceLocation::File(PathBuf::from(DEFAULT_SOURCE_PATH)),
                ),
            },
            upload: UploadConfig {
                max_file_size: parse_env_or("UPLOAD_MAX_FILE_SIZE", upload_defaults.max_file_size),
                tick_interval_ms: parse_env_or("UPLOAD_TICK_MS", upload_defaults.tick_interval_ms),
                completion_delay_ms: parse_env_or(
                    "UPLOAD_COMPLETION_DELAY_MS",
                    upload_defaults.completion_delay_ms,
                ),
                tracked_uploads: parse_env_or(
                    "UPLOAD_TRACKED_MAX",
                    upload_defaults.tracked_uploads,
                ),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Configuration for tests and embedding: mock source, fast uploads.
    pub fn for_mock() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            source: SourceConfig {
                location: SourceLocation::Mock,
            },
            upload: UploadConfig {
                tick_interval_ms: 1,
                completion_delay_ms: 1,
                ..UploadConfig::default()
            },
        }
    }
}
