use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// The dashboard document could not be retrieved or decoded.
    #[error("Dashboard source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl DashboardError {
    /// Collapse any retrieval or decoding failure into `SourceUnavailable`.
    ///
    /// The source adapters call this at their boundary so callers only ever
    /// see a single failure kind for a bad load.
    pub fn into_source_unavailable(self) -> Self {
        match self {
            DashboardError::SourceUnavailable(_) => self,
            other => DashboardError::SourceUnavailable(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
