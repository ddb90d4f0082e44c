use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed source {path}: {reason}")]
    MalformedSource { path: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PortalError {
    /// True for errors that mean the application listing could not be produced.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            PortalError::SourceUnavailable(_) | PortalError::MalformedSource { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
