use thiserror::Error as ThisError;

/// Errors that can occur while running the charting pipeline
///
/// All variants are fatal: the run aborts and already-written images
/// stay on disk.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Input file missing or unreadable
    #[error("file access error: {0}")]
    FileAccess(#[from] std::io::Error),

    /// Unexpected column layout or unparseable cell
    #[error("parse error: {0}")]
    Parse(#[from] polars::error::PolarsError),

    /// Empty series, invalid plot bounds, or backend failure
    #[error("render error: {0}")]
    Render(String),
}

/// Type alias for Results using the pipeline Error
pub type Result<T> = std::result::Result<T, Error>;
