use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// The series operations themselves are total — everything here comes from
/// the configuration layer and surrounding plumbing.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("config error: {0}")]
    Config(String),

    #[error("signal error: {0}")]
    Signal(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
