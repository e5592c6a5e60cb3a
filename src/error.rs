use thiserror::Error;

/// Result alias for polling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end a polling run.
#[derive(Error, Debug)]
pub enum Error {
    /// Connection or request failure against the target device
    #[error("transport error: {0}")]
    Transport(String),

    /// Sink open or commit failure
    #[error("write error: {0}")]
    Write(String),

    /// Malformed or missing settings
    #[error("configuration error: {0}")]
    Config(String),
}
