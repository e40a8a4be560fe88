/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Client error type.
///
/// Only transport failures surface as errors: XML decode problems yield
/// partial maps, and malformed numeric fields read as zero. Nothing here is
/// fatal to the process; retry/abort policy belongs to the caller.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP client errors from the default reqwest transport
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failures reported by custom transport implementations
    #[error("Transport error: {0}")]
    Transport(String),
}

impl Error {
    pub fn transport(msg: impl Into<String>) -> Self {
        Error::Transport(msg.into())
    }
}
