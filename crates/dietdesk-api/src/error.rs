use std::fmt;

/// Result type for dietdesk-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the API boundary
#[derive(Debug)]
pub enum Error {
    /// No usable session token; callers short-circuit before the wire.
    /// Not a failure path - the caller decides how quiet to be about it.
    NoSession,

    /// Network, HTTP status, or body decode failure
    Transport(String),

    /// Response envelope reported `error: true`
    Application(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoSession => write!(f, "No session token available"),
            Error::Transport(msg) => write!(f, "Transport error: {}", msg),
            Error::Application(msg) => write!(f, "Application error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Transport(format!("response decode failed: {}", err))
    }
}
