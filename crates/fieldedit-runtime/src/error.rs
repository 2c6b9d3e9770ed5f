use std::fmt;

/// Result type for fieldedit-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Missing or malformed inbound launch payload
    Launch(String),

    /// Restore found the shut-off marker without controller state; resuming
    /// would land in an inconsistent mid-transition state
    StaleRestore,

    /// Types-layer error
    Types(fieldedit_types::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Launch(msg) => write!(f, "Launch error: {}", msg),
            Error::StaleRestore => {
                write!(f, "Stale restore: shut-off marker set without controller state")
            }
            Error::Types(err) => write!(f, "Types error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Launch(_) | Error::StaleRestore => None,
        }
    }
}

impl From<fieldedit_types::Error> for Error {
    fn from(err: fieldedit_types::Error) -> Self {
        Error::Types(err)
    }
}
