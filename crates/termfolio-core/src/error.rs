use std::fmt;
use std::path::PathBuf;

/// Result type for termfolio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the core layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed while reading content
    Io(std::io::Error),

    /// Content file is not valid TOML for the portfolio schema
    Parse { path: PathBuf, source: toml::de::Error },

    /// Content is structurally valid but unusable
    Content(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse { path, source } => {
                write!(f, "Invalid content file {}: {}", path.display(), source)
            }
            Error::Content(msg) => write!(f, "Content error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse { source, .. } => Some(source),
            Error::Content(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
