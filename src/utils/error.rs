use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for tocsmith operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for tocsmith operations
#[derive(Debug)]
pub enum IndexError {
    /// IO error wrapper
    Io(io::Error),
    /// Options file could not be read or parsed
    Config(String),
    /// The HTML document is missing something the indexer needs
    Document(String),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::Io(err) => write!(f, "IO error: {}", err),
            IndexError::Config(msg) => write!(f, "Configuration error: {}", msg),
            IndexError::Document(msg) => write!(f, "Document error: {}", msg),
        }
    }
}

impl Error for IndexError {}

impl From<io::Error> for IndexError {
    fn from(err: io::Error) -> Self {
        IndexError::Io(err)
    }
}
