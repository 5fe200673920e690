use std::fmt;

/// Comprehensive error types for perfdash operations
#[derive(Debug)]
pub enum PerfDashError {
    /// IO error (reading reports, writing artifacts)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// A report field matched its pattern but the value could not be converted
    Parse {
        field: String,
        value: String,
        reason: String,
    },

    /// Reports directory does not exist
    DirectoryNotFound(String),

    /// Regex compilation error
    Regex(regex::Error),

    /// JSON serialization or parsing error
    Json(serde_json::Error),

    /// Invalid argument error
    InvalidArgument(String),

    /// Directory walking error
    FileWalking(ignore::Error),

    /// Dashboard rendering error
    Dashboard(String),
}

impl fmt::Display for PerfDashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerfDashError::Io(err) => write!(f, "IO error: {err}"),
            PerfDashError::Config(msg) => write!(f, "Configuration error: {msg}"),
            PerfDashError::Parse {
                field,
                value,
                reason,
            } => write!(
                f,
                "Parse error: field '{field}' matched '{value}' but could not be converted ({reason})"
            ),
            PerfDashError::DirectoryNotFound(path) => {
                write!(f, "Reports directory not found: {path}")
            }
            PerfDashError::Regex(err) => write!(f, "Regex error: {err}"),
            PerfDashError::Json(err) => write!(f, "JSON error: {err}"),
            PerfDashError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            PerfDashError::FileWalking(err) => write!(f, "File walking error: {err}"),
            PerfDashError::Dashboard(msg) => write!(f, "Dashboard error: {msg}"),
        }
    }
}

impl std::error::Error for PerfDashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PerfDashError::Io(err) => Some(err),
            PerfDashError::Regex(err) => Some(err),
            PerfDashError::Json(err) => Some(err),
            PerfDashError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PerfDashError {
    fn from(err: std::io::Error) -> Self {
        PerfDashError::Io(err)
    }
}

impl From<regex::Error> for PerfDashError {
    fn from(err: regex::Error) -> Self {
        PerfDashError::Regex(err)
    }
}

impl From<serde_json::Error> for PerfDashError {
    fn from(err: serde_json::Error) -> Self {
        PerfDashError::Json(err)
    }
}

impl From<ignore::Error> for PerfDashError {
    fn from(err: ignore::Error) -> Self {
        PerfDashError::FileWalking(err)
    }
}

/// Type alias for Results using PerfDashError
pub type Result<T> = std::result::Result<T, PerfDashError>;
