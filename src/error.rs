//! Error types for ikago-config.

use thiserror::Error;

/// Failure while stripping comment lines.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The comment pattern could not be built or matched
    #[error("trim comments: {0}")]
    Pattern(#[from] regex::Error),
}

/// Error returned by [`crate::config::ConfigService::load`].
///
/// Every variant renders with a `load config: ` prefix; the underlying
/// cause stays reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be opened, stat'ed or read
    #[error("load config: {0}")]
    Io(#[from] std::io::Error),

    /// File exists but has zero length
    #[error("load config: empty file")]
    EmptyFile,

    /// Comment filtering failed
    #[error("load config: {0}")]
    Filter(#[from] FilterError),

    /// Expanded text is not a valid payload
    #[error("load config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Stage at which a load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    Io,
    EmptyFile,
    Filter,
    Parse,
}

impl ConfigError {
    /// Get the failed stage without matching on the payload.
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            Self::Io(_) => ConfigErrorKind::Io,
            Self::EmptyFile => ConfigErrorKind::EmptyFile,
            Self::Filter(_) => ConfigErrorKind::Filter,
            Self::Parse(_) => ConfigErrorKind::Parse,
        }
    }
}
