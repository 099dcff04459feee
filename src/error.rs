use std::fmt;
use thiserror::Error;

/// The error type for PreferredPictures operations.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A choose request carried an empty choices list.
    NoChoicesSupplied,

    /// A choose request carried more choices than the configured maximum.
    TooManyChoices,

    /// Configuration error (missing identity or secret key, invalid values).
    ConfigInvalid,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

// Convenience constructors
impl Error {
    /// Create a no choices supplied error.
    pub fn no_choices_supplied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoChoicesSupplied, message)
    }

    /// Create a too many choices error.
    pub fn too_many_choices(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TooManyChoices, message)
    }

    /// Create a config invalid error.
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NoChoicesSupplied => write!(f, "no choices were supplied"),
            ErrorKind::TooManyChoices => write!(f, "too many choices were supplied"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;
