//! Error types for confreg.

use std::fmt;

use thiserror::Error;

use crate::format::Format;

/// A config type's factory failed to produce an instance.
#[derive(Debug)]
pub struct InstantiationError {
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl InstantiationError {
    pub fn new(message: impl Into<String>) -> Self {
        InstantiationError {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        InstantiationError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InstantiationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", self.message, source),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for InstantiationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.source {
            Some(e) => Some(e.as_ref()),
            None => None,
        }
    }
}

/// Errors raised while resolving, loading or saving configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The type's factory failed.
    #[error("cannot instantiate {type_name}: {source}")]
    Instantiation {
        type_name: &'static str,
        #[source]
        source: InstantiationError,
    },

    /// A capability the operation needs was never installed.
    #[error("missing capability: {capability}")]
    MissingCapability { capability: &'static str },

    /// Reading or writing a file failed.
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// No file exists at the path (in-memory file sets).
    #[error("no such file: {path}")]
    NotFound { path: String },

    /// Persisted text could not be turned into a value.
    #[error("decode error ({format}): {message}")]
    Decode { format: Format, message: String },

    /// A value could not be turned into persisted text.
    #[error("encode error ({format}): {message}")]
    Encode { format: Format, message: String },

    /// The type declares a format the registry cannot load or save.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(Format),
}

impl Error {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(format: Format, message: impl fmt::Display) -> Self {
        Error::Decode {
            format,
            message: message.to_string(),
        }
    }

    pub fn encode(format: Format, message: impl fmt::Display) -> Self {
        Error::Encode {
            format,
            message: message.to_string(),
        }
    }
}

/// Result type alias for confreg operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn instantiation_display_includes_type_and_cause() {
        let e = Error::Instantiation {
            type_name: "app::Prefs",
            source: InstantiationError::new("no default volume"),
        };
        let display = e.to_string();
        assert!(display.contains("app::Prefs"));
        assert!(display.contains("no default volume"));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn instantiation_error_chains_source() {
        let io = std::io::Error::other("disk on fire");
        let e = InstantiationError::with_source("factory failed", io);
        assert_eq!(e.message(), "factory failed");
        assert!(e.to_string().contains("disk on fire"));
        assert!(StdError::source(&e).is_some());
        assert!(StdError::source(&InstantiationError::new("x")).is_none());
    }

    #[test]
    fn decode_error_display() {
        let e = Error::decode(Format::JSON, "unexpected token");
        let display = e.to_string();
        assert!(display.contains("decode error"));
        assert!(display.contains("application/json"));
        assert!(display.contains("unexpected token"));
    }

    #[test]
    fn io_error_display() {
        let e = Error::io(
            "/etc/app.conf",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(e.to_string().contains("/etc/app.conf"));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn missing_capability_display() {
        let e = Error::MissingCapability {
            capability: "format codec",
        };
        assert_eq!(e.to_string(), "missing capability: format codec");
    }
}
