//! Error types for serdeio operations
//!
//! Every failure coming out of a format library is annotated with the phase it
//! happened in while the original cause stays reachable through
//! [`std::error::Error::source`].

use crate::Format;
use thiserror::Error;

/// Boxed underlying cause
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for serdeio operations
pub type SerdeResult<T> = Result<T, SerdeError>;

/// Error type for encode/decode operations
#[derive(Error, Debug)]
pub enum SerdeError {
    /// The file or stream could not be opened, created or read before any parsing
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The payload could not be written in the target format
    #[error("at serializing {format}: {source}")]
    Serialization {
        format: Format,
        #[source]
        source: BoxError,
    },

    /// The bytes were read but do not parse into the requested shape
    #[error("at deserializing {format}: {source}")]
    Deserialization {
        format: Format,
        #[source]
        source: BoxError,
    },
}

/// Broad category of a [`SerdeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Serialization,
    Deserialization,
}

/// Phase label attached to format-library failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Serializing,
    Deserializing,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Serializing => write!(f, "serializing"),
            Phase::Deserializing => write!(f, "deserializing"),
        }
    }
}

impl SerdeError {
    /// Wrap a failure raised while encoding a payload
    pub fn serializing(format: Format, err: impl Into<BoxError>) -> Self {
        SerdeError::Serialization {
            format,
            source: err.into(),
        }
    }

    /// Wrap a failure raised while decoding a payload
    pub fn deserializing(format: Format, err: impl Into<BoxError>) -> Self {
        SerdeError::Deserialization {
            format,
            source: err.into(),
        }
    }

    /// Wrap an OS-level failure that happened before any parsing
    pub fn io(context: &'static str, err: std::io::Error) -> Self {
        SerdeError::Io {
            context,
            source: err,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SerdeError::Io { .. } => ErrorKind::Io,
            SerdeError::Serialization { .. } => ErrorKind::Serialization,
            SerdeError::Deserialization { .. } => ErrorKind::Deserialization,
        }
    }

    /// The phase label, `None` for IO failures
    pub fn phase(&self) -> Option<Phase> {
        match self {
            SerdeError::Io { .. } => None,
            SerdeError::Serialization { .. } => Some(Phase::Serializing),
            SerdeError::Deserialization { .. } => Some(Phase::Deserializing),
        }
    }

    /// The wire format involved, `None` for IO failures
    pub fn format(&self) -> Option<Format> {
        match self {
            SerdeError::Io { .. } => None,
            SerdeError::Serialization { format, .. }
            | SerdeError::Deserialization { format, .. } => Some(*format),
        }
    }

    pub fn is_io(&self) -> bool {
        self.kind() == ErrorKind::Io
    }

    pub fn is_serialization(&self) -> bool {
        self.kind() == ErrorKind::Serialization
    }

    pub fn is_deserialization(&self) -> bool {
        self.kind() == ErrorKind::Deserialization
    }

    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            SerdeError::Io { .. } => 1,
            SerdeError::Serialization { .. } => 2,
            SerdeError::Deserialization { .. } => 3,
        }
    }

    /// Borrow the underlying cause as a concrete error type
    ///
    /// ```ignore
    /// if let Some(json) = err.cause_as::<serde_json::Error>() {
    ///     eprintln!("line {}", json.line());
    /// }
    /// ```
    pub fn cause_as<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            SerdeError::Io { source, .. } => (source as &(dyn std::error::Error + 'static))
                .downcast_ref::<E>(),
            SerdeError::Serialization { source, .. }
            | SerdeError::Deserialization { source, .. } => source.downcast_ref::<E>(),
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
