//! Errors produced while reading or writing properties

use std::io;

/// Errors from loading, parsing or saving a properties store
#[derive(Debug, thiserror::Error)]
pub enum PropertiesError {
    /// I/O error from the underlying file or stream
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A non-blank, non-comment line without a `=` separator
    #[error("malformed line {line}: missing '=' in {content:?}")]
    MalformedLine { line: usize, content: String },
}

impl PropertiesError {
    /// The kind of the wrapped I/O error, if this is one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            PropertiesError::Io(e) => Some(e.kind()),
            PropertiesError::MalformedLine { .. } => None,
        }
    }
}

/// Result alias for properties operations
pub type Result<T> = std::result::Result<T, PropertiesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_carried_verbatim() {
        let err: PropertiesError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
        assert_eq!(err.to_string(), "I/O error: denied");
    }

    #[test]
    fn test_malformed_line_display() {
        let err = PropertiesError::MalformedLine {
            line: 3,
            content: "novalueline".to_string(),
        };
        assert_eq!(err.io_kind(), None);
        assert_eq!(
            err.to_string(),
            "malformed line 3: missing '=' in \"novalueline\""
        );
    }
}
