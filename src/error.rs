//! Crate-level error types.

use std::fmt;

/// Errors produced by the bodymap crate.
///
/// Gesture and frame handling never produce these; they report readiness
/// through [`EventStatus`](crate::controller::EventStatus) instead. Errors
/// only come from the file-backed edges: options, pose stores and replay
/// scripts.
#[derive(Debug)]
pub enum BodymapError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Persisted pose store could not be parsed or serialized.
    StoreParse(String),
    /// Replay script was malformed.
    Script(String),
}

impl fmt::Display for BodymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::StoreParse(msg) => {
                write!(f, "pose store error: {msg}")
            }
            Self::Script(msg) => write!(f, "replay script error: {msg}"),
        }
    }
}

impl std::error::Error for BodymapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BodymapError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_keep_their_source() {
        let err = BodymapError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "I/O error: missing");
    }

    #[test]
    fn test_parse_errors_have_no_source() {
        let err = BodymapError::OptionsParse("bad key".to_owned());
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(err.to_string(), "options parse error: bad key");
    }
}
