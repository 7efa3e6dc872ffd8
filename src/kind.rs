//! Error kinds for wrapped operations

use std::fmt;

/// The kind of failure an [`Error`](crate::Error) describes.
///
/// Kinds are deliberately coarse: this crate wraps arbitrary caller
/// operations, so the taxonomy only needs to be precise enough for handlers
/// to match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// The requested feature or operation is not supported
    Unsupported,

    /// The operation was attempted in a state that does not allow it
    InvalidState,

    /// Invalid argument or input supplied to the operation
    InvalidInput,

    /// Something the operation needed was not found
    NotFound,

    /// The operation was interrupted before completing
    Interrupted,

    /// An underlying IO operation failed
    IoFailed,

    /// Failed to parse input
    ParseFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::Unsupported => "Unsupported",
            ErrorKind::InvalidState => "InvalidState",
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Interrupted => "Interrupted",
            ErrorKind::IoFailed => "IoFailed",
            ErrorKind::ParseFailed => "ParseFailed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_display() {
        let kinds = [
            ErrorKind::Unexpected,
            ErrorKind::Unsupported,
            ErrorKind::InvalidState,
            ErrorKind::InvalidInput,
            ErrorKind::NotFound,
            ErrorKind::Interrupted,
            ErrorKind::IoFailed,
            ErrorKind::ParseFailed,
        ];
        for kind in kinds {
            assert_eq!(kind.as_str(), format!("{}", kind));
        }
    }
}
