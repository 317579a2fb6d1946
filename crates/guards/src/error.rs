use std::fmt;

use thiserror::Error;

/// Identifies which check failed.
///
/// Callers should branch on the kind, not on the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidBase32UrlData,
    InvalidBase36UrlData,
    InvalidBase62String,
    InvalidBase64UrlData,
}

impl ErrorKind {
    /// Stable identifier, independent of the human-readable description.
    pub const fn id(self) -> &'static str {
        match self {
            ErrorKind::InvalidBase32UrlData => "invalid-base32url",
            ErrorKind::InvalidBase36UrlData => "invalid-base36url",
            ErrorKind::InvalidBase62String => "invalid-base62",
            ErrorKind::InvalidBase64UrlData => "invalid-base64url",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ErrorKind::InvalidBase32UrlData => "input is not valid base32url",
            ErrorKind::InvalidBase36UrlData => "input is not valid base36url",
            ErrorKind::InvalidBase62String => "input is not valid base62",
            ErrorKind::InvalidBase64UrlData => "input is not valid base64url",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A string failed one of the charset checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {invalid_string:?}")]
pub struct ValidationError {
    kind: ErrorKind,
    invalid_string: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, invalid_string: impl Into<String>) -> Self {
        Self {
            kind,
            invalid_string: invalid_string.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The rejected input.
    pub fn invalid_string(&self) -> &str {
        &self.invalid_string
    }
}

/// Default error handler: fails immediately with a [`ValidationError`].
pub fn raise(kind: ErrorKind, _description: &'static str, input: &str) -> Result<(), ValidationError> {
    Err(ValidationError::new(kind, input))
}
