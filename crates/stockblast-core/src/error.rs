use std::fmt::{Display, Formatter};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Validation and configuration errors exposed by `stockblast-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("api base url cannot be empty")]
    EmptyBaseUrl,
    #[error("api base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("unknown filter field '{value}', expected one of symbol, name, industry")]
    InvalidFilterField { value: String },
    #[error("range index {index} exceeds the {available} available dates")]
    RangeOutOfBounds { index: usize, available: usize },
    #[error("unknown grid column '{column}'")]
    UnknownColumn { column: String },
    #[error("grid column '{column}' is not sortable")]
    ColumnNotSortable { column: String },
    #[error("row index {index} is out of range for {len} visible rows")]
    RowOutOfRange { index: usize, len: usize },

    #[error("the {expected} view is not mounted")]
    ViewNotMounted { expected: &'static str },

    #[error("timestamp must start with a YYYY-MM-DD date: '{value}'")]
    InvalidTimestamp { value: String },
}

/// Failure category for a remote fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request never completed.
    Transport,
    /// The server answered with a non-success status.
    HttpStatus,
    /// A success response whose body did not match the expected records.
    Decode,
}

impl FetchErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::HttpStatus => "http_status",
            Self::Decode => "decode",
        }
    }
}

/// Error raised by a listings or history fetch.
///
/// Every failure is terminal for its fetch attempt; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    status: Option<u16>,
    message: Option<String>,
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            status: None,
            message: Some(message.into()),
        }
    }

    pub fn http_status(status: u16, message: Option<String>) -> Self {
        Self {
            kind: FetchErrorKind::HttpStatus,
            status: Some(status),
            message: message.filter(|m| !m.is_empty()),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            status: None,
            message: Some(message.into()),
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Server-supplied message, falling back to the numeric status code.
    pub fn identifier(&self) -> String {
        match (&self.message, self.status) {
            (Some(message), _) => message.clone(),
            (None, Some(status)) => status.to_string(),
            (None, None) => String::from(self.kind.as_str()),
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {}", self.kind.as_str(), self.identifier())
    }
}

impl std::error::Error for FetchError {}

impl Serialize for FetchError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("FetchError", 3)?;
        state.serialize_field("kind", self.kind().as_str())?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("message", &self.identifier())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_without_message_identifies_by_code() {
        let error = FetchError::http_status(500, None);
        assert_eq!(error.identifier(), "500");
        assert_eq!(error.kind(), FetchErrorKind::HttpStatus);
    }

    #[test]
    fn empty_server_message_falls_back_to_code() {
        let error = FetchError::http_status(502, Some(String::new()));
        assert_eq!(error.identifier(), "502");
        assert_eq!(error.message(), None);
    }

    #[test]
    fn display_carries_kind_and_identifier() {
        let error = FetchError::http_status(404, Some(String::from("not found")));
        assert_eq!(error.to_string(), "http_status error: not found");
    }
}
