use std::fmt;

use reqwest::StatusCode;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FetchErrorKind {
    Transport(String),
    Status(StatusCode),
    Decode(String),
}

/// A failed round trip to the MarketPulse API.
#[derive(Clone, Debug)]
pub struct FetchError {
    pub operation: String,
    pub kind: FetchErrorKind,
}

impl FetchError {
    pub fn new(operation: &str, kind: FetchErrorKind) -> Self {
        Self {
            operation: operation.to_string(),
            kind,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self.kind {
            FetchErrorKind::Status(status) => Some(status),
            _ => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FetchErrorKind::Transport(detail) => write!(f, "{}: {}", self.operation, detail),
            FetchErrorKind::Status(status) => {
                write!(f, "{}: request failed with status {}", self.operation, status)
            }
            FetchErrorKind::Decode(detail) => {
                write!(f, "{}: unexpected response ({})", self.operation, detail)
            }
        }
    }
}

impl std::error::Error for FetchError {}
