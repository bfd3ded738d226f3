//! Dispatch outcomes and handler reports.

use std::fmt;

use super::record::ArgumentError;

/// Message severity, ordered from least to most serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Notice,
    Warn,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Notice => "NOTE",
            Severity::Warn => "WARN",
            Severity::Error => "ERR ",
        }
    }
}

/// A message with a severity, produced by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    pub message: String,
}

impl Report {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ] {}", self.severity.label(), self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure(Report),
    /// No registered command matched the input.
    Usage,
}

/// Result of one dispatch.
///
/// `skip_history` is set by handlers that want the caller not to record the
/// input line, e.g. after the user declined a confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    pub skip_history: bool,
}

impl Outcome {
    pub fn success() -> Self {
        Self {
            status: Status::Success,
            skip_history: false,
        }
    }

    pub fn failure(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            status: Status::Failure(Report::new(severity, message)),
            skip_history: false,
        }
    }

    pub fn usage() -> Self {
        Self {
            status: Status::Usage,
            skip_history: false,
        }
    }

    pub fn skip_history(mut self) -> Self {
        self.skip_history = true;
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn is_usage(&self) -> bool {
        self.status == Status::Usage
    }

    pub fn exit_code(&self) -> u8 {
        match self.status {
            Status::Success => 0,
            Status::Failure(_) => 1,
            Status::Usage => 2,
        }
    }
}

/// A handler that could not read its arguments failed with an error.
impl From<ArgumentError> for Outcome {
    fn from(err: ArgumentError) -> Self {
        Outcome::failure(Severity::Error, err.to_string())
    }
}
