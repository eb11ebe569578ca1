use thiserror::Error;

/// Errors raised by the helper operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input text did not split into the expected numeric fields
    #[error("Invalid format '{input}': {reason}")]
    Format { input: String, reason: String },

    /// A zero divisor met a non-zero dividend
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Date or date-time text could not be parsed
    #[error("Invalid date '{input}'")]
    InvalidDate { input: String },

    /// Not an IANA time zone name
    #[error("Unknown time zone '{name}'")]
    InvalidTimezone { name: String },
}

impl Error {
    pub fn format(input: &str, reason: impl Into<String>) -> Self {
        Error::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Error::DivisionByZero(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
