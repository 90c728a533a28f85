//! Error types for the MIDI message codec.

use thiserror::Error;

/// Why a single message field was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("missing")]
    Missing,

    #[error("not an integer")]
    NotInteger,

    #[error("not a string")]
    NotString,

    #[error("not an array")]
    NotArray,

    /// A byte with the high bit set where a 7-bit data byte was expected.
    #[error("{0:#04X} is not a data byte")]
    NotDataByte(u8),

    #[error("{value} is out of range 0..={max}")]
    OutOfRange { value: i64, max: u16 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported message type: {0}")]
    UnsupportedMessageType(String),

    #[error("Invalid field `{field}` in {message} message: {reason}")]
    InvalidField {
        message: &'static str,
        field: &'static str,
        reason: FieldError,
    },

    #[error("Sysex data contains framing byte {byte:#04X} at index {index}")]
    InvalidSysexFraming { byte: u8, index: usize },

    #[error("Unrecognized status byte: {0:#04X}")]
    UnrecognizedStatusByte(u8),

    #[error("Truncated {message} message: expected {expected} bytes, got {actual}")]
    TruncatedMessage {
        message: &'static str,
        expected: usize,
        actual: usize,
    },

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    pub(crate) fn invalid(message: &'static str, field: &'static str, reason: FieldError) -> Self {
        Error::InvalidField {
            message,
            field,
            reason,
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_display() {
        let err = Error::invalid(
            "noteOn",
            "velocity",
            FieldError::OutOfRange {
                value: 200,
                max: 127,
            },
        );
        insta::assert_snapshot!(
            err.to_string(),
            @"Invalid field `velocity` in noteOn message: 200 is out of range 0..=127"
        );
    }

    #[test]
    fn test_framing_display() {
        let err = Error::InvalidSysexFraming {
            byte: 0xF7,
            index: 7,
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"Sysex data contains framing byte 0xF7 at index 7"
        );
    }

    #[test]
    fn test_non_string_type_display() {
        insta::assert_snapshot!(
            Error::invalid("untyped", "type", FieldError::NotString).to_string(),
            @"Invalid field `type` in untyped message: not a string"
        );
    }

    #[test]
    fn test_status_byte_display() {
        insta::assert_snapshot!(
            Error::UnrecognizedStatusByte(0xF4).to_string(),
            @"Unrecognized status byte: 0xF4"
        );
    }
}
