//! Error types for adcplib.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`Error`] as the error type. Command-field assignment is deliberately
//! infallible (out-of-range values fall back to the field default), so the
//! variants here cover only structural failures: undecodable responses,
//! malformed serial numbers, and configuration operations that reference
//! hardware the instrument does not carry.

/// The error type for all adcplib operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A response from the instrument could not be decoded.
    ///
    /// Raised when a reply is structurally broken: a BREAK banner without
    /// its `SN:` or `FW:` line, a clock readback with no parsable
    /// timestamp, a firmware token of the wrong length. Garbage *rows*
    /// inside otherwise well-formed tables are skipped, not errored.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A serial number string failed validation.
    #[error("invalid serial number: {0}")]
    InvalidSerialNumber(String),

    /// A subsystem code has no backing slot in the instrument's serial number.
    #[error("subsystem not found in serial number: {0}")]
    SubsystemNotFound(char),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
