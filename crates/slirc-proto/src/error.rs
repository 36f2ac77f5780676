//! Error types for the IRC protocol library.
//!
//! This module defines error types for protocol-level (codec) errors,
//! message parsing failures, and message encoding failures.

use thiserror::Error;

use crate::message::Message;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors raised by the line and message codecs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Line exceeded maximum allowed length.
    #[error("message too long: {actual} bytes (limit: {limit})")]
    MessageTooLong {
        /// Actual line length.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },

    /// Illegal control character in message.
    #[error("illegal control character: {0:?}")]
    IllegalControlChar(char),

    /// Outgoing message could not be serialized.
    #[error("unencodable message: {0}")]
    Encode(#[from] EncodeError),
}

/// What went wrong while parsing a raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The line was empty.
    EmptyMessage,
    /// The line starts with `:` but the prefix is never terminated by a space.
    MalformedPrefix,
    /// No space follows the command token, or nothing follows the prefix.
    MissingCommand,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "empty message"),
            Self::MalformedPrefix => write!(f, "malformed prefix"),
            Self::MissingCommand => write!(f, "no command found"),
        }
    }
}

/// Error returned by the permissive parser.
///
/// Decoding is best-effort: whatever could be recovered from the line is kept
/// in the error so callers can still inspect it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct MessageParseError {
    kind: ParseErrorKind,
    partial: Message,
}

impl MessageParseError {
    pub(crate) fn new(kind: ParseErrorKind, partial: Message) -> Self {
        Self { kind, partial }
    }

    /// The failure category.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The best-effort message built before the failure was detected.
    pub fn partial(&self) -> &Message {
        &self.partial
    }

    /// Consume the error, keeping the best-effort message.
    pub fn into_partial(self) -> Message {
        self.partial
    }
}

/// Reasons a [`Message`] cannot be put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// The command is empty.
    #[error("message has no command")]
    NoCommand,

    /// More parameters than the protocol permits.
    #[error("too many parameters: {count} (limit: {limit})")]
    TooManyParams {
        /// Number of parameters in the message.
        count: usize,
        /// Protocol limit.
        limit: usize,
    },

    /// Serialized form is longer than the protocol permits.
    #[error("message too long: {actual} bytes (limit: {limit})")]
    TooLong {
        /// Serialized length without the line terminator.
        actual: usize,
        /// Protocol limit.
        limit: usize,
    },
}
