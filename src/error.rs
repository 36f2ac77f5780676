//! Unified error handling for the client engine.
//!
//! Every failed operation reports one [`ClientError`]. The variants fall
//! into four families: local validation (nothing was sent), registry
//! refusals (nothing was sent), server error replies, and timeouts.

use slirc_proto::{ChannelNameError, EncodeError, MessageParseError, Response};
use thiserror::Error;

use crate::registry::RegistryError;

/// Result alias used by every client operation.
pub type Result<T, E = ClientError> = std::result::Result<T, E>;

// ============================================================================
// Client Errors
// ============================================================================

/// Errors that can occur while running a client operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    #[error("empty nicknames are not accepted")]
    EmptyNickname,

    #[error("username must not be empty")]
    EmptyUsername,

    #[error("invalid channel name {name:?}: {reason}")]
    InvalidChannel {
        name: String,
        #[source]
        reason: ChannelNameError,
    },

    #[error("no channels given")]
    NoChannels,

    #[error("no targets given")]
    NoTargets,

    #[error("too many targets: {count} (limit: {limit})")]
    TooManyTargets { count: usize, limit: usize },

    #[error("message cannot be sent: {0}")]
    Unencodable(#[from] EncodeError),

    #[error("raw line rejected: {0}")]
    Parse(#[from] MessageParseError),

    #[error("realname can only be changed before registration")]
    AlreadyRegistered,

    #[error("reply listener refused: {0}")]
    Registry(#[from] RegistryError),

    /// The server answered with an error numeric.
    #[error("server replied {}", .0.name())]
    Reply(Response),

    /// WHOIS targets the server does not know.
    #[error("no such nick: {}", .0.join(", "))]
    NoSuchNick(Vec<String>),

    #[error("no reply to {command} before the deadline")]
    Timeout { command: &'static str },

    #[error("no acceptable nickname after {attempts} attempts")]
    NickExhausted { attempts: usize },

    #[error("outbound queue closed")]
    QueueClosed,

    /// The registry dropped the reply sink while the call was waiting.
    #[error("reply sink closed")]
    SinkClosed,
}

impl ClientError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyNickname => "empty_nickname",
            Self::EmptyUsername => "empty_username",
            Self::InvalidChannel { .. } => "invalid_channel",
            Self::NoChannels => "no_channels",
            Self::NoTargets => "no_targets",
            Self::TooManyTargets { .. } => "too_many_targets",
            Self::Unencodable(_) => "unencodable",
            Self::Parse(_) => "parse_error",
            Self::AlreadyRegistered => "already_registered",
            Self::Registry(_) => "registry_error",
            Self::Reply(_) => "error_reply",
            Self::NoSuchNick(_) => "no_such_nick",
            Self::Timeout { .. } => "timeout",
            Self::NickExhausted { .. } => "nick_exhausted",
            Self::QueueClosed => "queue_closed",
            Self::SinkClosed => "sink_closed",
        }
    }

    /// The error numeric behind this failure, if the server sent one.
    pub fn reply(&self) -> Option<Response> {
        match self {
            Self::Reply(r) => Some(*r),
            _ => None,
        }
    }

    /// Whether the failure was detected before anything reached the queue.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::EmptyNickname
                | Self::EmptyUsername
                | Self::InvalidChannel { .. }
                | Self::NoChannels
                | Self::NoTargets
                | Self::TooManyTargets { .. }
                | Self::Unencodable(_)
                | Self::Parse(_)
                | Self::AlreadyRegistered
                | Self::Registry(_)
        )
    }
}
