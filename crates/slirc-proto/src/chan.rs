//! Channel name validation.
//!
//! # Reference
//! - RFC 2812 Section 1.3: Channel names

use thiserror::Error;

/// Characters that may open a channel name.
pub const CHANNEL_PREFIXES: [char; 4] = ['#', '&', '+', '!'];

/// Why a string cannot be used as a channel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChannelNameError {
    /// Nothing to validate.
    #[error("channel name is empty")]
    Empty,
    /// The first character is not one of `#`, `&`, `+`, `!`.
    #[error("channel name must start with one of # & + !")]
    BadPrefix,
    /// Contains a space, comma or BEL.
    #[error("channel name contains forbidden character {0:?}")]
    Forbidden(char),
}

/// Extension trait for validating channel names.
pub trait ChannelExt {
    /// Check the name, reporting the first problem found.
    fn validate_channel(&self) -> Result<(), ChannelNameError>;

    /// Check if this string is a valid IRC channel name.
    fn is_channel_name(&self) -> bool {
        self.validate_channel().is_ok()
    }
}

impl ChannelExt for str {
    fn validate_channel(&self) -> Result<(), ChannelNameError> {
        let first = self.chars().next().ok_or(ChannelNameError::Empty)?;
        if !CHANNEL_PREFIXES.contains(&first) {
            return Err(ChannelNameError::BadPrefix);
        }
        match self.chars().find(|c| matches!(c, ' ' | ',' | '\x07')) {
            Some(c) => Err(ChannelNameError::Forbidden(c)),
            None => Ok(()),
        }
    }
}

impl ChannelExt for String {
    fn validate_channel(&self) -> Result<(), ChannelNameError> {
        self.as_str().validate_channel()
    }
}
