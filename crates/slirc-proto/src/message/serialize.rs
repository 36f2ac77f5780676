//! Wire serialization for [`Message`].

use std::fmt::{self, Display, Formatter};

use crate::error::EncodeError;

use super::types::{Message, MAX_LINE_LEN, MAX_PARAMS};

/// A parameter that must be sent as the trailing (colon-marked) one.
#[inline]
fn needs_trailing(param: &str) -> bool {
    param.is_empty() || param.starts_with(':') || param.contains(' ')
}

impl Message {
    /// Serialize to a wire line, without the CRLF terminator.
    ///
    /// The final parameter, or the first one that could not survive as a
    /// middle parameter, is written as `:<rest joined by spaces>` and ends the
    /// line. Messages that would exceed [`MAX_LINE_LEN`] are refused rather
    /// than truncated.
    pub fn to_wire(&self) -> Result<String, EncodeError> {
        if self.command.is_empty() {
            return Err(EncodeError::NoCommand);
        }
        if self.params.len() > MAX_PARAMS {
            return Err(EncodeError::TooManyParams {
                count: self.params.len(),
                limit: MAX_PARAMS,
            });
        }

        let mut line = String::with_capacity(64);
        if let Some(prefix) = self.prefix.as_deref().filter(|p| !p.is_empty()) {
            line.push(':');
            line.push_str(prefix);
            line.push(' ');
        }
        line.push_str(&self.command);

        let last = self.params.len().saturating_sub(1);
        for (i, param) in self.params.iter().enumerate() {
            line.push(' ');
            if i == last || needs_trailing(param) {
                line.push(':');
                line.push_str(&self.params[i..].join(" "));
                break;
            }
            line.push_str(param);
        }

        if line.len() > MAX_LINE_LEN {
            return Err(EncodeError::TooLong {
                actual: line.len(),
                limit: MAX_LINE_LEN,
            });
        }
        Ok(line)
    }

    /// Whether the message can be put on the wire at all.
    pub fn is_sendable(&self) -> bool {
        self.to_wire().is_ok()
    }
}

/// Writes the wire form, or nothing at all for an unsendable message.
impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.to_wire() {
            Ok(line) => f.write_str(&line),
            Err(_) => Ok(()),
        }
    }
}
