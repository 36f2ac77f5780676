//! Line-based codec for tokio.
//!
//! Splits an inbound byte stream on `\n`, strips the line terminator and
//! decodes UTF-8. Outbound lines get a CRLF appended.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::error::{ProtocolError, Result};
use crate::message::MAX_LINE_LEN;

/// Line-based codec that handles newline-terminated messages.
///
/// By default, lines are limited to 512 bytes including the terminator.
#[derive(Debug)]
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    max_len: usize,
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::with_max_len(MAX_LINE_LEN + 2)
    }
}

impl LineCodec {
    /// Create a codec with the standard 512-byte limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with a custom inbound line limit, terminator included.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }

    fn reject_control(s: &str) -> Result<()> {
        match s.chars().find(|&c| c == '\r' || c == '\n' || c == '\0') {
            Some(c) => Err(ProtocolError::IllegalControlChar(c)),
            None => Ok(()),
        }
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
            self.next_index = src.len();
            if src.len() > self.max_len {
                return Err(ProtocolError::MessageTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }
            return Ok(None);
        };

        let line = src.split_to(self.next_index + offset + 1);
        self.next_index = 0;

        if line.len() > self.max_len {
            return Err(ProtocolError::MessageTooLong {
                actual: line.len(),
                limit: self.max_len,
            });
        }

        let mut data = String::from_utf8(line.to_vec())?;
        let trimmed = data.trim_end_matches(['\r', '\n']).len();
        data.truncate(trimmed);
        Self::reject_control(&data)?;
        Ok(Some(data))
    }
}

impl Encoder<String> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<()> {
        Self::reject_control(&line)?;
        dst.reserve(line.len() + 2);
        dst.extend_from_slice(line.as_bytes());
        dst.extend_from_slice(b"\r\n");
        Ok(())
    }
}
