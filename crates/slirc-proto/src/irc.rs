//! IRC message codec for tokio.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::error::{ParseErrorKind, ProtocolError, Result};
use crate::line::LineCodec;
use crate::message::Message;

/// Tokio codec for encoding/decoding IRC messages.
///
/// Wraps [`LineCodec`] and parses lines into [`Message`] values. Blank and
/// unparseable lines are skipped with a warning. A bare command with no
/// parameters (`:nick!u@h AWAY`) is delivered as its partial message.
#[derive(Debug, Default)]
pub struct IrcCodec {
    inner: LineCodec,
}

impl IrcCodec {
    /// Create a codec with the standard line limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with a custom inbound line limit.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            inner: LineCodec::with_max_len(max_len),
        }
    }
}

impl Decoder for IrcCodec {
    type Item = Message;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Message>> {
        loop {
            let Some(line) = self.inner.decode(src)? else {
                return Ok(None);
            };
            if line.is_empty() {
                continue;
            }
            match Message::parse(&line) {
                Ok(msg) => return Ok(Some(msg)),
                Err(error)
                    if error.kind() == ParseErrorKind::MissingCommand
                        && !error.partial().command.is_empty() =>
                {
                    return Ok(Some(error.into_partial()));
                }
                Err(error) => tracing::warn!(%line, %error, "dropping malformed line"),
            }
        }
    }
}

impl Encoder<Message> for IrcCodec {
    type Error = ProtocolError;

    fn encode(&mut self, msg: Message, dst: &mut BytesMut) -> Result<()> {
        let line = msg.to_wire()?;
        self.inner.encode(line, dst)
    }
}
