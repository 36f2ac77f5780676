//! Transport pump between a byte stream and the client.
//!
//! The caller owns the connection (TCP, TLS, a test duplex...); [`drive`]
//! only moves messages. Outbound messages are written in queue order and
//! every inbound message is handed to the [`Dispatcher`] in wire order.

use futures_util::{SinkExt, StreamExt};
use slirc_proto::{IrcCodec, Message, ProtocolError};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::codec::Framed;
use tracing::{Instrument, debug, info};

use crate::registry::Dispatcher;
use crate::telemetry::spans;

/// Pump options.
#[derive(Debug, Clone, Copy)]
pub struct DriveOptions {
    /// Answer server PINGs with PONG before dispatching them.
    pub auto_pong: bool,
}

impl Default for DriveOptions {
    fn default() -> Self {
        Self { auto_pong: true }
    }
}

/// Run until the stream ends, the outbound queue closes, or I/O fails.
///
/// When the queue closes the stream is flushed and closed. Closing the
/// stream from the other side returns `Ok(())`.
pub async fn drive<S>(
    stream: S,
    mut outbound: mpsc::Receiver<Message>,
    dispatcher: &Dispatcher,
    options: DriveOptions,
) -> Result<(), ProtocolError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pump(Framed::new(stream, IrcCodec::new()), &mut outbound, dispatcher, options)
        .instrument(spans::transport())
        .await
}

async fn pump<S>(
    mut framed: Framed<S, IrcCodec>,
    outbound: &mut mpsc::Receiver<Message>,
    dispatcher: &Dispatcher,
    options: DriveOptions,
) -> Result<(), ProtocolError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    loop {
        tokio::select! {
            queued = outbound.recv() => match queued {
                Some(msg) => framed.send(msg).await?,
                None => {
                    debug!("outbound queue closed");
                    framed.close().await?;
                    return Ok(());
                }
            },
            inbound = framed.next() => match inbound {
                Some(Ok(msg)) => {
                    if options.auto_pong && msg.command.eq_ignore_ascii_case("PING") {
                        let token = msg.trailing().unwrap_or_default().to_string();
                        framed.send(Message::pong(token)).await?;
                    }
                    let delivered = dispatcher.dispatch(&msg);
                    debug!(command = %msg.command, delivered, "inbound");
                }
                Some(Err(e)) => return Err(e),
                None => {
                    info!("connection closed by peer");
                    return Ok(());
                }
            },
        }
    }
}
