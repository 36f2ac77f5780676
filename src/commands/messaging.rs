//! PRIVMSG, NOTICE and raw lines.

use slirc_proto::{Message, Response};

use crate::client::Client;
use crate::correlation::{Exchange, Verdict, Watch};
use crate::error::{ClientError, Result};

/// A delivered message usually draws no reply at all, so silence is
/// success. Away notices are informational.
struct Delivery;

impl Exchange for Delivery {
    type Output = ();
    const COMMAND: &'static str = "PRIVMSG";
    const WATCH: &'static [Watch] = &[
        Watch::Reply(Response::ERR_NORECIPIENT),
        Watch::Reply(Response::ERR_NOTEXTTOSEND),
        Watch::Reply(Response::ERR_CANNOTSENDTOCHAN),
        Watch::Reply(Response::ERR_NOTOPLEVEL),
        Watch::Reply(Response::ERR_WILDTOPLEVEL),
        Watch::Reply(Response::ERR_TOOMANYTARGETS),
        Watch::Reply(Response::ERR_NOSUCHNICK),
        Watch::Reply(Response::RPL_AWAY),
    ];

    fn on_reply(&mut self, msg: &Message) -> Verdict<()> {
        Verdict::from_error_reply(msg)
    }

    fn on_timeout(self) -> Result<()> {
        Ok(())
    }
}

impl Client {
    /// Send a message to one or more targets and wait for complaints.
    pub async fn privmsg(&self, targets: &[&str], text: &str) -> Result<()> {
        if targets.is_empty() {
            return Err(ClientError::NoTargets);
        }
        self.exchange(Message::privmsg(targets.join(","), text), Delivery)
            .await
    }

    pub async fn notice(&self, target: &str, text: &str) -> Result<()> {
        self.send(Message::notice(target, text)).await
    }

    /// Parse a raw protocol line and queue it as-is.
    pub async fn send_raw(&self, line: &str) -> Result<()> {
        let msg = Message::parse(line)?;
        self.send(msg).await
    }
}
