//! MODE with a local letter check.

use slirc_proto::{Message, classify_modes as classify};
use tracing::debug;

use crate::client::Client;
use crate::error::Result;

impl Client {
    /// Send MODE unless the mode string mixes channel and user letters.
    ///
    /// A mixed or unknown mode string is dropped without an error; nothing
    /// is queued. Empty parameters are omitted.
    pub async fn mode(&self, target: &str, modes: &str, params: &[&str]) -> Result<()> {
        if !classify(modes).is_sendable() {
            // TODO: surface this as an error once callers can handle it.
            debug!(%target, %modes, "dropping MODE with mixed or unknown letters");
            return Ok(());
        }
        let params = [target, modes]
            .into_iter()
            .chain(params.iter().copied().filter(|p| !p.is_empty()));
        self.send(Message::new("MODE", params)).await
    }
}
