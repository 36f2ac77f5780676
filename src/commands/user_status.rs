//! AWAY.

use slirc_proto::Message;

use crate::client::Client;
use crate::error::Result;

impl Client {
    /// Mark ourselves away with a reason, or back with `None`.
    pub async fn away(&self, reason: Option<&str>) -> Result<()> {
        self.send(Message::new("AWAY", reason.filter(|r| !r.is_empty())))
            .await
    }
}
