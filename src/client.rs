//! The client handle.
//!
//! [`Client`] is cheap to clone; every clone shares the same session,
//! registry, and outbound queue. Operations live in [`crate::commands`].

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use slirc_proto::Message;
use tokio::sync::mpsc;
use tracing::trace;

use crate::config::{ClientConfig, LimitsConfig};
use crate::correlation::TimeoutPolicy;
use crate::error::{ClientError, Result};
use crate::registry::{Dispatcher, ReplyRegistry, Tag};
use crate::session::Session;

struct Inner {
    registry: Arc<dyn ReplyRegistry>,
    outbound: mpsc::Sender<Message>,
    session: Session,
    policy: TimeoutPolicy,
    limits: LimitsConfig,
    tags: AtomicU64,
}

/// Handle for issuing IRC operations.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

impl Client {
    /// Build a client over an externally owned registry and outbound queue.
    pub fn new(
        config: &ClientConfig,
        registry: Arc<dyn ReplyRegistry>,
        outbound: mpsc::Sender<Message>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                registry,
                outbound,
                session: Session::new(&config.identity, &config.timeouts),
                policy: TimeoutPolicy::from(&config.timeouts),
                limits: config.limits.clone(),
                tags: AtomicU64::new(1),
            }),
        }
    }

    /// Build a client wired to a fresh [`Dispatcher`].
    ///
    /// Returns the dispatcher to feed inbound messages into and the receiving
    /// end of the outbound queue, ready for [`crate::transport::drive`].
    pub fn in_process(config: &ClientConfig) -> (Self, Arc<Dispatcher>, mpsc::Receiver<Message>) {
        let dispatcher = Arc::new(Dispatcher::new());
        let (tx, rx) = mpsc::channel(config.limits.queue_capacity.max(1));
        let registry: Arc<dyn ReplyRegistry> = dispatcher.clone();
        (Self::new(config, registry, tx), dispatcher, rx)
    }

    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    pub(crate) fn registry(&self) -> &dyn ReplyRegistry {
        self.inner.registry.as_ref()
    }

    pub(crate) fn policy(&self) -> &TimeoutPolicy {
        &self.inner.policy
    }

    pub(crate) fn limits(&self) -> &LimitsConfig {
        &self.inner.limits
    }

    pub(crate) fn next_tag(&self) -> Tag {
        Tag::new(self.inner.tags.fetch_add(1, Ordering::Relaxed))
    }

    /// Queue a message after checking it can be serialized.
    pub(crate) async fn send(&self, msg: Message) -> Result<()> {
        msg.to_wire()?;
        trace!(command = %msg.command, "queueing");
        self.inner
            .outbound
            .send(msg)
            .await
            .map_err(|_| ClientError::QueueClosed)
    }

    // ------------------------------------------------------------------
    // Session accessors
    // ------------------------------------------------------------------

    pub fn nickname(&self) -> String {
        self.session().nickname()
    }

    pub fn username(&self) -> String {
        self.session().username()
    }

    pub fn realname(&self) -> String {
        self.session().realname()
    }

    pub fn network(&self) -> String {
        self.session().network()
    }

    pub fn port(&self) -> u16 {
        self.session().port()
    }

    pub fn version(&self) -> String {
        self.session().version()
    }

    pub fn lag(&self) -> std::time::Duration {
        self.session().lag()
    }

    /// Set the password sent by [`Client::register`]. Empty clears it.
    pub fn set_password(&self, password: &str) {
        let password = (!password.is_empty()).then(|| password.to_string());
        self.session().set_password(password);
    }

    /// Change the realname used by the next USER command.
    ///
    /// Fails once registration has completed; servers do not accept a new
    /// USER afterwards.
    pub fn set_realname(&self, realname: &str) -> Result<()> {
        if self.session().set_realname(realname.to_string()) {
            Ok(())
        } else {
            Err(ClientError::AlreadyRegistered)
        }
    }

    /// Record a new network name. Reconnecting is up to the transport owner.
    pub fn set_network(&self, network: &str) {
        self.session().set_network(network.to_string());
    }

    /// Record a new port. Reconnecting is up to the transport owner.
    pub fn set_port(&self, port: u16) {
        self.session().set_port(port);
    }

    pub fn set_version(&self, version: &str) {
        self.session().set_version(version.to_string());
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("session", &self.inner.session)
            .field("policy", &self.inner.policy)
            .finish_non_exhaustive()
    }
}
