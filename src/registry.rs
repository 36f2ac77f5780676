//! Reply registry: routes inbound messages to in-flight operations.
//!
//! Operations subscribe a sink under a [`ReplyKey`], which pairs the reply
//! code (a numeric like `433` or a command word like `JOIN`) with the
//! operation's [`Tag`]. Two operations waiting on the same code never see
//! each other's subscriptions because their tags differ, but both receive
//! every matching message.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use slirc_proto::{Message, Response};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::trace;

/// Sink that receives every message matching a subscription.
pub type ReplySink = mpsc::UnboundedSender<Message>;

/// Per-call correlation tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(u64);

impl Tag {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Subscription key: reply code plus correlation tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplyKey {
    code: String,
    tag: Tag,
}

impl ReplyKey {
    /// Command words are matched case-insensitively, so they are stored
    /// uppercased.
    pub fn new(code: impl Into<String>, tag: Tag) -> Self {
        let mut code = code.into();
        code.make_ascii_uppercase();
        Self { code, tag }
    }

    pub fn reply(response: Response, tag: Tag) -> Self {
        Self {
            code: response.wire_code(),
            tag,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }
}

impl fmt::Display for ReplyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.code, self.tag)
    }
}

/// Reasons a registry refuses a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("listener already registered for {0}")]
    Duplicate(ReplyKey),
    #[error("registry is closed")]
    Closed,
}

/// Registry of reply subscriptions.
///
/// Once [`register`](Self::register) succeeds, every inbound message whose
/// command matches the key's code must reach the sink, in wire order, until
/// [`unregister`](Self::unregister) is called.
pub trait ReplyRegistry: Send + Sync {
    fn register(&self, key: ReplyKey, sink: ReplySink) -> Result<(), RegistryError>;

    /// Removing an unknown key is a no-op.
    fn unregister(&self, key: &ReplyKey);
}

/// In-process [`ReplyRegistry`] fed by a transport.
#[derive(Debug, Default)]
pub struct Dispatcher {
    routes: DashMap<String, HashMap<Tag, ReplySink>>,
    closed: AtomicBool,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `msg` to every sink subscribed to its command.
    ///
    /// Returns the number of sinks that accepted it. Must be called from a
    /// single reader in wire order for delivery order to hold.
    pub fn dispatch(&self, msg: &Message) -> usize {
        let code = msg.command.to_ascii_uppercase();
        let Some(sinks) = self.routes.get(&code) else {
            return 0;
        };
        let delivered = sinks
            .values()
            .filter(|sink| sink.send(msg.clone()).is_ok())
            .count();
        trace!(command = %code, delivered, "dispatched");
        delivered
    }

    /// Number of live subscriptions.
    pub fn active(&self) -> usize {
        self.routes.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_registered(&self, key: &ReplyKey) -> bool {
        self.routes
            .get(key.code())
            .is_some_and(|sinks| sinks.contains_key(&key.tag()))
    }

    /// Refuse new subscriptions and drop existing sinks, waking their
    /// waiters with a closed channel.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
        self.routes.clear();
    }
}

impl ReplyRegistry for Dispatcher {
    fn register(&self, key: ReplyKey, sink: ReplySink) -> Result<(), RegistryError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(RegistryError::Closed);
        }
        let mut sinks = self.routes.entry(key.code.clone()).or_default();
        if sinks.contains_key(&key.tag) {
            return Err(RegistryError::Duplicate(key));
        }
        sinks.insert(key.tag, sink);
        Ok(())
    }

    fn unregister(&self, key: &ReplyKey) {
        let now_empty = match self.routes.get_mut(key.code()) {
            Some(mut sinks) => {
                sinks.remove(&key.tag());
                sinks.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.routes.remove_if(key.code(), |_, sinks| sinks.is_empty());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_reaches_every_tag() {
        let dispatcher = Dispatcher::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        dispatcher.register(ReplyKey::new("433", Tag::new(1)), tx1).unwrap();
        dispatcher.register(ReplyKey::new("433", Tag::new(2)), tx2).unwrap();

        let msg = Message::new("433", ["*", "alice", "Nickname is already in use"]);
        assert_eq!(dispatcher.dispatch(&msg), 2);
        assert_eq!(rx1.try_recv().unwrap(), msg);
        assert_eq!(rx2.try_recv().unwrap(), msg);
        assert_eq!(dispatcher.dispatch(&Message::new("001", ["alice"])), 0);
    }

    #[test]
    fn test_command_words_match_case_insensitively() {
        let dispatcher = Dispatcher::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let key = ReplyKey::new("join", Tag::new(7));
        assert_eq!(key.code(), "JOIN");
        dispatcher.register(key, tx).unwrap();

        assert_eq!(dispatcher.dispatch(&Message::new("join", ["#a"])), 1);
        assert_eq!(rx.try_recv().unwrap().params, vec!["#a"]);
    }

    #[test]
    fn test_duplicate_registration_refused() {
        let dispatcher = Dispatcher::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let key = ReplyKey::reply(Response::RPL_WELCOME, Tag::new(3));
        assert_eq!(key.code(), "001");
        dispatcher.register(key.clone(), tx.clone()).unwrap();
        assert_eq!(
            dispatcher.register(key.clone(), tx),
            Err(RegistryError::Duplicate(key))
        );
        assert_eq!(dispatcher.active(), 1);
    }

    #[test]
    fn test_unregister_cleans_up() {
        let dispatcher = Dispatcher::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let key = ReplyKey::new("PONG", Tag::new(9));
        dispatcher.register(key.clone(), tx).unwrap();
        assert!(dispatcher.is_registered(&key));

        dispatcher.unregister(&key);
        dispatcher.unregister(&key);
        assert!(!dispatcher.is_registered(&key));
        assert_eq!(dispatcher.active(), 0);
        assert!(dispatcher.routes.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_close_refuses_and_drops_sinks() {
        let dispatcher = Dispatcher::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        dispatcher.register(ReplyKey::new("PONG", Tag::new(1)), tx.clone()).unwrap();
        drop(tx);

        dispatcher.close();
        assert_eq!(
            dispatcher.register(ReplyKey::new("PONG", Tag::new(2)), mpsc::unbounded_channel().0),
            Err(RegistryError::Closed)
        );
        assert!(matches!(
            rx.try_recv(),
            Err(mpsc::error::TryRecvError::Disconnected)
        ));
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::new(255).to_string(), "000000ff");
        assert_eq!(ReplyKey::new("433", Tag::new(1)).to_string(), "433/00000001");
    }
}
