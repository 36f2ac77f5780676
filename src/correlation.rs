//! Request/reply correlation.
//!
//! IRC has no request ids. An operation subscribes to the reply codes it
//! cares about under a fresh [`Tag`], sends its command, then feeds every
//! reply to an [`Exchange`] until the exchange decides or the server goes
//! quiet for longer than the current timeout window. The window restarts on
//! every reply and is recomputed from the session lag each time.

use std::time::Duration;

use slirc_proto::{Message, Response};
use tokio::sync::mpsc;
use tracing::{Instrument, debug, warn};

use crate::client::Client;
use crate::config::TimeoutsConfig;
use crate::error::{ClientError, Result};
use crate::registry::{RegistryError, ReplyKey, ReplyRegistry, ReplySink, Tag};
use crate::telemetry::spans;

/// A reply code an exchange listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    /// A numeric reply.
    Reply(Response),
    /// A command echoed by the server (`JOIN`, `NICK`, `PONG`).
    Command(&'static str),
}

impl Watch {
    pub fn key(self, tag: Tag) -> ReplyKey {
        match self {
            Watch::Reply(response) => ReplyKey::reply(response, tag),
            Watch::Command(command) => ReplyKey::new(command, tag),
        }
    }
}

/// What an exchange makes of one reply.
#[derive(Debug)]
pub enum Verdict<T> {
    /// Keep waiting; the timeout window restarts.
    Continue,
    Done(T),
    Fail(ClientError),
}

impl<T> Verdict<T> {
    /// `Fail` for an error numeric, `Continue` for anything else.
    pub fn from_error_reply(msg: &Message) -> Self {
        match msg.response() {
            Some(r) if r.is_error() => Verdict::Fail(ClientError::Reply(r)),
            _ => Verdict::Continue,
        }
    }
}

/// Completion logic for one correlated command.
pub trait Exchange: Send {
    type Output: Send;

    /// Command name used in logs and timeout errors.
    const COMMAND: &'static str;

    /// Reply codes to subscribe to for the duration of the call.
    const WATCH: &'static [Watch];

    fn on_reply(&mut self, msg: &Message) -> Verdict<Self::Output>;

    /// Called once when the server stays silent for a whole window.
    fn on_timeout(self) -> Result<Self::Output>;
}

/// Sliding timeout sizing: `lag * multiplier`, capped at `ceiling`. The
/// floor is zero unless configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutPolicy {
    multiplier: u32,
    floor: Duration,
    ceiling: Duration,
}

impl TimeoutPolicy {
    pub fn new(multiplier: u32, floor: Duration, ceiling: Duration) -> Self {
        Self {
            multiplier,
            floor: floor.min(ceiling),
            ceiling,
        }
    }

    pub fn window(&self, lag: Duration) -> Duration {
        lag.saturating_mul(self.multiplier)
            .min(self.ceiling)
            .max(self.floor)
    }
}

impl From<&TimeoutsConfig> for TimeoutPolicy {
    fn from(config: &TimeoutsConfig) -> Self {
        Self::new(
            config.lag_multiplier,
            config.min_timeout(),
            config.max_timeout(),
        )
    }
}

/// Registered subscriptions for one tag; unregisters all of them on drop.
///
/// Registration stops at the first refusal, and the partially built guard
/// is dropped on the way out, so a failed call leaves nothing behind.
pub(crate) struct ListenerGuard<'a> {
    registry: &'a dyn ReplyRegistry,
    keys: Vec<ReplyKey>,
}

impl<'a> ListenerGuard<'a> {
    pub(crate) fn register(
        registry: &'a dyn ReplyRegistry,
        tag: Tag,
        watch: &[Watch],
        sink: ReplySink,
    ) -> std::result::Result<Self, RegistryError> {
        let mut guard = Self {
            registry,
            keys: Vec::with_capacity(watch.len()),
        };
        for w in watch {
            let key = w.key(tag);
            guard.registry.register(key.clone(), sink.clone())?;
            guard.keys.push(key);
        }
        Ok(guard)
    }
}

impl Drop for ListenerGuard<'_> {
    fn drop(&mut self) {
        for key in self.keys.drain(..) {
            self.registry.unregister(&key);
        }
    }
}

enum WaitState<T> {
    Waiting,
    Completed(T),
    Failed(ClientError),
    TimedOut,
}

impl Client {
    /// Send `request` and feed replies to `exchange` until it settles.
    pub(crate) async fn exchange<E: Exchange>(&self, request: Message, mut exchange: E) -> Result<E::Output> {
        let tag = self.next_tag();
        let span = spans::exchange(E::COMMAND, tag);

        async move {
            request.to_wire()?;
            let (sink, mut replies) = mpsc::unbounded_channel();
            let _listeners = ListenerGuard::register(self.registry(), tag, E::WATCH, sink)?;
            self.send(request).await?;

            let mut state = WaitState::Waiting;
            loop {
                state = match state {
                    WaitState::Waiting => {
                        let window = self.policy().window(self.session().lag());
                        match tokio::time::timeout(window, replies.recv()).await {
                            Ok(Some(msg)) => {
                                debug!(reply = %msg.command, "reply received");
                                match exchange.on_reply(&msg) {
                                    Verdict::Continue => WaitState::Waiting,
                                    Verdict::Done(out) => WaitState::Completed(out),
                                    Verdict::Fail(err) => WaitState::Failed(err),
                                }
                            }
                            Ok(None) => WaitState::Failed(ClientError::SinkClosed),
                            Err(_) => {
                                debug!(?window, "reply window elapsed");
                                WaitState::TimedOut
                            }
                        }
                    }
                    WaitState::Completed(out) => return Ok(out),
                    WaitState::Failed(err) => {
                        warn!(error = %err, code = err.error_code(), "exchange failed");
                        return Err(err);
                    }
                    WaitState::TimedOut => return exchange.on_timeout(),
                };
            }
        }
        .instrument(span)
        .await
    }
}
