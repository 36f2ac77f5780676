//! Connection registration and liveness: PASS, NICK, USER, PING, PONG,
//! OPER, QUIT.

use std::time::Duration;

use chrono::Utc;
use slirc_proto::{Message, Response, irc_eq};
use tokio::sync::mpsc;
use tracing::{Instrument, info, warn};

use super::truncate_chars;
use crate::client::Client;
use crate::correlation::{Exchange, ListenerGuard, Verdict, Watch};
use crate::error::{ClientError, Result};
use crate::telemetry::spans;

// ============================================================================
// Exchanges
// ============================================================================

struct PassCheck;

impl Exchange for PassCheck {
    type Output = ();
    const COMMAND: &'static str = "PASS";
    const WATCH: &'static [Watch] = &[
        Watch::Reply(Response::ERR_NEEDMOREPARAMS),
        Watch::Reply(Response::ERR_ALREADYREGISTRED),
    ];

    fn on_reply(&mut self, msg: &Message) -> Verdict<()> {
        match msg.response() {
            Some(Response::ERR_NEEDMOREPARAMS) => {
                Verdict::Fail(ClientError::Reply(Response::ERR_NEEDMOREPARAMS))
            }
            // Already past PASS; the password no longer matters.
            Some(Response::ERR_ALREADYREGISTRED) => Verdict::Done(()),
            _ => Verdict::Continue,
        }
    }

    fn on_timeout(self) -> Result<()> {
        Ok(())
    }
}

/// Servers only echo NICK once registered; before that, silence means the
/// name was accepted.
struct NickChange {
    previous: String,
}

impl Exchange for NickChange {
    type Output = ();
    const COMMAND: &'static str = "NICK";
    const WATCH: &'static [Watch] = &[
        Watch::Reply(Response::ERR_NONICKNAMEGIVEN),
        Watch::Reply(Response::ERR_ERRONEUSNICKNAME),
        Watch::Reply(Response::ERR_NICKNAMEINUSE),
        Watch::Reply(Response::ERR_NICKCOLLISION),
        Watch::Command("NICK"),
    ];

    fn on_reply(&mut self, msg: &Message) -> Verdict<()> {
        if msg.command.eq_ignore_ascii_case("NICK") {
            return match msg.source_nick() {
                Some(nick) if !irc_eq(nick, &self.previous) => Verdict::Continue,
                _ => Verdict::Done(()),
            };
        }
        Verdict::from_error_reply(msg)
    }

    fn on_timeout(self) -> Result<()> {
        Ok(())
    }
}

struct UserRegistration;

impl Exchange for UserRegistration {
    type Output = ();
    const COMMAND: &'static str = "USER";
    const WATCH: &'static [Watch] = &[
        Watch::Reply(Response::ERR_NEEDMOREPARAMS),
        Watch::Reply(Response::ERR_ALREADYREGISTRED),
        Watch::Reply(Response::RPL_ENDOFMOTD),
        Watch::Reply(Response::ERR_NOTREGISTERED),
    ];

    fn on_reply(&mut self, msg: &Message) -> Verdict<()> {
        match msg.response() {
            Some(Response::RPL_ENDOFMOTD) => Verdict::Done(()),
            _ => Verdict::from_error_reply(msg),
        }
    }

    fn on_timeout(self) -> Result<()> {
        Ok(())
    }
}

/// PING carrying the send time in microseconds since the epoch.
struct LagProbe {
    token: String,
    sent_micros: i64,
}

impl LagProbe {
    fn now() -> Self {
        let sent_micros = Utc::now().timestamp_micros();
        Self {
            token: sent_micros.to_string(),
            sent_micros,
        }
    }
}

impl Exchange for LagProbe {
    type Output = Duration;
    const COMMAND: &'static str = "PING";
    const WATCH: &'static [Watch] = &[
        Watch::Reply(Response::ERR_NOORIGIN),
        Watch::Reply(Response::ERR_NOSUCHSERVER),
        Watch::Command("PONG"),
    ];

    fn on_reply(&mut self, msg: &Message) -> Verdict<Duration> {
        if msg.command.eq_ignore_ascii_case("PONG") {
            if msg.trailing() != Some(self.token.as_str()) {
                return Verdict::Continue;
            }
            let elapsed = Utc::now().timestamp_micros() - self.sent_micros;
            return Verdict::Done(Duration::from_micros(elapsed.max(0).unsigned_abs()));
        }
        Verdict::from_error_reply(msg)
    }

    fn on_timeout(self) -> Result<Duration> {
        Err(ClientError::Timeout {
            command: Self::COMMAND,
        })
    }
}

fn is_nick_rejection(response: Response) -> bool {
    matches!(
        response,
        Response::ERR_ERRONEUSNICKNAME | Response::ERR_NICKNAMEINUSE | Response::ERR_NICKCOLLISION
    )
}

// ============================================================================
// Operations
// ============================================================================

impl Client {
    /// Run the registration handshake.
    ///
    /// Sends PASS first when a password is set, then NICK and USER
    /// concurrently. A rejected nickname is retried with a `_` prefix up to
    /// the configured retry count. Registration succeeds when the server
    /// welcomes us or the nickname is accepted, and USER did not fail. On
    /// welcome, the session nickname becomes the one the server addressed.
    pub async fn register(&self) -> Result<()> {
        let nick = self.session().nickname();
        let user = self.session().username();
        let span = spans::registration(&nick, &user);

        async move {
            let (sink, mut welcome) = mpsc::unbounded_channel();
            let _welcome = ListenerGuard::register(
                self.registry(),
                self.next_tag(),
                &[Watch::Reply(Response::RPL_WELCOME)],
                sink,
            )?;

            if self.session().password().is_some() {
                self.pass().await?;
            }

            let claim = async {
                tokio::select! {
                    Some(msg) = welcome.recv() => {
                        // RPL_WELCOME is addressed to the nickname the server settled on.
                        if let Some(accepted) = msg.param(0).filter(|n| !n.is_empty()) {
                            self.session().set_nickname(accepted.to_string());
                        }
                        Ok(())
                    }
                    res = self.claim_nickname(nick) => res,
                }
            };
            let (user_res, claim_res) = tokio::join!(self.user(&user), claim);
            user_res?;
            claim_res?;

            self.session().mark_registered();
            info!(nick = %self.nickname(), "registered");
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// NICK with underscore-prefixed retries on rejection.
    async fn claim_nickname(&self, mut nick: String) -> Result<()> {
        let attempts = self.limits().nick_retries + 1;
        for attempt in 1..=attempts {
            match self.nick(&nick).await {
                Ok(_) => return Ok(()),
                Err(ClientError::Reply(r)) if is_nick_rejection(r) => {
                    warn!(%nick, attempt, reply = r.name(), "nickname rejected");
                    nick.insert(0, '_');
                }
                Err(e) => return Err(e),
            }
        }
        Err(ClientError::NickExhausted { attempts })
    }

    /// Send the session password with PASS.
    ///
    /// Does nothing when no password is set.
    pub async fn pass(&self) -> Result<()> {
        let Some(password) = self.session().password() else {
            return Ok(());
        };
        self.exchange(Message::pass(password), PassCheck).await
    }

    /// Change nickname. Returns the nickname now in effect.
    ///
    /// Names longer than the configured limit are truncated. The session
    /// keeps the old name unless the change succeeds.
    pub async fn nick(&self, new: &str) -> Result<String> {
        if new.is_empty() {
            return Err(ClientError::EmptyNickname);
        }
        let new = truncate_chars(new, self.limits().nick_max_len);
        let previous = self.session().nickname();
        self.exchange(Message::nick(new.as_str()), NickChange { previous })
            .await?;
        self.session().set_nickname(new.clone());
        Ok(new)
    }

    /// Send USER with the given username and the session realname.
    /// Returns the username now in effect.
    pub async fn user(&self, new: &str) -> Result<String> {
        if new.is_empty() {
            return Err(ClientError::EmptyUsername);
        }
        let new = truncate_chars(new, self.limits().user_max_len);
        let realname = self.session().realname();
        self.exchange(Message::user(new.as_str(), realname), UserRegistration)
            .await?;
        self.session().set_username(new.clone());
        Ok(new)
    }

    /// Measure round-trip lag with a timestamped PING.
    ///
    /// The result becomes the session lag and sizes later timeouts.
    /// Overlapping calls are not supported.
    pub async fn ping(&self) -> Result<Duration> {
        let probe = LagProbe::now();
        let lag = self.exchange(Message::ping(probe.token.as_str()), probe).await?;
        self.session().record_lag(lag);
        info!(?lag, "lag updated");
        Ok(lag)
    }

    /// PING an arbitrary target without waiting.
    pub async fn ping_nick(&self, target: &str) -> Result<()> {
        self.send(Message::ping(target)).await
    }

    pub async fn pong(&self, token: &str) -> Result<()> {
        self.send(Message::pong(token)).await
    }

    /// Request operator status.
    pub async fn oper(&self, user: &str, password: &str) -> Result<()> {
        self.send(Message::new("OPER", [user, password])).await
    }

    pub async fn quit(&self, reason: Option<&str>) -> Result<()> {
        self.send(Message::quit(reason)).await
    }
}
