//! Channel operations: JOIN, PART, TOPIC, NAMES, LIST, INVITE, KICK.

use std::collections::HashSet;

use slirc_proto::{ChannelExt, Message, Response, irc_eq, irc_to_lower};

use crate::client::Client;
use crate::correlation::{Exchange, Verdict, Watch};
use crate::error::{ClientError, Result};

/// Waits for a JOIN echo for every requested channel.
///
/// Names are folded with RFC 1459 case mapping, so `#Rust` requested twice
/// as `#rust` and `#RUST` needs one echo.
struct JoinProgress {
    me: String,
    wanted: HashSet<String>,
    joined: HashSet<String>,
}

impl JoinProgress {
    fn new(me: String, channels: &[&str]) -> Self {
        Self {
            me,
            wanted: channels.iter().map(|c| irc_to_lower(c)).collect(),
            joined: HashSet::new(),
        }
    }

    fn is_ours(&self, msg: &Message) -> bool {
        msg.source_nick().is_none_or(|nick| irc_eq(nick, &self.me))
    }
}

impl Exchange for JoinProgress {
    type Output = ();
    const COMMAND: &'static str = "JOIN";
    const WATCH: &'static [Watch] = &[
        Watch::Reply(Response::ERR_NEEDMOREPARAMS),
        Watch::Reply(Response::ERR_BANNEDFROMCHAN),
        Watch::Reply(Response::ERR_INVITEONLYCHAN),
        Watch::Reply(Response::ERR_BADCHANNELKEY),
        Watch::Reply(Response::ERR_CHANNELISFULL),
        Watch::Reply(Response::ERR_BADCHANMASK),
        Watch::Reply(Response::ERR_NOSUCHCHANNEL),
        Watch::Reply(Response::ERR_TOOMANYCHANNELS),
        Watch::Reply(Response::RPL_TOPIC),
        Watch::Command("JOIN"),
    ];

    fn on_reply(&mut self, msg: &Message) -> Verdict<()> {
        if !msg.command.eq_ignore_ascii_case("JOIN") {
            return Verdict::from_error_reply(msg);
        }
        if self.is_ours(msg) {
            if let Some(channel) = msg.param(0).map(irc_to_lower) {
                if self.wanted.contains(&channel) {
                    self.joined.insert(channel);
                }
            }
        }
        if self.joined.len() == self.wanted.len() {
            Verdict::Done(())
        } else {
            Verdict::Continue
        }
    }

    fn on_timeout(self) -> Result<()> {
        Err(ClientError::Timeout {
            command: Self::COMMAND,
        })
    }
}

fn validate_channels(channels: &[&str]) -> Result<()> {
    if channels.is_empty() {
        return Err(ClientError::NoChannels);
    }
    for name in channels {
        name.validate_channel()
            .map_err(|reason| ClientError::InvalidChannel {
                name: name.to_string(),
                reason,
            })?;
    }
    Ok(())
}

impl Client {
    /// Join channels, optionally with keys, and wait until the server
    /// confirms every one of them.
    ///
    /// Any error numeric fails the whole call, even if some channels were
    /// already joined.
    pub async fn join(&self, channels: &[&str], keys: &[&str]) -> Result<()> {
        validate_channels(channels)?;
        let mut params = vec![channels.join(",")];
        if !keys.is_empty() {
            params.push(keys.join(","));
        }
        let progress = JoinProgress::new(self.nickname(), channels);
        self.exchange(Message::new("JOIN", params), progress).await
    }

    pub async fn part(&self, channels: &[&str], reason: Option<&str>) -> Result<()> {
        if channels.is_empty() {
            return Err(ClientError::NoChannels);
        }
        let params = std::iter::once(channels.join(",")).chain(reason.map(str::to_string));
        self.send(Message::new("PART", params)).await
    }

    /// Set the topic, or query it with `None`.
    pub async fn topic(&self, channel: &str, topic: Option<&str>) -> Result<()> {
        let params = std::iter::once(channel).chain(topic);
        self.send(Message::new("TOPIC", params)).await
    }

    pub async fn names(&self, channels: &[&str]) -> Result<()> {
        let params = (!channels.is_empty()).then(|| channels.join(","));
        self.send(Message::new("NAMES", params)).await
    }

    pub async fn list(&self, channels: &[&str], server: Option<&str>) -> Result<()> {
        let params = (!channels.is_empty())
            .then(|| channels.join(","))
            .into_iter()
            .chain(server.map(str::to_string));
        self.send(Message::new("LIST", params)).await
    }

    pub async fn invite(&self, nick: &str, channel: &str) -> Result<()> {
        self.send(Message::new("INVITE", [nick, channel])).await
    }

    pub async fn kick(&self, channel: &str, nick: &str, reason: Option<&str>) -> Result<()> {
        let params = [channel, nick].into_iter().chain(reason);
        self.send(Message::new("KICK", params)).await
    }
}
