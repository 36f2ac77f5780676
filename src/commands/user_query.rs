//! User queries: WHOIS, WHOWAS, WHO, USERHOST, ISON, USERS.

use std::collections::HashMap;

use slirc_proto::{Message, Response, irc_eq};

use super::check_targets;
use crate::client::Client;
use crate::correlation::{Exchange, Verdict, Watch};
use crate::error::{ClientError, Result};

/// Everything the server told us in answer to a WHOIS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whois {
    /// Reply bodies (all params joined by spaces), grouped by reply code,
    /// in arrival order.
    pub replies: HashMap<Response, Vec<String>>,
    /// Requested targets the server reported as unknown.
    pub not_found: Vec<String>,
}

impl Whois {
    /// Reply bodies received for one code.
    pub fn get(&self, response: Response) -> &[String] {
        self.replies.get(&response).map(Vec::as_slice).unwrap_or_default()
    }

    /// Targets that were not found, as an error.
    pub fn error(&self) -> Option<ClientError> {
        (!self.not_found.is_empty()).then(|| ClientError::NoSuchNick(self.not_found.clone()))
    }
}

/// Collects replies until ENDOFWHOIS, until every target is known to be
/// missing, or until the server goes quiet. Partial results are kept in
/// every case.
struct WhoisCollector {
    targets: Vec<String>,
    result: Whois,
}

impl Exchange for WhoisCollector {
    type Output = Whois;
    const COMMAND: &'static str = "WHOIS";
    const WATCH: &'static [Watch] = &[
        Watch::Reply(Response::ERR_NOSUCHSERVER),
        Watch::Reply(Response::ERR_NONICKNAMEGIVEN),
        Watch::Reply(Response::RPL_WHOISUSER),
        Watch::Reply(Response::RPL_WHOISCHANNELS),
        Watch::Reply(Response::RPL_WHOISSERVER),
        Watch::Reply(Response::RPL_AWAY),
        Watch::Reply(Response::RPL_WHOISOPERATOR),
        Watch::Reply(Response::RPL_WHOISIDLE),
        Watch::Reply(Response::ERR_NOSUCHNICK),
        Watch::Reply(Response::RPL_ENDOFWHOIS),
    ];

    fn on_reply(&mut self, msg: &Message) -> Verdict<Whois> {
        let Some(response) = msg.response() else {
            return Verdict::Continue;
        };
        self.result
            .replies
            .entry(response)
            .or_default()
            .push(msg.params.join(" "));

        match response {
            Response::RPL_ENDOFWHOIS => Verdict::Done(std::mem::take(&mut self.result)),
            Response::ERR_NOSUCHNICK => {
                if let Some(missing) = msg.param(1) {
                    let known = self.targets.iter().find(|t| irc_eq(t, missing));
                    let counted = self.result.not_found.iter().any(|t| irc_eq(t, missing));
                    if let (Some(target), false) = (known, counted) {
                        self.result.not_found.push(target.clone());
                    }
                }
                if self.result.not_found.len() == self.targets.len() {
                    Verdict::Done(std::mem::take(&mut self.result))
                } else {
                    Verdict::Continue
                }
            }
            _ => Verdict::Continue,
        }
    }

    fn on_timeout(self) -> Result<Whois> {
        Ok(self.result)
    }
}

impl Client {
    /// Look up one or more users.
    ///
    /// Unknown targets do not fail the call; they are listed in
    /// [`Whois::not_found`]. A silent server yields whatever arrived.
    pub async fn whois(&self, targets: &[&str], server: Option<&str>) -> Result<Whois> {
        if targets.is_empty() {
            return Err(ClientError::NoTargets);
        }
        let params = server
            .into_iter()
            .map(str::to_string)
            .chain(std::iter::once(targets.join(",")));
        let collector = WhoisCollector {
            targets: targets.iter().map(|t| t.to_string()).collect(),
            result: Whois::default(),
        };
        self.exchange(Message::new("WHOIS", params), collector).await
    }

    /// Ask for history on a nickname. `count` limits the number of entries.
    pub async fn whowas(&self, nick: &str, count: Option<u32>, server: Option<&str>) -> Result<()> {
        let params = std::iter::once(nick.to_string())
            .chain(count.map(|c| c.to_string()))
            .chain(server.map(str::to_string));
        self.send(Message::new("WHOWAS", params)).await
    }

    pub async fn who(&self, mask: &str) -> Result<()> {
        self.send(Message::new("WHO", [mask])).await
    }

    /// Up to five nicknames per request.
    pub async fn userhost(&self, nicks: &[&str]) -> Result<()> {
        check_targets(nicks, self.limits().userhost_max)?;
        self.send(Message::new("USERHOST", nicks.iter().copied()))
            .await
    }

    /// As many nicknames as fit one line.
    pub async fn ison(&self, nicks: &[&str]) -> Result<()> {
        check_targets(nicks, self.limits().ison_max)?;
        self.send(Message::new("ISON", [nicks.join(" ")])).await
    }

    pub async fn users(&self, server: Option<&str>) -> Result<()> {
        self.send(Message::new("USERS", server)).await
    }
}
