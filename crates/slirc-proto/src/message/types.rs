use crate::response::Response;

/// Maximum number of parameters a message may carry.
pub const MAX_PARAMS: usize = 15;

/// Maximum serialized length of a message, excluding the CRLF terminator.
pub const MAX_LINE_LEN: usize = 510;

/// An owned IRC message.
///
/// Holds the optional prefix (source), the command word or three-digit
/// numeric, and the ordered parameter list. Only the last parameter may
/// contain spaces; on the wire it is the one marked with a leading `:`.
///
/// # Example
///
/// ```
/// use slirc_proto::Message;
///
/// // Parse a message
/// let msg: Message = ":nick!user@host PRIVMSG #channel :Hello!".parse().unwrap();
/// assert_eq!(msg.source_nick(), Some("nick"));
///
/// // Construct a message
/// let msg = Message::privmsg("#channel", "Hello there");
/// assert_eq!(msg.to_string(), "PRIVMSG #channel :Hello there");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Message prefix/source without the leading `:` (e.g., `nick!user@host`).
    pub prefix: Option<String>,
    /// The command word (`PRIVMSG`) or numeric reply code (`001`).
    pub command: String,
    /// Command parameters, trailing parameter last.
    pub params: Vec<String>,
}

impl Message {
    /// Create a message from a command and its parameters.
    #[must_use]
    pub fn new<C, I, P>(command: C, params: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Message {
            prefix: None,
            command: command.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the prefix/source of this message.
    #[must_use]
    pub fn with_prefix<P: Into<String>>(mut self, prefix: P) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Get the parameter at `index`, if present.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Get the last parameter, if any.
    pub fn trailing(&self) -> Option<&str> {
        self.params.last().map(String::as_str)
    }

    /// Get the nickname from the message prefix, if the source is a user.
    ///
    /// A bare prefix containing a dot is taken to be a server name.
    pub fn source_nick(&self) -> Option<&str> {
        let prefix = self.prefix.as_deref()?;
        match prefix.find(['!', '@']) {
            Some(end) => Some(&prefix[..end]).filter(|nick| !nick.is_empty()),
            None if prefix.contains('.') || prefix.is_empty() => None,
            None => Some(prefix),
        }
    }

    /// Look up the numeric reply this message carries, if its command is one.
    pub fn response(&self) -> Option<Response> {
        Response::from_wire(&self.command)
    }

    /// Whether the command is a numeric reply classified as an error.
    pub fn is_error_reply(&self) -> bool {
        self.response().is_some_and(|r| r.is_error())
    }

    /// Create a PRIVMSG message to a target with text.
    #[must_use]
    pub fn privmsg<T, M>(target: T, text: M) -> Self
    where
        T: Into<String>,
        M: Into<String>,
    {
        Message::new("PRIVMSG", [target.into(), text.into()])
    }

    /// Create a NOTICE message to a target with text.
    #[must_use]
    pub fn notice<T, M>(target: T, text: M) -> Self
    where
        T: Into<String>,
        M: Into<String>,
    {
        Message::new("NOTICE", [target.into(), text.into()])
    }

    /// Create a NICK message to change nickname.
    #[must_use]
    pub fn nick<N: Into<String>>(nickname: N) -> Self {
        Message::new("NICK", [nickname.into()])
    }

    /// Create a USER message for registration (`USER <user> 0 * :<realname>`).
    #[must_use]
    pub fn user<U, R>(username: U, realname: R) -> Self
    where
        U: Into<String>,
        R: Into<String>,
    {
        Message::new(
            "USER",
            [username.into(), "0".into(), "*".into(), realname.into()],
        )
    }

    /// Create a PASS message carrying the connection password.
    #[must_use]
    pub fn pass<P: Into<String>>(password: P) -> Self {
        Message::new("PASS", [password.into()])
    }

    /// Create a PING message with a token.
    #[must_use]
    pub fn ping<T: Into<String>>(token: T) -> Self {
        Message::new("PING", [token.into()])
    }

    /// Create a PONG message echoing a token.
    #[must_use]
    pub fn pong<T: Into<String>>(token: T) -> Self {
        Message::new("PONG", [token.into()])
    }

    /// Create a QUIT message, with an optional reason.
    #[must_use]
    pub fn quit(reason: Option<&str>) -> Self {
        Message::new("QUIT", reason)
    }
}
