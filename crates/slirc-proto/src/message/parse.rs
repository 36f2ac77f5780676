//! Message parsing implementation.
//!
//! Parsing is permissive: [`Message::parse`] reports problems through
//! [`MessageParseError`], which still carries whatever could be decoded.

use std::str::FromStr;

use crate::error::{MessageParseError, ParseErrorKind};

use super::types::Message;

impl Message {
    /// Parse a raw wire line.
    ///
    /// A leading `:` introduces the prefix, which runs to the first space.
    /// The next token is the command, and the rest is split on single
    /// spaces into parameters. The first parameter token that starts with
    /// `:` swallows the remainder of the line, colon stripped, as the
    /// trailing parameter.
    ///
    /// The command must be followed by a space. A bare token such as `QUIT`
    /// is reported as [`ParseErrorKind::MissingCommand`], with the token kept
    /// as the partial message's command.
    ///
    /// A trailing CR/LF is ignored.
    pub fn parse(line: &str) -> Result<Message, MessageParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut msg = Message::default();

        if line.is_empty() {
            return Err(MessageParseError::new(ParseErrorKind::EmptyMessage, msg));
        }

        let mut rest = line;
        if let Some(stripped) = rest.strip_prefix(':') {
            match stripped.split_once(' ') {
                Some((prefix, tail)) => {
                    msg.prefix = Some(prefix.to_owned());
                    rest = tail;
                }
                None => {
                    msg.prefix = Some(stripped.to_owned());
                    return Err(MessageParseError::new(ParseErrorKind::MalformedPrefix, msg));
                }
            }
        }

        match rest.split_once(' ') {
            Some((command, tail)) => {
                msg.command = command.to_owned();
                msg.params = split_params(tail);
            }
            None => {
                msg.command = rest.to_owned();
                return Err(MessageParseError::new(ParseErrorKind::MissingCommand, msg));
            }
        }

        if msg.command.is_empty() {
            return Err(MessageParseError::new(ParseErrorKind::MissingCommand, msg));
        }

        Ok(msg)
    }
}

fn split_params(mut rest: &str) -> Vec<String> {
    let mut params = Vec::new();
    loop {
        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing.to_owned());
            return params;
        }
        match rest.split_once(' ') {
            Some((param, tail)) => {
                params.push(param.to_owned());
                rest = tail;
            }
            None => {
                params.push(rest.to_owned());
                return params;
            }
        }
    }
}

impl FromStr for Message {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        Message::parse(s)
    }
}
