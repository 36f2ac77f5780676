//! Lookup tables and trait implementations for IRC response codes.
//!
//! - Code conversion (`from_code`, `from_wire`, `code`)
//! - Name lookup (`from_name`)
//! - Classification (`is_error`, `is_success`)
//! - Display/parsing traits

use std::collections::HashMap;
use std::str::FromStr;

use lazy_static::lazy_static;

use super::{ReplyKind, Response};

lazy_static! {
    static ref BY_CODE: HashMap<u16, Response> =
        Response::ALL.iter().map(|r| (r.code(), *r)).collect();
    static ref BY_NAME: HashMap<&'static str, Response> =
        Response::ALL.iter().map(|r| (r.name(), *r)).collect();
}

impl Response {
    /// Returns the numeric code as u16
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// The three-digit wire form, e.g. `"001"`.
    pub fn wire_code(&self) -> String {
        format!("{:03}", self.code())
    }

    /// Creates a Response from a numeric code
    pub fn from_code(code: u16) -> Option<Response> {
        BY_CODE.get(&code).copied()
    }

    /// Resolve a message command to a reply.
    ///
    /// Only exact three-digit numerics match; `"1"` or `"0001"` are not
    /// replies even though they name the same number.
    pub fn from_wire(command: &str) -> Option<Response> {
        if command.len() != 3 || !command.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        command.parse().ok().and_then(Response::from_code)
    }

    /// Look up a reply by its symbolic name.
    pub fn from_name(name: &str) -> Option<Response> {
        BY_NAME.get(name).copied()
    }

    /// Check if this is an error reply
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind() == ReplyKind::Error
    }

    /// Check if this is a success/informational reply
    #[inline]
    pub fn is_success(&self) -> bool {
        self.kind() == ReplyKind::Success
    }
}

impl FromStr for Response {
    type Err = ParseResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u16 = s.parse().map_err(|_| ParseResponseError::InvalidFormat)?;
        Response::from_code(code).ok_or(ParseResponseError::UnknownCode(code))
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

/// Error when parsing a response code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseResponseError {
    /// The string was not a valid number
    #[error("invalid response code format")]
    InvalidFormat,
    /// The numeric code is not a known response
    #[error("unknown response code: {0}")]
    UnknownCode(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_returns_correct_numeric_value() {
        assert_eq!(Response::RPL_WELCOME.code(), 1);
        assert_eq!(Response::RPL_ISUPPORT.code(), 5);
        assert_eq!(Response::RPL_TOPIC.code(), 332);
        assert_eq!(Response::ERR_NICKNAMEINUSE.code(), 433);
        assert_eq!(Response::ERR_USERSDONTMATCH.code(), 502);
    }

    #[test]
    fn from_code_roundtrips_every_entry() {
        for r in Response::ALL {
            assert_eq!(Response::from_code(r.code()), Some(*r), "{}", r.name());
        }
        assert_eq!(Response::from_code(0), None);
        assert_eq!(Response::from_code(999), None);
    }

    #[test]
    fn codes_are_unique() {
        assert_eq!(BY_CODE.len(), Response::ALL.len());
        assert_eq!(BY_NAME.len(), Response::ALL.len());
    }

    #[test]
    fn classification_follows_name_prefix() {
        for r in Response::ALL {
            let name = r.name();
            if name.starts_with("ERR_") {
                assert!(r.is_error(), "{name}");
                assert!(!r.is_success(), "{name}");
            } else {
                assert!(name.starts_with("RPL_"), "{name}");
                assert!(r.is_success(), "{name}");
            }
        }
    }

    #[test]
    fn from_wire_requires_three_digits() {
        assert_eq!(Response::from_wire("001"), Some(Response::RPL_WELCOME));
        assert_eq!(Response::from_wire("476"), Some(Response::ERR_BADCHANMASK));
        assert_eq!(Response::from_wire("1"), None);
        assert_eq!(Response::from_wire("0001"), None);
        assert_eq!(Response::from_wire("PRIVMSG"), None);
        assert_eq!(Response::from_wire("+01"), None);
        assert_eq!(Response::from_wire("999"), None);
    }

    #[test]
    fn from_name_lookup() {
        assert_eq!(
            Response::from_name("ERR_ALREADYREGISTRED"),
            Some(Response::ERR_ALREADYREGISTRED)
        );
        assert_eq!(Response::from_name("RPL_ENDOFMOTD"), Some(Response::RPL_ENDOFMOTD));
        assert_eq!(Response::from_name("rpl_endofmotd"), None);
    }

    #[test]
    fn display_pads_to_three_digits() {
        assert_eq!(Response::RPL_WELCOME.to_string(), "001");
        assert_eq!(Response::RPL_WELCOME.wire_code(), "001");
        assert_eq!(Response::ERR_NOSUCHNICK.to_string(), "401");
    }

    #[test]
    fn from_str_errors() {
        assert_eq!("433".parse::<Response>(), Ok(Response::ERR_NICKNAMEINUSE));
        assert_eq!("abc".parse::<Response>(), Err(ParseResponseError::InvalidFormat));
        assert_eq!("998".parse::<Response>(), Err(ParseResponseError::UnknownCode(998)));
    }
}
