//! # slirc-proto
//!
//! IRC wire codec and numeric reply table for the slirc client engine.
//!
//! ## Features
//!
//! - Permissive line parsing that keeps the partial message on failure
//! - Length- and arity-checked serialization
//! - RFC 1459/2812 numeric replies with success/error classification
//! - Channel name validation and RFC 1459 case mapping
//! - Optional Tokio codecs for `Framed` transports
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_proto::{Message, Response};
//!
//! let msg: Message = ":irc.example.net 433 * alice :Nickname is already in use"
//!     .parse()
//!     .expect("valid line");
//! assert_eq!(msg.response(), Some(Response::ERR_NICKNAMEINUSE));
//! assert!(msg.is_error_reply());
//!
//! let out = Message::privmsg("#rust", "hello there");
//! assert_eq!(out.to_wire().unwrap(), "PRIVMSG #rust :hello there");
//! ```
//!
//! ## Acknowledgments
//!
//! This project was inspired by the architectural patterns established by
//! [Aaron Weiss (aatxe)](https://github.com/aatxe) in the
//! [irc](https://github.com/aatxe/irc) crate.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod casemap;
pub mod chan;
pub mod error;
#[cfg(feature = "tokio")]
pub mod irc;
#[cfg(feature = "tokio")]
pub mod line;
pub mod message;
pub mod mode;
pub mod response;

pub use self::casemap::{irc_eq, irc_lower_char, irc_to_lower};
pub use self::chan::{ChannelExt, ChannelNameError};
pub use self::error::{EncodeError, MessageParseError, ParseErrorKind, ProtocolError};
#[cfg(feature = "tokio")]
pub use self::irc::IrcCodec;
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::message::{Message, MAX_LINE_LEN, MAX_PARAMS};
pub use self::mode::{classify as classify_modes, ModeClass};
pub use self::response::{ReplyKind, Response};
