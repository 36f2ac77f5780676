//! IRC message type, parsing and serialization.

mod parse;
mod serialize;
mod types;

pub use self::types::{Message, MAX_LINE_LEN, MAX_PARAMS};
