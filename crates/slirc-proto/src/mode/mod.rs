//! Mode-string classification.
//!
//! A mode request is either for a channel or for a user, and the letters it
//! may use differ between the two. Sign characters (`+`, `-`) belong to
//! both.

/// Channel mode letters defined by RFC 1459.
pub const CHANNEL_MODES: &str = "opsitnmlbvk";

/// User mode letters defined by RFC 1459.
pub const USER_MODES: &str = "iswo";

/// Which family a mode string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeClass {
    /// Only channel mode letters.
    Channel,
    /// Only user mode letters.
    User,
    /// Letters valid for both families (e.g. `+o`, `-i`), or signs alone.
    Either,
    /// Contains a letter outside both sets, or needs both families at once.
    Mixed,
}

impl ModeClass {
    /// Whether the string can be sent as-is.
    pub fn is_sendable(self) -> bool {
        !matches!(self, ModeClass::Mixed)
    }
}

/// Classify a mode string such as `+ov-k`.
pub fn classify(modes: &str) -> ModeClass {
    let letters = || modes.chars().filter(|c| !matches!(c, '+' | '-'));
    let channel = letters().all(|c| CHANNEL_MODES.contains(c));
    let user = letters().all(|c| USER_MODES.contains(c));
    match (channel, user) {
        (true, true) => ModeClass::Either,
        (true, false) => ModeClass::Channel,
        (false, true) => ModeClass::User,
        (false, false) => ModeClass::Mixed,
    }
}
