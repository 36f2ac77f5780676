//! Telemetry utilities for exchange and session correlation.

/// Standardized span constructors for client observability.
pub mod spans {
    use tracing::{Span, info_span};

    use crate::registry::Tag;

    /// Create a span for one correlated exchange.
    pub fn exchange(command: &str, tag: Tag) -> Span {
        info_span!("exchange", command = %command, tag = %tag)
    }

    /// Create a span for the registration handshake.
    pub fn registration(nick: &str, user: &str) -> Span {
        info_span!("registration", nick = %nick, user = %user)
    }

    /// Create a span for a transport pump.
    pub fn transport() -> Span {
        info_span!("transport")
    }
}
