//! IRC operations, one module per command family.
//!
//! Correlated operations define an [`Exchange`](crate::correlation::Exchange)
//! next to the method that runs it; fire-and-forget operations just queue a
//! message.

mod channel;
mod connection;
mod messaging;
mod mode;
mod user_query;
mod user_status;

pub use user_query::Whois;

use crate::error::{ClientError, Result};

/// Keep at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Refuse an empty or oversized target list.
fn check_targets(targets: &[&str], limit: usize) -> Result<()> {
    if targets.is_empty() {
        return Err(ClientError::NoTargets);
    }
    if targets.len() > limit {
        return Err(ClientError::TooManyTargets {
            count: targets.len(),
            limit,
        });
    }
    Ok(())
}
