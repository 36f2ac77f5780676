//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

// =============================================================================
// Identity Defaults
// =============================================================================

pub fn default_username() -> String {
    "slirc".to_string()
}

pub fn default_realname() -> String {
    "slirc client".to_string()
}

pub fn default_port() -> u16 {
    6667
}

pub fn default_version() -> String {
    concat!("slirc-client ", env!("CARGO_PKG_VERSION")).to_string()
}

// =============================================================================
// Timeout Defaults
// =============================================================================

pub fn default_lag_multiplier() -> u32 {
    3
}

pub fn default_max_timeout_ms() -> u64 {
    15_000
}

/// No floor: the window is exactly `lag * lag_multiplier` below the ceiling.
pub fn default_min_timeout_ms() -> u64 {
    0
}

pub fn default_initial_lag_ms() -> u64 {
    2_000
}

// =============================================================================
// Limit Defaults
// =============================================================================

pub fn default_nick_max_len() -> usize {
    9
}

pub fn default_user_max_len() -> usize {
    9
}

pub fn default_nick_retries() -> usize {
    8
}

pub fn default_userhost_max() -> usize {
    5
}

/// 512 bytes divided by the 9-byte maximum nickname length.
pub fn default_ison_max() -> usize {
    53
}

pub fn default_queue_capacity() -> usize {
    64
}
