//! Session state shared by every operation on one client.
//!
//! Each field has a single owning operation (NICK writes the nickname,
//! PING writes the lag, ...). The lock is only ever held for the length of
//! a field copy, never across an await.

use std::time::Duration;

use parking_lot::RwLock;

use crate::config::{IdentityConfig, TimeoutsConfig};

#[derive(Debug, Clone)]
struct SessionState {
    nickname: String,
    username: String,
    realname: String,
    password: Option<String>,
    network: String,
    port: u16,
    version: String,
    lag: Duration,
    registered: bool,
}

/// Identity and connection bookkeeping for one client.
///
/// The connection itself is owned by whoever drives the transport; the
/// session only records where it should point.
#[derive(Debug)]
pub struct Session {
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new(identity: &IdentityConfig, timeouts: &TimeoutsConfig) -> Self {
        Self {
            state: RwLock::new(SessionState {
                nickname: identity.nickname.clone(),
                username: identity.username.clone(),
                realname: identity.realname.clone(),
                password: identity.password.clone(),
                network: identity.network.clone(),
                port: identity.port,
                version: identity.version.clone(),
                lag: timeouts.initial_lag(),
                registered: false,
            }),
        }
    }

    pub fn nickname(&self) -> String {
        self.state.read().nickname.clone()
    }

    pub fn username(&self) -> String {
        self.state.read().username.clone()
    }

    pub fn realname(&self) -> String {
        self.state.read().realname.clone()
    }

    pub fn password(&self) -> Option<String> {
        self.state.read().password.clone()
    }

    pub fn network(&self) -> String {
        self.state.read().network.clone()
    }

    pub fn port(&self) -> u16 {
        self.state.read().port
    }

    pub fn version(&self) -> String {
        self.state.read().version.clone()
    }

    /// Latest round-trip estimate.
    pub fn lag(&self) -> Duration {
        self.state.read().lag
    }

    /// Whether the registration handshake has completed.
    pub fn is_registered(&self) -> bool {
        self.state.read().registered
    }

    /// Record a new lag estimate.
    pub fn record_lag(&self, lag: Duration) {
        self.state.write().lag = lag;
    }

    pub(crate) fn set_nickname(&self, nickname: String) {
        self.state.write().nickname = nickname;
    }

    pub(crate) fn set_username(&self, username: String) {
        self.state.write().username = username;
    }

    pub(crate) fn set_password(&self, password: Option<String>) {
        self.state.write().password = password;
    }

    /// Replace the realname unless registration already completed.
    ///
    /// Returns `false` when the session is registered and the value was
    /// left untouched.
    pub(crate) fn set_realname(&self, realname: String) -> bool {
        let mut state = self.state.write();
        if state.registered {
            return false;
        }
        state.realname = realname;
        true
    }

    pub(crate) fn set_network(&self, network: String) {
        self.state.write().network = network;
    }

    pub(crate) fn set_port(&self, port: u16) {
        self.state.write().port = port;
    }

    pub(crate) fn set_version(&self, version: String) {
        self.state.write().version = version;
    }

    pub(crate) fn mark_registered(&self) {
        self.state.write().registered = true;
    }
}
