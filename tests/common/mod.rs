//! Integration test common infrastructure.
//!
//! A [`Harness`] wires a client to an in-process dispatcher and exposes the
//! outbound queue, so a test can play the server: read what the client
//! sent, then feed replies back in.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use slirc_client::{Client, ClientConfig, Dispatcher};
use slirc_proto::Message;
use tokio::sync::mpsc;

pub struct Harness {
    pub client: Client,
    pub dispatcher: Arc<Dispatcher>,
    pub outbound: mpsc::Receiver<Message>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new("alice"))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        init_tracing();
        let (client, dispatcher, outbound) = Client::in_process(&config);
        Self {
            client,
            dispatcher,
            outbound,
        }
    }

    /// Next message the client queued.
    pub async fn sent(&mut self) -> Message {
        self.outbound.recv().await.expect("client queued a message")
    }

    /// Next queued message, as its wire line.
    pub async fn sent_line(&mut self) -> String {
        self.sent().await.to_wire().expect("queued messages are encodable")
    }

    /// Whether the client has queued nothing more.
    pub fn nothing_sent(&mut self) -> bool {
        self.outbound.try_recv().is_err()
    }

    /// Feed one server line to the dispatcher. Returns the number of
    /// subscriptions it reached.
    pub fn reply(&self, line: &str) -> usize {
        let msg: Message = line.parse().expect("test replies are valid lines");
        self.dispatcher.dispatch(&msg)
    }

    /// No subscriptions left behind.
    pub fn assert_clean(&self) {
        assert_eq!(self.dispatcher.active(), 0, "listeners leaked");
    }
}

/// Elapsed time helper for paused-clock tests.
pub fn elapsed_since(start: tokio::time::Instant) -> Duration {
    tokio::time::Instant::now() - start
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
