//! # slirc-client
//!
//! Client-side IRC engine. Typed operations (register, join, privmsg,
//! whois, ping...) become protocol lines on an outbound queue, and the
//! server's asynchronous replies are correlated back to the call that
//! caused them.
//!
//! ```no_run
//! use slirc_client::{Client, ClientConfig, transport};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::load("slirc.toml")?;
//! let (client, dispatcher, outbound) = Client::in_process(&config);
//!
//! let stream = tokio::net::TcpStream::connect(("irc.example.net", config.identity.port)).await?;
//! tokio::spawn(async move {
//!     transport::drive(stream, outbound, &dispatcher, Default::default()).await
//! });
//!
//! client.register().await?;
//! client.join(&["#rust"], &[]).await?;
//! client.privmsg(&["#rust"], "hello").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod commands;
pub mod config;
pub mod correlation;
pub mod error;
pub mod registry;
pub mod session;
pub mod telemetry;
pub mod transport;

pub use client::Client;
pub use commands::Whois;
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, Result};
pub use registry::{Dispatcher, RegistryError, ReplyKey, ReplyRegistry, ReplySink, Tag};
pub use session::Session;
