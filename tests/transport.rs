//! Integration tests for the transport pump over an in-memory duplex.

mod common;

use std::io::Write;
use std::time::Duration;

use common::init_tracing;
use slirc_client::transport::{DriveOptions, drive};
use slirc_client::{Client, ClientConfig};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::test]
async fn test_privmsg_and_pong_over_the_wire() {
    init_tracing();
    let (client, dispatcher, outbound) = Client::in_process(&ClientConfig::new("alice"));
    let (local, remote) = tokio::io::duplex(4096);

    let pump = tokio::spawn(async move {
        drive(local, outbound, &dispatcher, DriveOptions::default()).await
    });

    let (read_half, mut write_half) = tokio::io::split(remote);
    let mut server = BufReader::new(read_half).lines();

    client.notice("bob", "hi").await.unwrap();
    assert_eq!(server.next_line().await.unwrap().unwrap(), "NOTICE bob :hi");

    write_half.write_all(b"PING :irc.example.net\r\n").await.unwrap();
    assert_eq!(
        server.next_line().await.unwrap().unwrap(),
        "PONG :irc.example.net"
    );

    drop(client);
    pump.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_inbound_lines_reach_waiting_call() {
    init_tracing();
    let (client, dispatcher, outbound) = Client::in_process(&ClientConfig::new("alice"));
    let (local, remote) = tokio::io::duplex(4096);
    let pump = tokio::spawn(async move {
        drive(local, outbound, &dispatcher, DriveOptions::default()).await
    });

    let (read_half, mut write_half) = tokio::io::split(remote);
    let mut server = BufReader::new(read_half).lines();

    let joiner = client.clone();
    let join = tokio::spawn(async move { joiner.join(&["#rust"], &[]).await });

    assert_eq!(server.next_line().await.unwrap().unwrap(), "JOIN :#rust");
    // A malformed line in between is skipped, not fatal.
    write_half
        .write_all(b":garbage\r\n:alice!a@host JOIN :#rust\r\n")
        .await
        .unwrap();

    tokio::time::timeout(Duration::from_secs(5), join)
        .await
        .expect("join completes")
        .unwrap()
        .unwrap();

    drop(client);
    pump.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_peer_close_ends_pump() {
    init_tracing();
    let (_client, dispatcher, outbound) = Client::in_process(&ClientConfig::new("alice"));
    let (local, remote) = tokio::io::duplex(64);
    let pump = tokio::spawn(async move {
        let options = DriveOptions { auto_pong: false };
        drive(local, outbound, &dispatcher, options).await
    });

    drop(remote);
    pump.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_client_from_config_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        "[identity]\nnickname = \"alice\"\nrealname = \"Alice Liddell\"\n\n[timeouts]\nmax_timeout_ms = 8000\n"
    )?;

    let config = ClientConfig::load(file.path())?;
    let (client, _dispatcher, _outbound) = Client::in_process(&config);
    assert_eq!(client.nickname(), "alice");
    assert_eq!(client.realname(), "Alice Liddell");
    assert_eq!(client.username(), "slirc");
    assert_eq!(config.timeouts.max_timeout(), Duration::from_secs(8));
    Ok(())
}
