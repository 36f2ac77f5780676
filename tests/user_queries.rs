//! Integration tests for WHOIS aggregation and the query commands.

mod common;

use std::time::Duration;

use common::Harness;
use slirc_client::ClientError;
use slirc_proto::Response;

#[tokio::test(start_paused = true)]
async fn test_whois_collects_until_end() {
    let mut h = Harness::new();
    let client = h.client.clone();
    let task = tokio::spawn(async move { client.whois(&["bob"], None).await });

    assert_eq!(h.sent_line().await, "WHOIS :bob");
    h.reply(":irc.example.net 311 alice bob ~bob host.example * :Bob Example");
    h.reply(":irc.example.net 319 alice bob :@#rust #tokio");
    h.reply(":irc.example.net 312 alice bob irc.example.net :Example server");
    h.reply(":irc.example.net 318 alice bob :End of WHOIS list");

    let whois = task.await.unwrap().unwrap();
    assert_eq!(
        whois.get(Response::RPL_WHOISUSER),
        ["alice bob ~bob host.example * Bob Example"]
    );
    assert_eq!(whois.get(Response::RPL_WHOISCHANNELS), ["alice bob @#rust #tokio"]);
    assert_eq!(whois.get(Response::RPL_WHOISSERVER).len(), 1);
    assert!(whois.get(Response::RPL_WHOISIDLE).is_empty());
    assert!(whois.not_found.is_empty());
    assert!(whois.error().is_none());
    h.assert_clean();
}

#[tokio::test(start_paused = true)]
async fn test_whois_server_param_first() {
    let mut h = Harness::new();
    let client = h.client.clone();
    let task =
        tokio::spawn(async move { client.whois(&["bob", "carol"], Some("irc.example.net")).await });

    let sent = h.sent().await;
    assert_eq!(sent.params, ["irc.example.net", "bob,carol"]);
    h.reply(":irc.example.net 318 alice bob,carol :End of WHOIS list");
    task.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_whois_all_targets_missing_finishes_early() {
    let mut h = Harness::new();
    let client = h.client.clone();
    let start = tokio::time::Instant::now();
    let task = tokio::spawn(async move { client.whois(&["ghost", "Spook"], None).await });

    let _ = h.sent().await;
    h.reply(":irc.example.net 401 alice ghost :No such nick/channel");
    h.reply(":irc.example.net 401 alice GHOST :No such nick/channel");
    h.reply(":irc.example.net 401 alice spook :No such nick/channel");

    let whois = task.await.unwrap().unwrap();
    assert_eq!(whois.not_found, ["ghost", "Spook"]);
    assert!(matches!(whois.error(), Some(ClientError::NoSuchNick(ref n)) if n.len() == 2));
    assert_eq!(common::elapsed_since(start), Duration::ZERO);
    h.assert_clean();
}

#[tokio::test(start_paused = true)]
async fn test_whois_partial_on_silence() {
    let mut h = Harness::new();
    let client = h.client.clone();
    let task = tokio::spawn(async move { client.whois(&["bob"], None).await });

    let _ = h.sent().await;
    h.reply(":irc.example.net 311 alice bob ~bob host.example * :Bob Example");
    let whois = task.await.unwrap().unwrap();
    assert_eq!(whois.get(Response::RPL_WHOISUSER).len(), 1);
    h.assert_clean();
}

#[tokio::test]
async fn test_whois_requires_targets() {
    let mut h = Harness::new();
    let err = h.client.whois(&[], None).await.unwrap_err();
    assert!(matches!(err, ClientError::NoTargets));
    assert!(h.nothing_sent());
}

#[tokio::test]
async fn test_userhost_limit() {
    let mut h = Harness::new();

    let nicks = ["a", "b", "c", "d", "e"];
    h.client.userhost(&nicks).await.unwrap();
    assert_eq!(h.sent().await.params, nicks);

    let err = h.client.userhost(&["a", "b", "c", "d", "e", "f"]).await.unwrap_err();
    assert!(matches!(err, ClientError::TooManyTargets { count: 6, limit: 5 }));
    assert!(h.nothing_sent());
}

#[tokio::test]
async fn test_ison_limit() {
    let mut h = Harness::new();
    let names: Vec<String> = (0..54).map(|i| format!("n{i}")).collect();
    let nicks: Vec<&str> = names.iter().map(String::as_str).collect();

    h.client.ison(&nicks[..53]).await.unwrap();
    let sent = h.sent().await;
    assert_eq!(sent.params.len(), 1);
    assert_eq!(sent.params[0].split(' ').count(), 53);

    let err = h.client.ison(&nicks).await.unwrap_err();
    assert!(matches!(err, ClientError::TooManyTargets { count: 54, limit: 53 }));
    assert!(h.nothing_sent());
}

#[tokio::test]
async fn test_simple_queries() {
    let mut h = Harness::new();

    h.client.whowas("bob", Some(3), None).await.unwrap();
    assert_eq!(h.sent_line().await, "WHOWAS bob :3");

    h.client.who("#rust").await.unwrap();
    assert_eq!(h.sent_line().await, "WHO :#rust");

    h.client.users(None).await.unwrap();
    assert_eq!(h.sent_line().await, "USERS");
}
