//! Integration tests for JOIN completion and the channel commands.

mod common;

use common::Harness;
use slirc_client::ClientError;
use slirc_proto::Response;

#[tokio::test(start_paused = true)]
async fn test_join_waits_for_every_channel() {
    let mut h = Harness::new();
    let client = h.client.clone();
    let task = tokio::spawn(async move { client.join(&["#a", "#b"], &[]).await });

    assert_eq!(h.sent_line().await, "JOIN :#a,#b");
    h.reply(":alice!a@host JOIN #a");
    // Someone else joining #b does not count.
    h.reply(":bob!b@host JOIN #b");
    tokio::task::yield_now().await;
    assert!(!task.is_finished());

    h.reply(":alice!a@host JOIN :#B");
    task.await.unwrap().unwrap();
    h.assert_clean();
}

#[tokio::test(start_paused = true)]
async fn test_join_with_keys() {
    let mut h = Harness::new();
    let client = h.client.clone();
    let task = tokio::spawn(async move { client.join(&["#secret"], &["hunter2"]).await });

    let sent = h.sent().await;
    assert_eq!(sent.params, ["#secret", "hunter2"]);
    h.reply(":alice!a@host JOIN #secret");
    task.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_join_error_fails_whole_call() {
    let mut h = Harness::new();
    let client = h.client.clone();
    let task = tokio::spawn(async move { client.join(&["#a", "#b"], &[]).await });

    let _ = h.sent().await;
    h.reply(":alice!a@host JOIN #a");
    h.reply(":irc.example.net 474 alice #b :Cannot join channel (+b)");

    let err = task.await.unwrap().unwrap_err();
    assert_eq!(err.reply(), Some(Response::ERR_BANNEDFROMCHAN));
    h.assert_clean();
}

#[tokio::test(start_paused = true)]
async fn test_join_timeout_is_an_error() {
    let mut h = Harness::new();
    let client = h.client.clone();
    let start = tokio::time::Instant::now();
    let task = tokio::spawn(async move { client.join(&["#quiet"], &[]).await });

    let _ = h.sent().await;
    let err = task.await.unwrap().unwrap_err();
    assert!(matches!(err, ClientError::Timeout { command: "JOIN" }));
    assert_eq!(common::elapsed_since(start), std::time::Duration::from_secs(6));
    h.assert_clean();
}

#[tokio::test]
async fn test_invalid_channel_sends_nothing() {
    let mut h = Harness::new();

    let err = h.client.join(&["#ok", "nohash"], &[]).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidChannel { ref name, .. } if name == "nohash"));
    assert!(err.is_local());

    let err = h.client.join(&["#bad,name"], &[]).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidChannel { .. }));

    let err = h.client.join(&[], &[]).await.unwrap_err();
    assert!(matches!(err, ClientError::NoChannels));

    assert!(h.nothing_sent());
    h.assert_clean();
}

#[tokio::test]
async fn test_fire_and_forget_channel_commands() {
    let mut h = Harness::new();

    h.client.part(&["#a", "#b"], Some("bye now")).await.unwrap();
    assert_eq!(h.sent_line().await, "PART #a,#b :bye now");

    h.client.topic("#a", None).await.unwrap();
    assert_eq!(h.sent_line().await, "TOPIC :#a");

    h.client.topic("#a", Some("new topic")).await.unwrap();
    assert_eq!(h.sent_line().await, "TOPIC #a :new topic");

    h.client.names(&[]).await.unwrap();
    assert_eq!(h.sent_line().await, "NAMES");

    h.client.list(&["#a"], Some("irc.example.net")).await.unwrap();
    assert_eq!(h.sent_line().await, "LIST #a :irc.example.net");

    h.client.invite("bob", "#a").await.unwrap();
    assert_eq!(h.sent_line().await, "INVITE bob :#a");

    h.client.kick("#a", "bob", None).await.unwrap();
    assert_eq!(h.sent_line().await, "KICK #a :bob");
}

#[tokio::test]
async fn test_mode_commands() {
    let mut h = Harness::new();

    h.client.mode("#a", "+o", &["bob"]).await.unwrap();
    assert_eq!(h.sent_line().await, "MODE #a +o :bob");

    h.client.mode("alice", "+i", &[]).await.unwrap();
    assert_eq!(h.sent_line().await, "MODE alice :+i");

    // Channel and user mode letters mixed together are not sent.
    h.client.mode("#a", "+tw", &[]).await.unwrap();
    assert!(h.nothing_sent());
}

#[tokio::test]
async fn test_away_toggle() {
    let mut h = Harness::new();

    h.client.away(Some("lunch")).await.unwrap();
    assert_eq!(h.sent_line().await, "AWAY :lunch");

    h.client.away(None).await.unwrap();
    assert_eq!(h.sent_line().await, "AWAY");
}
