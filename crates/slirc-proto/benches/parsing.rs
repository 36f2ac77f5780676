//! Benchmarks for IRC message parsing and serialization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slirc_proto::{Message, Response};

/// Simple PING message
const SIMPLE_MESSAGE: &str = "PING :irc.example.com";

/// Message with prefix
const PREFIX_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// Numeric response
const NUMERIC_RESPONSE: &str =
    ":irc.server.net 001 nickname :Welcome to the IRC Network nickname!user@host";

/// WHOIS reply with many middle params
const WHOIS_USER: &str = ":irc.server.net 311 me alice ~alice host.example.com * :Alice Liddell";

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Parsing");

    for (name, line) in [
        ("simple_ping", SIMPLE_MESSAGE),
        ("with_prefix", PREFIX_MESSAGE),
        ("numeric", NUMERIC_RESPONSE),
        ("whois_user", WHOIS_USER),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let msg: Message = black_box(line).parse().unwrap();
                black_box(msg)
            })
        });
    }

    group.finish();
}

fn benchmark_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Serialization");

    let privmsg = Message::privmsg("#channel", "Hello, world!");
    group.bench_function("privmsg", |b| b.iter(|| black_box(&privmsg).to_wire()));

    let whois: Message = WHOIS_USER.parse().unwrap();
    group.bench_function("whois_user", |b| b.iter(|| black_box(&whois).to_wire()));

    group.finish();
}

fn benchmark_reply_lookup(c: &mut Criterion) {
    c.bench_function("response_from_wire", |b| {
        b.iter(|| {
            black_box(Response::from_wire(black_box("433")))
                .map(|r| r.is_error())
                .unwrap_or(false)
        })
    });
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_serialization,
    benchmark_reply_lookup
);
criterion_main!(benches);
