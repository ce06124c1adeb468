//! Integration tests against a live Redis server.
//!
//! Ignored by default; run with `cargo test -- --ignored` and a server
//! reachable at `REDIS_URL` (falls back to redis://127.0.0.1/). Each test
//! works inside its own namespace so runs don't step on each other.

use keyspace_redis::{KeyspaceError, RedisKeyspace};

fn keyspace(namespace: &str) -> RedisKeyspace {
    let url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1/".to_owned());
    RedisKeyspace::builder()
        .server(url)
        .namespace(namespace)
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn set_then_get_round_trips() {
    let ks = keyspace("it-strings");
    ks.set("27", &"zyp").await.unwrap();
    let value: Option<String> = ks.get("27").await.unwrap();
    assert_eq!(value.as_deref(), Some("zyp"));
    ks.delete("27").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn get_missing_key_is_none() {
    let ks = keyspace("it-strings");
    let value: Option<String> = ks.get("never-written").await.unwrap();
    assert_eq!(value, None);
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn set_nx_does_not_overwrite() {
    let ks = keyspace("it-setnx");
    ks.delete("token").await.unwrap();
    assert!(ks.set_nx("token", &"first", 0).await.unwrap());
    assert!(!ks.set_nx("token", &"second", 0).await.unwrap());
    let value: Option<String> = ks.get("token").await.unwrap();
    assert_eq!(value.as_deref(), Some("first"));
    ks.delete("token").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn incr_initializes_missing_key() {
    let ks = keyspace("it-counters");
    ks.delete("hits").await.unwrap();
    assert_eq!(ks.incr("hits").await.unwrap(), 1);
    assert_eq!(ks.incr_by("hits", 10).await.unwrap(), 11);
    assert_eq!(ks.decr("hits").await.unwrap(), 10);
    assert_eq!(ks.decr_by("hits", 5).await.unwrap(), 5);
    // The counter is readable through the value format as well.
    let hits: Option<i64> = ks.get("hits").await.unwrap();
    assert_eq!(hits, Some(5));
    ks.delete("hits").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn delete_missing_key_returns_false() {
    let ks = keyspace("it-strings");
    assert!(!ks.delete("missingkey").await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn get_set_returns_previous_value() {
    let ks = keyspace("it-strings");
    ks.set("swap", &1u32).await.unwrap();
    let previous: Option<u32> = ks.get_set("swap", &9u32).await.unwrap();
    assert_eq!(previous, Some(1));
    let current: Option<u32> = ks.get("swap").await.unwrap();
    assert_eq!(current, Some(9));
    ks.delete("swap").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn expire_and_ttl() {
    let ks = keyspace("it-expiry");
    ks.set_ex("session", &"zyp", 50).await.unwrap();
    let ttl = ks.ttl("session").await.unwrap();
    assert!((1..=50).contains(&ttl));
    assert!(ks.expire("session", 100).await.unwrap());
    assert!(ks.ttl("session").await.unwrap() > 50);
    assert_eq!(ks.ttl("no-such-key").await.unwrap(), -2);
    ks.delete("session").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn delete_by_pattern_stays_inside_namespace() {
    let ks = keyspace("it-pattern");
    for i in 0..3 {
        ks.set(&format!("dp:{i}"), &i).await.unwrap();
    }
    ks.set("keep", &"me").await.unwrap();
    assert_eq!(ks.delete_by_pattern("dp:*").await.unwrap(), 3);
    assert!(!ks.exists("dp:0").await.unwrap());
    assert!(ks.exists("keep").await.unwrap());
    ks.delete("keep").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn hash_commands() {
    let ks = keyspace("it-hashes");
    ks.delete("user:1").await.unwrap();

    ks.hset("user:1", "name", &"zyp").await.unwrap();
    ks.hset_multiple("user:1", &[("age", 12u32), ("score", 7u32)])
        .await
        .unwrap();

    assert!(ks.hexists("user:1", "name").await.unwrap());
    assert!(!ks.hexists("user:1", "email").await.unwrap());
    assert!(!ks.hset_nx("user:1", "name", &"other").await.unwrap());

    let name: Option<String> = ks.hget("user:1", "name").await.unwrap();
    assert_eq!(name.as_deref(), Some("zyp"));

    let ages: Vec<Option<u32>> = ks
        .hget_multiple("user:1", &["age", "missing"])
        .await
        .unwrap();
    assert_eq!(ages, vec![Some(12), None]);

    assert_eq!(ks.hincr_by("user:1", "age", 5).await.unwrap(), 17);

    let all: std::collections::HashMap<String, u32> =
        ks.hget_all("user:1").await.unwrap();
    assert_eq!(all.get("age"), Some(&17));

    assert_eq!(ks.hdel("user:1", &["age", "score"]).await.unwrap(), 2);
    ks.delete("user:1").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn empty_hash_field_fails_before_the_call() {
    let ks = keyspace("it-hashes");
    let result = ks.hget::<String>("user:1", "").await;
    assert!(matches!(result, Err(KeyspaceError::EmptyField)));
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn list_commands() {
    let ks = keyspace("it-lists");
    ks.delete("queue").await.unwrap();

    assert_eq!(ks.rpush("queue", &["a", "b", "c"]).await.unwrap(), 3);
    assert_eq!(ks.lpush("queue", &["head"]).await.unwrap(), 4);
    assert_eq!(ks.llen("queue").await.unwrap(), 4);

    let head: Option<String> = ks.lindex("queue", 0).await.unwrap();
    assert_eq!(head.as_deref(), Some("head"));

    let new_len = ks.linsert_before("queue", &"a", &"pre-a").await.unwrap();
    assert_eq!(new_len, 5);

    let all: Vec<String> = ks.lrange("queue", 0, -1).await.unwrap();
    assert_eq!(all, vec!["head", "pre-a", "a", "b", "c"]);

    let popped: Option<String> = ks.lpop("queue").await.unwrap();
    assert_eq!(popped.as_deref(), Some("head"));
    let tail: Option<String> = ks.rpop("queue").await.unwrap();
    assert_eq!(tail.as_deref(), Some("c"));

    assert_eq!(ks.lrem("queue", 0, &"pre-a").await.unwrap(), 1);
    ks.lset("queue", 0, &"A").await.unwrap();
    ks.ltrim("queue", 0, 0).await.unwrap();
    let rest: Vec<String> = ks.lrange("queue", 0, -1).await.unwrap();
    assert_eq!(rest, vec!["A"]);

    // The *X variants refuse to touch missing keys.
    assert_eq!(ks.lpush_exists("no-list", &"x").await.unwrap(), 0);
    assert_eq!(ks.rpush_exists("no-list", &"x").await.unwrap(), 0);

    ks.delete("queue").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn set_commands() {
    let ks = keyspace("it-sets");
    ks.delete("tags").await.unwrap();

    assert_eq!(ks.sadd("tags", &[1, 2, 33]).await.unwrap(), 3);
    assert_eq!(ks.scard("tags").await.unwrap(), 3);
    assert!(ks.sismember("tags", &33).await.unwrap());
    assert!(!ks.sismember("tags", &3).await.unwrap());

    let mut members: Vec<i64> = ks.smembers("tags").await.unwrap();
    members.sort_unstable();
    assert_eq!(members, vec![1, 2, 33]);

    let random: Option<i64> = ks.srandmember("tags").await.unwrap();
    assert!(random.is_some());
    let sample: Vec<i64> = ks.srandmember_multiple("tags", 2).await.unwrap();
    assert_eq!(sample.len(), 2);

    let popped: Option<i64> = ks.spop("tags").await.unwrap();
    assert!(popped.is_some());
    assert!(ks.srem("tags", &[1, 2, 33]).await.unwrap() <= 2);

    ks.delete("tags").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn sorted_set_commands() {
    let ks = keyspace("it-zsets");
    ks.delete("board").await.unwrap();

    assert_eq!(ks.zadd("board", 1.0, &"low").await.unwrap(), 1);
    assert_eq!(ks.zadd("board", 2.0, &"mid").await.unwrap(), 1);
    assert_eq!(ks.zadd("board", 3.0, &"high").await.unwrap(), 1);
    // Updating a score adds nothing new.
    assert_eq!(ks.zadd("board", 4.0, &"high").await.unwrap(), 0);

    assert_eq!(ks.zcount("board", 1.0, 2.0).await.unwrap(), 2);

    let ranked: Vec<String> = ks.zrange("board", 0, -1).await.unwrap();
    assert_eq!(ranked, vec!["low", "mid", "high"]);

    let with_scores: Vec<(String, f64)> =
        ks.zrange_with_scores("board", 0, 0).await.unwrap();
    assert_eq!(with_scores, vec![("low".to_owned(), 1.0)]);

    let bounded: Vec<String> = ks.zrange_by_score("board", 2.0, 4.0).await.unwrap();
    assert_eq!(bounded, vec!["mid", "high"]);

    let bounded_scores: Vec<(String, f64)> = ks
        .zrange_by_score_with_scores("board", 4.0, 4.0)
        .await
        .unwrap();
    assert_eq!(bounded_scores, vec![("high".to_owned(), 4.0)]);

    assert_eq!(ks.zrem("board", &["low", "mid"]).await.unwrap(), 2);
    ks.delete("board").await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn scripts_see_qualified_keys() {
    let ks = keyspace("it-scripts");
    let seen: String = ks.eval("return KEYS[1]", "27", &[]).await.unwrap();
    assert_eq!(seen, "it-scripts.27");

    let sha = ks.script_load("return tonumber(ARGV[1])").await.unwrap();
    let out: i64 = ks.evalsha(&sha, "27", &["42"]).await.unwrap();
    assert_eq!(out, 42);
}
