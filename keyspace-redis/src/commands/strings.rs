//! String and generic key commands.

use std::time::Instant;

use keyspace_core::{KeyspaceError, ValueFormat};
use redis::cmd;
use serde::{Serialize, de::DeserializeOwned};

use crate::client::RedisKeyspace;
use crate::error::Error;

// SCAN batch size for delete_by_pattern.
const SCAN_COUNT: usize = 100;

impl<F> RedisKeyspace<F>
where
    F: ValueFormat,
{
    /// `EXISTS`: whether the key is present.
    pub async fn exists(&self, key: &str) -> Result<bool, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("EXISTS");
        command.arg(&key);
        self.exec(&key, command).await
    }

    /// `SET`: write a value, overwriting any previous one.
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let data = self.encode(value)?;
        let mut command = cmd("SET");
        command.arg(&key).arg(&data[..]);
        self.exec(&key, command).await
    }

    /// `SET EX`: write a value with a time-to-live in seconds.
    pub async fn set_ex<T>(&self, key: &str, value: &T, ttl_secs: u64) -> Result<(), KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let data = self.encode(value)?;
        let mut command = cmd("SET");
        command.arg(&key).arg(&data[..]).arg("EX").arg(ttl_secs);
        self.exec(&key, command).await
    }

    /// `SET NX`: write only when the key does not exist yet.
    ///
    /// Returns false and leaves the existing value intact otherwise. A
    /// positive `ttl_secs` also sets the expiry; zero stores without one.
    pub async fn set_nx<T>(&self, key: &str, value: &T, ttl_secs: u64) -> Result<bool, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let data = self.encode(value)?;
        let mut command = cmd("SET");
        command.arg(&key).arg(&data[..]).arg("NX");
        if ttl_secs > 0 {
            command.arg("EX").arg(ttl_secs);
        }
        self.exec(&key, command).await
    }

    /// `GET`: read a value; `None` when the key is missing.
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("GET");
        command.arg(&key);
        let raw: Option<Vec<u8>> = self.exec(&key, command).await?;
        self.decode(raw)
    }

    /// `GETSET`: write a value and return the previous one.
    pub async fn get_set<T>(&self, key: &str, value: &T) -> Result<Option<T>, KeyspaceError>
    where
        T: Serialize + DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let data = self.encode(value)?;
        let mut command = cmd("GETSET");
        command.arg(&key).arg(&data[..]);
        let raw: Option<Vec<u8>> = self.exec(&key, command).await?;
        self.decode(raw)
    }

    /// `DEL`: remove the key; false when it was already missing.
    pub async fn delete(&self, key: &str) -> Result<bool, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("DEL");
        command.arg(&key);
        let removed: i64 = self.exec(&key, command).await?;
        Ok(removed > 0)
    }

    /// `SCAN` + `DEL`: remove every key matching a glob pattern.
    ///
    /// The pattern is qualified like any key, so it only ever matches inside
    /// this namespace. Returns the number of removed keys, which can undercount
    /// when keys expire mid-scan.
    pub async fn delete_by_pattern(&self, pattern: &str) -> Result<u64, KeyspaceError> {
        let pattern = self.qualify(pattern)?;
        let mut connection = self.connection().await?.clone();
        let started = Instant::now();
        let result = async {
            let mut removed = 0u64;
            let mut cursor = 0u64;
            loop {
                let (next, keys): (u64, Vec<String>) = cmd("SCAN")
                    .arg(cursor)
                    .arg("MATCH")
                    .arg(&pattern)
                    .arg("COUNT")
                    .arg(SCAN_COUNT)
                    .query_async(&mut connection)
                    .await?;
                if !keys.is_empty() {
                    let mut del = cmd("DEL");
                    for key in &keys {
                        del.arg(key);
                    }
                    removed += del.query_async::<u64>(&mut connection).await?;
                }
                if next == 0 {
                    break;
                }
                cursor = next;
            }
            Ok::<_, redis::RedisError>(removed)
        }
        .await;
        self.observe(&pattern, started);
        Ok(result.map_err(Error::from)?)
    }

    /// `EXPIRE`: set a time-to-live in seconds; false when the key is missing.
    pub async fn expire(&self, key: &str, ttl_secs: i64) -> Result<bool, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("EXPIRE");
        command.arg(&key).arg(ttl_secs);
        self.exec(&key, command).await
    }

    /// `TTL`: remaining time-to-live in seconds.
    ///
    /// -2 when the key is missing, -1 when it has no expiry.
    pub async fn ttl(&self, key: &str) -> Result<i64, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("TTL");
        command.arg(&key);
        self.exec(&key, command).await
    }

    /// `INCR`: add one to the stored integer, initializing a missing key to 0
    /// first.
    pub async fn incr(&self, key: &str) -> Result<i64, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("INCR");
        command.arg(&key);
        self.exec(&key, command).await
    }

    /// `INCRBY`: add `delta` to the stored integer.
    pub async fn incr_by(&self, key: &str, delta: i64) -> Result<i64, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("INCRBY");
        command.arg(&key).arg(delta);
        self.exec(&key, command).await
    }

    /// `DECR`: subtract one from the stored integer.
    pub async fn decr(&self, key: &str) -> Result<i64, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("DECR");
        command.arg(&key);
        self.exec(&key, command).await
    }

    /// `DECRBY`: subtract `delta` from the stored integer.
    pub async fn decr_by(&self, key: &str, delta: i64) -> Result<i64, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("DECRBY");
        command.arg(&key).arg(delta);
        self.exec(&key, command).await
    }
}
