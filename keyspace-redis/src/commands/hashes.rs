//! Hash commands.
//!
//! Field identifiers are encoded as plain UTF-8 through
//! [`encode_field`](keyspace_core::encode_field), independent of the value
//! format, so hashes stay addressable when the value format changes.

use std::collections::HashMap;

use keyspace_core::{KeyspaceError, ValueFormat, encode_field};
use redis::cmd;
use serde::{Serialize, de::DeserializeOwned};

use crate::client::RedisKeyspace;

impl<F> RedisKeyspace<F>
where
    F: ValueFormat,
{
    /// `HEXISTS`: whether the field is present in the hash.
    pub async fn hexists(&self, key: &str, field: &str) -> Result<bool, KeyspaceError> {
        let key = self.qualify(key)?;
        let field = encode_field(field)?;
        let mut command = cmd("HEXISTS");
        command.arg(&key).arg(&field[..]);
        self.exec(&key, command).await
    }

    /// `HSET`: write one field, overwriting any previous value.
    pub async fn hset<T>(&self, key: &str, field: &str, value: &T) -> Result<(), KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let field = encode_field(field)?;
        let data = self.encode(value)?;
        let mut command = cmd("HSET");
        command.arg(&key).arg(&field[..]).arg(&data[..]);
        self.exec(&key, command).await
    }

    /// `HSETNX`: write one field only when it does not exist yet.
    pub async fn hset_nx<T>(&self, key: &str, field: &str, value: &T) -> Result<bool, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let field = encode_field(field)?;
        let data = self.encode(value)?;
        let mut command = cmd("HSETNX");
        command.arg(&key).arg(&field[..]).arg(&data[..]);
        self.exec(&key, command).await
    }

    /// `HSET` with multiple field-value pairs, overwriting existing fields.
    pub async fn hset_multiple<T>(
        &self,
        key: &str,
        entries: &[(&str, T)],
    ) -> Result<(), KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("HSET");
        command.arg(&key);
        for (field, value) in entries {
            let field = encode_field(field)?;
            let data = self.encode(value)?;
            command.arg(&field[..]).arg(&data[..]);
        }
        self.exec(&key, command).await
    }

    /// `HGET`: read one field; `None` when key or field is missing.
    pub async fn hget<T>(&self, key: &str, field: &str) -> Result<Option<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let field = encode_field(field)?;
        let mut command = cmd("HGET");
        command.arg(&key).arg(&field[..]);
        let raw: Option<Vec<u8>> = self.exec(&key, command).await?;
        self.decode(raw)
    }

    /// `HGETALL`: read every field of the hash.
    ///
    /// Prefer [`hget_multiple`](Self::hget_multiple) for large hashes; pulling
    /// a whole big hash in one round-trip hurts the server.
    pub async fn hget_all<T>(&self, key: &str) -> Result<HashMap<String, T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("HGETALL");
        command.arg(&key);
        let raw: HashMap<String, Vec<u8>> = self.exec(&key, command).await?;
        raw.into_iter()
            .map(|(field, data)| Ok((field, self.decode_value(&data)?)))
            .collect()
    }

    /// `HMGET`: read several fields; missing fields come back as `None`.
    pub async fn hget_multiple<T>(
        &self,
        key: &str,
        fields: &[&str],
    ) -> Result<Vec<Option<T>>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("HMGET");
        command.arg(&key);
        for field in fields {
            let field = encode_field(field)?;
            command.arg(&field[..]);
        }
        let raw: Vec<Option<Vec<u8>>> = self.exec(&key, command).await?;
        raw.into_iter().map(|data| self.decode(data)).collect()
    }

    /// `HDEL`: remove fields; returns how many were actually removed.
    pub async fn hdel(&self, key: &str, fields: &[&str]) -> Result<u64, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("HDEL");
        command.arg(&key);
        for field in fields {
            let field = encode_field(field)?;
            command.arg(&field[..]);
        }
        self.exec(&key, command).await
    }

    /// `HINCRBY`: add `delta` to an integer field, initializing a missing
    /// field to 0 first.
    pub async fn hincr_by(
        &self,
        key: &str,
        field: &str,
        delta: i64,
    ) -> Result<i64, KeyspaceError> {
        let key = self.qualify(key)?;
        let field = encode_field(field)?;
        let mut command = cmd("HINCRBY");
        command.arg(&key).arg(&field[..]).arg(delta);
        self.exec(&key, command).await
    }
}
