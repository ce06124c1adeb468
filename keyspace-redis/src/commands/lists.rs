//! List commands.

use keyspace_core::{KeyspaceError, ValueFormat};
use redis::cmd;
use serde::{Serialize, de::DeserializeOwned};

use crate::client::RedisKeyspace;

impl<F> RedisKeyspace<F>
where
    F: ValueFormat,
{
    /// `LPOP`: remove and return the head element.
    pub async fn lpop<T>(&self, key: &str) -> Result<Option<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("LPOP");
        command.arg(&key);
        let raw: Option<Vec<u8>> = self.exec(&key, command).await?;
        self.decode(raw)
    }

    /// `RPOP`: remove and return the tail element.
    pub async fn rpop<T>(&self, key: &str) -> Result<Option<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("RPOP");
        command.arg(&key);
        let raw: Option<Vec<u8>> = self.exec(&key, command).await?;
        self.decode(raw)
    }

    /// `LPUSH`: push values onto the head; returns the list length.
    pub async fn lpush<T>(&self, key: &str, values: &[T]) -> Result<u64, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("LPUSH");
        command.arg(&key);
        for value in values {
            let data = self.encode(value)?;
            command.arg(&data[..]);
        }
        self.exec(&key, command).await
    }

    /// `LPUSHX`: push onto the head only when the list exists.
    ///
    /// Returns the list length, 0 when the key was missing.
    pub async fn lpush_exists<T>(&self, key: &str, value: &T) -> Result<u64, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let data = self.encode(value)?;
        let mut command = cmd("LPUSHX");
        command.arg(&key).arg(&data[..]);
        self.exec(&key, command).await
    }

    /// `RPUSH`: push values onto the tail; returns the list length.
    pub async fn rpush<T>(&self, key: &str, values: &[T]) -> Result<u64, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("RPUSH");
        command.arg(&key);
        for value in values {
            let data = self.encode(value)?;
            command.arg(&data[..]);
        }
        self.exec(&key, command).await
    }

    /// `RPUSHX`: push onto the tail only when the list exists.
    pub async fn rpush_exists<T>(&self, key: &str, value: &T) -> Result<u64, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let data = self.encode(value)?;
        let mut command = cmd("RPUSHX");
        command.arg(&key).arg(&data[..]);
        self.exec(&key, command).await
    }

    /// `LINDEX`: element at `index`; negative indexes count from the tail.
    pub async fn lindex<T>(&self, key: &str, index: isize) -> Result<Option<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("LINDEX");
        command.arg(&key).arg(index);
        let raw: Option<Vec<u8>> = self.exec(&key, command).await?;
        self.decode(raw)
    }

    /// `LINSERT BEFORE`: insert `value` before the first occurrence of
    /// `pivot`.
    ///
    /// Returns the new length, -1 when the pivot was not found, 0 when the
    /// key was missing.
    pub async fn linsert_before<T>(
        &self,
        key: &str,
        pivot: &T,
        value: &T,
    ) -> Result<i64, KeyspaceError>
    where
        T: Serialize,
    {
        self.linsert(key, "BEFORE", pivot, value).await
    }

    /// `LINSERT AFTER`: insert `value` after the first occurrence of `pivot`.
    pub async fn linsert_after<T>(
        &self,
        key: &str,
        pivot: &T,
        value: &T,
    ) -> Result<i64, KeyspaceError>
    where
        T: Serialize,
    {
        self.linsert(key, "AFTER", pivot, value).await
    }

    async fn linsert<T>(
        &self,
        key: &str,
        position: &str,
        pivot: &T,
        value: &T,
    ) -> Result<i64, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let pivot = self.encode(pivot)?;
        let data = self.encode(value)?;
        let mut command = cmd("LINSERT");
        command
            .arg(&key)
            .arg(position)
            .arg(&pivot[..])
            .arg(&data[..]);
        self.exec(&key, command).await
    }

    /// `LLEN`: list length, 0 for a missing key.
    pub async fn llen(&self, key: &str) -> Result<u64, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("LLEN");
        command.arg(&key);
        self.exec(&key, command).await
    }

    /// `LRANGE`: elements between `start` and `stop`, both inclusive.
    pub async fn lrange<T>(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("LRANGE");
        command.arg(&key).arg(start).arg(stop);
        let raw: Vec<Vec<u8>> = self.exec(&key, command).await?;
        raw.iter().map(|data| self.decode_value(data)).collect()
    }

    /// `LREM`: remove up to `count` occurrences of `value`.
    ///
    /// Positive `count` scans from the head, negative from the tail, zero
    /// removes all occurrences. Returns how many were removed.
    pub async fn lrem<T>(&self, key: &str, count: isize, value: &T) -> Result<u64, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let data = self.encode(value)?;
        let mut command = cmd("LREM");
        command.arg(&key).arg(count).arg(&data[..]);
        self.exec(&key, command).await
    }

    /// `LSET`: overwrite the element at `index`.
    ///
    /// Fails when the index is out of range or the key is missing.
    pub async fn lset<T>(&self, key: &str, index: isize, value: &T) -> Result<(), KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let data = self.encode(value)?;
        let mut command = cmd("LSET");
        command.arg(&key).arg(index).arg(&data[..]);
        self.exec(&key, command).await
    }

    /// `LTRIM`: keep only the elements between `start` and `stop`.
    pub async fn ltrim(&self, key: &str, start: isize, stop: isize) -> Result<(), KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("LTRIM");
        command.arg(&key).arg(start).arg(stop);
        self.exec(&key, command).await
    }
}
