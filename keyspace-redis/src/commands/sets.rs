//! Set commands.

use keyspace_core::{KeyspaceError, ValueFormat};
use redis::cmd;
use serde::{Serialize, de::DeserializeOwned};

use crate::client::RedisKeyspace;

impl<F> RedisKeyspace<F>
where
    F: ValueFormat,
{
    /// `SADD`: add members; returns how many were newly added.
    pub async fn sadd<T>(&self, key: &str, members: &[T]) -> Result<u64, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("SADD");
        command.arg(&key);
        for member in members {
            let data = self.encode(member)?;
            command.arg(&data[..]);
        }
        self.exec(&key, command).await
    }

    /// `SCARD`: set cardinality, 0 for a missing key.
    pub async fn scard(&self, key: &str) -> Result<u64, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("SCARD");
        command.arg(&key);
        self.exec(&key, command).await
    }

    /// `SISMEMBER`: whether `member` is in the set.
    pub async fn sismember<T>(&self, key: &str, member: &T) -> Result<bool, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let data = self.encode(member)?;
        let mut command = cmd("SISMEMBER");
        command.arg(&key).arg(&data[..]);
        self.exec(&key, command).await
    }

    /// `SMEMBERS`: every member of the set.
    pub async fn smembers<T>(&self, key: &str) -> Result<Vec<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("SMEMBERS");
        command.arg(&key);
        let raw: Vec<Vec<u8>> = self.exec(&key, command).await?;
        raw.iter().map(|data| self.decode_value(data)).collect()
    }

    /// `SPOP`: remove and return a random member.
    pub async fn spop<T>(&self, key: &str) -> Result<Option<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("SPOP");
        command.arg(&key);
        let raw: Option<Vec<u8>> = self.exec(&key, command).await?;
        self.decode(raw)
    }

    /// `SRANDMEMBER`: a random member without removing it.
    pub async fn srandmember<T>(&self, key: &str) -> Result<Option<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("SRANDMEMBER");
        command.arg(&key);
        let raw: Option<Vec<u8>> = self.exec(&key, command).await?;
        self.decode(raw)
    }

    /// `SRANDMEMBER count`: random members without removing them.
    ///
    /// A positive `count` yields distinct members, a negative one may repeat.
    pub async fn srandmember_multiple<T>(
        &self,
        key: &str,
        count: isize,
    ) -> Result<Vec<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("SRANDMEMBER");
        command.arg(&key).arg(count);
        let raw: Vec<Vec<u8>> = self.exec(&key, command).await?;
        raw.iter().map(|data| self.decode_value(data)).collect()
    }

    /// `SREM`: remove members; returns how many were actually removed.
    pub async fn srem<T>(&self, key: &str, members: &[T]) -> Result<u64, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("SREM");
        command.arg(&key);
        for member in members {
            let data = self.encode(member)?;
            command.arg(&data[..]);
        }
        self.exec(&key, command).await
    }
}
