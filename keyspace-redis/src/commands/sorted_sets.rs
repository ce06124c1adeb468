//! Sorted-set commands.

use keyspace_core::{KeyspaceError, ValueFormat};
use redis::cmd;
use serde::{Serialize, de::DeserializeOwned};

use crate::client::RedisKeyspace;

impl<F> RedisKeyspace<F>
where
    F: ValueFormat,
{
    /// `ZADD`: add or update a member with its score.
    ///
    /// Returns 1 when the member was newly added, 0 when only its score was
    /// updated.
    pub async fn zadd<T>(&self, key: &str, score: f64, member: &T) -> Result<u64, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let data = self.encode(member)?;
        let mut command = cmd("ZADD");
        command.arg(&key).arg(score).arg(&data[..]);
        self.exec(&key, command).await
    }

    /// `ZCOUNT`: members with a score between `min` and `max`, inclusive.
    pub async fn zcount(&self, key: &str, min: f64, max: f64) -> Result<u64, KeyspaceError> {
        let key = self.qualify(key)?;
        let mut command = cmd("ZCOUNT");
        command.arg(&key).arg(min).arg(max);
        self.exec(&key, command).await
    }

    /// `ZRANGE`: members between rank `start` and `stop`, scores ascending.
    pub async fn zrange<T>(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("ZRANGE");
        command.arg(&key).arg(start).arg(stop);
        let raw: Vec<Vec<u8>> = self.exec(&key, command).await?;
        raw.iter().map(|data| self.decode_value(data)).collect()
    }

    /// `ZRANGE WITHSCORES`: members between rank `start` and `stop` paired
    /// with their scores.
    pub async fn zrange_with_scores<T>(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<(T, f64)>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("ZRANGE");
        command.arg(&key).arg(start).arg(stop).arg("WITHSCORES");
        let raw: Vec<(Vec<u8>, f64)> = self.exec(&key, command).await?;
        raw.iter()
            .map(|(data, score)| Ok((self.decode_value(data)?, *score)))
            .collect()
    }

    /// `ZRANGEBYSCORE`: members with a score between `min` and `max`.
    pub async fn zrange_by_score<T>(
        &self,
        key: &str,
        min: f64,
        max: f64,
    ) -> Result<Vec<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("ZRANGEBYSCORE");
        command.arg(&key).arg(min).arg(max);
        let raw: Vec<Vec<u8>> = self.exec(&key, command).await?;
        raw.iter().map(|data| self.decode_value(data)).collect()
    }

    /// `ZRANGEBYSCORE WITHSCORES`: score-bounded members paired with their
    /// scores.
    pub async fn zrange_by_score_with_scores<T>(
        &self,
        key: &str,
        min: f64,
        max: f64,
    ) -> Result<Vec<(T, f64)>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("ZRANGEBYSCORE");
        command.arg(&key).arg(min).arg(max).arg("WITHSCORES");
        let raw: Vec<(Vec<u8>, f64)> = self.exec(&key, command).await?;
        raw.iter()
            .map(|(data, score)| Ok((self.decode_value(data)?, *score)))
            .collect()
    }

    /// `ZREM`: remove members; returns how many were actually removed.
    pub async fn zrem<T>(&self, key: &str, members: &[T]) -> Result<u64, KeyspaceError>
    where
        T: Serialize,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("ZREM");
        command.arg(&key);
        for member in members {
            let data = self.encode(member)?;
            command.arg(&data[..]);
        }
        self.exec(&key, command).await
    }
}
