//! Server-side Lua scripting.
//!
//! Scripts address a single qualified key (`KEYS[1]`); extra arguments pass
//! through untouched as `ARGV`. Results come back through
//! [`redis::FromRedisValue`], since a script can return any shape.

use keyspace_core::{KeyspaceError, ValueFormat};
use redis::{FromRedisValue, cmd};

use crate::client::RedisKeyspace;

impl<F> RedisKeyspace<F>
where
    F: ValueFormat,
{
    /// `EVAL`: run a Lua script against one qualified key.
    pub async fn eval<T>(
        &self,
        script: &str,
        key: &str,
        args: &[&str],
    ) -> Result<T, KeyspaceError>
    where
        T: FromRedisValue,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("EVAL");
        command.arg(script).arg(1).arg(&key);
        for arg in args {
            command.arg(arg);
        }
        self.exec(&key, command).await
    }

    /// `EVALSHA`: run a cached script by its SHA-1 digest.
    ///
    /// The digest comes from [`script_load`](Self::script_load); the server
    /// rejects digests it has never seen.
    pub async fn evalsha<T>(
        &self,
        sha1: &str,
        key: &str,
        args: &[&str],
    ) -> Result<T, KeyspaceError>
    where
        T: FromRedisValue,
    {
        let key = self.qualify(key)?;
        let mut command = cmd("EVALSHA");
        command.arg(sha1).arg(1).arg(&key);
        for arg in args {
            command.arg(arg);
        }
        self.exec(&key, command).await
    }

    /// `SCRIPT LOAD`: cache a script on the server without running it.
    ///
    /// Returns the SHA-1 digest to use with [`evalsha`](Self::evalsha).
    pub async fn script_load(&self, script: &str) -> Result<String, KeyspaceError> {
        let mut command = cmd("SCRIPT");
        command.arg("LOAD").arg(script);
        self.exec("SCRIPT LOAD", command).await
    }
}
