//! Namespaced Redis client.

use std::time::Instant;

use keyspace_core::{
    JsonFormat, KeyspaceConfig, KeyspaceError, Namespace, SlowThreshold, ValueFormat,
};
use redis::{Client, Cmd, FromRedisValue, aio::ConnectionManager};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::OnceCell;
use tracing::trace;

use crate::error::Error;

/// Namespaced facade over the redis-rs client.
///
/// Every logical key is qualified with the resolved [`Namespace`] before it
/// reaches the wire, values are serialized through the configured
/// [`ValueFormat`], and each command's wall-clock latency is checked against
/// the [`SlowThreshold`]. The struct owns no mutable state beyond the lazily
/// created [`ConnectionManager`], so clones are cheap and concurrent use is
/// as safe as the redis-rs client itself.
///
/// [`ConnectionManager`]: redis::aio::ConnectionManager
#[derive(Clone)]
pub struct RedisKeyspace<F = JsonFormat>
where
    F: ValueFormat,
{
    client: Client,
    connection: OnceCell<ConnectionManager>,
    format: F,
    namespace: Namespace,
    slow: SlowThreshold,
}

impl RedisKeyspace<JsonFormat> {
    /// Create a new client with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// use keyspace_redis::RedisKeyspace;
    ///
    /// let keyspace = RedisKeyspace::new().unwrap();
    /// ```
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Creates a new [`RedisKeyspaceBuilder`] with default settings.
    #[must_use]
    pub fn builder() -> RedisKeyspaceBuilder<JsonFormat> {
        RedisKeyspaceBuilder::default()
    }
}

impl<F> RedisKeyspace<F>
where
    F: ValueFormat,
{
    /// Lazily created connection via [`ConnectionManager`].
    ///
    /// [`ConnectionManager`]: redis::aio::ConnectionManager
    pub async fn connection(&self) -> Result<&ConnectionManager, KeyspaceError> {
        let manager = self
            .connection
            .get_or_try_init(|| {
                trace!("initialize new redis connection manager");
                self.client.get_connection_manager()
            })
            .await
            .map_err(Error::from)?;
        Ok(manager)
    }

    /// The namespace this client qualifies keys with.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The slow-command threshold this client reports against.
    pub fn slow_threshold(&self) -> SlowThreshold {
        self.slow
    }

    pub(crate) fn qualify(&self, key: &str) -> Result<String, KeyspaceError> {
        self.namespace.qualify(key)
    }

    pub(crate) fn encode<T>(&self, value: &T) -> Result<bytes::Bytes, KeyspaceError>
    where
        T: Serialize,
    {
        Ok(self.format.serialize(value)?)
    }

    pub(crate) fn decode<T>(&self, data: Option<Vec<u8>>) -> Result<Option<T>, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        data.map(|raw| self.format.deserialize(&raw))
            .transpose()
            .map_err(Into::into)
    }

    pub(crate) fn decode_value<T>(&self, data: &[u8]) -> Result<T, KeyspaceError>
    where
        T: DeserializeOwned,
    {
        Ok(self.format.deserialize(data)?)
    }

    pub(crate) fn observe(&self, key: &str, started: Instant) {
        self.slow.observe(key, started.elapsed());
    }

    /// Issue a single command against the store.
    ///
    /// `key` must already be qualified; it is only used for slow-command
    /// reporting, which fires on the error path too.
    pub(crate) async fn exec<T>(&self, key: &str, command: Cmd) -> Result<T, KeyspaceError>
    where
        T: FromRedisValue,
    {
        let mut connection = self.connection().await?.clone();
        let started = Instant::now();
        let result = command.query_async::<T>(&mut connection).await;
        self.observe(key, started);
        Ok(result.map_err(Error::from)?)
    }
}

/// Builder for [`RedisKeyspace`].
///
/// # Examples
/// ```no_run
/// use keyspace_redis::{BincodeFormat, RedisKeyspace};
///
/// let keyspace = RedisKeyspace::builder()
///     .server("redis://cache.internal/")
///     .namespace("orders")
///     .slow_threshold_ms(25)
///     .value_format(BincodeFormat)
///     .build()
///     .unwrap();
/// ```
pub struct RedisKeyspaceBuilder<F = JsonFormat>
where
    F: ValueFormat,
{
    connection_info: String,
    format: F,
    namespace: Option<String>,
    namespace_enabled: bool,
    app_name: Option<String>,
    slow_threshold_ms: i64,
}

impl Default for RedisKeyspaceBuilder<JsonFormat> {
    fn default() -> Self {
        let config = KeyspaceConfig::default();
        Self {
            connection_info: "redis://127.0.0.1/".to_owned(),
            format: JsonFormat,
            namespace: config.namespace,
            namespace_enabled: config.namespace_enabled,
            app_name: config.app_name,
            slow_threshold_ms: config.slow_threshold_ms,
        }
    }
}

impl<F> RedisKeyspaceBuilder<F>
where
    F: ValueFormat,
{
    /// Set connection info (host, port, database, etc.).
    pub fn server(mut self, connection_info: impl Into<String>) -> Self {
        self.connection_info = connection_info.into();
        self
    }

    /// Set the explicit namespace prefix.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Enable or disable key prefixing entirely.
    pub fn namespace_enabled(mut self, enabled: bool) -> Self {
        self.namespace_enabled = enabled;
        self
    }

    /// Application identity used as the namespace when none is set explicitly.
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Slow-command threshold in milliseconds; zero or negative disables
    /// reporting.
    pub fn slow_threshold_ms(mut self, millis: i64) -> Self {
        self.slow_threshold_ms = millis;
        self
    }

    /// Apply a [`KeyspaceConfig`] wholesale.
    pub fn config(mut self, config: &KeyspaceConfig) -> Self {
        self.namespace = config.namespace.clone();
        self.namespace_enabled = config.namespace_enabled;
        self.app_name = config.app_name.clone();
        self.slow_threshold_ms = config.slow_threshold_ms;
        self
    }

    /// Set the value serialization format.
    pub fn value_format<NewF>(self, format: NewF) -> RedisKeyspaceBuilder<NewF>
    where
        NewF: ValueFormat,
    {
        RedisKeyspaceBuilder {
            connection_info: self.connection_info,
            format,
            namespace: self.namespace,
            namespace_enabled: self.namespace_enabled,
            app_name: self.app_name,
            slow_threshold_ms: self.slow_threshold_ms,
        }
    }

    /// Create the client with the collected settings.
    ///
    /// The namespace is resolved here, once; no connection is opened until
    /// the first command runs.
    pub fn build(self) -> Result<RedisKeyspace<F>, Error> {
        Ok(RedisKeyspace {
            client: Client::open(self.connection_info)?,
            connection: OnceCell::new(),
            format: self.format,
            namespace: Namespace::resolve(
                self.namespace_enabled,
                self.namespace.as_deref(),
                self.app_name.as_deref(),
            ),
            slow: SlowThreshold::from_millis(self.slow_threshold_ms),
        })
    }
}
