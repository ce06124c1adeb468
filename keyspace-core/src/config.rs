//! Facade configuration, read once at startup.

use serde::{Deserialize, Serialize};

use crate::key::Namespace;
use crate::observe::{DEFAULT_SLOW_THRESHOLD_MS, SlowThreshold};

/// Configuration for a keyspace client.
///
/// All values are resolved once when the client is built; nothing is looked up
/// from the ambient environment afterwards. The struct deserializes from any
/// serde source with per-field defaults, so partial configuration files work.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct KeyspaceConfig {
    /// Explicit namespace; blank values fall back to `app_name`.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Disables key prefixing entirely when false.
    #[serde(default = "default_namespace_enabled")]
    pub namespace_enabled: bool,

    /// Application identity used when `namespace` is blank.
    #[serde(default)]
    pub app_name: Option<String>,

    /// Slow-command threshold in milliseconds; zero or negative disables
    /// slow-command reporting.
    #[serde(default = "default_slow_threshold_ms")]
    pub slow_threshold_ms: i64,
}

fn default_namespace_enabled() -> bool {
    true
}

fn default_slow_threshold_ms() -> i64 {
    DEFAULT_SLOW_THRESHOLD_MS
}

impl Default for KeyspaceConfig {
    fn default() -> Self {
        Self {
            namespace: None,
            namespace_enabled: default_namespace_enabled(),
            app_name: None,
            slow_threshold_ms: default_slow_threshold_ms(),
        }
    }
}

impl KeyspaceConfig {
    /// Resolve the immutable namespace this configuration describes.
    pub fn resolve_namespace(&self) -> Namespace {
        Namespace::resolve(
            self.namespace_enabled,
            self.namespace.as_deref(),
            self.app_name.as_deref(),
        )
    }

    /// The slow-command threshold this configuration describes.
    pub fn slow_threshold(&self) -> SlowThreshold {
        SlowThreshold::from_millis(self.slow_threshold_ms)
    }
}
