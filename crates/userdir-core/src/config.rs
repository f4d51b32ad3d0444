//! Service configuration.

use std::env;
use std::time::Duration;

/// Configuration for the userdir service.
///
/// The table name and per-operation deadline are deployment parameters; the
/// AWS region and credentials are resolved by the standard SDK config chain
/// and are not part of this struct.
#[derive(Debug, Clone)]
pub struct UserDirConfig {
    /// Name of the backing DynamoDB table.
    pub table_name: String,
    /// Deadline applied to each repository operation by the dispatcher.
    pub operation_timeout: Duration,
}

impl UserDirConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "users".to_owned()),
            operation_timeout: Duration::from_secs(env_secs("OPERATION_TIMEOUT_SECS", 10)),
        }
    }
}

impl Default for UserDirConfig {
    fn default() -> Self {
        Self {
            table_name: "users".to_owned(),
            operation_timeout: Duration::from_secs(10),
        }
    }
}

fn env_secs(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
