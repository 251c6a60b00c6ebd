use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONCURRENCY: usize = 5;
pub const DEFAULT_DATABASE_URI: &str = "sqlite://multisig_metadata.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// A signatory is not reminded twice within this window.
pub const DEFAULT_NOTIFICATION_COOLDOWN_SECS: u64 = 24 * 60 * 60;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub indexer: IndexerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct IndexerConfig {
    /// Base url with a `{network}` placeholder.
    #[serde(default = "default_url_template")]
    pub url_template: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Upper bound of concurrent detail lookups per page.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl IndexerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_uri")]
    pub uri: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: default_database_uri(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct NotificationConfig {
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: DEFAULT_NOTIFICATION_COOLDOWN_SECS,
        }
    }
}

impl NotificationConfig {
    pub fn cooldown(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cooldown_secs as i64)
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LogConfig {
    /// `RUST_LOG` style directive, `info` when absent.
    #[serde(default)]
    pub level: Option<String>,
}

fn default_url_template() -> String {
    multisig_indexer::consts::DEFAULT_URL_TEMPLATE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_database_uri() -> String {
    DEFAULT_DATABASE_URI.to_string()
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

fn default_cooldown_secs() -> u64 {
    DEFAULT_NOTIFICATION_COOLDOWN_SECS
}

impl Config {
    pub fn new(config_content: &str) -> Result<Self, crate::ServiceError> {
        let config: Config = multisig_utils::serde_func::serde_yaml_from_str(config_content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), crate::SystemError> {
        if !self
            .indexer
            .url_template
            .contains(multisig_types::constant::NETWORK_PLACEHOLDER)
        {
            return Err(crate::SystemError::InvalidConfig(format!(
                "indexer.url_template `{}` has no {} placeholder",
                self.indexer.url_template,
                multisig_types::constant::NETWORK_PLACEHOLDER
            )));
        }
        if self.indexer.concurrency == 0 {
            return Err(crate::SystemError::InvalidConfig(
                "indexer.concurrency must be at least 1".to_string(),
            ));
        }
        if self.indexer.timeout_secs == 0 {
            return Err(crate::SystemError::InvalidConfig(
                "indexer.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
