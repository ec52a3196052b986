use std::{net::SocketAddr, time::Duration};

use stockfolio_core::constants::DEFAULT_STORAGE_KEY;
use stockfolio_core::errors::{Error, Result};
use stockfolio_core::portfolio::record::{StoreConfig, VersionPolicy};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub storage_key: String,
    pub version_policy: VersionPolicy,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `SF_*` variables, loading a `.env` file first when one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let raw_addr = env_or("SF_LISTEN_ADDR", "127.0.0.1:8088");
        let listen_addr: SocketAddr = raw_addr.parse().map_err(|_| {
            Error::InvalidConfigValue(format!("SF_LISTEN_ADDR '{}' is not a socket address", raw_addr))
        })?;
        let db_path = env_or("SF_DB_PATH", "./db/app.db");
        let storage_key = env_or("SF_STORAGE_KEY", DEFAULT_STORAGE_KEY);
        let version_policy = env_or("SF_VERSION_POLICY", "reject").parse()?;
        let cors_allow = env_or("SF_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("SF_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .unwrap_or(30000);

        Ok(Self {
            listen_addr,
            db_path,
            storage_key,
            version_policy,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            storage_key: self.storage_key.clone(),
            version_policy: self.version_policy,
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
