use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except `JWT_SECRET` have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Path of the JSON store file (default: `data/database.json`).
    pub data_file: PathBuf,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Username for the bootstrapped chef account (default: `chef`).
    pub chef_username: String,
    /// Password for the bootstrapped chef account. When unset, no chef
    /// account is created at startup.
    pub chef_password: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `DATA_FILE`            | `data/database.json`    |
    /// | `CHEF_USERNAME`        | `chef`                  |
    /// | `CHEF_PASSWORD`        | -- (bootstrap skipped)  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let data_file = std::env::var("DATA_FILE")
            .unwrap_or_else(|_| "data/database.json".into())
            .into();

        let chef_username = std::env::var("CHEF_USERNAME").unwrap_or_else(|_| "chef".into());
        let chef_password = std::env::var("CHEF_PASSWORD").ok().filter(|s| !s.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_file,
            jwt: JwtConfig::from_env(),
            chef_username,
            chef_password,
        }
    }
}
