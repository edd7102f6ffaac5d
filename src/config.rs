use serde::{Deserialize, Serialize};
use std::env;

/// Process configuration, read once at startup and held by `AppState`.
///
/// Constructed explicitly in `main` and passed down; nothing in the crate
/// reads the environment after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Login gate secret. Unset means the login endpoint reports the
    /// server as not configured.
    pub admin_password: Option<String>,
    /// Opaque key required in `x-api-key` on every data route.
    /// Unset means open mode: all requests are allowed (dev convenience).
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub query_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    fn defaults() -> Self {
        Self {
            server: ServerConfig { port: 3000 },
            auth: AuthConfig { admin_password: None, api_key: None },
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 10,
                acquire_timeout_secs: 5,
                query_timeout_secs: 10,
            },
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_port() {
            self.server.port = v;
        }
        if let Ok(v) = env::var("ADMIN_PASSWORD") {
            self.auth.admin_password = non_empty(v);
        }
        if let Ok(v) = env::var("APP_API_KEY") {
            self.auth.api_key = non_empty(v);
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            self.database.acquire_timeout_secs =
                v.parse().unwrap_or(self.database.acquire_timeout_secs);
        }
        if let Ok(v) = env::var("DATABASE_QUERY_TIMEOUT_SECS") {
            self.database.query_timeout_secs =
                v.parse().unwrap_or(self.database.query_timeout_secs);
        }
        self
    }
}

/// Allow tests or deployments to override port via env
fn env_port() -> Option<u16> {
    env::var("TRACKBASE_PORT")
        .ok()
        .or_else(|| env::var("PORT").ok())
        .and_then(|s| s.parse().ok())
}

fn non_empty(v: String) -> Option<String> {
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}
