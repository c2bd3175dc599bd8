use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub db_max_connections: u32,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_required = |key: &str| {
            lookup(key).ok_or_else(|| format!("Missing required environment variable: {key}"))
        };
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("CONTACTBOX_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CONTACTBOX_HOST: {e}"))?;

        let port: u16 = env_or("PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let max_body_size: usize = env_or("CONTACTBOX_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid CONTACTBOX_MAX_BODY_SIZE: {e}"))?;

        let db_max_connections: u32 = env_or("CONTACTBOX_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid CONTACTBOX_DB_MAX_CONNECTIONS: {e}"))?;

        let log_level = env_or("CONTACTBOX_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            db_max_connections,
            log_level,
        })
    }
}
