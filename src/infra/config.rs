//! Centralized configuration (environment variables + defaults).
//!
//! Call `dotenv::dotenv()` before reading so a local `.env` file is honoured.

use anyhow::Context;

/// SQLite file used when `DATABASE_URL` is not set.
pub fn db_path() -> String {
    std::env::var("DB_PATH").unwrap_or_else(|_| "./data.db".to_string())
}

/// Connection URL. `DATABASE_URL` wins over `DB_PATH`.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| format!("sqlite://{}", db_path()))
}

/// Pool size for file-backed databases.
pub fn db_max_connections() -> anyhow::Result<u32> {
    parse_var("DB_MAX_CONNECTIONS", 5)
}

pub fn port() -> anyhow::Result<u16> {
    parse_var("PORT", 3001)
}

pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string())
}

/// `development` unless `APP_ENV` says otherwise.
pub fn app_env() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} must be a valid number (got '{}')", name, v)),
        Err(_) => Ok(default),
    }
}
