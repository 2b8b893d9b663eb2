use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::auth::parse_expires_in_ms;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://bolaquent.db";
const DEFAULT_SESSION_SECRET: &str = "dev-secret-key-change-in-production";
const DEFAULT_SESSION_EXPIRES_IN: &str = "24h";
pub const DEFAULT_TIER: i64 = 3;
pub const MIN_TIER: i64 = 1;
pub const MAX_TIER: i64 = 6;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub database_url: String,
    pub session_secret: String,
    pub session_ttl_ms: i64,
    pub default_tier: i64,
    pub practice_session_size: Option<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            session_secret: DEFAULT_SESSION_SECRET.to_string(),
            session_ttl_ms: 24 * 60 * 60 * 1000,
            default_tier: DEFAULT_TIER,
            practice_session_size: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let host = std::env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(defaults.host);

        let log_level = std::env::var("RUST_LOG").unwrap_or(defaults.log_level);

        let database_url = non_empty_var("DATABASE_URL").unwrap_or(defaults.database_url);

        let session_secret = non_empty_var("SESSION_SECRET").unwrap_or(defaults.session_secret);

        let expires_in = non_empty_var("SESSION_EXPIRES_IN")
            .unwrap_or_else(|| DEFAULT_SESSION_EXPIRES_IN.to_string());
        let session_ttl_ms = parse_expires_in_ms(&expires_in).unwrap_or(defaults.session_ttl_ms);

        let default_tier = std::env::var("DEFAULT_TIER")
            .ok()
            .and_then(|value| value.parse::<i64>().ok())
            .filter(|tier| (MIN_TIER..=MAX_TIER).contains(tier))
            .unwrap_or(defaults.default_tier);

        let practice_session_size = std::env::var("PRACTICE_SESSION_SIZE")
            .ok()
            .and_then(|value| value.parse::<i64>().ok())
            .filter(|size| *size > 0);

        Self {
            host,
            port,
            log_level,
            database_url,
            session_secret,
            session_ttl_ms,
            default_tier,
            practice_session_size,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.session_secret == DEFAULT_SESSION_SECRET
    }
}

/// Session size used when a tier row carries no `words_per_session`.
pub fn default_words_per_session(tier_id: i64) -> i64 {
    match tier_id {
        1 => 5,
        2 => 8,
        3 => 12,
        4 => 15,
        5 => 20,
        6 => 25,
        _ => 10,
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_binds_all_interfaces() {
        let config = Config::default();
        assert_eq!(config.bind_addr().port(), 5000);
        assert!(config.uses_default_secret());
    }

    #[test]
    fn words_per_session_follows_tier_table() {
        assert_eq!(default_words_per_session(1), 5);
        assert_eq!(default_words_per_session(6), 25);
        assert_eq!(default_words_per_session(42), 10);
    }
}
