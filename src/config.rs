use std::env;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

/// Process-wide configuration, built once in `main` and handed out by
/// reference. Nothing in here mutates after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    pub rate_limits: RateLimitConfig,
}

/// Per-IP thresholds enforced by the reverse proxy in front of this
/// service. Kept here so the edge configuration and the service agree on a
/// single source of truth.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub auth_per_minute: u32,
    pub general_per_minute: u32,
}

impl AppConfig {
    /// Load configuration from the environment, panicking on anything
    /// missing or malformed. Boot is the only acceptable place to die on
    /// bad config.
    pub fn from_env() -> Self {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid port number");

        Self {
            database_url,
            host,
            port,
            jwt: JwtConfig::from_env(),
            rate_limits: RateLimitConfig::from_env(),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl RateLimitConfig {
    fn parse_threshold(key: &str, default: &str) -> u32 {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<u32>()
            .unwrap_or_else(|_| panic!("Invalid {} value", key))
    }

    pub fn from_env() -> Self {
        Self {
            auth_per_minute: Self::parse_threshold("RATE_LIMIT_AUTH_PER_MINUTE", "30"),
            general_per_minute: Self::parse_threshold("RATE_LIMIT_GENERAL_PER_MINUTE", "100"),
        }
    }
}
