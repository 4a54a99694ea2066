use dotenv::dotenv;
use dotenv::from_path;
use std::env;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("Failed to load .env file from path {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub api_host: String,
    pub api_port: u16,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub seed_sample_data: bool,
}

const MIN_SECRET_LEN: usize = 16;
/// Ten years.
const MAX_TOKEN_TTL_HOURS: i64 = 87_600;

impl Config {
    /// Load configuration from a specified `.env` file path or default to the root `.env` file.
    ///
    /// Values already present in the process environment win over the file.
    pub fn from_env(env_path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = env_path {
            from_path(path).map_err(|e| ConfigError::EnvFile {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        } else {
            dotenv().ok();
        }

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.trim().len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                var: "JWT_SECRET",
                reason: format!("must be at least {} characters", MIN_SECRET_LEN),
            });
        }

        let api_port = match env::var("API_PORT").or_else(|_| env::var("PORT")) {
            Ok(raw) => parse_var("API_PORT", &raw)?,
            Err(_) => 3001,
        };

        let bcrypt_cost: u32 = parse_or("BCRYPT_COST", 10)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                var: "BCRYPT_COST",
                reason: "must be between 4 and 31".to_string(),
            });
        }

        let token_ttl_hours: i64 = parse_or("TOKEN_TTL_HOURS", 168)?;
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&token_ttl_hours) {
            return Err(ConfigError::Invalid {
                var: "TOKEN_TTL_HOURS",
                reason: format!("must be between 1 and {}", MAX_TOKEN_TTL_HOURS),
            });
        }

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://dashboard.db?mode=rwc".to_string()),
            database_max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 5)?,
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port,
            jwt_secret,
            token_ttl_hours,
            bcrypt_cost,
            seed_sample_data: parse_or("SEED_SAMPLE_DATA", true)?,
        })
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    pub fn log_summary(&self) {
        tracing::info!("📋 Configuration loaded:");
        tracing::info!("  🗄️  Database: {}", self.database_url);
        tracing::info!("  🌐 API Server: {}", self.api_address());
        tracing::info!("  🔑 Session TTL: {}h", self.token_ttl_hours);
        tracing::info!("  🧂 bcrypt cost: {}", self.bcrypt_cost);
        tracing::info!("  🌱 Seed sample data: {}", self.seed_sample_data);
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}

fn parse_or<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(raw) => parse_var(var, &raw),
        Err(_) => Ok(default),
    }
}
