use std::env;
use std::str::FromStr;

/// What happens to a user's posts when the account is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthoredPostsPolicy {
    /// Posts stay as they are, still attributed to the removed user.
    #[default]
    Retain,
    /// Posts are deleted together with the account.
    Delete,
    /// Posts stay but the author's name and avatar are scrubbed, on their
    /// posts and on their comments under anyone's post.
    Anonymize,
}

impl FromStr for AuthoredPostsPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(Self::Retain),
            "delete" => Ok(Self::Delete),
            "anonymize" => Ok(Self::Anonymize),
            other => Err(ConfigError::Invalid {
                key: "AUTHORED_POSTS_ON_ACCOUNT_DELETE",
                reason: format!("unknown policy '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub bcrypt_cost: u32,
    pub max_write_attempts: u32,
    pub authored_posts_policy: AuthoredPostsPolicy,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let profile = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{profile}")).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 5000u16)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 20u32)?;

        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", 10u32)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                reason: "must be between 4 and 31".to_string(),
            });
        }

        let max_write_attempts = parse_or(&lookup, "MAX_WRITE_ATTEMPTS", 3u32)?;
        if max_write_attempts == 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_WRITE_ATTEMPTS",
                reason: "must be at least 1".to_string(),
            });
        }

        let authored_posts_policy = match lookup("AUTHORED_POSTS_ON_ACCOUNT_DELETE") {
            Some(value) => value.parse()?,
            None => AuthoredPostsPolicy::default(),
        };

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            bcrypt_cost,
            max_write_attempts,
            authored_posts_policy,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
