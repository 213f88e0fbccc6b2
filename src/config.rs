//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8080;
    pub const DEV_TEMPLATE_DIR: &str = "templates";
    pub const DEV_STATIC_DIR: &str = "static";
    pub const DEV_SESSION_SECRET: &str = "dev-session-secret-do-not-use-in-production";
    pub const SESSION_COOKIE: &str = "site_session";
    pub const LOGIN_URL: &str = "/login";
    pub const SESSION_TTL_SECS: u64 = 86_400; // 1 day
    pub const MAX_SESSION_TTL_SECS: u64 = 365 * 86_400;
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Session verification settings shared with the login subsystem.
///
/// Registered as app data so the `CurrentUser` extractor can reach it.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// HS256 secret used to sign session tokens
    pub secret: SecretString,
    /// Name of the cookie carrying the session token
    pub cookie_name: String,
    /// Where unauthenticated callers are sent. `None` answers 401 instead.
    pub login_url: Option<String>,
    /// Lifetime of newly issued session tokens
    pub ttl_secs: u64,
    /// Mark issued cookies `Secure`
    pub secure_cookies: bool,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory holding the HTML templates
    pub template_dir: PathBuf,
    /// Directory for static assets, served under `/static`
    pub static_dir: PathBuf,
    /// Session cookie verification
    pub session: SessionSettings,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `SITE_HOST`: Server host (default: 127.0.0.1)
    /// - `SITE_PORT`: Server port (default: 8080)
    /// - `SITE_TEMPLATE_DIR`: Template directory (default: templates)
    /// - `SITE_STATIC_DIR`: Static asset directory (default: static)
    /// - `SITE_SESSION_SECRET`: Session signing secret (required in production)
    /// - `SITE_SESSION_COOKIE`: Session cookie name (default: site_session)
    /// - `SITE_LOGIN_URL`: Login page for redirects (default: /login, empty disables)
    /// - `SITE_SESSION_TTL_SECS`: Lifetime of issued sessions (default: 1 day)
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_str = env::var("RUST_ENV").map_err(|_| ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = env::var("SITE_HOST").unwrap_or_else(|_| defaults::DEV_HOST.to_string());

        let port = env::var("SITE_PORT")
            .unwrap_or_else(|_| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("SITE_PORT must be a valid port number"))?;

        let template_dir = env::var("SITE_TEMPLATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(defaults::DEV_TEMPLATE_DIR));

        let static_dir = env::var("SITE_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(defaults::DEV_STATIC_DIR));

        let secret = match env::var("SITE_SESSION_SECRET") {
            Ok(s) => s,
            Err(_) if environment.is_development() => defaults::DEV_SESSION_SECRET.to_string(),
            Err(_) => return Err(ConfigError::MissingEnvVar("SITE_SESSION_SECRET")),
        };

        let cookie_name = env::var("SITE_SESSION_COOKIE")
            .unwrap_or_else(|_| defaults::SESSION_COOKIE.to_string());

        let login_url = match env::var("SITE_LOGIN_URL") {
            Ok(url) if url.trim().is_empty() => None,
            Ok(url) => Some(url),
            Err(_) => Some(defaults::LOGIN_URL.to_string()),
        };

        let ttl_secs = parse_session_ttl(
            &env::var("SITE_SESSION_TTL_SECS")
                .unwrap_or_else(|_| defaults::SESSION_TTL_SECS.to_string()),
        )?;

        let config = Config {
            environment,
            host,
            port,
            template_dir,
            static_dir,
            session: SessionSettings {
                secret: SecretString::from(secret),
                cookie_name,
                login_url,
                ttl_secs,
                secure_cookies: environment.is_production(),
            },
        };

        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate that production configuration does not use development defaults.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let secret = self.session.secret.expose_secret();
        if secret == defaults::DEV_SESSION_SECRET {
            errors.push(
                "SITE_SESSION_SECRET is using development default. Set the secret shared with the login service."
                    .to_string(),
            );
        } else if secret.len() < 32 {
            errors.push("SITE_SESSION_SECRET must be at least 32 characters.".to_string());
        }

        if self.session.cookie_name.trim().is_empty() {
            errors.push("SITE_SESSION_COOKIE must not be empty.".to_string());
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

/// Parse a session lifetime in seconds, between 1 and `MAX_SESSION_TTL_SECS`.
pub fn parse_session_ttl(value: &str) -> Result<u64, ConfigError> {
    let ttl = value.trim().parse::<u64>().map_err(|_| {
        ConfigError::InvalidValue("SITE_SESSION_TTL_SECS must be a valid number")
    })?;

    if ttl == 0 || ttl > defaults::MAX_SESSION_TTL_SECS {
        return Err(ConfigError::InvalidValue(
            "SITE_SESSION_TTL_SECS must be between 1 and 31536000 (one year)",
        ));
    }

    Ok(ttl)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
