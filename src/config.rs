//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! The catalog itself is compiled into the binary and is not configurable.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CORS_ALLOW_ORIGINS` - `*` to accept any origin, or a comma-separated list
//!   of `http(s)://` origins (default: `*`)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export CORS_ALLOW_ORIGINS="https://app.example.com,http://localhost:5173"
//! ```

use anyhow::Result;
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin is accepted and echoed back.
    Any,
    /// Only the listed origins are accepted.
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parses the `CORS_ALLOW_ORIGINS` value.
    ///
    /// `*` (or an empty value) means any origin. Otherwise the value is split
    /// on commas; blank items are skipped.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Self::Any;
        }

        Self::List(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub cors_origins: CorsOrigins,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so loading itself never fails; use
    /// [`Config::validate`] to check the values.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let cors_origins = env::var("CORS_ALLOW_ORIGINS")
            .map(|v| CorsOrigins::parse(&v))
            .unwrap_or(CorsOrigins::Any);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            cors_origins,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a `host:port` socket address
    /// - a CORS origin is not an `http://` or `https://` header value
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let CorsOrigins::List(origins) = &self.cors_origins {
            if origins.is_empty() {
                anyhow::bail!("CORS_ALLOW_ORIGINS must list at least one origin");
            }

            for origin in origins {
                if !origin.starts_with("http://") && !origin.starts_with("https://") {
                    anyhow::bail!(
                        "CORS_ALLOW_ORIGINS entries must start with 'http://' or 'https://', got '{}'",
                        origin
                    );
                }
                if HeaderValue::from_str(origin).is_err() {
                    anyhow::bail!("CORS_ALLOW_ORIGINS entry '{}' is not a valid header value", origin);
                }
            }
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        match &self.cors_origins {
            CorsOrigins::Any => tracing::info!("  CORS origins: any"),
            CorsOrigins::List(origins) => {
                tracing::info!("  CORS origins: {}", origins.join(", "))
            }
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            cors_origins: CorsOrigins::Any,
        }
    }

    #[test]
    fn test_cors_origins_parse() {
        assert_eq!(CorsOrigins::parse("*"), CorsOrigins::Any);
        assert_eq!(CorsOrigins::parse("  "), CorsOrigins::Any);
        assert_eq!(
            CorsOrigins::parse("https://a.example.com, http://localhost:5173,"),
            CorsOrigins::List(vec![
                "https://a.example.com".to_string(),
                "http://localhost:5173".to_string(),
            ])
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "8000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "localhost:8000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8000".to_string();
        assert!(config.validate().is_ok());

        // Test CORS origins
        config.cors_origins = CorsOrigins::List(vec!["example.com".to_string()]);
        assert!(config.validate().is_err());

        config.cors_origins = CorsOrigins::List(vec!["https://example.com\n".to_string()]);
        assert!(config.validate().is_err());

        config.cors_origins = CorsOrigins::List(vec![]);
        assert!(config.validate().is_err());

        config.cors_origins = CorsOrigins::List(vec!["https://example.com".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("CORS_ALLOW_ORIGINS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }

    #[test]
    #[serial]
    fn test_load_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("CORS_ALLOW_ORIGINS", "https://app.example.com");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.log_format, "json");
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec!["https://app.example.com".to_string()])
        );

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("CORS_ALLOW_ORIGINS");
        }
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_bad_format() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "yaml");
        }

        assert!(load_from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("LOG_FORMAT");
        }
    }
}
