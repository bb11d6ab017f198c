//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Wildcard value for `ALLOWED_ORIGINS` meaning "accept any origin".
pub const ORIGIN_WILDCARD: &str = "*";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Bind address for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === CORS Policy ===
    /// Comma-separated list of allowed origins, or "*" for any origin.
    ///
    /// Wide open by default so the frontend can call the backend from
    /// anywhere during development; tighten before deploying.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,

    /// Whether credentialed cross-origin requests are allowed.
    #[serde(default = "default_true")]
    pub cors_allow_credentials: bool,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> String {
    ORIGIN_WILDCARD.to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.allowed_origins.trim().is_empty() {
            return Err("ALLOWED_ORIGINS must not be empty".to_string());
        }

        if !self.allow_any_origin() {
            for origin in self.origin_list() {
                if !origin.starts_with("http://") && !origin.starts_with("https://") {
                    return Err(format!(
                        "ALLOWED_ORIGINS entry {:?} must be an http(s) origin",
                        origin
                    ));
                }
            }
        }

        Ok(())
    }

    /// Whether the wildcard origin policy is in effect.
    pub fn allow_any_origin(&self) -> bool {
        self.allowed_origins.trim() == ORIGIN_WILDCARD
    }

    /// The explicit origin allowlist (empty in wildcard mode).
    pub fn origin_list(&self) -> Vec<String> {
        if self.allow_any_origin() {
            return Vec::new();
        }

        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            cors_allow_credentials: default_true(),
            rust_log: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.allow_any_origin());
        assert!(config.cors_allow_credentials);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn wildcard_yields_empty_origin_list() {
        let config = Config::default();
        assert!(config.origin_list().is_empty());
    }

    #[test]
    fn explicit_origins_are_parsed() {
        let config = Config {
            allowed_origins: "http://localhost:3000, https://workout-bird.app".to_string(),
            ..Config::default()
        };

        assert!(!config.allow_any_origin());
        assert_eq!(
            config.origin_list(),
            vec![
                "http://localhost:3000".to_string(),
                "https://workout-bird.app".to_string()
            ]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_origin() {
        let config = Config {
            allowed_origins: "localhost:3000".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
