//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Bedrock configuration
    pub bedrock: BedrockConfig,
    /// Generation parameters
    pub generation: GenerationConfig,
    /// Translation provider configuration
    pub translation: TranslationConfig,
    /// Request configuration
    pub request: RequestConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Bedrock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedrockConfig {
    /// AWS region used for runtime and catalog calls
    pub region: String,
    /// Operation timeout in seconds
    pub timeout: u64,
}

/// Generation parameters shared by every model call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

/// Translation provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Translation endpoint base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    /// Maximum request size in bytes
    pub max_request_size: usize,
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Allowed origins for CORS
    pub allowed_origins: Vec<String>,
    /// Whether CORS is enabled
    pub cors_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance from the process environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    ///
    /// `new` passes the process environment; tests pass a map so they never
    /// touch global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let region = ["AWS_REGION", "AWS_DEFAULT_REGION"]
            .iter()
            .find_map(|key| lookup(key).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| "us-east-1".to_string());

        let settings = Self {
            server: ServerConfig {
                host: get("HOST", "0.0.0.0"),
                port: get("PORT", "5000")
                    .parse()
                    .context("Invalid port number")?,
            },
            bedrock: BedrockConfig {
                region,
                timeout: get("BEDROCK_TIMEOUT", "60")
                    .parse()
                    .context("Invalid Bedrock timeout")?,
            },
            generation: GenerationConfig {
                max_tokens: get("GENERATION_MAX_TOKENS", "512")
                    .parse()
                    .context("Invalid generation max tokens")?,
                temperature: get("GENERATION_TEMPERATURE", "0.7")
                    .parse()
                    .context("Invalid generation temperature")?,
            },
            translation: TranslationConfig {
                base_url: get("TRANSLATE_BASE_URL", "https://translate.googleapis.com"),
                timeout: get("TRANSLATE_TIMEOUT", "15")
                    .parse()
                    .context("Invalid translation timeout")?,
            },
            request: RequestConfig {
                max_request_size: get("MAX_REQUEST_SIZE", "1048576")
                    .parse()
                    .context("Invalid maximum request size")?,
            },
            security: SecurityConfig {
                allowed_origins: get("ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                cors_enabled: get("CORS_ENABLED", "true")
                    .parse()
                    .context("Invalid CORS enabled flag")?,
            },
            logging: LoggingConfig {
                level: get("RUST_LOG", "info"),
                format: get("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        if self.bedrock.region.contains(char::is_whitespace) {
            anyhow::bail!("AWS region cannot contain whitespace characters");
        }

        if self.bedrock.timeout == 0 || self.translation.timeout == 0 {
            anyhow::bail!("Timeout values cannot be 0");
        }

        if self.generation.max_tokens == 0 {
            anyhow::bail!("Generation max tokens cannot be 0");
        }

        if !(0.0..=1.0).contains(&self.generation.temperature) {
            anyhow::bail!("Generation temperature must be between 0.0 and 1.0");
        }

        if !self.translation.base_url.starts_with("http") {
            anyhow::bail!("Invalid translation base URL format, should start with 'http'");
        }

        if self.request.max_request_size == 0 {
            anyhow::bail!("Maximum request size cannot be 0");
        }

        // RUST_LOG may carry directives such as "lingosaver=debug"; only the
        // plain form is checked here.
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !self.logging.level.contains('=') && !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Bedrock operation timeout
    pub fn bedrock_timeout(&self) -> Duration {
        Duration::from_secs(self.bedrock.timeout)
    }

    /// Translation request timeout
    pub fn translation_timeout(&self) -> Duration {
        Duration::from_secs(self.translation.timeout)
    }

    /// Listen address in `host:port` form
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            bedrock: BedrockConfig {
                region: "us-east-1".to_string(),
                timeout: 60,
            },
            generation: GenerationConfig {
                max_tokens: 512,
                temperature: 0.7,
            },
            translation: TranslationConfig {
                base_url: "https://translate.googleapis.com".to_string(),
                timeout: 15,
            },
            request: RequestConfig {
                max_request_size: 1_048_576,
            },
            security: SecurityConfig {
                allowed_origins: vec!["*".to_string()],
                cors_enabled: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
        }
    }
}
