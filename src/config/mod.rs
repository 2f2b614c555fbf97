//! Configuration management module
//!
//! Responsible for loading the immutable service settings from environment variables.

pub mod settings;

pub use settings::{
    BedrockConfig, GenerationConfig, LoggingConfig, RequestConfig, SecurityConfig, ServerConfig,
    Settings, TranslationConfig,
};
