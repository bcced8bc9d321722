use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Every field has a default so a missing or partial config file is fine.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the schedule API. Should include https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Base URL of the highlights API. Usually the same host as `api_domain`.
    #[serde(default = "default_api_domain")]
    pub highlights_domain: String,
    /// Where the ranked feed is written.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Team and nation names whose matches are ranked first.
    #[serde(default = "default_featured_teams")]
    pub featured_teams: Vec<String>,
    /// Maximum number of entries kept in the feed. Zero keeps everything.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

fn default_output_path() -> String {
    constants::DEFAULT_OUTPUT_PATH.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    constants::DEFAULT_USER_AGENT.to_string()
}

fn default_featured_teams() -> Vec<String> {
    constants::DEFAULT_FEATURED_TEAMS
        .iter()
        .map(|team| team.to_string())
        .collect()
}

fn default_max_entries() -> usize {
    constants::DEFAULT_MAX_ENTRIES
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            highlights_domain: default_api_domain(),
            output_path: default_output_path(),
            http_timeout_seconds: default_http_timeout(),
            user_agent: default_user_agent(),
            featured_teams: default_featured_teams(),
            max_entries: default_max_entries(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `HIGHLIGHTS_API_DOMAIN` - Override schedule API domain
    /// - `HIGHLIGHTS_HIGHLIGHTS_DOMAIN` - Override highlights API domain
    /// - `HIGHLIGHTS_OUTPUT_PATH` - Override feed output path
    /// - `HIGHLIGHTS_LOG_FILE` - Override log file path
    /// - `HIGHLIGHTS_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable or invalid
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of the current values.
    /// Unparsable timeout values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(highlights_domain) = std::env::var(env_vars::HIGHLIGHTS_DOMAIN) {
            self.highlights_domain = highlights_domain;
        }

        if let Ok(output_path) = std::env::var(env_vars::OUTPUT_PATH) {
            self.output_path = output_path;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Notes when defaults are in use because no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not found, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Schedule API:");
        println!("{}", config.api_domain);
        println!("────────────────────────────────────");
        println!("Highlights API:");
        println!("{}", config.highlights_domain);
        println!("────────────────────────────────────");
        println!("Output Path:");
        println!("{}", config.output_path);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Max Entries:");
        if config.max_entries == 0 {
            println!("unlimited");
        } else {
            println!("{}", config.max_entries);
        }
        println!("────────────────────────────────────");
        println!("Featured Teams:");
        println!("{}", config.featured_teams.join(", "));
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures both API
    /// domains carry an https:// prefix.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_domain: ensure_https(&self.api_domain),
            highlights_domain: ensure_https(&self.highlights_domain),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn ensure_https(domain: &str) -> String {
    if domain.starts_with("https://") || domain.starts_with("http://localhost") {
        domain.to_string()
    } else {
        format!("https://{}", domain.trim_start_matches("http://"))
    }
}
