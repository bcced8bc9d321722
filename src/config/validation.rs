use crate::config::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domains cannot be empty and must look like a URL or domain name
/// - HTTP timeout must be positive
/// - Output path cannot be empty
/// - Featured team names cannot be blank
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_domain("API domain", &config.api_domain)?;
    validate_domain("Highlights domain", &config.highlights_domain)?;

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if config.output_path.trim().is_empty() {
        return Err(AppError::config_error("Output path cannot be empty"));
    }

    if config.featured_teams.iter().any(|team| team.trim().is_empty()) {
        return Err(AppError::config_error("Featured team names cannot be blank"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_domain(label: &str, domain: &str) -> Result<(), AppError> {
    if domain.is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }

    if !domain.starts_with("http://")
        && !domain.starts_with("https://")
        && !domain.contains('.')
        && !domain.starts_with("localhost")
    {
        return Err(AppError::config_error(format!(
            "{label} must be a valid URL or domain name"
        )));
    }

    Ok(())
}
