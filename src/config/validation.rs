use crate::config::Config;
use crate::error::AppError;
use std::net::SocketAddr;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Every upstream URL must be non-empty and use http:// or https://
/// - Output path cannot be empty
/// - HTTP timeout must be at least one second
/// - Bind address must parse as a socket address
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_url("schedule_csv_url", &config.schedule_csv_url)?;
    validate_url("roster_csv_url", &config.roster_csv_url)?;
    validate_url("stats_api_base", &config.stats_api_base)?;
    validate_url("proxy_url", &config.proxy_url)?;

    if config.output_path.trim().is_empty() {
        return Err(AppError::config_error("Output path cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        AppError::config_error(format!(
            "Invalid bind address '{}': {e}",
            config.bind_address
        ))
    })?;

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

fn validate_url(field: &str, url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_empty_url() {
        let config = Config {
            roster_csv_url: String::new(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("roster_csv_url cannot be empty"));
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let config = Config {
            proxy_url: "api.allorigins.win/get".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("proxy_url must start with"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = Config {
            http_timeout_seconds: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        let config = Config {
            bind_address: "localhost".to_string(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid bind address"));
    }

    #[test]
    fn test_rejects_blank_output_path() {
        let config = Config {
            output_path: "  ".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_creates_missing_log_directory() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("karma.log");
        let config = Config {
            log_file_path: Some(log_path.to_string_lossy().to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }
}
