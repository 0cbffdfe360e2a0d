use crate::constants::{self, endpoints, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Every upstream endpoint and the output location live here so the
/// pipeline can be pointed at fixtures without touching global state.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Published CSV export of the game schedule.
    pub schedule_csv_url: String,
    /// Published CSV export of the team roster.
    pub roster_csv_url: String,
    /// Base URL of the karma statistics API, without trailing slash.
    pub stats_api_base: String,
    /// CORS relay endpoint; the statistics URL is passed in its `url` query parameter.
    pub proxy_url: String,
    /// Where the game summary JSON is written.
    pub output_path: String,
    /// Pause after each player statistics call, in milliseconds.
    pub player_delay_ms: u64,
    /// Pause after each game, in milliseconds.
    pub game_delay_ms: u64,
    /// HTTP timeout in seconds for every outbound request.
    pub http_timeout_seconds: u64,
    /// Match roster teams to schedule teams ignoring surrounding whitespace and case.
    pub normalize_team_names: bool,
    /// Listen address for the update endpoint.
    pub bind_address: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schedule_csv_url: endpoints::SCHEDULE_CSV_URL.to_string(),
            roster_csv_url: endpoints::ROSTER_CSV_URL.to_string(),
            stats_api_base: endpoints::STATS_API_BASE.to_string(),
            proxy_url: endpoints::PROXY_URL.to_string(),
            output_path: constants::DEFAULT_OUTPUT_PATH.to_string(),
            player_delay_ms: constants::DEFAULT_PLAYER_DELAY_MS,
            game_delay_ms: constants::DEFAULT_GAME_DELAY_MS,
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
            normalize_team_names: false,
            bind_address: constants::DEFAULT_BIND_ADDRESS.to_string(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to built-in defaults when no file exists.
    /// Environment variables override file values.
    ///
    /// # Environment Variables
    /// - `KARMA_LEAGUE_SCHEDULE_URL` - Override schedule CSV URL
    /// - `KARMA_LEAGUE_ROSTER_URL` - Override roster CSV URL
    /// - `KARMA_LEAGUE_STATS_API` - Override statistics API base
    /// - `KARMA_LEAGUE_PROXY_URL` - Override CORS relay
    /// - `KARMA_LEAGUE_OUTPUT` - Override output file path
    /// - `KARMA_LEAGUE_LOG_FILE` - Override log file path
    /// - `KARMA_LEAGUE_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `KARMA_LEAGUE_BIND` - Override listen address
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

    /// Overrides fields from `KARMA_LEAGUE_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        let overrides = [
            (env_vars::SCHEDULE_URL, &mut self.schedule_csv_url),
            (env_vars::ROSTER_URL, &mut self.roster_csv_url),
            (env_vars::STATS_API, &mut self.stats_api_base),
            (env_vars::PROXY_URL, &mut self.proxy_url),
            (env_vars::OUTPUT, &mut self.output_path),
            (env_vars::BIND, &mut self.bind_address),
        ];
        for (var, field) in overrides {
            if let Ok(value) = std::env::var(var) {
                *field = value;
            }
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

    pub fn player_delay(&self) -> Duration {
        Duration::from_millis(self.player_delay_ms)
    }

    pub fn game_delay(&self) -> Duration {
        Duration::from_millis(self.game_delay_ms)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using built-in defaults)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Schedule CSV:");
        println!("{}", config.schedule_csv_url);
        println!("Roster CSV:");
        println!("{}", config.roster_csv_url);
        println!("────────────────────────────────────");
        println!("Statistics API:");
        println!("{}", config.stats_api_base);
        println!("CORS Relay:");
        println!("{}", config.proxy_url);
        println!("────────────────────────────────────");
        println!("Output File:");
        println!("{}", config.output_path);
        println!("────────────────────────────────────");
        println!("Delays:");
        println!(
            "{} ms per player, {} ms per game",
            config.player_delay_ms, config.game_delay_ms
        );
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Listen Address:");
        println!("{}", config.bind_address);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/karma_league.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it doesn't exist.
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
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        for var in [
            env_vars::SCHEDULE_URL,
            env_vars::ROSTER_URL,
            env_vars::STATS_API,
            env_vars::PROXY_URL,
            env_vars::OUTPUT,
            env_vars::LOG_FILE,
            env_vars::HTTP_TIMEOUT,
            env_vars::BIND,
        ] {
            unsafe { std::env::remove_var(var) };
        }
    }

    #[tokio::test]
    async fn test_config_load_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
schedule_csv_url = "https://sheets.example.com/schedule.csv"
player_delay_ms = 0
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(
            config.schedule_csv_url,
            "https://sheets.example.com/schedule.csv"
        );
        assert_eq!(config.player_delay_ms, 0);
        assert_eq!(config.roster_csv_url, endpoints::ROSTER_CSV_URL);
        assert_eq!(config.game_delay_ms, constants::DEFAULT_GAME_DELAY_MS);
        assert_eq!(config.output_path, "public/data.json");
        assert!(!config.normalize_team_names);
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "player_delay_ms = \"fast\"")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("karma_league").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            output_path: "/srv/www/data.json".to_string(),
            player_delay_ms: 250,
            normalize_team_names: true,
            log_file_path: Some("/var/log/karma.log".to_string()),
            ..Config::default()
        };
        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();
        assert!(config_path.exists());

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[tokio::test]
    async fn test_config_save_omits_unset_log_path() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        Config::default()
            .save_to_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(content.contains("proxy_url"));
        assert!(!content.contains("log_file_path"));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::OUTPUT, "/tmp/karma/data.json");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
            std::env::set_var(env_vars::PROXY_URL, "http://127.0.0.1:9999/get");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        assert_eq!(config.output_path, "/tmp/karma/data.json");
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.proxy_url, "http://127.0.0.1:9999/get");
        assert_eq!(config.schedule_csv_url, endpoints::SCHEDULE_CSV_URL);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_override_ignores_unparseable_timeout() {
        clear_env();
        unsafe { std::env::set_var(env_vars::HTTP_TIMEOUT, "soon") };

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );

        clear_env();
    }

    #[test]
    fn test_delays_as_durations() {
        let config = Config {
            player_delay_ms: 500,
            game_delay_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.player_delay(), Duration::from_millis(500));
        assert_eq!(config.game_delay(), Duration::ZERO);
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("karma_league"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("karma_league"));
        assert!(log_dir_path.ends_with("logs"));
    }
}
