use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Log level used when `APP_LOG_LEVEL` is unset. Only development reports
    /// every lookup and booking; other stages keep to rejections and failures.
    pub fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "info",
            Self::Test | Self::Production => "warn",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub store: StoreConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = env::var("APP_ENV")
            .map(|value| AppEnvironment::parse(&value))
            .unwrap_or(AppEnvironment::Development);

        let data_dir = env::var("RESERVATIONS_DATA_DIR").unwrap_or_else(|_| ".".to_string());
        let store = StoreConfig {
            data_dir: PathBuf::from(data_dir),
            hotels_file: file_name_var("HOTELS_FILE", StoreConfig::DEFAULT_HOTELS_FILE)?,
            customers_file: file_name_var("CUSTOMERS_FILE", StoreConfig::DEFAULT_CUSTOMERS_FILE)?,
            reservations_file: file_name_var(
                "RESERVATIONS_FILE",
                StoreConfig::DEFAULT_RESERVATIONS_FILE,
            )?,
        };

        let log_level = env::var("APP_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            store,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn file_name_var(key: &'static str, default: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyFileName { key }),
        Ok(value) => Ok(value.trim().to_string()),
        Err(_) => Ok(default.to_string()),
    }
}

/// Where the three flat-file stores live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub hotels_file: String,
    pub customers_file: String,
    pub reservations_file: String,
}

impl StoreConfig {
    pub const DEFAULT_HOTELS_FILE: &'static str = "hotels.json";
    pub const DEFAULT_CUSTOMERS_FILE: &'static str = "customers.json";
    pub const DEFAULT_RESERVATIONS_FILE: &'static str = "reservations.json";

    /// Default file names rooted at `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            hotels_file: Self::DEFAULT_HOTELS_FILE.to_string(),
            customers_file: Self::DEFAULT_CUSTOMERS_FILE.to_string(),
            reservations_file: Self::DEFAULT_RESERVATIONS_FILE.to_string(),
        }
    }

    pub fn hotels_path(&self) -> PathBuf {
        self.data_dir.join(&self.hotels_file)
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(&self.customers_file)
    }

    pub fn reservations_path(&self) -> PathBuf {
        self.data_dir.join(&self.reservations_file)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyFileName { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyFileName { key } => {
                write!(f, "{key} must name a file when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
