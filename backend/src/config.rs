//! Configuration management for the HeatGuard API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with HEATGUARD__ prefix

use config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use shared::RiskThresholds;

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// OpenWeather API configuration
    pub weather: WeatherConfig,

    /// Risk classification policy
    pub risk: RiskConfig,

    /// Dashboard defaults
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WeatherConfig {
    /// OpenWeather API key; empty disables forecast and search
    pub api_key: String,

    /// 5-day/3-hour forecast endpoint
    pub forecast_url: String,

    /// Direct geocoding endpoint
    pub geocoding_url: String,

    /// Forecast request timeout in seconds
    pub timeout_secs: u64,

    /// Geocoding request timeout in seconds
    pub geocoding_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RiskConfig {
    pub extreme_temperature_c: f64,
    pub high_humidity_percent: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DashboardConfig {
    /// Number of highest-risk districts listed on the dashboard
    pub top_n: usize,
}

impl RiskConfig {
    pub fn thresholds(&self) -> RiskThresholds {
        RiskThresholds {
            extreme_temperature_c: self.extreme_temperature_c,
            high_humidity_percent: self.high_humidity_percent,
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("HEATGUARD_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let defaults = Config {
            environment: environment.clone(),
            ..Config::default()
        };

        let config: Config = config::Config::builder()
            // Start with default values
            .add_source(config::Config::try_from(&defaults)?)
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (HEATGUARD__ prefix)
            .add_source(
                Environment::with_prefix("HEATGUARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.risk
            .thresholds()
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid risk policy: {}", e)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
            risk: RiskConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            // Older deployments only set OPENWEATHER_API_KEY
            api_key: std::env::var("OPENWEATHER_API_KEY")
                .map(|k| k.trim().to_string())
                .unwrap_or_default(),
            forecast_url: "https://api.openweathermap.org/data/2.5/forecast".to_string(),
            geocoding_url: "https://api.openweathermap.org/geo/1.0/direct".to_string(),
            timeout_secs: 30,
            geocoding_timeout_secs: 10,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        let thresholds = RiskThresholds::default();
        Self {
            extreme_temperature_c: thresholds.extreme_temperature_c,
            high_humidity_percent: thresholds.high_humidity_percent,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { top_n: 5 }
    }
}
