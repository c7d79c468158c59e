//! Configuration management for the MoveNest quote engine
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::QuoteError;
use crate::models::ServiceType;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the quote engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveNestConfig {
    /// Business contact details used in customer messages
    pub business: BusinessConfig,
    /// Rate table used by the fare calculator
    pub pricing: PricingConfig,
    /// Display preferences
    pub display: DisplayConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// HTTP server settings
    pub server: ServerConfig,
}

/// Business contact settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessConfig {
    pub name: String,
    pub phone: String,
    /// Country code and number, digits only (e.g. 27781918983)
    pub whatsapp_number: String,
    pub email: String,
    /// Prefix used when printing amounts
    pub currency_symbol: String,
}

/// Base rate for each catalogued service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRates {
    pub kids: f64,
    pub staff: f64,
    pub luggage: f64,
    pub carhire: f64,
}

/// Pricing settings injected into the fare calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub base_rates: BaseRates,
    /// Charge per road kilometre
    pub rate_per_km: f64,
    /// Fraction taken off monthly-contract trips (0.20 = 20%)
    pub monthly_discount: f64,
    /// Base rate for services outside the catalogue
    pub default_base_rate: f64,
}

/// Unit used when showing distances to customers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Miles,
}

/// Display settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub distance_unit: DistanceUnit,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// Default value functions
fn default_business_name() -> String {
    "MoveNest".to_string()
}

fn default_whatsapp_number() -> String {
    "27781918983".to_string()
}

fn default_currency_symbol() -> String {
    "R".to_string()
}

fn default_rate_per_km() -> f64 {
    13.0
}

fn default_monthly_discount() -> f64 {
    0.20
}

fn default_base_rate() -> f64 {
    100.0
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: default_business_name(),
            phone: "+27 123 456 789".to_string(),
            whatsapp_number: default_whatsapp_number(),
            email: "info@movenest.co.za".to_string(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for BaseRates {
    fn default() -> Self {
        Self {
            kids: 100.0,
            staff: 150.0,
            luggage: 250.0,
            carhire: 200.0,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_rates: BaseRates::default(),
            rate_per_km: default_rate_per_km(),
            monthly_discount: default_monthly_discount(),
            default_base_rate: default_base_rate(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl PricingConfig {
    /// Base rate for a service, falling back to `default_base_rate`
    #[must_use]
    pub fn base_rate(&self, service: &ServiceType) -> f64 {
        match service {
            ServiceType::Kids => self.base_rates.kids,
            ServiceType::Staff => self.base_rates.staff,
            ServiceType::Luggage => self.base_rates.luggage,
            ServiceType::CarHire => self.base_rates.carhire,
            ServiceType::Unlisted(_) => self.default_base_rate,
        }
    }

    /// Check that every rate is usable
    pub fn validate(&self) -> std::result::Result<(), QuoteError> {
        let rates = [
            ("base_rates.kids", self.base_rates.kids),
            ("base_rates.staff", self.base_rates.staff),
            ("base_rates.luggage", self.base_rates.luggage),
            ("base_rates.carhire", self.base_rates.carhire),
            ("rate_per_km", self.rate_per_km),
            ("default_base_rate", self.default_base_rate),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(QuoteError::config(format!(
                    "pricing.{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.monthly_discount) {
            return Err(QuoteError::config(format!(
                "pricing.monthly_discount must be between 0 and 1, got {}",
                self.monthly_discount
            )));
        }

        Ok(())
    }
}

impl MoveNestConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides such as MOVENEST_PRICING__RATE_PER_KM=12
        builder = builder.add_source(
            Environment::with_prefix("MOVENEST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: MoveNestConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("movenest").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.business.name.is_empty() {
            self.business.name = default_business_name();
        }
        if self.business.whatsapp_number.is_empty() {
            self.business.whatsapp_number = default_whatsapp_number();
        }
        if self.business.currency_symbol.is_empty() {
            self.business.currency_symbol = default_currency_symbol();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.port == 0 {
            self.server.port = default_port();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.pricing.validate()?;
        self.validate_business()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_business(&self) -> Result<()> {
        let number = &self.business.whatsapp_number;
        if !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(QuoteError::config(format!(
                "WhatsApp number '{number}' must contain digits only (country code first, no '+' or spaces)"
            ))
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(QuoteError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(QuoteError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
