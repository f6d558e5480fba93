//! Configuration management for the carton pricing backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CARTON_ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Business pricing defaults seeded into new inquiries
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    /// Default cash margin percent
    pub margin_cash_percent: Decimal,

    /// Default credit (deferred payment) margin percent
    pub margin_credit_percent: Decimal,

    /// Default tax percent
    pub tax_percent: Decimal,

    /// Paper price pre-filled on new inquiries; zero means the operator
    /// enters it per inquiry
    pub default_paper_price_per_m2: Decimal,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment =
            std::env::var("CARTON_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("pricing.margin_cash_percent", 10)?
            .set_default("pricing.margin_credit_percent", 15)?
            .set_default("pricing.tax_percent", 9)?
            .set_default("pricing.default_paper_price_per_m2", 0)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CARTON_ prefix)
            .add_source(
                Environment::with_prefix("CARTON")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            pricing: PricingConfig::default(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            margin_cash_percent: Decimal::from(10),
            margin_credit_percent: Decimal::from(15),
            tax_percent: Decimal::from(9),
            default_paper_price_per_m2: Decimal::ZERO,
        }
    }
}
