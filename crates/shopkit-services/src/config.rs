//! # Shop Configuration
//!
//! Opening hours, holiday promotion and page keys used by the services.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPKIT_OPEN_HOUR=9                                                │
//! │     SHOPKIT_HOLIDAY_DISCOUNT=0.25                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shopkit/shop.toml (Linux)                                │
//! │     ~/Library/Application Support/dev.shopkit.shopkit/shop.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     open 08:00, close 20:00, Dec 25 at 20%, home page "/home"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # shop.toml
//! [hours]
//! open_hour = 8     # inclusive
//! close_hour = 20   # exclusive
//!
//! [promotions]
//! holiday_month = 12
//! holiday_day = 25
//! holiday_discount = 0.2
//!
//! [pages]
//! home = "/home"
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Opening Hours
// =============================================================================

/// Hours during which the store counts as online.
///
/// The window is half-open: `open_hour <= hour < close_hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursSettings {
    /// First hour of the day the store is online (0-23).
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,

    /// First hour of the day the store is offline again (1-24).
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
}

fn default_open_hour() -> u32 {
    8
}

fn default_close_hour() -> u32 {
    20
}

impl Default for HoursSettings {
    fn default() -> Self {
        HoursSettings {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
        }
    }
}

impl HoursSettings {
    /// Returns true if `hour` falls inside the opening window.
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.open_hour && hour < self.close_hour
    }
}

// =============================================================================
// Promotions
// =============================================================================

/// The once-a-year holiday discount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PromotionSettings {
    /// Month of the holiday (1-12).
    #[serde(default = "default_holiday_month")]
    pub holiday_month: u32,

    /// Day of the holiday (1-31).
    #[serde(default = "default_holiday_day")]
    pub holiday_day: u32,

    /// Discount fraction applied on the holiday (0-1).
    #[serde(default = "default_holiday_discount")]
    pub holiday_discount: f64,
}

fn default_holiday_month() -> u32 {
    12
}

fn default_holiday_day() -> u32 {
    25
}

fn default_holiday_discount() -> f64 {
    0.2
}

impl Default for PromotionSettings {
    fn default() -> Self {
        PromotionSettings {
            holiday_month: default_holiday_month(),
            holiday_day: default_holiday_day(),
            holiday_discount: default_holiday_discount(),
        }
    }
}

// =============================================================================
// Pages
// =============================================================================

/// Page keys reported to analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSettings {
    #[serde(default = "default_home_page")]
    pub home: String,
}

fn default_home_page() -> String {
    "/home".to_string()
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            home: default_home_page(),
        }
    }
}

// =============================================================================
// Main Shop Configuration
// =============================================================================

/// Complete shop configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub hours: HoursSettings,

    #[serde(default)]
    pub promotions: PromotionSettings,

    #[serde(default)]
    pub pages: PageSettings,
}

impl ShopConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (shop.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ServiceResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading shop config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load shop config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ServiceResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ServiceError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ServiceError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ServiceError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Shop config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ServiceResult<()> {
        let hours = &self.hours;
        if hours.open_hour > 23 || hours.close_hour > 24 {
            return Err(ServiceError::InvalidConfig(format!(
                "hours must be within a day, got {}..{}",
                hours.open_hour, hours.close_hour
            )));
        }

        if hours.open_hour >= hours.close_hour {
            return Err(ServiceError::InvalidConfig(format!(
                "open_hour ({}) must be before close_hour ({})",
                hours.open_hour, hours.close_hour
            )));
        }

        let promo = &self.promotions;
        // 2024 is a leap year, so Feb 29 is accepted.
        if NaiveDate::from_ymd_opt(2024, promo.holiday_month, promo.holiday_day).is_none() {
            return Err(ServiceError::InvalidConfig(format!(
                "holiday {}/{} is not a calendar date",
                promo.holiday_month, promo.holiday_day
            )));
        }

        if !(0.0..=1.0).contains(&promo.holiday_discount) {
            return Err(ServiceError::InvalidConfig(format!(
                "holiday_discount must be between 0 and 1, got {}",
                promo.holiday_discount
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any `SHOPKIT_*` key lookup.
    ///
    /// Values that fail to parse are logged and ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        fn parsed<T: std::str::FromStr>(key: &str, raw: Option<String>) -> Option<T> {
            let raw = raw?;
            match raw.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(key, value = %raw, "Ignoring unparsable override");
                    None
                }
            }
        }

        if let Some(hour) = parsed("SHOPKIT_OPEN_HOUR", lookup("SHOPKIT_OPEN_HOUR")) {
            debug!(hour, "Overriding open hour from environment");
            self.hours.open_hour = hour;
        }

        if let Some(hour) = parsed("SHOPKIT_CLOSE_HOUR", lookup("SHOPKIT_CLOSE_HOUR")) {
            debug!(hour, "Overriding close hour from environment");
            self.hours.close_hour = hour;
        }

        if let Some(month) = parsed("SHOPKIT_HOLIDAY_MONTH", lookup("SHOPKIT_HOLIDAY_MONTH")) {
            self.promotions.holiday_month = month;
        }

        if let Some(day) = parsed("SHOPKIT_HOLIDAY_DAY", lookup("SHOPKIT_HOLIDAY_DAY")) {
            self.promotions.holiday_day = day;
        }

        if let Some(discount) =
            parsed("SHOPKIT_HOLIDAY_DISCOUNT", lookup("SHOPKIT_HOLIDAY_DISCOUNT"))
        {
            debug!(discount, "Overriding holiday discount from environment");
            self.promotions.holiday_discount = discount;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "shopkit", "shopkit")
            .map(|dirs| dirs.config_dir().join("shop.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.hours.open_hour, 8);
        assert_eq!(config.hours.close_hour, 20);
        assert_eq!(config.promotions.holiday_month, 12);
        assert_eq!(config.promotions.holiday_day, 25);
        assert_eq!(config.promotions.holiday_discount, 0.2);
        assert_eq!(config.pages.home, "/home");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hours_window_is_half_open() {
        let hours = HoursSettings::default();
        assert!(!hours.contains(7));
        assert!(hours.contains(8));
        assert!(hours.contains(19));
        assert!(!hours.contains(20));
    }

    #[test]
    fn test_config_validation() {
        let mut config = ShopConfig::default();

        config.hours.open_hour = 20;
        assert!(config.validate().unwrap_err().is_config_error());

        config.hours = HoursSettings::default();
        config.hours.close_hour = 25;
        assert!(config.validate().is_err());

        config.hours = HoursSettings::default();
        config.promotions.holiday_month = 2;
        config.promotions.holiday_day = 30;
        assert!(config.validate().is_err());

        config.promotions.holiday_day = 29;
        assert!(config.validate().is_ok());

        config.promotions.holiday_discount = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: ShopConfig = toml::from_str("[hours]\nopen_hour = 9\n").unwrap();
        assert_eq!(config.hours.open_hour, 9);
        assert_eq!(config.hours.close_hour, 20);
        assert_eq!(config.promotions, PromotionSettings::default());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SHOPKIT_OPEN_HOUR", "9"),
            ("SHOPKIT_CLOSE_HOUR", "not-a-number"),
            ("SHOPKIT_HOLIDAY_DISCOUNT", "0.25"),
        ]
        .into_iter()
        .collect();

        let mut config = ShopConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.hours.open_hour, 9);
        assert_eq!(config.hours.close_hour, 20);
        assert_eq!(config.promotions.holiday_discount, 0.25);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("shop.toml");

        let mut config = ShopConfig::default();
        config.hours.open_hour = 10;
        config.pages.home = "/start".to_string();
        config.save(Some(path.clone())).unwrap();

        let loaded = ShopConfig::load(Some(path)).unwrap();
        assert_eq!(loaded.hours.open_hour, 10);
        assert_eq!(loaded.pages.home, "/start");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.toml");
        std::fs::write(&path, "[hours\nopen_hour = ").unwrap();

        let err = ShopConfig::load(Some(path.clone())).unwrap_err();
        assert!(matches!(err, ServiceError::ConfigLoadFailed(_)));

        assert_eq!(ShopConfig::load_or_default(Some(path)), ShopConfig::default());
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&ShopConfig::default()).unwrap();
        assert!(toml_str.contains("[hours]"));
        assert!(toml_str.contains("[promotions]"));
        assert!(toml_str.contains("[pages]"));
    }
}
