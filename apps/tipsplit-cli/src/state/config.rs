//! # Configuration State
//!
//! Stores configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TIPSPLIT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use tipsplit_core::animation::MAX_ANIMATION_STEPS;
use tipsplit_core::Money;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Count-up frames attached to submit responses.
    /// 0 disables the animation.
    pub animation_steps: u32,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Currency: `$`
    /// - Animation: off
    fn default() -> Self {
        ConfigState {
            currency_symbol: "$".to_string(),
            animation_steps: 0,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TIPSPLIT_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `TIPSPLIT_ANIMATION_STEPS`: Count-up frames (0 to 100)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(symbol) = lookup("TIPSPLIT_CURRENCY_SYMBOL") {
            if symbol.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "TIPSPLIT_CURRENCY_SYMBOL".to_string(),
                ));
            }
            config.currency_symbol = symbol.trim().to_string();
        }

        if let Some(steps) = lookup("TIPSPLIT_ANIMATION_STEPS") {
            config.animation_steps = steps
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|s| *s <= MAX_ANIMATION_STEPS)
                .ok_or_else(|| ConfigError::InvalidValue("TIPSPLIT_ANIMATION_STEPS".to_string()))?;
        }

        Ok(config)
    }

    /// Formats money with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_cli::state::ConfigState;
    /// use tipsplit_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(2750)), "$27.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.cents() < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }

    /// True when submit responses should carry count-up frames.
    pub fn animation_enabled(&self) -> bool {
        self.animation_steps > 0
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert!(!config.animation_enabled());
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("TIPSPLIT_CURRENCY_SYMBOL", "€"),
            ("TIPSPLIT_ANIMATION_STEPS", "10"),
        ]))
        .unwrap();

        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.animation_steps, 10);
        assert!(config.animation_enabled());
    }

    #[test]
    fn test_invalid_animation_steps() {
        for bad in ["abc", "-1", "101"] {
            let err = ConfigState::from_lookup(lookup(&[("TIPSPLIT_ANIMATION_STEPS", bad)]))
                .unwrap_err();
            assert_eq!(err.to_string(), "Invalid value for TIPSPLIT_ANIMATION_STEPS");
        }
    }

    #[test]
    fn test_blank_currency_symbol_rejected() {
        assert!(ConfigState::from_lookup(lookup(&[("TIPSPLIT_CURRENCY_SYMBOL", "  ")])).is_err());
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(250)), "$2.50");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }
}
