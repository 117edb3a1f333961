// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration validation rules.

use phithiai_common_i18n::is_supported;
use tracing::warn;

use crate::runtime::PhithiaiConfig;
use crate::ConfigError;

/// Longest accepted FX cache lifetime, one week.
const MAX_RATES_TTL_MINUTES: u32 = 7 * 24 * 60;

/// Validate the configuration.
///
/// Returns Ok(()) if valid, or a ConfigError describing the first problem.
pub fn validate_config(config: &PhithiaiConfig) -> Result<(), ConfigError> {
	validate_display(config)?;
	validate_rates(config)?;
	validate_storage(config)?;

	Ok(())
}

fn validate_display(config: &PhithiaiConfig) -> Result<(), ConfigError> {
	let locale = &config.display.locale;
	if locale.is_empty() {
		return Err(ConfigError::validation("display.locale cannot be empty"));
	}
	if locale.chars().any(char::is_whitespace) {
		return Err(ConfigError::invalid_value(
			"display.locale",
			format!("'{locale}' is not a locale tag"),
		));
	}

	if !is_supported(locale) {
		// Formatting falls back to en-US for unsupported tags
		warn!(locale = %locale, "display.locale is not a supported locale, falling back to en-US");
	}

	Ok(())
}

fn validate_rates(config: &PhithiaiConfig) -> Result<(), ConfigError> {
	let ttl = config.rates.ttl_minutes;

	if ttl == 0 {
		return Err(ConfigError::invalid_value(
			"rates.ttl_minutes",
			"must be at least 1",
		));
	}

	if ttl > MAX_RATES_TTL_MINUTES {
		return Err(ConfigError::invalid_value(
			"rates.ttl_minutes",
			format!("must be at most {MAX_RATES_TTL_MINUTES} (one week)"),
		));
	}

	Ok(())
}

fn validate_storage(config: &PhithiaiConfig) -> Result<(), ConfigError> {
	if config.storage.preferences_file.as_os_str().is_empty() {
		return Err(ConfigError::invalid_value(
			"storage.preferences_file",
			"cannot be empty",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layer::ConfigLayer;
	use crate::paths::PathsConfig;
	use std::path::PathBuf;

	fn valid() -> PhithiaiConfig {
		PhithiaiConfig::from_layer(ConfigLayer::default(), PathsConfig::rooted("/tmp/v")).unwrap()
	}

	#[test]
	fn test_defaults_are_valid() {
		assert!(validate_config(&valid()).is_ok());
	}

	#[test]
	fn test_unsupported_locale_is_only_a_warning() {
		let mut config = valid();
		config.display.locale = "fr-FR".to_string();
		assert!(validate_config(&config).is_ok());
	}

	#[test]
	fn test_empty_locale_rejected() {
		let mut config = valid();
		config.display.locale = String::new();
		assert!(matches!(validate_config(&config), Err(ConfigError::Validation(_))));

		config.display.locale = "th TH".to_string();
		assert!(matches!(validate_config(&config), Err(ConfigError::InvalidValue { .. })));
	}

	#[test]
	fn test_ttl_bounds() {
		let mut config = valid();
		config.rates.ttl_minutes = 0;
		assert!(validate_config(&config).is_err());

		config.rates.ttl_minutes = MAX_RATES_TTL_MINUTES;
		assert!(validate_config(&config).is_ok());

		config.rates.ttl_minutes = MAX_RATES_TTL_MINUTES + 1;
		assert!(validate_config(&config).is_err());
	}

	#[test]
	fn test_empty_preferences_path_rejected() {
		let mut config = valid();
		config.storage.preferences_file = PathBuf::new();
		assert!(validate_config(&config).is_err());
	}
}
