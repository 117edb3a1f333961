// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use phithiai_common_i18n::{CurrencyCode, DEFAULT_LOCALE};
use serde::Serialize;
use std::path::PathBuf;

use crate::layer::*;
use crate::paths::PathsConfig;
use crate::ConfigError;

/// Minutes cached FX quotes stay fresh unless configured otherwise.
pub const DEFAULT_RATES_TTL_MINUTES: u32 = 60;

/// The final, validated configuration for Phithiai.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhithiaiConfig {
	pub display: DisplayConfig,
	pub rates: RatesConfig,
	pub storage: StorageConfig,
	pub logging: LoggingConfig,

	/// Resolved XDG paths (not serialized)
	#[serde(skip)]
	pub paths: PathsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayConfig {
	pub locale: String,
	/// Display currency for this run; `None` keeps the stored preference
	pub currency: Option<CurrencyCode>,
}

impl Default for DisplayConfig {
	fn default() -> Self {
		Self {
			locale: DEFAULT_LOCALE.to_string(),
			currency: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatesConfig {
	pub ttl_minutes: u32,
}

impl Default for RatesConfig {
	fn default() -> Self {
		Self {
			ttl_minutes: DEFAULT_RATES_TTL_MINUTES,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageConfig {
	pub preferences_file: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	Warn,
	#[default]
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Error => "error",
			LogLevel::Warn => "warn",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
			LogLevel::Trace => "trace",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
	Compact,
}

impl PhithiaiConfig {
	/// Build runtime config from a merged layer and paths.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Result<Self, ConfigError> {
		let display = build_display_config(layer.display)?;
		let rates = build_rates_config(layer.rates);
		let storage = build_storage_config(layer.storage, &paths);
		let logging = build_logging_config(layer.logging);

		Ok(Self {
			display,
			rates,
			storage,
			logging,
			paths,
		})
	}
}

fn build_display_config(layer: Option<DisplayLayer>) -> Result<DisplayConfig, ConfigError> {
	let layer = layer.unwrap_or_default();
	let currency = match layer.currency {
		Some(raw) => Some(raw.parse::<CurrencyCode>().map_err(|_| {
			ConfigError::invalid_value(
				"display.currency",
				format!("'{raw}' is not a supported currency"),
			)
		})?),
		None => None,
	};
	Ok(DisplayConfig {
		locale: layer
			.locale
			.map(|l| l.trim().to_string())
			.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
		currency,
	})
}

fn build_rates_config(layer: Option<RatesLayer>) -> RatesConfig {
	let layer = layer.unwrap_or_default();
	RatesConfig {
		ttl_minutes: layer.ttl_minutes.unwrap_or(DEFAULT_RATES_TTL_MINUTES),
	}
}

fn build_storage_config(layer: Option<StorageLayer>, paths: &PathsConfig) -> StorageConfig {
	let layer = layer.unwrap_or_default();
	StorageConfig {
		preferences_file: layer
			.preferences_file
			.unwrap_or_else(|| paths.preferences_file()),
	}
}

fn build_logging_config(layer: Option<LoggingLayer>) -> LoggingConfig {
	let layer = layer.unwrap_or_default();
	LoggingConfig {
		level: parse_log_level(layer.level.as_deref()),
		format: parse_log_format(layer.format.as_deref()),
	}
}

fn parse_log_level(s: Option<&str>) -> LogLevel {
	match s {
		Some("error") => LogLevel::Error,
		Some("warn") => LogLevel::Warn,
		Some("info") => LogLevel::Info,
		Some("debug") => LogLevel::Debug,
		Some("trace") => LogLevel::Trace,
		_ => LogLevel::Info,
	}
}

fn parse_log_format(s: Option<&str>) -> LogFormat {
	match s {
		Some("json") => LogFormat::Json,
		Some("compact") => LogFormat::Compact,
		Some("pretty") => LogFormat::Pretty,
		_ => LogFormat::Pretty,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let paths = PathsConfig::rooted("/tmp/phithiai-test");
		let config = PhithiaiConfig::from_layer(ConfigLayer::default(), paths.clone()).unwrap();

		assert_eq!(config.display, DisplayConfig::default());
		assert_eq!(config.display.locale, "en-US");
		assert_eq!(config.rates.ttl_minutes, 60);
		assert_eq!(config.storage.preferences_file, paths.preferences_file());
		assert_eq!(config.logging, LoggingConfig::default());
	}

	#[test]
	fn test_currency_is_parsed() {
		let layer = ConfigLayer {
			display: Some(DisplayLayer {
				locale: Some(" th-TH ".to_string()),
				currency: Some("sgd".to_string()),
			}),
			..Default::default()
		};
		let config = PhithiaiConfig::from_layer(layer, PathsConfig::default()).unwrap();
		assert_eq!(config.display.locale, "th-TH");
		assert_eq!(config.display.currency, Some(CurrencyCode::Sgd));
	}

	#[test]
	fn test_unsupported_currency_is_rejected() {
		let layer = ConfigLayer {
			display: Some(DisplayLayer {
				locale: None,
				currency: Some("BTC".to_string()),
			}),
			..Default::default()
		};
		let err = PhithiaiConfig::from_layer(layer, PathsConfig::default()).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "display.currency"));
	}

	#[test]
	fn test_unknown_log_values_fall_back() {
		assert_eq!(parse_log_level(Some("loud")), LogLevel::Info);
		assert_eq!(parse_log_format(Some("xml")), LogFormat::Pretty);
		assert_eq!(parse_log_level(Some("trace")).as_str(), "trace");
	}
}
