// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where configuration layers come from.

use std::path::PathBuf;

use tracing::{debug, trace, warn};

use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::ConfigError;

/// Prefix of every environment variable read by [`EnvSource`].
pub const ENV_PREFIX: &str = "PHITHIAI_";

/// Merge order. A layer from a higher level replaces the fields it sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	SystemFile = 20,
	UserFile = 30,
	ExplicitFile = 40,
	Environment = 50,
	Cli = 60,
}

pub trait ConfigSource: Send + Sync {
	/// Label used in log events
	fn name(&self) -> &'static str;

	fn precedence(&self) -> Precedence;

	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Contributes nothing; defaults are filled in by `PhithiaiConfig::from_layer`.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		Ok(ConfigLayer::default())
	}
}

/// A TOML file. A missing file yields an empty layer.
pub struct FileSource {
	path: PathBuf,
	precedence: Precedence,
	name: &'static str,
}

impl FileSource {
	/// `/etc/phithiai/config.toml`
	pub fn system(paths: &PathsConfig) -> Self {
		Self::at(paths.system_config_file.clone(), Precedence::SystemFile, "system-config")
	}

	/// `$XDG_CONFIG_HOME/phithiai/config.toml`
	pub fn user(paths: &PathsConfig) -> Self {
		Self::at(paths.user_config_file.clone(), Precedence::UserFile, "user-config")
	}

	/// The file passed with `--config`.
	pub fn explicit(path: PathBuf) -> Self {
		Self::at(path, Precedence::ExplicitFile, "explicit-config")
	}

	fn at(path: PathBuf, precedence: Precedence, name: &'static str) -> Self {
		Self {
			path,
			precedence,
			name,
		}
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		self.name
	}

	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			trace!(path = %self.path.display(), source = self.name, "no config file here");
			return Ok(ConfigLayer::default());
		}

		let content = std::fs::read_to_string(&self.path)?;
		let layer = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
			path: self.path.clone(),
			source,
		})?;

		debug!(path = %self.path.display(), source = self.name, "read config file");
		Ok(layer)
	}
}

/// `PHITHIAI_*` environment variables.
///
/// Reads the process environment unless built with [`EnvSource::from_vars`].
/// Blank values are treated as unset.
#[derive(Default)]
pub struct EnvSource {
	vars: Option<Vec<(String, String)>>,
}

impl EnvSource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		let vars = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
		Self { vars: Some(vars) }
	}

	fn apply(layer: &mut ConfigLayer, key: &str, value: String) {
		match key {
			"LOCALE" => layer.display_mut().locale = Some(value),
			"CURRENCY" => layer.display_mut().currency = Some(value),
			"RATES_TTL_MINUTES" => match value.parse() {
				Ok(minutes) => layer.rates_mut().ttl_minutes = Some(minutes),
				Err(_) => warn!(
					var = %format!("{ENV_PREFIX}{key}"),
					value = %value,
					"ignoring TTL that is not a whole number of minutes"
				),
			},
			"PREFERENCES_FILE" => layer.storage_mut().preferences_file = Some(PathBuf::from(value)),
			"LOG_LEVEL" => layer.logging_mut().level = Some(value),
			"LOG_FORMAT" => layer.logging_mut().format = Some(value),
			_ => trace!(var = %format!("{ENV_PREFIX}{key}"), "unrecognised variable"),
		}
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		let vars = match &self.vars {
			Some(vars) => vars.clone(),
			None => std::env::vars().collect(),
		};

		let mut layer = ConfigLayer::default();
		for (name, value) in vars {
			let Some(key) = name.strip_prefix(ENV_PREFIX) else {
				continue;
			};
			let value = value.trim();
			if !value.is_empty() {
				Self::apply(&mut layer, key, value.to_string());
			}
		}
		Ok(layer)
	}
}

/// Global flags given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub locale: Option<String>,
	pub currency: Option<String>,
	pub log_level: Option<String>,
	pub log_format: Option<String>,
	/// Read as an extra file layer, not merged here
	pub config_file: Option<PathBuf>,
}

pub struct CliSource {
	overrides: CliOverrides,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		let CliOverrides {
			locale,
			currency,
			log_level,
			log_format,
			config_file: _,
		} = self.overrides.clone();

		let mut layer = ConfigLayer::default();
		if locale.is_some() || currency.is_some() {
			let display = layer.display_mut();
			display.locale = locale;
			display.currency = currency;
		}
		if log_level.is_some() || log_format.is_some() {
			let logging = layer.logging_mut();
			logging.level = log_level;
			logging.format = log_format;
		}
		Ok(layer)
	}
}
