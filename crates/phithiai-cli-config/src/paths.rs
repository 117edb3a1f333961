// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Where config and state files live.

use std::path::PathBuf;

use crate::ConfigError;

const APP_DIR: &str = "phithiai";

/// Resolved XDG paths for Phithiai.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
	/// User config file: ~/.config/phithiai/config.toml
	pub user_config_file: PathBuf,
	/// System config file: /etc/phithiai/config.toml
	pub system_config_file: PathBuf,
	/// State directory: ~/.local/state/phithiai/
	pub state_dir: PathBuf,
}

impl PathsConfig {
	/// Directory holding the user config file.
	pub fn config_dir(&self) -> PathBuf {
		self
			.user_config_file
			.parent()
			.map(|p| p.to_path_buf())
			.unwrap_or_else(|| self.user_config_file.clone())
	}

	/// Default preference file: <state_dir>/preferences.json
	pub fn preferences_file(&self) -> PathBuf {
		self.state_dir.join("preferences.json")
	}

	/// Paths rooted under `root`, for tests and sandboxed runs.
	pub fn rooted(root: impl Into<PathBuf>) -> Self {
		let root = root.into();
		Self {
			user_config_file: root.join("config/phithiai/config.toml"),
			system_config_file: root.join("etc/phithiai/config.toml"),
			state_dir: root.join("state/phithiai"),
		}
	}
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			user_config_file: PathBuf::from("~/.config/phithiai/config.toml"),
			system_config_file: PathBuf::from("/etc/phithiai/config.toml"),
			state_dir: PathBuf::from("~/.local/state/phithiai"),
		}
	}
}

/// Paths under `$XDG_CONFIG_HOME` (default `~/.config`) and
/// `$XDG_STATE_HOME` (default `~/.local/state`).
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
	let config_home = xdg_dir("XDG_CONFIG_HOME", || home.join(".config"));
	let state_home = xdg_dir("XDG_STATE_HOME", || home.join(".local/state"));

	tracing::debug!(
		config_home = %config_home.display(),
		state_home = %state_home.display(),
		"XDG base directories"
	);

	Ok(PathsConfig {
		user_config_file: config_home.join(APP_DIR).join("config.toml"),
		system_config_file: PathBuf::from("/etc").join(APP_DIR).join("config.toml"),
		state_dir: state_home.join(APP_DIR),
	})
}

/// An empty or relative value is ignored, as the XDG rules require.
fn xdg_dir(var: &str, fallback: impl FnOnce() -> PathBuf) -> PathBuf {
	std::env::var_os(var)
		.map(PathBuf::from)
		.filter(|p| p.is_absolute())
		.unwrap_or_else(fallback)
}
