// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Settings for the `phithiai` binary.
//!
//! A [`PhithiaiConfig`] is folded from, lowest precedence first: built-in
//! defaults, `/etc/phithiai/config.toml`, the user's XDG config file, a file
//! named with `--config`, `PHITHIAI_*` variables and command line flags.

pub mod defaults;
pub mod error;
pub mod layer;
pub mod paths;
pub mod registry;
pub mod runtime;
pub mod sources;
pub mod validation;

pub use defaults::{ensure_default_config, DEFAULT_CONFIG_TEMPLATE};
pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::PathsConfig;
pub use registry::ConfigRegistry;
pub use runtime::{LogFormat, LogLevel, PhithiaiConfig};
pub use sources::{CliOverrides, ConfigSource, Precedence};

/// Resolve XDG paths, write a starter user config on first run, then load.
pub fn load_config(cli: CliOverrides) -> Result<PhithiaiConfig, ConfigError> {
	let paths = paths::resolve_xdg_paths()?;

	defaults::ensure_default_config(&paths.user_config_file)?;

	load_config_from(paths, cli)
}

/// Load against `paths` without creating anything on disk.
pub fn load_config_from(
	paths: PathsConfig,
	cli: CliOverrides,
) -> Result<PhithiaiConfig, ConfigError> {
	let mut registry = ConfigRegistry::new();

	registry.register(Box::new(sources::DefaultsSource));
	registry.register(Box::new(sources::FileSource::system(&paths)));
	registry.register(Box::new(sources::FileSource::user(&paths)));
	if let Some(ref file) = cli.config_file {
		registry.register(Box::new(sources::FileSource::explicit(file.clone())));
	}
	registry.register(Box::new(sources::EnvSource::new()));
	registry.register(Box::new(sources::CliSource::new(cli)));

	registry.load(paths)
}
