// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The starter `config.toml` written on first run.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::ConfigError;

/// Contents of a freshly created user config. Every value matches the
/// built-in default, so writing it changes nothing until edited.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Phithiai settings
#
# Any value here can be overridden with a PHITHIAI_* environment variable
# or a command line flag.

[display]
# BCP 47 tag for `phithiai fmt`. Tags outside the supported locales are
# rendered as en-US.
locale = "en-US"

# Pin a display currency for every run on this machine. Unset, the currency
# picked with `phithiai currency set` is used.
# currency = "THB"

[rates]
# How long refreshed FX quotes are trusted, in minutes. Older quotes give
# way to the built-in THB table.
ttl_minutes = 60

[storage]
# Holds the selected currency and the FX quote cache.
# preferences_file = "~/.local/state/phithiai/preferences.json"

[logging]
# error | warn | info | debug | trace
level = "info"
# pretty | json | compact
format = "pretty"
"#;

/// Write [`DEFAULT_CONFIG_TEMPLATE`] to `path` unless a file is already there.
///
/// Returns whether a file was written.
pub fn ensure_default_config(path: &Path) -> Result<bool, ConfigError> {
	if path.exists() {
		return Ok(false);
	}

	if let Some(dir) = path.parent() {
		fs::create_dir_all(dir)?;
	}
	fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;

	info!(path = %path.display(), "wrote starter config");
	Ok(true)
}
