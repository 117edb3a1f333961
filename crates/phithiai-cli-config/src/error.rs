// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("reading configuration: {0}")]
	Io(#[from] std::io::Error),

	#[error("{path} is not valid configuration TOML: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("invalid configuration: {0}")]
	Validation(String),

	/// A setting parsed but holds a value Phithiai cannot use
	#[error("{field}: {message}")]
	InvalidValue { field: String, message: String },

	#[error("no home directory to resolve config and state paths against")]
	HomeDirNotFound,
}

impl ConfigError {
	pub fn validation(msg: impl Into<String>) -> Self {
		Self::Validation(msg.into())
	}

	pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			field: field.into(),
			message: message.into(),
		}
	}
}
