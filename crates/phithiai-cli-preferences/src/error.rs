// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Preference storage error types.

/// Errors that can occur while reading or writing preferences.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
	#[error("IO error: {0}")]
	Io(String),

	#[error("Serialization error: {0}")]
	Serde(String),

	/// The backend cannot be used at all (e.g. a poisoned lock)
	#[error("Preference storage unavailable: {0}")]
	Unavailable(String),
}

impl From<std::io::Error> for PreferenceError {
	fn from(err: std::io::Error) -> Self {
		PreferenceError::Io(err.to_string())
	}
}

impl From<serde_json::Error> for PreferenceError {
	fn from(err: serde_json::Error) -> Self {
		PreferenceError::Serde(err.to_string())
	}
}
