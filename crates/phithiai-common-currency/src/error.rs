// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Currency error types.

use phithiai_cli_preferences::PreferenceError;

/// Errors raised by currency operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurrencyError {
	/// Code outside the supported set
	#[error("unsupported currency: {0}")]
	UnsupportedCurrency(String),

	#[error("preference storage error: {0}")]
	Preference(#[from] PreferenceError),

	/// A rate source failed or returned unusable quotes
	#[error("rate source error: {0}")]
	RateSource(String),

	#[error("serialization error: {0}")]
	Serde(String),
}

impl From<serde_json::Error> for CurrencyError {
	fn from(err: serde_json::Error) -> Self {
		CurrencyError::Serde(err.to_string())
	}
}
