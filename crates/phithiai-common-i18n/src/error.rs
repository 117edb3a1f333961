// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Formatting error types.

/// Errors raised by formatting operations.
///
/// Locale lookups never fail; unsupported locales fall back to `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
	/// Month or day index outside its table
	#[error("{table} index {index} out of range (expected 0..{len})")]
	IndexOutOfRange {
		table: &'static str,
		index: usize,
		len: usize,
	},

	/// Epoch milliseconds that cannot be represented as a date
	#[error("invalid timestamp: {0}")]
	InvalidTimestamp(i64),

	/// Currency code outside the supported set
	#[error("unsupported currency: {0}")]
	UnknownCurrency(String),
}
