// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The user's selected display currency.

use phithiai_cli_preferences::PreferenceStore;
use phithiai_common_i18n::CurrencyCode;
use tracing::{debug, warn};

use crate::rates::BASE_CURRENCY;

/// Storage key of the selected currency.
pub const CURRENCY_PREFERENCE_KEY: &str = "phithiai-currency";

/// Selected display currency, mirrored into a [`PreferenceStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyPreference {
	current: CurrencyCode,
}

impl Default for CurrencyPreference {
	fn default() -> Self {
		Self {
			current: BASE_CURRENCY,
		}
	}
}

impl CurrencyPreference {
	/// A selection that has not been read from or written to storage.
	pub fn new(current: CurrencyCode) -> Self {
		Self { current }
	}

	/// Read the stored preference.
	///
	/// Falls back to the base currency when the value is absent, not a
	/// supported code, or the store cannot be read.
	pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
		let stored = match store.get(CURRENCY_PREFERENCE_KEY) {
			Ok(value) => value,
			Err(e) => {
				warn!(key = CURRENCY_PREFERENCE_KEY, error = %e, "Currency preference unavailable, using base currency");
				None
			}
		};

		let current = match stored {
			Some(raw) => match raw.parse::<CurrencyCode>() {
				Ok(code) => code,
				Err(_) => {
					warn!(value = %raw, "Ignoring unsupported stored currency");
					BASE_CURRENCY
				}
			},
			None => BASE_CURRENCY,
		};

		debug!(currency = %current, "Loaded currency preference");
		Self { current }
	}

	pub fn current(&self) -> CurrencyCode {
		self.current
	}

	/// Change the selection and persist it.
	///
	/// The in-memory value always changes; a storage failure is logged.
	pub fn set<S: PreferenceStore + ?Sized>(&mut self, store: &S, code: CurrencyCode) {
		self.current = code;
		match store.set(CURRENCY_PREFERENCE_KEY, code.as_str()) {
			Ok(()) => debug!(currency = %code, "Currency preference saved"),
			Err(e) => warn!(currency = %code, error = %e, "Failed to persist currency preference, continuing in memory"),
		}
	}
}
