// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Conversion into the user's display currency.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use phithiai_cli_preferences::PreferenceStore;
use phithiai_common_i18n::{locale_for_currency, CurrencyCode, LocaleFormatter, ResolvedNumberOptions};
use tracing::{debug, info};

use crate::error::CurrencyError;
use crate::fx::{FxQuote, FxRateCache, RateSource, DEFAULT_RATE_TTL_MINUTES};
use crate::preference::CurrencyPreference;
use crate::rates::{RateTable, BASE_CURRENCY};

/// Whole units with grouping.
const DISPLAY_OPTIONS: ResolvedNumberOptions = ResolvedNumberOptions {
	minimum_fraction_digits: 0,
	maximum_fraction_digits: 0,
	use_grouping: true,
};

/// Converts and renders amounts in the selected display currency.
///
/// Rates come from a fresh cached quote against the base currency when one
/// exists, otherwise from the static [`RateTable`]. The selected currency is
/// persisted in `S`; storage failures degrade to in-memory state.
#[derive(Debug)]
pub struct CurrencyConverter<S: PreferenceStore> {
	store: S,
	preference: CurrencyPreference,
	rates: RateTable,
	fx: FxRateCache,
	formatter: LocaleFormatter,
}

impl<S: PreferenceStore> CurrencyConverter<S> {
	/// Load the stored preference and cached quotes from `store`.
	pub fn new(store: S) -> Self {
		Self::with_rate_ttl(store, DEFAULT_RATE_TTL_MINUTES)
	}

	/// Like [`new`](Self::new) with a custom quote freshness window.
	pub fn with_rate_ttl(store: S, ttl_minutes: u32) -> Self {
		let preference = CurrencyPreference::load(&store);
		let fx = FxRateCache::load(&store, ttl_minutes);
		Self {
			store,
			preference,
			rates: RateTable::builtin(),
			fx,
			formatter: LocaleFormatter::builtin(),
		}
	}

	/// Replace the static fallback rates.
	pub fn with_rates(mut self, rates: RateTable) -> Self {
		self.rates = rates;
		self
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn rate_table(&self) -> &RateTable {
		&self.rates
	}

	/// Every supported currency, in display order.
	pub fn supported_currencies(&self) -> &'static [CurrencyCode] {
		&CurrencyCode::ALL
	}

	pub fn current_currency(&self) -> CurrencyCode {
		self.preference.current()
	}

	/// Select the display currency and persist it.
	pub fn set_current_currency(&mut self, code: CurrencyCode) {
		self.preference.set(&self.store, code);
		info!(currency = %code, "Display currency changed");
	}

	/// Use `code` as the display currency without persisting it.
	pub fn use_session_currency(&mut self, code: CurrencyCode) {
		self.preference = CurrencyPreference::new(code);
		debug!(currency = %code, "Display currency overridden for this session");
	}

	/// Parse and select a display currency.
	///
	/// An unsupported code leaves the selection unchanged.
	pub fn set_current_currency_str(&mut self, code: &str) -> Result<CurrencyCode, CurrencyError> {
		let parsed: CurrencyCode = code
			.parse()
			.map_err(|_| CurrencyError::UnsupportedCurrency(code.to_string()))?;
		self.set_current_currency(parsed);
		Ok(parsed)
	}

	fn effective_rate(&self, code: CurrencyCode, now: DateTime<Utc>) -> f64 {
		if code == BASE_CURRENCY {
			return 1.0;
		}
		self.fx
			.fresh_rate(BASE_CURRENCY, code, now)
			.unwrap_or_else(|| self.rates.rate(code))
	}

	/// Units of `to` per one unit of `from`.
	pub fn get_exchange_rate(&self, from: CurrencyCode, to: CurrencyCode) -> f64 {
		self.get_exchange_rate_at(from, to, Utc::now())
	}

	pub fn get_exchange_rate_at(&self, from: CurrencyCode, to: CurrencyCode, now: DateTime<Utc>) -> f64 {
		if from == to {
			return 1.0;
		}
		self.effective_rate(to, now) / self.effective_rate(from, now)
	}

	/// Convert `amount` from `from` into the display currency.
	///
	/// Amounts already in the display currency are returned unchanged.
	pub fn convert(&self, amount: f64, from: CurrencyCode) -> f64 {
		self.convert_at(amount, from, Utc::now())
	}

	pub fn convert_at(&self, amount: f64, from: CurrencyCode, now: DateTime<Utc>) -> f64 {
		let to = self.current_currency();
		if from == to {
			return amount;
		}
		amount * self.get_exchange_rate_at(from, to, now)
	}

	/// Convert into the display currency and render it in that currency's
	/// home locale without fraction digits.
	pub fn format(&self, amount: f64, from: CurrencyCode) -> String {
		self.format_at(amount, from, Utc::now())
	}

	pub fn format_at(&self, amount: f64, from: CurrencyCode, now: DateTime<Utc>) -> String {
		let to = self.current_currency();
		let converted = self.convert_at(amount, from, now);
		self.formatter
			.format_currency_in_locale(converted, to, locale_for_currency(to), DISPLAY_OPTIONS)
	}

	/// Fetch fresh quotes from `source` and persist them.
	///
	/// On failure the previously cached quotes stay in use.
	pub fn refresh_rates(&mut self, source: &dyn RateSource) -> Result<usize, CurrencyError> {
		self.refresh_rates_at(source, Utc::now())
	}

	pub fn refresh_rates_at(
		&mut self,
		source: &dyn RateSource,
		now: DateTime<Utc>,
	) -> Result<usize, CurrencyError> {
		let count = self.fx.refresh(&self.store, source, now)?;
		debug!(count, "Converter picked up refreshed quotes");
		Ok(count)
	}

	pub fn is_rate_stale(&self) -> bool {
		self.fx.is_stale_at(Utc::now())
	}

	pub fn is_rate_stale_at(&self, now: DateTime<Utc>) -> bool {
		self.fx.is_stale_at(now)
	}

	pub fn last_fx_update(&self) -> Option<DateTime<Utc>> {
		self.fx.last_updated()
	}

	pub fn fx_rates(&self) -> &BTreeMap<String, FxQuote> {
		self.fx.quotes()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fx::StaticRateSource;
	use crate::preference::CURRENCY_PREFERENCE_KEY;
	use chrono::{Duration, TimeZone};
	use phithiai_cli_preferences::MemoryPreferenceStore;
	use proptest::prelude::*;

	fn now() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2024, 11, 15, 12, 0, 0).unwrap()
	}

	fn converter() -> CurrencyConverter<MemoryPreferenceStore> {
		CurrencyConverter::new(MemoryPreferenceStore::new())
	}

	fn any_code() -> impl Strategy<Value = CurrencyCode> {
		(0usize..CurrencyCode::ALL.len()).prop_map(|i| CurrencyCode::ALL[i])
	}

	/// Quotes THB at double the static rates.
	struct DoubledSource;

	impl RateSource for DoubledSource {
		fn name(&self) -> &str {
			"doubled"
		}

		fn fetch(&self, base: CurrencyCode, now: DateTime<Utc>) -> Result<Vec<FxQuote>, CurrencyError> {
			let mut quotes = StaticRateSource::default().fetch(base, now)?;
			for quote in &mut quotes {
				quote.rate *= 2.0;
			}
			Ok(quotes)
		}
	}

	#[test]
	fn test_defaults() {
		let c = converter();
		assert_eq!(c.current_currency(), CurrencyCode::Thb);
		assert_eq!(c.supported_currencies().len(), 10);
		assert_eq!(c.supported_currencies()[0], CurrencyCode::Thb);
		assert!(c.is_rate_stale_at(now()));
		assert!(c.last_fx_update().is_none());
	}

	#[test]
	fn test_static_exchange_rates() {
		let c = converter();
		assert_eq!(c.get_exchange_rate_at(CurrencyCode::Thb, CurrencyCode::Usd, now()), 0.028);
		assert_eq!(c.get_exchange_rate_at(CurrencyCode::Eur, CurrencyCode::Eur, now()), 1.0);
	}

	#[test]
	fn test_convert_and_format_in_display_currency() {
		let mut c = converter();
		c.set_current_currency(CurrencyCode::Usd);

		let converted = c.convert_at(1000.0, CurrencyCode::Thb, now());
		assert!((converted - 28.0).abs() < 1e-9);
		assert_eq!(c.format_at(1000.0, CurrencyCode::Thb, now()), "$28");
		assert_eq!(c.format_at(-1000.0, CurrencyCode::Thb, now()), "-$28");
		assert_eq!(c.format_at(0.0, CurrencyCode::Thb, now()), "$0");
	}

	#[test]
	fn test_format_in_base_currency() {
		let c = converter();
		assert_eq!(c.format_at(150000.0, CurrencyCode::Thb, now()), "฿150,000");
	}

	#[test]
	fn test_set_currency_persists() {
		let store = std::sync::Arc::new(MemoryPreferenceStore::new());
		let mut c = CurrencyConverter::new(std::sync::Arc::clone(&store));
		c.set_current_currency(CurrencyCode::Sgd);
		assert_eq!(store.get(CURRENCY_PREFERENCE_KEY).unwrap().as_deref(), Some("SGD"));

		let reloaded = CurrencyConverter::new(store);
		assert_eq!(reloaded.current_currency(), CurrencyCode::Sgd);
	}

	#[test]
	fn test_set_currency_from_string() {
		let mut c = converter();
		assert_eq!(c.set_current_currency_str("eur").unwrap(), CurrencyCode::Eur);
		assert_eq!(c.current_currency(), CurrencyCode::Eur);

		let err = c.set_current_currency_str("XYZ").unwrap_err();
		assert_eq!(err, CurrencyError::UnsupportedCurrency("XYZ".to_string()));
		assert_eq!(c.current_currency(), CurrencyCode::Eur);
	}

	#[test]
	fn test_session_currency_is_not_persisted() {
		let store = std::sync::Arc::new(MemoryPreferenceStore::new());
		let mut c = CurrencyConverter::new(std::sync::Arc::clone(&store));
		c.use_session_currency(CurrencyCode::Myr);
		assert_eq!(c.current_currency(), CurrencyCode::Myr);
		assert!(!store.contains(CURRENCY_PREFERENCE_KEY).unwrap());
	}

	#[test]
	fn test_fresh_quotes_override_static_table() {
		let mut c = converter();
		c.refresh_rates_at(&DoubledSource, now()).unwrap();

		assert!(!c.is_rate_stale_at(now()));
		assert_eq!(c.last_fx_update(), Some(now()));
		assert_eq!(c.fx_rates().len(), 9);
		assert_eq!(c.get_exchange_rate_at(CurrencyCode::Thb, CurrencyCode::Usd, now()), 0.056);

		let later = now() + Duration::minutes(DEFAULT_RATE_TTL_MINUTES as i64 + 1);
		assert!(c.is_rate_stale_at(later));
		assert_eq!(c.get_exchange_rate_at(CurrencyCode::Thb, CurrencyCode::Usd, later), 0.028);
	}

	#[test]
	fn test_cached_quotes_survive_reload() {
		let store = std::sync::Arc::new(MemoryPreferenceStore::new());
		let mut c = CurrencyConverter::new(std::sync::Arc::clone(&store));
		c.refresh_rates_at(&StaticRateSource::default(), now()).unwrap();

		let reloaded = CurrencyConverter::new(store);
		assert_eq!(reloaded.last_fx_update(), Some(now()));
		assert_eq!(reloaded.fx_rates(), c.fx_rates());
	}

	proptest! {
		#[test]
		fn exchange_rate_identity(code in any_code()) {
			prop_assert_eq!(converter().get_exchange_rate_at(code, code, now()), 1.0);
		}

		#[test]
		fn exchange_rate_reciprocity(a in any_code(), b in any_code()) {
			let c = converter();
			let product = c.get_exchange_rate_at(a, b, now()) * c.get_exchange_rate_at(b, a, now());
			prop_assert!((product - 1.0).abs() <= 1e-9);
		}

		#[test]
		fn convert_is_exact_in_display_currency(code in any_code(), amount in -1e9f64..1e9) {
			let mut c = converter();
			c.set_current_currency(code);
			prop_assert_eq!(c.current_currency(), code);
			prop_assert_eq!(c.convert_at(amount, code, now()), amount);
		}

		#[test]
		fn format_keeps_negative_sign(code in any_code(), amount in 1_000f64..1e7) {
			let mut c = converter();
			c.set_current_currency(code);
			let formatted = c.format_at(-amount, CurrencyCode::Thb, now());
			prop_assert!(formatted.starts_with('-'), "{}", formatted);
		}
	}
}
