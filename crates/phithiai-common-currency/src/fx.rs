// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cached FX quotes with a freshness window.
//!
//! Quotes are keyed `"<FROM>-<TO>"` and persisted as JSON under
//! [`FX_RATES_KEY`], with the refresh time as RFC 3339 under
//! [`FX_RATES_TIMESTAMP_KEY`]. The cache is stale when it has no timestamp
//! or the timestamp is older than its TTL.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use phithiai_cli_preferences::PreferenceStore;
use phithiai_common_i18n::CurrencyCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::CurrencyError;
use crate::rates::{RateTable, BASE_CURRENCY};

pub const FX_RATES_KEY: &str = "phithiai-fx-rates";
pub const FX_RATES_TIMESTAMP_KEY: &str = "phithiai-fx-rates-timestamp";

/// Minutes a refreshed set of quotes stays fresh.
pub const DEFAULT_RATE_TTL_MINUTES: u32 = 60;

/// One exchange-rate quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FxQuote {
	pub from: CurrencyCode,
	pub to: CurrencyCode,
	/// Units of `to` per one unit of `from`
	pub rate: f64,
	pub last_updated: DateTime<Utc>,
	#[serde(rename = "ttl")]
	pub ttl_minutes: u32,
	pub source: String,
}

impl FxQuote {
	/// Cache key for a currency pair.
	pub fn key_for(from: CurrencyCode, to: CurrencyCode) -> String {
		format!("{from}-{to}")
	}

	pub fn key(&self) -> String {
		Self::key_for(self.from, self.to)
	}
}

/// Provider of fresh quotes.
pub trait RateSource: Send + Sync {
	/// Label recorded on the quotes this source produces.
	fn name(&self) -> &str;

	/// Quotes from `base` to every other supported currency.
	fn fetch(&self, base: CurrencyCode, now: DateTime<Utc>) -> Result<Vec<FxQuote>, CurrencyError>;
}

/// Serves the built-in rate table as quotes.
#[derive(Debug, Clone, Default)]
pub struct StaticRateSource {
	table: RateTable,
}

impl StaticRateSource {
	pub const NAME: &'static str = "Open Exchange Rates API";

	pub fn new(table: RateTable) -> Self {
		Self { table }
	}
}

impl RateSource for StaticRateSource {
	fn name(&self) -> &str {
		Self::NAME
	}

	fn fetch(&self, base: CurrencyCode, now: DateTime<Utc>) -> Result<Vec<FxQuote>, CurrencyError> {
		Ok(CurrencyCode::ALL
			.into_iter()
			.filter(|code| *code != base)
			.map(|to| FxQuote {
				from: base,
				to,
				rate: self.table.cross_rate(base, to),
				last_updated: now,
				ttl_minutes: DEFAULT_RATE_TTL_MINUTES,
				source: self.name().to_string(),
			})
			.collect())
	}
}

/// In-memory view of the persisted FX quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct FxRateCache {
	quotes: BTreeMap<String, FxQuote>,
	last_updated: Option<DateTime<Utc>>,
	ttl_minutes: u32,
}

impl Default for FxRateCache {
	fn default() -> Self {
		Self::new(DEFAULT_RATE_TTL_MINUTES)
	}
}

impl FxRateCache {
	/// An empty, stale cache.
	pub fn new(ttl_minutes: u32) -> Self {
		Self {
			quotes: BTreeMap::new(),
			last_updated: None,
			ttl_minutes,
		}
	}

	/// Read cached quotes and their timestamp from `store`.
	///
	/// Unreadable or corrupt entries are logged and treated as absent.
	pub fn load<S: PreferenceStore + ?Sized>(store: &S, ttl_minutes: u32) -> Self {
		let mut cache = Self::new(ttl_minutes);

		match store.get(FX_RATES_KEY) {
			Ok(Some(json)) => match serde_json::from_str::<BTreeMap<String, FxQuote>>(&json) {
				Ok(quotes) => cache.quotes = quotes,
				Err(e) => warn!(key = FX_RATES_KEY, error = %e, "Ignoring unparseable cached FX rates"),
			},
			Ok(None) => {}
			Err(e) => warn!(key = FX_RATES_KEY, error = %e, "Failed to read cached FX rates"),
		}

		if !cache.quotes.is_empty() {
			match store.get(FX_RATES_TIMESTAMP_KEY) {
				Ok(Some(raw)) => match DateTime::parse_from_rfc3339(&raw) {
					Ok(ts) => cache.last_updated = Some(ts.with_timezone(&Utc)),
					Err(e) => warn!(key = FX_RATES_TIMESTAMP_KEY, error = %e, "Ignoring unparseable FX timestamp"),
				},
				Ok(None) => {}
				Err(e) => warn!(key = FX_RATES_TIMESTAMP_KEY, error = %e, "Failed to read FX timestamp"),
			}
		}

		debug!(quotes = cache.quotes.len(), last_updated = ?cache.last_updated, "Loaded FX rate cache");
		cache
	}

	/// Fetch quotes from `source`, replace the cache and persist it.
	///
	/// A failed fetch leaves the current quotes in place. A failed write is
	/// logged and the fresh quotes are kept in memory.
	pub fn refresh<S: PreferenceStore + ?Sized>(
		&mut self,
		store: &S,
		source: &dyn RateSource,
		now: DateTime<Utc>,
	) -> Result<usize, CurrencyError> {
		let fetched = source.fetch(BASE_CURRENCY, now).map_err(|e| {
			warn!(source = source.name(), error = %e, "FX refresh failed, keeping cached rates");
			e
		})?;

		if let Some(bad) = fetched
			.iter()
			.find(|q| !q.rate.is_finite() || q.rate <= 0.0)
		{
			let err = CurrencyError::RateSource(format!(
				"{} returned unusable rate {} for {}",
				source.name(),
				bad.rate,
				bad.key()
			));
			warn!(source = source.name(), error = %err, "FX refresh rejected, keeping cached rates");
			return Err(err);
		}

		self.quotes = fetched.into_iter().map(|q| (q.key(), q)).collect();
		self.last_updated = Some(now);
		self.persist(store);

		info!(source = source.name(), quotes = self.quotes.len(), "FX rates refreshed");
		Ok(self.quotes.len())
	}

	fn persist<S: PreferenceStore + ?Sized>(&self, store: &S) {
		let json = match serde_json::to_string(&self.quotes) {
			Ok(json) => json,
			Err(e) => {
				warn!(key = FX_RATES_KEY, error = %e, "Failed to serialize FX rates");
				return;
			}
		};
		if let Err(e) = store.set(FX_RATES_KEY, &json) {
			warn!(key = FX_RATES_KEY, error = %e, "Failed to persist FX rates, continuing in memory");
			return;
		}
		if let Some(ts) = self.last_updated {
			if let Err(e) = store.set(FX_RATES_TIMESTAMP_KEY, &ts.to_rfc3339()) {
				warn!(key = FX_RATES_TIMESTAMP_KEY, error = %e, "Failed to persist FX timestamp, continuing in memory");
			}
		}
	}

	/// True when there is no refresh time or it is older than the TTL.
	pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
		match self.last_updated {
			Some(ts) => now.signed_duration_since(ts) > Duration::minutes(i64::from(self.ttl_minutes)),
			None => true,
		}
	}

	/// Fresh quoted rate for a pair, if any.
	pub fn fresh_rate(&self, from: CurrencyCode, to: CurrencyCode, now: DateTime<Utc>) -> Option<f64> {
		if self.is_stale_at(now) {
			return None;
		}
		self.quotes.get(&FxQuote::key_for(from, to)).map(|q| q.rate)
	}

	pub fn quotes(&self) -> &BTreeMap<String, FxQuote> {
		&self.quotes
	}

	pub fn last_updated(&self) -> Option<DateTime<Utc>> {
		self.last_updated
	}

	pub fn ttl_minutes(&self) -> u32 {
		self.ttl_minutes
	}
}
