// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static conversion rates relative to the base currency.

use phithiai_common_i18n::CurrencyCode;

/// Currency every rate is expressed against.
pub const BASE_CURRENCY: CurrencyCode = CurrencyCode::Thb;

/// Units of each currency per one unit of [`BASE_CURRENCY`], in
/// [`CurrencyCode::ALL`] order.
const STATIC_RATES: [(CurrencyCode, f64); 10] = [
	(CurrencyCode::Thb, 1.0),
	(CurrencyCode::Usd, 0.028),
	(CurrencyCode::Eur, 0.026),
	(CurrencyCode::Sgd, 0.038),
	(CurrencyCode::Myr, 0.13),
	(CurrencyCode::Gbp, 0.022),
	(CurrencyCode::Jpy, 4.2),
	(CurrencyCode::Cny, 0.2),
	(CurrencyCode::Aud, 0.043),
	(CurrencyCode::Cad, 0.038),
];

/// Rates for every supported currency against [`BASE_CURRENCY`].
///
/// Every rate is finite and positive, and the base currency's rate is 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
	rates: [(CurrencyCode, f64); 10],
}

impl Default for RateTable {
	fn default() -> Self {
		Self::builtin()
	}
}

impl RateTable {
	/// The built-in rate table.
	pub const fn builtin() -> Self {
		Self {
			rates: STATIC_RATES,
		}
	}

	/// Units of `code` per one unit of the base currency.
	pub fn rate(&self, code: CurrencyCode) -> f64 {
		self.rates
			.iter()
			.find(|(c, _)| *c == code)
			.map_or(1.0, |(_, rate)| *rate)
	}

	/// Units of `to` per one unit of `from`.
	pub fn cross_rate(&self, from: CurrencyCode, to: CurrencyCode) -> f64 {
		if from == to {
			return 1.0;
		}
		self.rate(to) / self.rate(from)
	}

	pub fn iter(&self) -> impl Iterator<Item = (CurrencyCode, f64)> + '_ {
		self.rates.iter().copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn any_code() -> impl Strategy<Value = CurrencyCode> {
		(0usize..CurrencyCode::ALL.len()).prop_map(|i| CurrencyCode::ALL[i])
	}

	#[test]
	fn test_base_rate_is_one() {
		assert_eq!(RateTable::builtin().rate(BASE_CURRENCY), 1.0);
	}

	#[test]
	fn test_table_covers_every_currency_in_order() {
		let codes: Vec<CurrencyCode> = RateTable::builtin().iter().map(|(c, _)| c).collect();
		assert_eq!(codes, CurrencyCode::ALL.to_vec());
	}

	#[test]
	fn test_rates_positive_and_finite() {
		for (code, rate) in RateTable::builtin().iter() {
			assert!(rate.is_finite() && rate > 0.0, "{code} has rate {rate}");
		}
	}

	#[test]
	fn test_cross_rates() {
		let table = RateTable::builtin();
		assert_eq!(table.cross_rate(CurrencyCode::Thb, CurrencyCode::Usd), 0.028);
		assert!((table.cross_rate(CurrencyCode::Usd, CurrencyCode::Thb) - 1.0 / 0.028).abs() < 1e-9);
		assert!((table.cross_rate(CurrencyCode::Usd, CurrencyCode::Jpy) - 150.0).abs() < 1e-9);
	}

	proptest! {
		#[test]
		fn cross_rate_identity(code in any_code()) {
			prop_assert_eq!(RateTable::builtin().cross_rate(code, code), 1.0);
		}

		#[test]
		fn cross_rate_reciprocity(a in any_code(), b in any_code()) {
			let table = RateTable::builtin();
			let product = table.cross_rate(a, b) * table.cross_rate(b, a);
			prop_assert!((product - 1.0).abs() <= 1e-9, "{} {} -> {}", a, b, product);
		}
	}
}
