// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Currency conversion and price formatting for Phithiai.
//!
//! All rates are expressed against the Thai Baht. [`CurrencyConverter`]
//! keeps the user's display currency in a
//! [`PreferenceStore`](phithiai_cli_preferences::PreferenceStore) and converts
//! amounts into it, preferring fresh cached FX quotes over the static table.
//!
//! # Example
//!
//! ```
//! use phithiai_cli_preferences::MemoryPreferenceStore;
//! use phithiai_common_currency::{CurrencyCode, CurrencyConverter};
//!
//! let mut converter = CurrencyConverter::new(MemoryPreferenceStore::new());
//! assert_eq!(converter.format(1500.0, CurrencyCode::Thb), "฿1,500");
//!
//! converter.set_current_currency(CurrencyCode::Usd);
//! assert_eq!(converter.get_exchange_rate(CurrencyCode::Usd, CurrencyCode::Usd), 1.0);
//! ```

mod converter;
mod error;
pub mod fx;
mod preference;
pub mod price;
mod rates;

pub use converter::CurrencyConverter;
pub use error::CurrencyError;
pub use fx::{FxQuote, FxRateCache, RateSource, StaticRateSource, DEFAULT_RATE_TTL_MINUTES};
pub use preference::{CurrencyPreference, CURRENCY_PREFERENCE_KEY};
pub use price::{
	format_price, format_price_comparison, format_price_range, format_price_with_discount,
	format_price_with_tax, parse_formatted_price, ComparedPrice, CurrencyFormatter,
	DiscountBreakdown, DiscountedPrice, PriceEntry, PriceOptions, TaxBreakdown, TaxedPrice,
};
pub use rates::{RateTable, BASE_CURRENCY};

pub use phithiai_common_i18n::{currency_info, CurrencyCode, CurrencyInfo};
