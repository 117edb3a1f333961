// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Display metadata for the currencies the platform prices in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;

/// ISO 4217 code of a supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CurrencyCode {
	#[serde(rename = "THB")]
	Thb,
	#[serde(rename = "USD")]
	Usd,
	#[serde(rename = "EUR")]
	Eur,
	#[serde(rename = "SGD")]
	Sgd,
	#[serde(rename = "MYR")]
	Myr,
	#[serde(rename = "GBP")]
	Gbp,
	#[serde(rename = "JPY")]
	Jpy,
	#[serde(rename = "CNY")]
	Cny,
	#[serde(rename = "AUD")]
	Aud,
	#[serde(rename = "CAD")]
	Cad,
}

impl CurrencyCode {
	/// Every supported code, in display order.
	pub const ALL: [CurrencyCode; 10] = [
		CurrencyCode::Thb,
		CurrencyCode::Usd,
		CurrencyCode::Eur,
		CurrencyCode::Sgd,
		CurrencyCode::Myr,
		CurrencyCode::Gbp,
		CurrencyCode::Jpy,
		CurrencyCode::Cny,
		CurrencyCode::Aud,
		CurrencyCode::Cad,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			CurrencyCode::Thb => "THB",
			CurrencyCode::Usd => "USD",
			CurrencyCode::Eur => "EUR",
			CurrencyCode::Sgd => "SGD",
			CurrencyCode::Myr => "MYR",
			CurrencyCode::Gbp => "GBP",
			CurrencyCode::Jpy => "JPY",
			CurrencyCode::Cny => "CNY",
			CurrencyCode::Aud => "AUD",
			CurrencyCode::Cad => "CAD",
		}
	}

	/// Display metadata for this currency.
	pub fn info(&self) -> &'static CurrencyInfo {
		currency_info(*self)
	}
}

impl fmt::Display for CurrencyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for CurrencyCode {
	type Err = I18nError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		CurrencyCode::ALL
			.iter()
			.copied()
			.find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
			.ok_or_else(|| I18nError::UnknownCurrency(s.to_string()))
	}
}

/// Display metadata for a currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInfo {
	pub code: CurrencyCode,
	/// Symbol shown in currency pickers
	pub symbol: &'static str,
	/// English display name
	pub name: &'static str,
	/// Flag emoji for the issuing region
	pub flag: &'static str,
	/// Locale whose conventions amounts in this currency are rendered with
	pub locale: &'static str,
}

/// Metadata for every supported currency, in [`CurrencyCode::ALL`] order.
pub const CURRENCIES: &[CurrencyInfo] = &[
	CurrencyInfo {
		code: CurrencyCode::Thb,
		symbol: "฿",
		name: "Thai Baht",
		flag: "🇹🇭",
		locale: "th-TH",
	},
	CurrencyInfo {
		code: CurrencyCode::Usd,
		symbol: "$",
		name: "US Dollar",
		flag: "🇺🇸",
		locale: "en-US",
	},
	CurrencyInfo {
		code: CurrencyCode::Eur,
		symbol: "€",
		name: "Euro",
		flag: "🇪🇺",
		locale: "de-DE",
	},
	CurrencyInfo {
		code: CurrencyCode::Sgd,
		symbol: "S$",
		name: "Singapore Dollar",
		flag: "🇸🇬",
		locale: "en-SG",
	},
	CurrencyInfo {
		code: CurrencyCode::Myr,
		symbol: "RM",
		name: "Malaysian Ringgit",
		flag: "🇲🇾",
		locale: "ms-MY",
	},
	CurrencyInfo {
		code: CurrencyCode::Gbp,
		symbol: "£",
		name: "British Pound",
		flag: "🇬🇧",
		locale: "en-GB",
	},
	CurrencyInfo {
		code: CurrencyCode::Jpy,
		symbol: "¥",
		name: "Japanese Yen",
		flag: "🇯🇵",
		locale: "ja-JP",
	},
	CurrencyInfo {
		code: CurrencyCode::Cny,
		symbol: "¥",
		name: "Chinese Yuan",
		flag: "🇨🇳",
		locale: "zh-CN",
	},
	CurrencyInfo {
		code: CurrencyCode::Aud,
		symbol: "A$",
		name: "Australian Dollar",
		flag: "🇦🇺",
		locale: "en-AU",
	},
	CurrencyInfo {
		code: CurrencyCode::Cad,
		symbol: "C$",
		name: "Canadian Dollar",
		flag: "🇨🇦",
		locale: "en-CA",
	},
];

/// Metadata for a currency.
pub fn currency_info(code: CurrencyCode) -> &'static CurrencyInfo {
	// CURRENCIES mirrors CurrencyCode::ALL index for index
	let index = CurrencyCode::ALL
		.iter()
		.position(|c| *c == code)
		.unwrap_or_default();
	&CURRENCIES[index]
}

/// Picker symbol for a currency.
pub fn currency_symbol(code: CurrencyCode) -> &'static str {
	currency_info(code).symbol
}

/// Locale used to render amounts in a currency.
pub fn locale_for_currency(code: CurrencyCode) -> &'static str {
	currency_info(code).locale
}
