// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Price rendering helpers.
//!
//! Prices render with the conventions of the currency's home locale unless a
//! locale is given, with grouping and no fraction digits by default.

use phithiai_common_i18n::intl::{IntlProvider, PartKind};
use phithiai_common_i18n::{
	currency_symbol, locale_for_currency, IcuIntl, CurrencyCode, Direction, LocaleFormatter,
	NumberOptions, ResolvedNumberOptions,
};
use serde::{Deserialize, Serialize};

use crate::rates::RateTable;

const FORMATTER: LocaleFormatter = LocaleFormatter::builtin();

const PRICE_DEFAULTS: ResolvedNumberOptions = ResolvedNumberOptions {
	minimum_fraction_digits: 0,
	maximum_fraction_digits: 0,
	use_grouping: true,
};

const RTL_LANGUAGES: [&str; 4] = ["ar", "he", "fa", "ur"];

/// Overrides for a single price rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceOptions<'a> {
	/// Locale to render with instead of the currency's home locale
	pub locale: Option<&'a str>,
	pub number: NumberOptions,
}

impl<'a> PriceOptions<'a> {
	pub fn in_locale(locale: &'a str) -> Self {
		Self {
			locale: Some(locale),
			number: NumberOptions::default(),
		}
	}

	fn locale_for(&self, currency: CurrencyCode) -> &'a str {
		self.locale.unwrap_or_else(|| locale_for_currency(currency))
	}
}

/// Render `amount` in `currency`.
pub fn format_price(amount: f64, currency: CurrencyCode, options: &PriceOptions<'_>) -> String {
	FORMATTER.format_currency_in_locale(
		amount,
		currency,
		options.locale_for(currency),
		options.number.resolve(PRICE_DEFAULTS),
	)
}

/// Render a `min – max` range in one currency.
pub fn format_price_range(
	min: f64,
	max: f64,
	currency: CurrencyCode,
	options: &PriceOptions<'_>,
) -> String {
	format!(
		"{} – {}",
		format_price(min, currency, options),
		format_price(max, currency, options)
	)
}

/// Pre-tax amount and the VAT charged on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdown {
	pub amount: f64,
	/// Percentage, e.g. `7.0` for 7%
	pub tax_rate: f64,
	pub tax_amount: f64,
	pub currency: CurrencyCode,
}

impl TaxBreakdown {
	/// Breakdown for `amount` taxed at `tax_rate` percent.
	pub fn from_rate(amount: f64, tax_rate: f64, currency: CurrencyCode) -> Self {
		Self {
			amount,
			tax_rate,
			tax_amount: amount * tax_rate / 100.0,
			currency,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxedPrice {
	/// Amount including tax
	pub formatted: String,
	pub breakdown: String,
}

pub fn format_price_with_tax(breakdown: &TaxBreakdown, options: &PriceOptions<'_>) -> TaxedPrice {
	let tax = format_price(breakdown.tax_amount, breakdown.currency, options);
	TaxedPrice {
		formatted: format_price(
			breakdown.amount + breakdown.tax_amount,
			breakdown.currency,
			options,
		),
		breakdown: format!("Includes {}% VAT ({tax})", breakdown.tax_rate),
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountBreakdown {
	pub original_price: f64,
	pub discount_amount: f64,
	pub discount_percentage: f64,
	pub final_price: f64,
	pub currency: CurrencyCode,
}

impl DiscountBreakdown {
	/// Breakdown for `original_price` reduced by `discount_percentage` percent.
	pub fn from_percentage(original_price: f64, discount_percentage: f64, currency: CurrencyCode) -> Self {
		let discount_amount = original_price * discount_percentage / 100.0;
		Self {
			original_price,
			discount_amount,
			discount_percentage,
			final_price: original_price - discount_amount,
			currency,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountedPrice {
	/// Final price
	pub formatted: String,
	pub savings: String,
}

pub fn format_price_with_discount(
	breakdown: &DiscountBreakdown,
	options: &PriceOptions<'_>,
) -> DiscountedPrice {
	let saved = format_price(breakdown.discount_amount, breakdown.currency, options);
	DiscountedPrice {
		formatted: format_price(breakdown.final_price, breakdown.currency, options),
		savings: format!("Save {}% ({saved})", breakdown.discount_percentage),
	}
}

/// Read the amount back out of a formatted price.
///
/// Keeps digits, minus signs and the locale's decimal separator, then parses
/// the longest numeric prefix. Returns 0 when nothing parses.
pub fn parse_formatted_price(formatted: &str, locale: &str) -> f64 {
	let sample = ResolvedNumberOptions {
		minimum_fraction_digits: 1,
		maximum_fraction_digits: 1,
		use_grouping: false,
	};
	let decimal = IcuIntl::new()
		.number_parts(locale, 1.1, sample)
		.into_iter()
		.find(|part| part.kind == PartKind::Decimal)
		.map_or_else(|| ".".to_string(), |part| part.value);

	let mut cleaned = String::with_capacity(formatted.len());
	let mut rest = formatted;
	while let Some(c) = rest.chars().next() {
		if rest.starts_with(decimal.as_str()) {
			cleaned.push('.');
			rest = &rest[decimal.len()..];
			continue;
		}
		if c.is_ascii_digit() || c == '-' {
			cleaned.push(c);
		}
		rest = &rest[c.len_utf8()..];
	}

	let value = (1..=cleaned.len())
		.rev()
		.find_map(|end| cleaned[..end].parse::<f64>().ok())
		.filter(|v| v.is_finite())
		.unwrap_or(0.0);
	if value == 0.0 {
		0.0
	} else {
		value
	}
}

/// Renders prices in one currency and locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
	currency: CurrencyCode,
	locale: String,
}

impl Default for CurrencyFormatter {
	fn default() -> Self {
		Self::new(CurrencyCode::Thb)
	}
}

impl CurrencyFormatter {
	/// Formatter using the currency's home locale.
	pub fn new(currency: CurrencyCode) -> Self {
		Self {
			currency,
			locale: locale_for_currency(currency).to_string(),
		}
	}

	pub fn with_locale(currency: CurrencyCode, locale: impl Into<String>) -> Self {
		Self {
			currency,
			locale: locale.into(),
		}
	}

	pub fn format(&self, amount: f64, options: NumberOptions) -> String {
		format_price(amount, self.currency, &self.options(options))
	}

	pub fn format_range(&self, min: f64, max: f64, options: NumberOptions) -> String {
		format_price_range(min, max, self.currency, &self.options(options))
	}

	fn options(&self, number: NumberOptions) -> PriceOptions<'_> {
		PriceOptions {
			locale: Some(self.locale.as_str()),
			number,
		}
	}

	/// Switch currency and move to its home locale.
	pub fn set_currency(&mut self, currency: CurrencyCode) {
		self.currency = currency;
		self.locale = locale_for_currency(currency).to_string();
	}

	pub fn set_locale(&mut self, locale: impl Into<String>) {
		self.locale = locale.into();
	}

	pub fn currency(&self) -> CurrencyCode {
		self.currency
	}

	pub fn locale(&self) -> &str {
		&self.locale
	}

	pub fn symbol(&self) -> &'static str {
		currency_symbol(self.currency)
	}

	/// True for Arabic, Hebrew, Persian and Urdu tags, supported or not.
	pub fn is_rtl(&self) -> bool {
		let language = self.locale.split(['-', '_']).next().unwrap_or_default();
		RTL_LANGUAGES
			.iter()
			.any(|lang| language.eq_ignore_ascii_case(lang))
	}

	pub fn text_direction(&self) -> Direction {
		if self.is_rtl() {
			Direction::Rtl
		} else {
			Direction::Ltr
		}
	}
}

/// A price to place in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
	pub amount: f64,
	pub currency: CurrencyCode,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedPrice {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// The price converted into the comparison currency
	pub formatted: String,
	pub amount: f64,
	pub currency: CurrencyCode,
	pub converted_amount: f64,
}

/// Render every price in `base` so they can be compared side by side.
pub fn format_price_comparison(
	prices: &[PriceEntry],
	base: CurrencyCode,
	rates: &RateTable,
	options: &PriceOptions<'_>,
) -> Vec<ComparedPrice> {
	prices
		.iter()
		.map(|price| {
			let converted_amount = if price.currency == base {
				price.amount
			} else {
				price.amount * rates.cross_rate(price.currency, base)
			};
			ComparedPrice {
				label: price.label.clone(),
				formatted: format_price(converted_amount, base, options),
				amount: price.amount,
				currency: price.currency,
				converted_amount,
			}
		})
		.collect()
}
