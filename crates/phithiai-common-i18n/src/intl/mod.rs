// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization primitives.
//!
//! [`IntlProvider`] is the seam between the formatting functions and the
//! locale data that renders numbers, dates, relative times and lists. The
//! crate ships [`IcuIntl`], which reads the CLDR data compiled into ICU4X.
//! Tests of the formatting layer substitute a fake provider.

mod icu_intl;

use chrono::{NaiveDate, NaiveTime};

use crate::currency::CurrencyCode;
use crate::locale::{CurrencyDisplay, DateStyle, HourCycle};

pub use icu_intl::IcuIntl;

/// Kind of a formatted number fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
	MinusSign,
	Integer,
	Group,
	Decimal,
	Fraction,
	Currency,
	PercentSign,
	Compact,
	Literal,
	Nan,
	Infinity,
}

/// One fragment of a formatted number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPart {
	pub kind: PartKind,
	pub value: String,
}

impl NumberPart {
	pub fn new(kind: PartKind, value: impl Into<String>) -> Self {
		Self {
			kind,
			value: value.into(),
		}
	}
}

/// Concatenate parts into the display string.
pub fn join_parts(parts: &[NumberPart]) -> String {
	parts.iter().map(|p| p.value.as_str()).collect()
}

/// Caller-supplied number options; `None` fields take the operation's default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberOptions {
	pub minimum_fraction_digits: Option<u8>,
	pub maximum_fraction_digits: Option<u8>,
	pub use_grouping: Option<bool>,
}

impl NumberOptions {
	/// Fix the number of fraction digits.
	pub fn fraction_digits(digits: u8) -> Self {
		Self {
			minimum_fraction_digits: Some(digits),
			maximum_fraction_digits: Some(digits),
			use_grouping: None,
		}
	}

	/// Fill unset fields from `defaults`.
	///
	/// A maximum below the minimum is raised to the minimum.
	pub fn resolve(self, defaults: ResolvedNumberOptions) -> ResolvedNumberOptions {
		let minimum = self
			.minimum_fraction_digits
			.unwrap_or(defaults.minimum_fraction_digits);
		let maximum = self
			.maximum_fraction_digits
			.unwrap_or(defaults.maximum_fraction_digits)
			.max(minimum);
		ResolvedNumberOptions {
			minimum_fraction_digits: minimum,
			maximum_fraction_digits: maximum,
			use_grouping: self.use_grouping.unwrap_or(defaults.use_grouping),
		}
	}
}

/// Fully specified number options handed to a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedNumberOptions {
	pub minimum_fraction_digits: u8,
	pub maximum_fraction_digits: u8,
	pub use_grouping: bool,
}

/// Unit for relative time phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeUnit {
	Second,
	Minute,
	Hour,
	Day,
	Week,
	Month,
	Year,
}

/// CLDR plural category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
	Zero,
	One,
	Two,
	Few,
	Many,
	Other,
}

/// Locale-aware rendering primitives.
///
/// Providers accept any locale tag and fall back to `en-US` data when a tag
/// cannot be rendered.
pub trait IntlProvider: Send + Sync {
	/// Render a plain decimal number.
	fn number_parts(
		&self,
		locale: &str,
		value: f64,
		options: ResolvedNumberOptions,
	) -> Vec<NumberPart>;

	/// Render a ratio as a percentage (`0.5` is fifty percent).
	fn percent_parts(
		&self,
		locale: &str,
		ratio: f64,
		options: ResolvedNumberOptions,
	) -> Vec<NumberPart>;

	/// Render a monetary amount.
	fn currency_parts(
		&self,
		locale: &str,
		value: f64,
		currency: CurrencyCode,
		display: CurrencyDisplay,
		options: ResolvedNumberOptions,
	) -> Vec<NumberPart>;

	/// Render a number in short compact notation ("1.2K").
	fn compact(&self, locale: &str, value: f64) -> String;

	/// Render a calendar date.
	fn date(&self, locale: &str, date: NaiveDate, style: DateStyle) -> String;

	/// Render a wall-clock time as hours and minutes.
	fn time(&self, locale: &str, time: NaiveTime, cycle: HourCycle, two_digit_hour: bool)
		-> String;

	/// Render a relative time; negative values are in the past.
	fn relative(&self, locale: &str, value: i64, unit: RelativeUnit) -> String;

	/// Join items as a conjunction list ("A, B, and C").
	fn list(&self, locale: &str, items: &[&str]) -> String;

	/// Plural category of a count.
	fn plural_category(&self, locale: &str, count: f64) -> PluralCategory;
}
