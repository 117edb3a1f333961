// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-aware formatting operations.
//!
//! Every operation takes an explicit locale. Unsupported locales resolve to
//! the `en-US` configuration, so the only failures are out-of-range name
//! indices and unrepresentable timestamps.

mod time;
mod wrapper;

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::error::I18nError;
use crate::intl::{
	join_parts, IcuIntl, IntlProvider, NumberOptions, PartKind, PluralCategory,
	ResolvedNumberOptions,
};
use crate::lexicon;
use crate::locale::{
	get_locale_config, CurrencyDisplay, Direction, NumberFormatPreference,
};

pub use wrapper::I18nFormatter;

/// Part of the day a greeting is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
	Morning,
	Afternoon,
	Evening,
}

/// Abbreviated or full weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayNameStyle {
	Short,
	Long,
}

/// Where a locale places the currency symbol relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
	Before,
	After,
}

/// Postal address fields. Missing or empty fields are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
	pub street: Option<String>,
	pub city: Option<String>,
	pub state: Option<String>,
	pub postal_code: Option<String>,
	pub country: Option<String>,
}

impl Address {
	fn fields(&self) -> impl Iterator<Item = &str> + '_ {
		[
			&self.street,
			&self.city,
			&self.state,
			&self.postal_code,
			&self.country,
		]
		.into_iter()
		.filter_map(|field| field.as_deref())
		.filter(|field| !field.is_empty())
	}
}

const PERCENT_OPTIONS: ResolvedNumberOptions = ResolvedNumberOptions {
	minimum_fraction_digits: 0,
	maximum_fraction_digits: 1,
	use_grouping: true,
};

/// Options the host primitive uses when none are given.
const SEPARATOR_SAMPLE_OPTIONS: ResolvedNumberOptions = ResolvedNumberOptions {
	minimum_fraction_digits: 0,
	maximum_fraction_digits: 3,
	use_grouping: true,
};

const KIB: f64 = 1024.0;

/// Formatting operations over an [`IntlProvider`].
#[derive(Debug, Clone, Default)]
pub struct LocaleFormatter<P = IcuIntl> {
	intl: P,
}

impl LocaleFormatter<IcuIntl> {
	/// Formatter backed by the CLDR data compiled into ICU4X.
	pub const fn builtin() -> Self {
		Self {
			intl: IcuIntl::new(),
		}
	}
}

impl<P: IntlProvider> LocaleFormatter<P> {
	pub fn with_provider(intl: P) -> Self {
		Self { intl }
	}

	pub fn provider(&self) -> &P {
		&self.intl
	}

	/// Format a number. Defaults to 0-2 fraction digits, grouped when the
	/// locale prefers grouping.
	pub fn format_number(&self, value: f64, locale: &str, options: NumberOptions) -> String {
		let config = get_locale_config(locale);
		let resolved = options.resolve(ResolvedNumberOptions {
			minimum_fraction_digits: 0,
			maximum_fraction_digits: 2,
			use_grouping: config.number_format == NumberFormatPreference::Grouped,
		});
		join_parts(&self.intl.number_parts(config.code, value, resolved))
	}

	/// Format a monetary amount in `locale`. Defaults to 0-2 fraction digits
	/// with grouping and the locale's currency display.
	pub fn format_currency(
		&self,
		amount: f64,
		currency: CurrencyCode,
		locale: &str,
		options: NumberOptions,
	) -> String {
		let config = get_locale_config(locale);
		let resolved = options.resolve(ResolvedNumberOptions {
			minimum_fraction_digits: 0,
			maximum_fraction_digits: 2,
			use_grouping: true,
		});
		join_parts(&self.intl.currency_parts(
			config.code,
			amount,
			currency,
			config.currency_format,
			resolved,
		))
	}

	/// Format a monetary amount with the conventions of any locale the
	/// provider knows, not only the configured ones.
	pub fn format_currency_in_locale(
		&self,
		amount: f64,
		currency: CurrencyCode,
		locale: &str,
		options: ResolvedNumberOptions,
	) -> String {
		join_parts(&self.intl.currency_parts(
			locale,
			amount,
			currency,
			CurrencyDisplay::Symbol,
			options,
		))
	}

	/// Format a 0-100 value as a percentage with at most one fraction digit.
	pub fn format_percentage(&self, value: f64, locale: &str) -> String {
		let config = get_locale_config(locale);
		join_parts(
			&self
				.intl
				.percent_parts(config.code, value / 100.0, PERCENT_OPTIONS),
		)
	}

	/// Join items as a conjunction list.
	pub fn format_list<S: AsRef<str>>(&self, items: &[S], locale: &str) -> String {
		let config = get_locale_config(locale);
		let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
		self.intl.list(config.code, &items)
	}

	pub fn format_compact_number(&self, value: f64, locale: &str) -> String {
		self.intl.compact(get_locale_config(locale).code, value)
	}

	/// Decimal separator, read from the parts of `1.1`.
	pub fn get_decimal_separator(&self, locale: &str) -> String {
		let config = get_locale_config(locale);
		self.intl
			.number_parts(config.code, 1.1, SEPARATOR_SAMPLE_OPTIONS)
			.into_iter()
			.find(|part| part.kind == PartKind::Decimal)
			.map_or_else(|| ".".to_string(), |part| part.value)
	}

	/// Thousands separator, read from the parts of `1000`.
	pub fn get_thousands_separator(&self, locale: &str) -> String {
		let config = get_locale_config(locale);
		self.intl
			.number_parts(config.code, 1000.0, SEPARATOR_SAMPLE_OPTIONS)
			.into_iter()
			.find(|part| part.kind == PartKind::Group)
			.map_or_else(|| ",".to_string(), |part| part.value)
	}

	pub fn get_currency_symbol_position(&self, locale: &str) -> SymbolPosition {
		match get_locale_config(locale).code {
			"ar-SA" => SymbolPosition::After,
			_ => SymbolPosition::Before,
		}
	}

	/// Pick `singular` when the locale's plural rules put `count` in the
	/// `one` category.
	pub fn get_plural_form<'a>(
		&self,
		singular: &'a str,
		plural: &'a str,
		count: f64,
		locale: &str,
	) -> &'a str {
		let config = get_locale_config(locale);
		match self.intl.plural_category(config.code, count) {
			PluralCategory::One => singular,
			_ => plural,
		}
	}

	/// Spell out a duration as hours and minutes, omitting a zero component.
	pub fn format_duration(&self, minutes: u64, locale: &str) -> String {
		let config = get_locale_config(locale);
		let units = &lexicon::resources(config.code).duration;
		let hours = minutes / 60;
		let mins = minutes % 60;

		let counted = |count: u64, one: &str, other: &str| {
			let word = match self.intl.plural_category(config.code, count as f64) {
				PluralCategory::One => one,
				_ => other,
			};
			format!("{count} {word}")
		};
		let hour_text = counted(hours, units.hour_one, units.hour_other);
		let minute_text = counted(mins, units.minute_one, units.minute_other);

		match (hours, mins) {
			(0, _) => minute_text,
			(_, 0) => hour_text,
			_ => format!("{hour_text} {minute_text}"),
		}
	}

	pub fn format_address(&self, address: &Address, locale: &str) -> String {
		let mut parts: Vec<&str> = address.fields().collect();
		if get_locale_config(locale).direction == Direction::Rtl {
			parts.reverse();
		}
		parts.join(", ")
	}

	pub fn format_file_size(&self, bytes: u64) -> String {
		format_file_size(bytes)
	}

	pub fn format_phone_number(&self, phone: &str) -> String {
		format_phone_number(phone)
	}

	pub fn get_greeting(&self, locale: &str, time_of_day: TimeOfDay) -> &'static str {
		let greetings = &lexicon::resources(locale).greetings;
		match time_of_day {
			TimeOfDay::Morning => greetings.morning,
			TimeOfDay::Afternoon => greetings.afternoon,
			TimeOfDay::Evening => greetings.evening,
		}
	}

	pub fn get_error_message(&self, key: &str, locale: &str) -> &'static str {
		lexicon::error_message(key, locale)
	}

	/// Full month name for a zero-based month index.
	pub fn get_month_name(&self, index: usize, locale: &str) -> Result<&'static str, I18nError> {
		let months = &lexicon::resources(locale).months;
		months
			.get(index)
			.copied()
			.ok_or(I18nError::IndexOutOfRange {
				table: "month",
				index,
				len: months.len(),
			})
	}

	/// Weekday name for a zero-based index starting at Sunday.
	pub fn get_day_name(
		&self,
		index: usize,
		locale: &str,
		style: DayNameStyle,
	) -> Result<&'static str, I18nError> {
		let resources = lexicon::resources(locale);
		let days = match style {
			DayNameStyle::Short => &resources.days_short,
			DayNameStyle::Long => &resources.days_long,
		};
		days.get(index).copied().ok_or(I18nError::IndexOutOfRange {
			table: "day",
			index,
			len: days.len(),
		})
	}
}

/// Format a byte count in 1024-based steps up to gigabytes.
pub fn format_file_size(bytes: u64) -> String {
	if (bytes as f64) < KIB {
		return format!("{bytes} B");
	}
	let kb = bytes as f64 / KIB;
	if kb < KIB {
		return format!("{} KB", kb.round());
	}
	let mb = kb / KIB;
	if mb < KIB {
		return format!("{} MB", mb.round());
	}
	format!("{} GB", (mb / KIB).round())
}

/// Normalize a Thai phone number.
///
/// A leading `0` becomes `+66 `, a leading `66` becomes `0 `. Anything else
/// has its first two runs of seven digits split after the third digit.
/// Characters other than digits, `+` and whitespace are dropped.
pub fn format_phone_number(phone: &str) -> String {
	let cleaned: String = phone
		.chars()
		.filter(|c| c.is_ascii_digit() || *c == '+' || c.is_whitespace())
		.collect();

	if let Some(rest) = cleaned.strip_prefix('0') {
		return format!("+66 {rest}");
	}
	if let Some(rest) = cleaned.strip_prefix("66") {
		return format!("0 {rest}");
	}
	split_digit_run(&split_digit_run(&cleaned))
}

fn split_digit_run(text: &str) -> String {
	let bytes = text.as_bytes();
	let start = (0..bytes.len().saturating_sub(6))
		.find(|&i| bytes[i..i + 7].iter().all(u8::is_ascii_digit));
	match start {
		Some(i) => format!("{} {}", &text[..i + 3], &text[i + 3..]),
		None => text.to_string(),
	}
}
