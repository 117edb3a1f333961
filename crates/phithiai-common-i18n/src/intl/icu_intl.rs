// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! [`IntlProvider`] backed by ICU4X compiled CLDR data.

use std::fmt::Display;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use fixed_decimal::{FixedDecimal, FloatPrecision, Sign};
use icu::calendar::{Date, Time};
use icu::datetime::options::length;
use icu::datetime::{DateFormatter, DateTimeError, TimeFormatter};
use icu::decimal::options::GroupingStrategy;
use icu::decimal::FixedDecimalFormatter;
use icu::experimental::compactdecimal::CompactDecimalFormatter;
use icu::experimental::dimension::currency::formatter::{
	CurrencyCode as IsoCurrency, CurrencyFormatter,
};
use icu::experimental::dimension::provider::percent::PercentEssentialsV1Marker;
use icu::experimental::relativetime::{
	RelativeTimeError, RelativeTimeFormatter, RelativeTimeFormatterOptions,
};
use icu::list::{ListFormatter, ListLength};
use icu::locid::extensions::unicode::{key, value};
use icu::locid::{locale, Locale};
use icu::plurals::{PluralCategory as IcuCategory, PluralRules};
use icu_provider::{DataError, DataLocale, DataPayload, DataProvider, DataRequest};
use tinystr::TinyAsciiStr;
use tracing::warn;
use writeable::Writeable;

use super::{
	join_parts, IntlProvider, NumberPart, PartKind, PluralCategory, RelativeUnit,
	ResolvedNumberOptions,
};
use crate::currency::CurrencyCode;
use crate::locale::{CurrencyDisplay, DateStyle, HourCycle, DEFAULT_LOCALE};

const COMPACT_FALLBACK: ResolvedNumberOptions = ResolvedNumberOptions {
	minimum_fraction_digits: 0,
	maximum_fraction_digits: 2,
	use_grouping: false,
};

/// Renders with the CLDR data compiled into ICU4X.
///
/// Digits are always Latin, so `ar-SA` prints `3` rather than `٣`. Tags
/// that do not parse render as `en-US`; well-formed tags without data take
/// ICU's own locale fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IcuIntl;

impl IcuIntl {
	pub const fn new() -> Self {
		Self
	}
}

fn data_locale(tag: &str, cycle: Option<HourCycle>) -> DataLocale {
	let mut parsed = tag.parse::<Locale>().unwrap_or_else(|err| {
		warn!(locale = tag, error = %err, fallback = DEFAULT_LOCALE, "malformed locale tag");
		locale!("en-US")
	});
	let keywords = &mut parsed.extensions.unicode.keywords;
	keywords.set(key!("nu"), value!("latn"));
	match cycle {
		Some(HourCycle::H12) => {
			keywords.set(key!("hc"), value!("h12"));
		}
		Some(HourCycle::H24) => {
			keywords.set(key!("hc"), value!("h23"));
		}
		None => {}
	}
	DataLocale::from(&parsed)
}

/// Run `render` against `tag`, retrying with `en-US` data when ICU has
/// nothing usable for it.
fn with_locale<T, E: Display>(
	tag: &str,
	what: &'static str,
	cycle: Option<HourCycle>,
	render: impl Fn(&DataLocale) -> Result<T, E>,
) -> Option<T> {
	match render(&data_locale(tag, cycle)) {
		Ok(out) => Some(out),
		Err(err) => {
			warn!(locale = tag, what, error = %err, "locale data unavailable, using en-US");
			render(&data_locale(DEFAULT_LOCALE, cycle))
				.map_err(|err| warn!(what, error = %err, "en-US data unavailable"))
				.ok()
		}
	}
}

/// Round `value` the way the options ask, halves away from zero.
///
/// Also reports whether the result shows fraction digits. Values that round
/// to zero lose their sign.
fn rounded(value: f64, options: ResolvedNumberOptions) -> Option<(FixedDecimal, bool)> {
	let mut decimal = FixedDecimal::try_from_f64(value, FloatPrecision::Floating).ok()?;
	decimal.half_expand(-i16::from(options.maximum_fraction_digits));
	decimal.trim_end();
	let has_fraction = options.minimum_fraction_digits > 0
		|| (!decimal.is_zero() && decimal.nonzero_magnitude_end() < 0);
	decimal.pad_end(-i16::from(options.minimum_fraction_digits));
	if decimal.is_zero() {
		decimal.set_sign(Sign::None);
	}
	Some((decimal, has_fraction))
}

/// Split formatted digits into typed parts.
///
/// Text before the first digit is the minus sign and text after the last is
/// a literal. Between digit runs, the final separator is the decimal point
/// when the number has a fraction and every other one is a group separator.
fn segment(formatted: &str, has_fraction: bool) -> Vec<NumberPart> {
	let mut runs: Vec<(bool, String)> = Vec::new();
	for c in formatted.chars() {
		let digit = c.is_ascii_digit();
		match runs.last_mut() {
			Some((is_digit, text)) if *is_digit == digit => text.push(c),
			_ => runs.push((digit, c.to_string())),
		}
	}

	let (Some(first), Some(last)) = (
		runs.iter().position(|(digit, _)| *digit),
		runs.iter().rposition(|(digit, _)| *digit),
	) else {
		return vec![NumberPart::new(PartKind::Literal, formatted)];
	};
	let decimal_at = (has_fraction && last > first + 1).then(|| last - 1);

	runs.into_iter()
		.enumerate()
		.map(|(i, (digit, text))| {
			let kind = if i < first {
				PartKind::MinusSign
			} else if i > last {
				PartKind::Literal
			} else if digit {
				match decimal_at {
					Some(point) if i > point => PartKind::Fraction,
					_ => PartKind::Integer,
				}
			} else if Some(i) == decimal_at {
				PartKind::Decimal
			} else {
				PartKind::Group
			};
			NumberPart::new(kind, text)
		})
		.collect()
}

fn non_finite(value: f64) -> Vec<NumberPart> {
	if value.is_nan() {
		return vec![NumberPart::new(PartKind::Nan, "NaN")];
	}
	let mut parts = Vec::with_capacity(2);
	if value.is_sign_negative() {
		parts.push(NumberPart::new(PartKind::MinusSign, "-"));
	}
	parts.push(NumberPart::new(PartKind::Infinity, "∞"));
	parts
}

/// Spacing a currency or percent affix may carry around its symbol.
fn is_spacing(c: char) -> bool {
	c.is_whitespace() || matches!(c, '\u{200e}' | '\u{200f}' | '\u{61c}')
}

/// Split an affix into spacing literals around a symbol part of `kind`.
fn affix_parts(affix: &str, kind: PartKind) -> Vec<NumberPart> {
	let symbol = affix.trim_matches(is_spacing);
	if symbol.is_empty() {
		return match affix {
			"" => Vec::new(),
			spacing => vec![NumberPart::new(PartKind::Literal, spacing)],
		};
	}
	let lead = &affix[..affix.len() - affix.trim_start_matches(is_spacing).len()];
	let trail = &affix[affix.trim_end_matches(is_spacing).len()..];

	[
		(PartKind::Literal, lead),
		(kind, symbol),
		(PartKind::Literal, trail),
	]
	.into_iter()
	.filter(|(_, text)| !text.is_empty())
	.map(|(kind, text)| NumberPart::new(kind, text))
	.collect()
}

/// Text ICU places before and after the amount for `currency`.
///
/// Read off a rendering of `1`, since the pattern itself is not exposed.
fn currency_affixes(
	locale: &DataLocale,
	currency: CurrencyCode,
) -> Result<(String, String), DataError> {
	let iso = TinyAsciiStr::<3>::from_str(currency.as_str())
		.map_err(|_| DataError::custom("currency code is not three ASCII letters"))?;
	let formatter = CurrencyFormatter::try_new(locale, Default::default())?;
	let one = FixedDecimal::from(1u32);
	let rendered = formatter
		.format_fixed_decimal(&one, IsoCurrency(iso))
		.write_to_string()
		.into_owned();
	rendered
		.split_once('1')
		.map(|(before, after)| (before.to_string(), after.to_string()))
		.ok_or_else(|| DataError::custom("currency pattern has no number slot"))
}

/// Percent sign placement for a locale.
struct PercentPattern {
	sign_first: bool,
	before: String,
	sign: String,
	after: String,
}

fn percent_pattern(locale: &DataLocale) -> Result<PercentPattern, DataError> {
	let payload: DataPayload<PercentEssentialsV1Marker> = icu::experimental::provider::Baked
		.load(DataRequest {
			locale,
			metadata: Default::default(),
		})?
		.take_payload()?;
	let data = payload.get();
	Ok(PercentPattern {
		sign_first: data.percent_symbol_index < data.number_index,
		before: data.percent_sign_affixes.prefix.to_string(),
		sign: data.percent_sign_symbol.to_string(),
		after: data.percent_sign_affixes.suffix.to_string(),
	})
}

/// Widen a leading single-digit hour to two digits.
fn pad_hour(text: &str) -> String {
	match text.find(|c: char| c.is_ascii_digit()) {
		Some(start) if !text[start + 1..].starts_with(|c: char| c.is_ascii_digit()) => {
			format!("{}0{}", &text[..start], &text[start..])
		}
		_ => text.to_string(),
	}
}

fn relative_formatter(
	locale: &DataLocale,
	unit: RelativeUnit,
) -> Result<RelativeTimeFormatter, RelativeTimeError> {
	let options = RelativeTimeFormatterOptions::default();
	match unit {
		RelativeUnit::Second => RelativeTimeFormatter::try_new_long_second(locale, options),
		RelativeUnit::Minute => RelativeTimeFormatter::try_new_long_minute(locale, options),
		RelativeUnit::Hour => RelativeTimeFormatter::try_new_long_hour(locale, options),
		RelativeUnit::Day => RelativeTimeFormatter::try_new_long_day(locale, options),
		RelativeUnit::Week => RelativeTimeFormatter::try_new_long_week(locale, options),
		RelativeUnit::Month => RelativeTimeFormatter::try_new_long_month(locale, options),
		RelativeUnit::Year => RelativeTimeFormatter::try_new_long_year(locale, options),
	}
}

impl From<IcuCategory> for PluralCategory {
	fn from(category: IcuCategory) -> Self {
		match category {
			IcuCategory::Zero => PluralCategory::Zero,
			IcuCategory::One => PluralCategory::One,
			IcuCategory::Two => PluralCategory::Two,
			IcuCategory::Few => PluralCategory::Few,
			IcuCategory::Many => PluralCategory::Many,
			IcuCategory::Other => PluralCategory::Other,
		}
	}
}

impl IntlProvider for IcuIntl {
	fn number_parts(
		&self,
		locale: &str,
		value: f64,
		options: ResolvedNumberOptions,
	) -> Vec<NumberPart> {
		if !value.is_finite() {
			return non_finite(value);
		}
		let Some((decimal, has_fraction)) = rounded(value, options) else {
			return non_finite(value);
		};
		let grouping = if options.use_grouping {
			GroupingStrategy::Auto
		} else {
			GroupingStrategy::Never
		};

		with_locale(locale, "decimal", None, |data| {
			FixedDecimalFormatter::try_new(data, grouping.into())
				.map(|formatter| formatter.format_to_string(&decimal))
		})
		.map(|text| segment(&text, has_fraction))
		.unwrap_or_else(|| vec![NumberPart::new(PartKind::Literal, decimal.to_string())])
	}

	fn percent_parts(
		&self,
		locale: &str,
		ratio: f64,
		options: ResolvedNumberOptions,
	) -> Vec<NumberPart> {
		let number = self.number_parts(locale, ratio * 100.0, options);
		let Some(pattern) = with_locale(locale, "percent", None, percent_pattern) else {
			let mut parts = number;
			parts.push(NumberPart::new(PartKind::PercentSign, "%"));
			return parts;
		};

		let affix = format!("{}{}{}", pattern.before, pattern.sign, pattern.after);
		let sign = affix_parts(&affix, PartKind::PercentSign);
		if pattern.sign_first {
			sign.into_iter().chain(number).collect()
		} else {
			number.into_iter().chain(sign).collect()
		}
	}

	fn currency_parts(
		&self,
		locale: &str,
		value: f64,
		currency: CurrencyCode,
		display: CurrencyDisplay,
		options: ResolvedNumberOptions,
	) -> Vec<NumberPart> {
		let number = self.number_parts(locale, value, options);
		let (sign, digits): (Vec<NumberPart>, Vec<NumberPart>) = number
			.into_iter()
			.partition(|part| part.kind == PartKind::MinusSign);

		let (before, after) = with_locale(locale, "currency", None, |data| {
			currency_affixes(data, currency)
		})
		.unwrap_or_else(|| (format!("{}\u{a0}", currency.as_str()), String::new()));
		let symbol_first = !before.trim_matches(is_spacing).is_empty();

		let (prefix, suffix) = match display {
			CurrencyDisplay::Symbol => (
				affix_parts(&before, PartKind::Currency),
				affix_parts(&after, PartKind::Currency),
			),
			CurrencyDisplay::Code if symbol_first => (
				vec![
					NumberPart::new(PartKind::Currency, currency.as_str()),
					NumberPart::new(PartKind::Literal, "\u{a0}"),
				],
				Vec::new(),
			),
			CurrencyDisplay::Code => (
				Vec::new(),
				vec![
					NumberPart::new(PartKind::Literal, "\u{a0}"),
					NumberPart::new(PartKind::Currency, currency.as_str()),
				],
			),
			CurrencyDisplay::Name => (
				Vec::new(),
				vec![
					NumberPart::new(PartKind::Literal, " "),
					NumberPart::new(PartKind::Currency, currency.info().name),
				],
			),
		};

		sign.into_iter()
			.chain(prefix)
			.chain(digits)
			.chain(suffix)
			.collect()
	}

	fn compact(&self, locale: &str, value: f64) -> String {
		let fallback = || join_parts(&self.number_parts(locale, value, COMPACT_FALLBACK));
		let Ok(mut decimal) = FixedDecimal::try_from_f64(value, FloatPrecision::Floating) else {
			return fallback();
		};
		if decimal.is_zero() {
			decimal.set_sign(Sign::None);
		}

		with_locale(locale, "compact", None, |data| {
			CompactDecimalFormatter::try_new_short(data, Default::default())
				.map(|formatter| formatter.format_fixed_decimal(decimal.clone()).to_string())
		})
		.unwrap_or_else(fallback)
	}

	fn date(&self, locale: &str, date: NaiveDate, style: DateStyle) -> String {
		let date_length = match style {
			DateStyle::Short => length::Date::Short,
			DateStyle::Medium => length::Date::Medium,
			DateStyle::Long => length::Date::Long,
		};

		with_locale(locale, "date", None, |data| -> Result<String, DateTimeError> {
			let iso = Date::try_new_iso_date(date.year(), date.month() as u8, date.day() as u8)?;
			DateFormatter::try_new_with_length(data, date_length)?.format_to_string(&iso.to_any())
		})
		.unwrap_or_else(|| date.format("%Y-%m-%d").to_string())
	}

	fn time(
		&self,
		locale: &str,
		time: NaiveTime,
		cycle: HourCycle,
		two_digit_hour: bool,
	) -> String {
		let text = with_locale(locale, "time", Some(cycle), |data| -> Result<String, DateTimeError> {
			let value = Time::try_new(time.hour() as u8, time.minute() as u8, 0, 0)?;
			Ok(TimeFormatter::try_new_with_length(data, length::Time::Short)?.format_to_string(&value))
		})
		.unwrap_or_else(|| time.format("%H:%M").to_string());

		if two_digit_hour {
			pad_hour(&text)
		} else {
			text
		}
	}

	fn relative(&self, locale: &str, value: i64, unit: RelativeUnit) -> String {
		with_locale(locale, "relative time", None, |data| {
			relative_formatter(data, unit)
				.map(|formatter| formatter.format(FixedDecimal::from(value)).to_string())
		})
		.unwrap_or_else(|| format!("{value} {unit:?}"))
	}

	fn list(&self, locale: &str, items: &[&str]) -> String {
		with_locale(locale, "list", None, |data| {
			ListFormatter::try_new_and_with_length(data, ListLength::Wide)
				.map(|formatter| formatter.format_to_string(items.iter().copied()))
		})
		.unwrap_or_else(|| items.join(", "))
	}

	fn plural_category(&self, locale: &str, count: f64) -> PluralCategory {
		let Ok(decimal) = FixedDecimal::try_from_f64(count.abs(), FloatPrecision::Floating) else {
			return PluralCategory::Other;
		};
		with_locale(locale, "plural rules", None, |data| {
			PluralRules::try_new_cardinal(data).map(|rules| rules.category_for(&decimal))
		})
		.map_or(PluralCategory::Other, PluralCategory::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const INTL: IcuIntl = IcuIntl::new();

	fn opts(min: u8, max: u8, grouping: bool) -> ResolvedNumberOptions {
		ResolvedNumberOptions {
			minimum_fraction_digits: min,
			maximum_fraction_digits: max,
			use_grouping: grouping,
		}
	}

	fn number(locale: &str, value: f64, options: ResolvedNumberOptions) -> String {
		join_parts(&INTL.number_parts(locale, value, options))
	}

	fn currency(locale: &str, value: f64, code: CurrencyCode, display: CurrencyDisplay) -> String {
		join_parts(&INTL.currency_parts(locale, value, code, display, opts(0, 0, true)))
	}

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[test]
	fn test_number_separators_follow_locale() {
		assert_eq!(number("en-US", 1234.5, opts(0, 2, true)), "1,234.5");
		assert_eq!(number("de-DE", 1234.5, opts(0, 2, true)), "1.234,5");
		assert_eq!(number("vi-VN", 1234567.0, opts(0, 2, true)), "1.234.567");
		assert_eq!(number("en-US", 1234567.0, opts(0, 0, false)), "1234567");
	}

	#[test]
	fn test_number_rounding_and_padding() {
		assert_eq!(number("en-US", 2.5, opts(0, 0, true)), "3");
		assert_eq!(number("en-US", 1.234, opts(0, 2, true)), "1.23");
		assert_eq!(number("en-US", 1.0, opts(2, 2, true)), "1.00");
		assert_eq!(number("en-US", 1.5, opts(0, 2, true)), "1.5");
	}

	#[test]
	fn test_arabic_digits_stay_latin() {
		assert_eq!(number("ar-SA", 1234.0, opts(0, 0, false)), "1234");
	}

	#[test]
	fn test_part_kinds() {
		let parts = INTL.number_parts("de-DE", 1000.5, opts(1, 1, true));
		let kinds: Vec<PartKind> = parts.iter().map(|p| p.kind).collect();
		assert_eq!(
			kinds,
			vec![
				PartKind::Integer,
				PartKind::Group,
				PartKind::Integer,
				PartKind::Decimal,
				PartKind::Fraction,
			]
		);
		assert_eq!(join_parts(&parts), "1.000,5");
	}

	#[test]
	fn test_segment_without_fraction_treats_separators_as_groups() {
		let parts = segment("-1,234,567", false);
		assert_eq!(parts[0], NumberPart::new(PartKind::MinusSign, "-"));
		assert!(parts.iter().all(|p| p.kind != PartKind::Decimal));
		assert_eq!(parts.iter().filter(|p| p.kind == PartKind::Group).count(), 2);
	}

	#[test]
	fn test_negative_numbers_keep_sign() {
		let parts = INTL.number_parts("en-US", -1234.0, opts(0, 0, true));
		assert_eq!(parts[0].kind, PartKind::MinusSign);
		assert_eq!(join_parts(&parts), "-1,234");
		assert_eq!(number("en-US", -0.001, opts(0, 2, true)), "0");
	}

	#[test]
	fn test_non_finite() {
		assert_eq!(number("en-US", f64::NAN, opts(0, 2, true)), "NaN");
		assert_eq!(number("en-US", f64::NEG_INFINITY, opts(0, 2, true)), "-∞");
	}

	#[test]
	fn test_currency_symbols() {
		assert_eq!(
			currency("th-TH", 1234.5, CurrencyCode::Thb, CurrencyDisplay::Symbol),
			"฿1,235"
		);
		assert_eq!(
			currency("en-US", 1234.5, CurrencyCode::Usd, CurrencyDisplay::Symbol),
			"$1,235"
		);
		assert_eq!(
			currency("de-DE", 1234.5, CurrencyCode::Eur, CurrencyDisplay::Symbol),
			"1.235\u{a0}€"
		);
		assert_eq!(
			currency("ja-JP", 5000.0, CurrencyCode::Jpy, CurrencyDisplay::Symbol),
			"￥5,000"
		);
	}

	#[test]
	fn test_currency_symbol_is_its_own_part() {
		let parts = INTL.currency_parts(
			"de-DE",
			-5.0,
			CurrencyCode::Eur,
			CurrencyDisplay::Symbol,
			opts(0, 0, true),
		);
		assert_eq!(parts.first().map(|p| p.kind), Some(PartKind::MinusSign));
		assert_eq!(parts.last(), Some(&NumberPart::new(PartKind::Currency, "€")));
		assert_eq!(join_parts(&parts), "-5\u{a0}€");
	}

	#[test]
	fn test_currency_without_local_symbol_uses_code() {
		assert_eq!(
			currency("en-US", 1234.5, CurrencyCode::Thb, CurrencyDisplay::Symbol),
			"THB\u{a0}1,235"
		);
		assert_eq!(
			currency("en-US", 10.0, CurrencyCode::Usd, CurrencyDisplay::Code),
			"USD\u{a0}10"
		);
		assert_eq!(
			currency("de-DE", 10.0, CurrencyCode::Eur, CurrencyDisplay::Code),
			"10\u{a0}EUR"
		);
	}

	#[test]
	fn test_currency_name_display() {
		assert_eq!(
			currency("en-US", 10.0, CurrencyCode::Thb, CurrencyDisplay::Name),
			"10 Thai Baht"
		);
	}

	#[test]
	fn test_negative_currency_puts_sign_first() {
		assert_eq!(
			currency("en-US", -5.0, CurrencyCode::Usd, CurrencyDisplay::Symbol),
			"-$5"
		);
	}

	#[test]
	fn test_percent() {
		let parts = INTL.percent_parts("en-US", 0.5, opts(0, 1, true));
		assert_eq!(join_parts(&parts), "50%");
		let parts = INTL.percent_parts("de-DE", 0.125, opts(0, 1, true));
		assert_eq!(join_parts(&parts), "12,5\u{a0}%");
		assert_eq!(parts.last().map(|p| p.kind), Some(PartKind::PercentSign));
	}

	#[test]
	fn test_compact() {
		assert_eq!(INTL.compact("en-US", 999.0), "999");
		assert_eq!(INTL.compact("en-US", 1234.0), "1.2K");
		assert_eq!(INTL.compact("en-US", 1_500_000.0), "1.5M");
		assert_eq!(INTL.compact("en-US", 123_456.0), "123K");
		assert_eq!(INTL.compact("en-US", -2500.0), "-2.5K");
		assert_eq!(INTL.compact("ja-JP", 12345.0), "1.2万");
		assert_eq!(INTL.compact("de-DE", 1234.0), "1234");
		assert_eq!(INTL.compact("de-DE", 2_500_000.0), "2,5\u{a0}Mio.");
	}

	#[test]
	fn test_compact_promotes_rounded_overflow() {
		assert_eq!(INTL.compact("en-US", 999_999.0), "1M");
	}

	#[test]
	fn test_date_styles() {
		let d = date(2024, 1, 5);
		assert_eq!(INTL.date("en-US", d, DateStyle::Short), "1/5/24");
		assert_eq!(INTL.date("en-US", d, DateStyle::Medium), "Jan 5, 2024");
		assert_eq!(INTL.date("en-US", d, DateStyle::Long), "January 5, 2024");
		assert_eq!(INTL.date("ja-JP", d, DateStyle::Long), "2024年1月5日");
		assert_eq!(INTL.date("ms-MY", d, DateStyle::Long), "5 Januari 2024");
	}

	#[test]
	fn test_thai_dates_use_buddhist_era() {
		let d = date(2024, 1, 5);
		assert_eq!(INTL.date("th-TH", d, DateStyle::Long), "5 มกราคม 2567");
		assert_eq!(INTL.date("th-TH", d, DateStyle::Short), "5/1/67");
	}

	#[test]
	fn test_time_cycles() {
		let t = NaiveTime::from_hms_opt(15, 5, 0).unwrap();
		let twelve = INTL.time("en-US", t, HourCycle::H12, false);
		assert!(twelve.starts_with("3:05") && twelve.ends_with("PM"), "{twelve}");
		let padded = INTL.time("en-US", t, HourCycle::H12, true);
		assert!(padded.starts_with("03:05"), "{padded}");
		assert_eq!(INTL.time("en-US", t, HourCycle::H24, false), "15:05");
		assert_eq!(INTL.time("ja-JP", t, HourCycle::H12, false), "午後3:05");

		let morning = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
		assert_eq!(INTL.time("ja-JP", morning, HourCycle::H24, false), "9:00");
		assert_eq!(INTL.time("ja-JP", morning, HourCycle::H24, true), "09:00");
		assert_eq!(INTL.time("en-US", morning, HourCycle::H24, false), "09:00");
	}

	#[test]
	fn test_midnight_is_twelve_am() {
		let t = NaiveTime::from_hms_opt(0, 30, 0).unwrap();
		let text = INTL.time("en-US", t, HourCycle::H12, false);
		assert!(text.starts_with("12:30") && text.ends_with("AM"), "{text}");
	}

	#[test]
	fn test_pad_hour() {
		assert_eq!(pad_hour("3:05 PM"), "03:05 PM");
		assert_eq!(pad_hour("午後3:05"), "午後03:05");
		assert_eq!(pad_hour("15:05"), "15:05");
		assert_eq!(pad_hour("noon"), "noon");
	}

	#[test]
	fn test_relative() {
		assert_eq!(INTL.relative("en-US", -5, RelativeUnit::Minute), "5 minutes ago");
		assert_eq!(INTL.relative("en-US", -1, RelativeUnit::Day), "1 day ago");
		assert_eq!(INTL.relative("en-US", 2, RelativeUnit::Hour), "in 2 hours");
		assert_eq!(INTL.relative("th-TH", -3, RelativeUnit::Minute), "3 นาทีที่ผ่านมา");
		assert_eq!(INTL.relative("ko-KR", -2, RelativeUnit::Week), "2주 전");
	}

	#[test]
	fn test_arabic_relative_days_take_dual_and_plural_forms() {
		assert_eq!(INTL.relative("ar-SA", -1, RelativeUnit::Day), "قبل يوم واحد");
		assert_eq!(INTL.relative("ar-SA", -2, RelativeUnit::Day), "قبل يومين");
		assert_eq!(INTL.relative("ar-SA", -3, RelativeUnit::Day), "قبل 3 أيام");
	}

	#[test]
	fn test_list() {
		assert_eq!(INTL.list("en-US", &["A"]), "A");
		assert_eq!(INTL.list("en-US", &["A", "B"]), "A and B");
		assert_eq!(INTL.list("en-US", &["A", "B", "C"]), "A, B, and C");
		assert_eq!(INTL.list("en-US", &["A", "B", "C", "D"]), "A, B, C, and D");
		assert_eq!(INTL.list("zh-CN", &["甲", "乙", "丙"]), "甲、乙和丙");
	}

	#[test]
	fn test_plural_rules() {
		assert_eq!(INTL.plural_category("en-US", 1.0), PluralCategory::One);
		assert_eq!(INTL.plural_category("en-US", 2.0), PluralCategory::Other);
		assert_eq!(INTL.plural_category("en-US", 1.5), PluralCategory::Other);
		assert_eq!(INTL.plural_category("th-TH", 1.0), PluralCategory::Other);
		assert_eq!(INTL.plural_category("ar-SA", 0.0), PluralCategory::Zero);
		assert_eq!(INTL.plural_category("ar-SA", 2.0), PluralCategory::Two);
		assert_eq!(INTL.plural_category("ar-SA", 5.0), PluralCategory::Few);
		assert_eq!(INTL.plural_category("ar-SA", 11.0), PluralCategory::Many);
		assert_eq!(INTL.plural_category("ar-SA", 100.0), PluralCategory::Other);
	}

	#[test]
	fn test_malformed_tag_renders_as_en_us() {
		assert_eq!(number("not a locale", 1234.5, opts(0, 2, true)), "1,234.5");
	}
}
