// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, TimeZone};

use super::{Address, DayNameStyle, LocaleFormatter, SymbolPosition, TimeOfDay};
use crate::currency::CurrencyCode;
use crate::error::I18nError;
use crate::intl::{IcuIntl, IntlProvider, NumberOptions};
use crate::locale::{is_rtl, text_direction, DateStyle, Direction, HourCycle, DEFAULT_LOCALE};

/// A [`LocaleFormatter`] bound to one locale.
#[derive(Debug, Clone)]
pub struct I18nFormatter<P = IcuIntl> {
	locale: String,
	formatter: LocaleFormatter<P>,
}

impl Default for I18nFormatter<IcuIntl> {
	fn default() -> Self {
		Self::new(DEFAULT_LOCALE)
	}
}

impl I18nFormatter<IcuIntl> {
	pub fn new(locale: impl Into<String>) -> Self {
		Self::with_formatter(locale, LocaleFormatter::builtin())
	}
}

impl<P: IntlProvider> I18nFormatter<P> {
	pub fn with_formatter(locale: impl Into<String>, formatter: LocaleFormatter<P>) -> Self {
		Self {
			locale: locale.into(),
			formatter,
		}
	}

	pub fn set_locale(&mut self, locale: impl Into<String>) {
		self.locale = locale.into();
		tracing::debug!(locale = %self.locale, "formatter locale changed");
	}

	/// The bound locale, as given (not resolved).
	pub fn locale(&self) -> &str {
		&self.locale
	}

	pub fn formatter(&self) -> &LocaleFormatter<P> {
		&self.formatter
	}

	pub fn format_date<Tz: TimeZone>(&self, date: &DateTime<Tz>, style: Option<DateStyle>) -> String {
		self.formatter.format_date(date, &self.locale, style)
	}

	pub fn format_time<Tz: TimeZone>(&self, date: &DateTime<Tz>, cycle: Option<HourCycle>) -> String {
		self.formatter.format_time(date, &self.locale, cycle)
	}

	pub fn format_date_time<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
		self.formatter.format_date_time(date, &self.locale)
	}

	pub fn format_date_range<Tz: TimeZone>(&self, start: &DateTime<Tz>, end: &DateTime<Tz>) -> String {
		self.formatter.format_date_range(start, end, &self.locale)
	}

	pub fn format_number(&self, value: f64, options: NumberOptions) -> String {
		self.formatter.format_number(value, &self.locale, options)
	}

	pub fn format_currency(&self, amount: f64, currency: CurrencyCode, options: NumberOptions) -> String {
		self.formatter
			.format_currency(amount, currency, &self.locale, options)
	}

	pub fn format_relative_time<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
		self.formatter.format_relative_time(date, &self.locale)
	}

	pub fn format_relative_time_at<Tz: TimeZone, Now: TimeZone>(
		&self,
		date: &DateTime<Tz>,
		now: &DateTime<Now>,
	) -> String {
		self.formatter
			.format_relative_time_at(date, now, &self.locale)
	}

	pub fn format_time_ago<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
		self.formatter.format_time_ago(date, &self.locale)
	}

	pub fn format_time_ago_at<Tz: TimeZone, Now: TimeZone>(
		&self,
		date: &DateTime<Tz>,
		now: &DateTime<Now>,
	) -> String {
		self.formatter.format_time_ago_at(date, now, &self.locale)
	}

	pub fn format_percentage(&self, value: f64) -> String {
		self.formatter.format_percentage(value, &self.locale)
	}

	pub fn format_list<S: AsRef<str>>(&self, items: &[S]) -> String {
		self.formatter.format_list(items, &self.locale)
	}

	pub fn format_file_size(&self, bytes: u64) -> String {
		self.formatter.format_file_size(bytes)
	}

	pub fn format_phone_number(&self, phone: &str) -> String {
		self.formatter.format_phone_number(phone)
	}

	pub fn get_greeting(&self, time_of_day: TimeOfDay) -> &'static str {
		self.formatter.get_greeting(&self.locale, time_of_day)
	}

	pub fn get_error_message(&self, key: &str) -> &'static str {
		self.formatter.get_error_message(key, &self.locale)
	}

	pub fn get_month_name(&self, index: usize) -> Result<&'static str, I18nError> {
		self.formatter.get_month_name(index, &self.locale)
	}

	pub fn get_day_name(&self, index: usize, style: DayNameStyle) -> Result<&'static str, I18nError> {
		self.formatter.get_day_name(index, &self.locale, style)
	}

	pub fn format_address(&self, address: &Address) -> String {
		self.formatter.format_address(address, &self.locale)
	}

	pub fn format_duration(&self, minutes: u64) -> String {
		self.formatter.format_duration(minutes, &self.locale)
	}

	pub fn format_compact_number(&self, value: f64) -> String {
		self.formatter.format_compact_number(value, &self.locale)
	}

	pub fn get_plural_form<'a>(&self, singular: &'a str, plural: &'a str, count: f64) -> &'a str {
		self.formatter
			.get_plural_form(singular, plural, count, &self.locale)
	}

	pub fn get_date_format_pattern(&self) -> &'static str {
		self.formatter.get_date_format_pattern(&self.locale)
	}

	pub fn get_date_separator(&self) -> &'static str {
		self.formatter.get_date_separator(&self.locale)
	}

	pub fn get_decimal_separator(&self) -> String {
		self.formatter.get_decimal_separator(&self.locale)
	}

	pub fn get_thousands_separator(&self) -> String {
		self.formatter.get_thousands_separator(&self.locale)
	}

	pub fn get_currency_symbol_position(&self) -> SymbolPosition {
		self.formatter.get_currency_symbol_position(&self.locale)
	}

	pub fn format_timestamp(&self, millis: i64) -> Result<String, I18nError> {
		self.formatter.format_timestamp(millis, &self.locale)
	}

	pub fn format_timestamp_at<Tz: TimeZone>(
		&self,
		millis: i64,
		now: &DateTime<Tz>,
	) -> Result<String, I18nError> {
		self.formatter
			.format_timestamp_at(millis, now, &self.locale)
	}

	pub fn text_direction(&self) -> Direction {
		text_direction(&self.locale)
	}

	pub fn is_rtl(&self) -> bool {
		is_rtl(&self.locale)
	}
}
