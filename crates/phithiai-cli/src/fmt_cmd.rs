// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `phithiai fmt` - locale formatting from the command line.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use clap::{Subcommand, ValueEnum};
use phithiai_common_i18n::{
	available_locales, Address, CurrencyCode, DateStyle, DayNameStyle, HourCycle, I18nFormatter,
	NumberOptions, SymbolPosition, TimeOfDay,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyleArg {
	Short,
	Medium,
	Long,
}

impl From<DateStyleArg> for DateStyle {
	fn from(arg: DateStyleArg) -> Self {
		match arg {
			DateStyleArg::Short => DateStyle::Short,
			DateStyleArg::Medium => DateStyle::Medium,
			DateStyleArg::Long => DateStyle::Long,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HourCycleArg {
	#[value(name = "12h")]
	H12,
	#[value(name = "24h")]
	H24,
}

impl From<HourCycleArg> for HourCycle {
	fn from(arg: HourCycleArg) -> Self {
		match arg {
			HourCycleArg::H12 => HourCycle::H12,
			HourCycleArg::H24 => HourCycle::H24,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TimeOfDayArg {
	Morning,
	Afternoon,
	Evening,
}

impl From<TimeOfDayArg> for TimeOfDay {
	fn from(arg: TimeOfDayArg) -> Self {
		match arg {
			TimeOfDayArg::Morning => TimeOfDay::Morning,
			TimeOfDayArg::Afternoon => TimeOfDay::Afternoon,
			TimeOfDayArg::Evening => TimeOfDay::Evening,
		}
	}
}

fn parse_date(s: &str) -> Result<DateTime<FixedOffset>, String> {
	DateTime::parse_from_rfc3339(s).map_err(|e| format!("expected an RFC 3339 date: {e}"))
}

/// Locale formatting operations. Dates are RFC 3339, e.g. 2024-01-05T15:05:00+07:00.
#[derive(Subcommand, Debug)]
pub enum FmtCommand {
	/// Format a date
	Date {
		#[arg(value_parser = parse_date)]
		date: DateTime<FixedOffset>,
		/// Overrides the locale's preferred style
		#[arg(long, value_enum)]
		style: Option<DateStyleArg>,
	},
	/// Format a time of day
	Time {
		#[arg(value_parser = parse_date)]
		date: DateTime<FixedOffset>,
		/// Overrides the locale's clock convention
		#[arg(long, value_enum)]
		hours: Option<HourCycleArg>,
	},
	/// Format a date with its time
	DateTime {
		#[arg(value_parser = parse_date)]
		date: DateTime<FixedOffset>,
	},
	/// Format a span between two dates
	DateRange {
		#[arg(value_parser = parse_date)]
		start: DateTime<FixedOffset>,
		#[arg(value_parser = parse_date)]
		end: DateTime<FixedOffset>,
	},
	/// Describe how long ago a date was, up to a week
	Relative {
		#[arg(value_parser = parse_date)]
		date: DateTime<FixedOffset>,
	},
	/// Describe how long ago a date was, in weeks, months or years if needed
	TimeAgo {
		#[arg(value_parser = parse_date)]
		date: DateTime<FixedOffset>,
	},
	/// Format epoch milliseconds relative to today
	Timestamp {
		#[arg(allow_negative_numbers = true)]
		millis: i64,
	},
	/// Format a number
	Number {
		#[arg(allow_negative_numbers = true)]
		value: f64,
		#[arg(long)]
		min_digits: Option<u8>,
		#[arg(long)]
		max_digits: Option<u8>,
		/// Force thousands grouping on or off
		#[arg(long)]
		grouping: Option<bool>,
	},
	/// Format an amount of money
	Currency {
		#[arg(allow_negative_numbers = true)]
		amount: f64,
		currency: CurrencyCode,
		#[arg(long)]
		digits: Option<u8>,
	},
	/// Format a 0-100 value as a percentage
	Percentage {
		#[arg(allow_negative_numbers = true)]
		value: f64,
	},
	/// Format a number in compact notation
	Compact {
		#[arg(allow_negative_numbers = true)]
		value: f64,
	},
	/// Join items into a list
	List { items: Vec<String> },
	/// Format a byte count
	FileSize { bytes: u64 },
	/// Normalize a Thai phone number
	Phone { number: String },
	/// Spell out a duration given in minutes
	Duration { minutes: u64 },
	/// Pick the singular or plural word for a count
	Plural {
		singular: String,
		plural: String,
		#[arg(allow_negative_numbers = true)]
		count: f64,
	},
	/// Canned greeting
	Greeting {
		#[arg(value_enum)]
		time_of_day: TimeOfDayArg,
	},
	/// Canned error message
	Error { key: String },
	/// Month name for a zero-based index
	Month { index: usize },
	/// Weekday name for a zero-based index starting at Sunday
	Day {
		index: usize,
		#[arg(long)]
		long: bool,
	},
	/// Join address fields in locale order
	Address {
		#[arg(long)]
		street: Option<String>,
		#[arg(long)]
		city: Option<String>,
		#[arg(long)]
		state: Option<String>,
		#[arg(long)]
		postal_code: Option<String>,
		#[arg(long)]
		country: Option<String>,
	},
	/// Text direction of the locale
	Direction,
	/// Decimal and thousands separators of the locale
	Separators,
	/// Where the locale puts currency symbols
	SymbolPosition,
	/// Date pattern and separator of the locale
	DatePattern,
	/// Every supported locale
	Locales,
}

/// Run a formatting command and return its output.
pub fn run(command: &FmtCommand, f: &I18nFormatter) -> Result<String> {
	let output = match command {
		FmtCommand::Date { date, style } => f.format_date(date, style.map(Into::into)),
		FmtCommand::Time { date, hours } => f.format_time(date, hours.map(Into::into)),
		FmtCommand::DateTime { date } => f.format_date_time(date),
		FmtCommand::DateRange { start, end } => f.format_date_range(start, end),
		FmtCommand::Relative { date } => f.format_relative_time(date),
		FmtCommand::TimeAgo { date } => f.format_time_ago(date),
		FmtCommand::Timestamp { millis } => f
			.format_timestamp(*millis)
			.with_context(|| format!("cannot format timestamp {millis}"))?,
		FmtCommand::Number {
			value,
			min_digits,
			max_digits,
			grouping,
		} => f.format_number(
			*value,
			NumberOptions {
				minimum_fraction_digits: *min_digits,
				maximum_fraction_digits: *max_digits,
				use_grouping: *grouping,
			},
		),
		FmtCommand::Currency {
			amount,
			currency,
			digits,
		} => {
			let options = digits.map_or_else(NumberOptions::default, NumberOptions::fraction_digits);
			f.format_currency(*amount, *currency, options)
		}
		FmtCommand::Percentage { value } => f.format_percentage(*value),
		FmtCommand::Compact { value } => f.format_compact_number(*value),
		FmtCommand::List { items } => f.format_list(items),
		FmtCommand::FileSize { bytes } => f.format_file_size(*bytes),
		FmtCommand::Phone { number } => f.format_phone_number(number),
		FmtCommand::Duration { minutes } => f.format_duration(*minutes),
		FmtCommand::Plural {
			singular,
			plural,
			count,
		} => f.get_plural_form(singular, plural, *count).to_string(),
		FmtCommand::Greeting { time_of_day } => f.get_greeting((*time_of_day).into()).to_string(),
		FmtCommand::Error { key } => f.get_error_message(key).to_string(),
		FmtCommand::Month { index } => f
			.get_month_name(*index)
			.context("month index out of range")?
			.to_string(),
		FmtCommand::Day { index, long } => {
			let style = if *long {
				DayNameStyle::Long
			} else {
				DayNameStyle::Short
			};
			f.get_day_name(*index, style)
				.context("day index out of range")?
				.to_string()
		}
		FmtCommand::Address {
			street,
			city,
			state,
			postal_code,
			country,
		} => f.format_address(&Address {
			street: street.clone(),
			city: city.clone(),
			state: state.clone(),
			postal_code: postal_code.clone(),
			country: country.clone(),
		}),
		FmtCommand::Direction => f.text_direction().as_html_dir().to_string(),
		FmtCommand::Separators => format!(
			"decimal: {:?}\nthousands: {:?}",
			f.get_decimal_separator(),
			f.get_thousands_separator()
		),
		FmtCommand::SymbolPosition => match f.get_currency_symbol_position() {
			SymbolPosition::Before => "before".to_string(),
			SymbolPosition::After => "after".to_string(),
		},
		FmtCommand::DatePattern => format!(
			"{} ({})",
			f.get_date_format_pattern(),
			f.get_date_separator()
		),
		FmtCommand::Locales => available_locales()
			.iter()
			.map(|config| {
				format!(
					"{:<6} {:<11} {} ({})",
					config.code,
					config.name,
					config.native_name,
					config.direction.as_html_dir()
				)
			})
			.collect::<Vec<_>>()
			.join("\n"),
	};
	Ok(output)
}
