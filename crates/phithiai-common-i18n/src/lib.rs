// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-aware formatting for Phithiai.
//!
//! This crate renders dates, times, numbers, currency amounts, relative times,
//! lists, durations, addresses and canned UI strings for the supported
//! locales. It supports both left-to-right (LTR) and right-to-left (RTL)
//! languages.
//!
//! Unsupported locales never fail: every lookup falls back to `en-US`.
//!
//! # Example
//!
//! ```
//! use phithiai_common_i18n::{CurrencyCode, I18nFormatter, LocaleFormatter, NumberOptions};
//!
//! let formatter = LocaleFormatter::builtin();
//! assert_eq!(formatter.get_month_name(0, "th-TH").unwrap(), "มกราคม");
//! assert_eq!(formatter.format_file_size(1024), "1 KB");
//!
//! // Bind a locale for repeated calls
//! let thai = I18nFormatter::new("th-TH");
//! let price = thai.format_currency(1500.0, CurrencyCode::Thb, NumberOptions::default());
//! assert_eq!(price, "฿1,500");
//! ```

pub mod currency;
mod error;
mod format;
pub mod intl;
pub mod lexicon;
mod locale;
mod resolve;

pub use currency::{
	currency_info, currency_symbol, locale_for_currency, CurrencyCode, CurrencyInfo, CURRENCIES,
};
pub use error::I18nError;
pub use format::{
	format_file_size, format_phone_number, Address, DayNameStyle, I18nFormatter, LocaleFormatter,
	SymbolPosition, TimeOfDay,
};
pub use intl::{IcuIntl, IntlProvider, NumberOptions, ResolvedNumberOptions};
pub use lexicon::error_message;
pub use locale::{
	available_locales, get_locale_config, is_rtl, is_supported, locale_info, text_direction,
	CurrencyDisplay, DateStyle, Direction, HourCycle, LocaleConfig, NumberFormatPreference,
};
pub use resolve::resolve_locale;

pub use locale::{DEFAULT_LOCALE, LOCALES};
