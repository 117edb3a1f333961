// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale configuration and direction support.

use serde::{Deserialize, Serialize};

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	/// Left-to-right (e.g., Thai, English)
	Ltr,
	/// Right-to-left (e.g., Arabic)
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// Date rendering length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
	/// Numeric date, two-digit year ("1/5/24")
	Short,
	/// Abbreviated month, full year ("Jan 5, 2024")
	Medium,
	/// Full month name, full year ("January 5, 2024")
	Long,
}

/// Clock convention for rendering times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HourCycle {
	#[serde(rename = "12h")]
	H12,
	#[serde(rename = "24h")]
	H24,
}

/// How plain numbers are rendered by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormatPreference {
	/// No thousands grouping
	Decimal,
	/// Thousands grouping
	Grouped,
	Currency,
}

/// How currency amounts label their currency by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyDisplay {
	/// Locale symbol ("฿", "$")
	Symbol,
	/// ISO 4217 code ("THB")
	Code,
	/// English currency name ("Thai Baht")
	Name,
}

/// Formatting conventions for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
	/// BCP-47 tag (e.g., "th-TH")
	pub code: &'static str,
	/// English name of the locale
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
	pub direction: Direction,
	pub date_format: DateStyle,
	pub time_format: HourCycle,
	pub number_format: NumberFormatPreference,
	pub currency_format: CurrencyDisplay,
}

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: &str = "en-US";

/// All supported locales.
pub const LOCALES: &[LocaleConfig] = &[
	LocaleConfig {
		code: "th-TH",
		name: "Thai",
		native_name: "ไทย",
		direction: Direction::Ltr,
		date_format: DateStyle::Long,
		time_format: HourCycle::H24,
		number_format: NumberFormatPreference::Grouped,
		currency_format: CurrencyDisplay::Symbol,
	},
	LocaleConfig {
		code: "en-US",
		name: "English (United States)",
		native_name: "English",
		direction: Direction::Ltr,
		date_format: DateStyle::Medium,
		time_format: HourCycle::H12,
		number_format: NumberFormatPreference::Decimal,
		currency_format: CurrencyDisplay::Symbol,
	},
	LocaleConfig {
		code: "ja-JP",
		name: "Japanese (Japan)",
		native_name: "日本語",
		direction: Direction::Ltr,
		date_format: DateStyle::Long,
		time_format: HourCycle::H24,
		number_format: NumberFormatPreference::Grouped,
		currency_format: CurrencyDisplay::Symbol,
	},
	LocaleConfig {
		code: "zh-CN",
		name: "Chinese (Simplified, China)",
		native_name: "简体中文",
		direction: Direction::Ltr,
		date_format: DateStyle::Long,
		time_format: HourCycle::H24,
		number_format: NumberFormatPreference::Grouped,
		currency_format: CurrencyDisplay::Symbol,
	},
	LocaleConfig {
		code: "ko-KR",
		name: "Korean (South Korea)",
		native_name: "한국어",
		direction: Direction::Ltr,
		date_format: DateStyle::Long,
		time_format: HourCycle::H24,
		number_format: NumberFormatPreference::Grouped,
		currency_format: CurrencyDisplay::Symbol,
	},
	LocaleConfig {
		code: "ar-SA",
		name: "Arabic (Saudi Arabia)",
		native_name: "العربية",
		direction: Direction::Rtl,
		date_format: DateStyle::Long,
		time_format: HourCycle::H24,
		number_format: NumberFormatPreference::Grouped,
		currency_format: CurrencyDisplay::Symbol,
	},
	LocaleConfig {
		code: "ms-MY",
		name: "Malay (Malaysia)",
		native_name: "Bahasa Melayu",
		direction: Direction::Ltr,
		date_format: DateStyle::Medium,
		time_format: HourCycle::H24,
		number_format: NumberFormatPreference::Grouped,
		currency_format: CurrencyDisplay::Symbol,
	},
	LocaleConfig {
		code: "vi-VN",
		name: "Vietnamese (Vietnam)",
		native_name: "Tiếng Việt",
		direction: Direction::Ltr,
		date_format: DateStyle::Medium,
		time_format: HourCycle::H24,
		number_format: NumberFormatPreference::Grouped,
		currency_format: CurrencyDisplay::Symbol,
	},
];

/// Get configuration for a locale.
///
/// Returns `None` if the locale is not supported.
pub fn locale_info(locale: &str) -> Option<&'static LocaleConfig> {
	LOCALES.iter().find(|l| l.code == locale)
}

/// Get configuration for a locale, falling back to [`DEFAULT_LOCALE`].
pub fn get_locale_config(locale: &str) -> &'static LocaleConfig {
	match locale_info(locale) {
		Some(config) => config,
		None => {
			tracing::debug!(locale = %locale, fallback = DEFAULT_LOCALE, "unsupported locale, using fallback");
			default_config()
		}
	}
}

fn default_config() -> &'static LocaleConfig {
	// en-US is always the second entry of LOCALES
	&LOCALES[1]
}

/// Text direction of a locale. Unsupported locales are left-to-right.
pub fn text_direction(locale: &str) -> Direction {
	get_locale_config(locale).direction
}

/// Check if a locale uses right-to-left text direction.
///
/// Returns `false` for unsupported locales.
pub fn is_rtl(locale: &str) -> bool {
	text_direction(locale) == Direction::Rtl
}

/// Check if a locale is supported.
pub fn is_supported(locale: &str) -> bool {
	LOCALES.iter().any(|l| l.code == locale)
}

/// Get all supported locales.
pub fn available_locales() -> &'static [LocaleConfig] {
	LOCALES
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_locale_info_found() {
		let info = locale_info("th-TH").unwrap();
		assert_eq!(info.code, "th-TH");
		assert_eq!(info.native_name, "ไทย");
		assert_eq!(info.direction, Direction::Ltr);
		assert_eq!(info.date_format, DateStyle::Long);
	}

	#[test]
	fn test_locale_info_not_found() {
		assert!(locale_info("fr-FR").is_none());
		assert!(locale_info("th").is_none());
	}

	#[test]
	fn test_default_config_is_en_us() {
		assert_eq!(default_config().code, DEFAULT_LOCALE);
		assert_eq!(get_locale_config("xx-XX").code, "en-US");
		assert_eq!(get_locale_config("").code, "en-US");
	}

	#[test]
	fn test_is_rtl() {
		assert!(is_rtl("ar-SA"));
		assert!(!is_rtl("th-TH"));
		assert!(!is_rtl("en-US"));
		assert!(!is_rtl("he-IL"));
	}

	#[test]
	fn test_text_direction() {
		assert_eq!(text_direction("ar-SA"), Direction::Rtl);
		assert_eq!(text_direction("ja-JP"), Direction::Ltr);
		assert_eq!(text_direction("unknown"), Direction::Ltr);
		assert_eq!(Direction::Rtl.as_html_dir(), "rtl");
	}

	#[test]
	fn test_is_supported() {
		for code in ["th-TH", "en-US", "ja-JP", "zh-CN", "ko-KR", "ar-SA", "ms-MY", "vi-VN"] {
			assert!(is_supported(code), "{code} should be supported");
		}
		assert!(!is_supported("de-DE"));
		assert!(!is_supported(""));
	}

	#[test]
	fn test_available_locales_have_unique_codes() {
		let locales = available_locales();
		assert_eq!(locales.len(), 8);
		for (i, a) in locales.iter().enumerate() {
			for b in &locales[i + 1..] {
				assert_ne!(a.code, b.code);
			}
		}
	}

	#[test]
	fn test_en_us_prefers_ungrouped_twelve_hour() {
		let config = get_locale_config("en-US");
		assert_eq!(config.number_format, NumberFormatPreference::Decimal);
		assert_eq!(config.time_format, HourCycle::H12);
	}
}
