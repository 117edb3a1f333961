// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{Duration, TimeZone, Utc};
use phithiai_common_i18n::{
	available_locales, is_rtl, text_direction, Address, CurrencyCode, DayNameStyle, Direction,
	I18nFormatter, LocaleFormatter, NumberOptions, TimeOfDay,
};

#[test]
fn month_names_fall_back_to_english() {
	let f = LocaleFormatter::builtin();
	assert_eq!(f.get_month_name(0, "th-TH").unwrap(), "มกราคม");
	assert_eq!(f.get_month_name(0, "en-US").unwrap(), "January");
	assert_eq!(f.get_month_name(0, "fr-FR").unwrap(), "January");
}

#[test]
fn file_sizes_step_by_1024() {
	let f = LocaleFormatter::builtin();
	assert_eq!(f.format_file_size(1023), "1023 B");
	assert_eq!(f.format_file_size(1024), "1 KB");
	assert_eq!(f.format_file_size(1_048_576), "1 MB");
}

#[test]
fn thai_mobile_numbers_get_country_code() {
	let f = LocaleFormatter::builtin();
	assert_eq!(f.format_phone_number("0812345678"), "+66 812345678");
}

#[test]
fn addresses_reverse_for_rtl_locales() {
	let f = LocaleFormatter::builtin();
	let address = Address {
		street: Some("123 Rd".to_string()),
		city: Some("Bangkok".to_string()),
		..Address::default()
	};
	assert_eq!(f.format_address(&address, "en-US"), "123 Rd, Bangkok");
	assert_eq!(f.format_address(&address, "ar-SA"), "Bangkok, 123 Rd");
}

#[test]
fn relative_time_boundaries() {
	let f = LocaleFormatter::builtin();
	let now = Utc.with_ymd_and_hms(2024, 6, 20, 10, 0, 0).unwrap();

	let thirty_seconds = now - Duration::seconds(30);
	assert_eq!(f.format_relative_time_at(&thirty_seconds, &now, "en-US"), "just now");

	let sixty_one_minutes = now - Duration::minutes(61);
	assert_eq!(
		f.format_relative_time_at(&sixty_one_minutes, &now, "en-US"),
		"1 hour ago"
	);

	let eight_days = now - Duration::days(8);
	assert_eq!(
		f.format_relative_time_at(&eight_days, &now, "en-US"),
		f.format_date(&eight_days, "en-US", Some(phithiai_common_i18n::DateStyle::Short))
	);
}

#[test]
fn every_supported_locale_formats_without_fallback_gaps() {
	let f = LocaleFormatter::builtin();
	let date = Utc.with_ymd_and_hms(2024, 2, 29, 18, 45, 0).unwrap();
	for config in available_locales() {
		let code = config.code;
		assert!(!f.format_date(&date, code, None).is_empty(), "{code}");
		assert!(!f.format_time(&date, code, None).is_empty(), "{code}");
		assert!(!f.get_greeting(code, TimeOfDay::Morning).is_empty(), "{code}");
		for day in 0..7 {
			assert!(f.get_day_name(day, code, DayNameStyle::Short).is_ok(), "{code}");
		}
		assert_eq!(is_rtl(code), text_direction(code) == Direction::Rtl);
	}
}

#[test]
fn error_messages_resolve_through_english() {
	let f = LocaleFormatter::builtin();
	assert_eq!(f.get_error_message("network_error", "vi-VN"), f.get_error_message("network_error", "en-US"));
	assert_eq!(f.get_error_message("missing", "en-US"), "An error occurred");
}

#[test]
fn bound_formatter_matches_free_calls() {
	let f = LocaleFormatter::builtin();
	let bound = I18nFormatter::new("ko-KR");
	assert_eq!(
		bound.format_number(1234567.891, NumberOptions::default()),
		f.format_number(1234567.891, "ko-KR", NumberOptions::default())
	);
	assert_eq!(bound.format_number(1234567.891, NumberOptions::default()), "1,234,567.89");
	assert_eq!(
		bound.format_currency(-42.0, CurrencyCode::Usd, NumberOptions::default()),
		"-US$42"
	);
	assert_eq!(bound.format_percentage(12.34), "12.3%");
	assert_eq!(bound.format_list(&["사과", "배"]), "사과 및 배");
}
