// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Date, time and relative-time operations.
//!
//! Dates render in the time zone they carry. Operations that compare with the
//! current time have an `_at` variant taking `now` explicitly.

use chrono::{DateTime, Local, TimeZone, Utc};

use super::LocaleFormatter;
use crate::error::I18nError;
use crate::intl::{IntlProvider, RelativeUnit};
use crate::lexicon;
use crate::locale::{get_locale_config, DateStyle, HourCycle};

const SECOND_MS: i64 = 1_000;
const DAY_MS: i64 = 86_400_000;

impl<P: IntlProvider> LocaleFormatter<P> {
	/// Format the calendar date; `None` uses the locale's preferred style.
	pub fn format_date<Tz: TimeZone>(
		&self,
		date: &DateTime<Tz>,
		locale: &str,
		style: Option<DateStyle>,
	) -> String {
		let config = get_locale_config(locale);
		self.intl.date(
			config.code,
			date.naive_local().date(),
			style.unwrap_or(config.date_format),
		)
	}

	/// Format hours and minutes; `None` uses the locale's hour cycle.
	pub fn format_time<Tz: TimeZone>(
		&self,
		date: &DateTime<Tz>,
		locale: &str,
		cycle: Option<HourCycle>,
	) -> String {
		let config = get_locale_config(locale);
		self.intl.time(
			config.code,
			date.naive_local().time(),
			cycle.unwrap_or(config.time_format),
			false,
		)
	}

	/// Medium date followed by a two-digit-hour time.
	pub fn format_date_time<Tz: TimeZone>(&self, date: &DateTime<Tz>, locale: &str) -> String {
		let config = get_locale_config(locale);
		let local = date.naive_local();
		format!(
			"{} {}",
			self.intl.date(config.code, local.date(), DateStyle::Medium),
			self.intl
				.time(config.code, local.time(), config.time_format, true)
		)
	}

	/// Two medium dates joined by " - ".
	pub fn format_date_range<Tz: TimeZone>(
		&self,
		start: &DateTime<Tz>,
		end: &DateTime<Tz>,
		locale: &str,
	) -> String {
		format!(
			"{} - {}",
			self.format_date(start, locale, Some(DateStyle::Medium)),
			self.format_date(end, locale, Some(DateStyle::Medium))
		)
	}

	/// Date pattern matching the locale's preferred date style.
	pub fn get_date_format_pattern(&self, locale: &str) -> &'static str {
		match get_locale_config(locale).date_format {
			DateStyle::Short => "dd/MM/yyyy",
			DateStyle::Medium => "MMM d, yyyy",
			DateStyle::Long => "MMMM d, yyyy",
		}
	}

	/// Separator used in numeric dates. Every supported locale uses `/`.
	pub fn get_date_separator(&self, _locale: &str) -> &'static str {
		"/"
	}

	pub fn format_relative_time<Tz: TimeZone>(&self, date: &DateTime<Tz>, locale: &str) -> String {
		self.format_relative_time_at(date, &Utc::now(), locale)
	}

	/// Short-horizon relative time.
	///
	/// Under a minute (future dates included) is "just now"; minutes, hours
	/// and days follow up to a week, after which the short date is shown.
	pub fn format_relative_time_at<Tz: TimeZone, Now: TimeZone>(
		&self,
		date: &DateTime<Tz>,
		now: &DateTime<Now>,
		locale: &str,
	) -> String {
		let config = get_locale_config(locale);
		let seconds = elapsed_seconds(date, now);
		if seconds < 60 {
			return lexicon::resources(config.code).just_now.to_string();
		}

		let minutes = seconds / 60;
		let hours = minutes / 60;
		let days = hours / 24;
		if minutes < 60 {
			self.intl.relative(config.code, -minutes, RelativeUnit::Minute)
		} else if hours < 24 {
			self.intl.relative(config.code, -hours, RelativeUnit::Hour)
		} else if days < 7 {
			self.intl.relative(config.code, -days, RelativeUnit::Day)
		} else {
			self.format_date(date, locale, Some(DateStyle::Short))
		}
	}

	pub fn format_time_ago<Tz: TimeZone>(&self, date: &DateTime<Tz>, locale: &str) -> String {
		self.format_time_ago_at(date, &Utc::now(), locale)
	}

	/// Long-horizon relative time, stepping through weeks, months (30 days)
	/// and years (365 days).
	pub fn format_time_ago_at<Tz: TimeZone, Now: TimeZone>(
		&self,
		date: &DateTime<Tz>,
		now: &DateTime<Now>,
		locale: &str,
	) -> String {
		let code = get_locale_config(locale).code;
		let seconds = elapsed_seconds(date, now);
		let minutes = seconds.div_euclid(60);
		let hours = minutes.div_euclid(60);
		let days = hours.div_euclid(24);

		let (value, unit) = if seconds < 60 {
			(seconds, RelativeUnit::Second)
		} else if minutes < 60 {
			(minutes, RelativeUnit::Minute)
		} else if hours < 24 {
			(hours, RelativeUnit::Hour)
		} else if days < 7 {
			(days, RelativeUnit::Day)
		} else if days < 30 {
			(days / 7, RelativeUnit::Week)
		} else if days < 365 {
			(days / 30, RelativeUnit::Month)
		} else {
			(days / 365, RelativeUnit::Year)
		};
		self.intl.relative(code, -value, unit)
	}

	/// Format epoch milliseconds relative to the local clock.
	pub fn format_timestamp(&self, millis: i64, locale: &str) -> Result<String, I18nError> {
		self.format_timestamp_at(millis, &Local::now(), locale)
	}

	/// Format epoch milliseconds in `now`'s time zone.
	///
	/// Same calendar day shows the time, under two days ago shows
	/// "Yesterday", under a week shows the short date, and anything older or
	/// in the future on another day shows the medium date.
	pub fn format_timestamp_at<Tz: TimeZone>(
		&self,
		millis: i64,
		now: &DateTime<Tz>,
		locale: &str,
	) -> Result<String, I18nError> {
		let date = now
			.timezone()
			.timestamp_millis_opt(millis)
			.single()
			.ok_or(I18nError::InvalidTimestamp(millis))?;
		let elapsed = now.timestamp_millis().saturating_sub(millis);

		if date.naive_local().date() == now.naive_local().date() {
			return Ok(self.format_time(&date, locale, None));
		}
		let formatted = if elapsed < 0 {
			self.format_date(&date, locale, Some(DateStyle::Medium))
		} else if elapsed < 2 * DAY_MS {
			lexicon::resources(get_locale_config(locale).code)
				.yesterday
				.to_string()
		} else if elapsed < 7 * DAY_MS {
			self.format_date(&date, locale, Some(DateStyle::Short))
		} else {
			self.format_date(&date, locale, Some(DateStyle::Medium))
		};
		Ok(formatted)
	}
}

/// Whole seconds from `date` to `now`, rounded toward negative infinity.
fn elapsed_seconds<A: TimeZone, B: TimeZone>(date: &DateTime<A>, now: &DateTime<B>) -> i64 {
	now.timestamp_millis()
		.saturating_sub(date.timestamp_millis())
		.div_euclid(SECOND_MS)
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{Duration, FixedOffset};

	fn formatter() -> LocaleFormatter {
		LocaleFormatter::builtin()
	}

	fn now() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
	}

	fn jan_5() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2024, 1, 5, 15, 5, 0).unwrap()
	}

	#[test]
	fn test_date_uses_locale_style_by_default() {
		let f = formatter();
		assert_eq!(f.format_date(&jan_5(), "en-US", None), "Jan 5, 2024");
		assert_eq!(f.format_date(&jan_5(), "th-TH", None), "5 มกราคม 2567");
		assert_eq!(
			f.format_date(&jan_5(), "en-US", Some(DateStyle::Long)),
			"January 5, 2024"
		);
		assert_eq!(f.format_date(&jan_5(), "fr-FR", None), "Jan 5, 2024");
	}

	#[test]
	fn test_date_uses_carried_time_zone() {
		let bangkok = FixedOffset::east_opt(7 * 3600).unwrap();
		let late = Utc
			.with_ymd_and_hms(2024, 1, 5, 23, 30, 0)
			.unwrap()
			.with_timezone(&bangkok);
		assert_eq!(formatter().format_date(&late, "en-US", None), "Jan 6, 2024");
	}

	#[test]
	fn test_time_uses_locale_cycle_by_default() {
		let f = formatter();
		assert_eq!(f.format_time(&jan_5(), "en-US", None), "3:05\u{202f}PM");
		assert_eq!(f.format_time(&jan_5(), "th-TH", None), "15:05");
		assert_eq!(f.format_time(&jan_5(), "th-TH", Some(HourCycle::H24)), "15:05");
		assert_eq!(f.format_time(&jan_5(), "en-US", Some(HourCycle::H24)), "15:05");
	}

	#[test]
	fn test_date_time_and_range() {
		let f = formatter();
		assert_eq!(f.format_date_time(&jan_5(), "en-US"), "Jan 5, 2024 03:05\u{202f}PM");
		let end = jan_5() + Duration::days(2);
		assert_eq!(
			f.format_date_range(&jan_5(), &end, "en-US"),
			"Jan 5, 2024 - Jan 7, 2024"
		);
	}

	#[test]
	fn test_date_patterns() {
		let f = formatter();
		assert_eq!(f.get_date_format_pattern("en-US"), "MMM d, yyyy");
		assert_eq!(f.get_date_format_pattern("th-TH"), "MMMM d, yyyy");
		assert_eq!(f.get_date_format_pattern("vi-VN"), "MMM d, yyyy");
		assert_eq!(f.get_date_separator("ja-JP"), "/");
	}

	#[test]
	fn test_relative_time_boundaries() {
		let f = formatter();
		let at = |d: Duration| f.format_relative_time_at(&(now() - d), &now(), "en-US");

		assert_eq!(at(Duration::seconds(30)), "just now");
		assert_eq!(at(Duration::seconds(59)), "just now");
		assert_eq!(at(Duration::seconds(60)), "1 minute ago");
		assert_eq!(at(Duration::minutes(59)), "59 minutes ago");
		assert_eq!(at(Duration::minutes(61)), "1 hour ago");
		assert_eq!(at(Duration::hours(23)), "23 hours ago");
		assert_eq!(at(Duration::hours(24)), "1 day ago");
		assert_eq!(at(Duration::days(6)), "6 days ago");
		assert_eq!(at(Duration::days(8)), "3/7/24");
	}

	#[test]
	fn test_relative_time_future_is_just_now() {
		let f = formatter();
		let later = now() + Duration::minutes(10);
		assert_eq!(f.format_relative_time_at(&later, &now(), "en-US"), "just now");
	}

	#[test]
	fn test_relative_time_localized() {
		let f = formatter();
		let recent = now() - Duration::seconds(5);
		assert_eq!(f.format_relative_time_at(&recent, &now(), "th-TH"), "เมื่อสักครู่");
		let earlier = now() - Duration::minutes(3);
		assert_eq!(
			f.format_relative_time_at(&earlier, &now(), "th-TH"),
			"3 นาทีที่ผ่านมา"
		);
	}

	#[test]
	fn test_time_ago_long_horizon() {
		let f = formatter();
		let ago = |d: Duration| f.format_time_ago_at(&(now() - d), &now(), "en-US");

		assert_eq!(ago(Duration::seconds(30)), "30 seconds ago");
		assert_eq!(ago(Duration::hours(5)), "5 hours ago");
		assert_eq!(ago(Duration::days(10)), "1 week ago");
		assert_eq!(ago(Duration::days(45)), "1 month ago");
		assert_eq!(ago(Duration::days(400)), "1 year ago");
	}

	#[test]
	fn test_time_ago_arabic_days_agree_with_count() {
		let f = formatter();
		let ago = |days: i64| f.format_time_ago_at(&(now() - Duration::days(days)), &now(), "ar-SA");

		assert_eq!(ago(1), "قبل يوم واحد");
		assert_eq!(ago(2), "قبل يومين");
		assert_eq!(ago(3), "قبل 3 أيام");
	}

	#[test]
	fn test_timestamp_same_day_shows_time() {
		let f = formatter();
		let morning = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
		assert_eq!(
			f.format_timestamp_at(morning.timestamp_millis(), &now(), "en-US").unwrap(),
			"9:30\u{202f}AM"
		);
	}

	#[test]
	fn test_timestamp_yesterday() {
		let f = formatter();
		let evening = Utc.with_ymd_and_hms(2024, 3, 14, 16, 0, 0).unwrap();
		let millis = evening.timestamp_millis();
		assert_eq!(f.format_timestamp_at(millis, &now(), "en-US").unwrap(), "Yesterday");
		assert_eq!(f.format_timestamp_at(millis, &now(), "th-TH").unwrap(), "เมื่อวาน");
	}

	#[test]
	fn test_timestamp_older_dates() {
		let f = formatter();
		let three_days = (now() - Duration::days(3)).timestamp_millis();
		let ten_days = (now() - Duration::days(10)).timestamp_millis();
		assert_eq!(f.format_timestamp_at(three_days, &now(), "en-US").unwrap(), "3/12/24");
		assert_eq!(f.format_timestamp_at(ten_days, &now(), "en-US").unwrap(), "Mar 5, 2024");
	}

	#[test]
	fn test_timestamp_future_other_day() {
		let f = formatter();
		let tomorrow = (now() + Duration::days(1)).timestamp_millis();
		assert_eq!(f.format_timestamp_at(tomorrow, &now(), "en-US").unwrap(), "Mar 16, 2024");
	}

	#[test]
	fn test_timestamp_day_boundary_follows_time_zone() {
		let f = formatter();
		let bangkok = FixedOffset::east_opt(7 * 3600).unwrap();
		// 2024-03-15 18:00 UTC is already 2024-03-16 01:00 in Bangkok
		let now_bkk = Utc
			.with_ymd_and_hms(2024, 3, 15, 18, 0, 0)
			.unwrap()
			.with_timezone(&bangkok);
		let earlier = Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap();
		assert_eq!(
			f.format_timestamp_at(earlier.timestamp_millis(), &now_bkk, "en-US").unwrap(),
			"Yesterday"
		);
	}

	#[test]
	fn test_timestamp_out_of_range() {
		let f = formatter();
		assert_eq!(
			f.format_timestamp_at(i64::MAX, &now(), "en-US"),
			Err(I18nError::InvalidTimestamp(i64::MAX))
		);
	}
}
