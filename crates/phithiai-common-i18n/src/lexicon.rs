// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static UI strings keyed by locale.
//!
//! Every locale carries a full set of month, day, greeting and duration
//! strings. Error messages may be partial; missing keys resolve through the
//! `en-US` entry, which must define every key in [`ERROR_KEYS`].

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::locale::DEFAULT_LOCALE;

/// Error message keys understood by [`LocaleResources::error_message`].
pub const ERROR_KEYS: &[&str] = &[
	"required_field",
	"invalid_email",
	"payment_failed",
	"network_error",
];

/// Message returned for keys that no locale defines.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Greetings for each part of the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greetings {
	pub morning: &'static str,
	pub afternoon: &'static str,
	pub evening: &'static str,
}

/// Unit words used when spelling out durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationUnits {
	pub hour_one: &'static str,
	pub hour_other: &'static str,
	pub minute_one: &'static str,
	pub minute_other: &'static str,
}

/// All static strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResources {
	pub locale: &'static str,
	pub months: [&'static str; 12],
	pub days_short: [&'static str; 7],
	pub days_long: [&'static str; 7],
	pub greetings: Greetings,
	pub just_now: &'static str,
	pub yesterday: &'static str,
	pub duration: DurationUnits,
	pub errors: &'static [(&'static str, &'static str)],
}

impl LocaleResources {
	/// Look up an error message defined by this locale only.
	pub fn error_message(&self, key: &str) -> Option<&'static str> {
		self.errors.iter().find(|(k, _)| *k == key).map(|(_, msg)| *msg)
	}
}

pub const RESOURCES: &[LocaleResources] = &[
	LocaleResources {
		locale: "en-US",
		months: [
			"January",
			"February",
			"March",
			"April",
			"May",
			"June",
			"July",
			"August",
			"September",
			"October",
			"November",
			"December",
		],
		days_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
		days_long: [
			"Sunday",
			"Monday",
			"Tuesday",
			"Wednesday",
			"Thursday",
			"Friday",
			"Saturday",
		],
		greetings: Greetings {
			morning: "Good morning",
			afternoon: "Good afternoon",
			evening: "Good evening",
		},
		just_now: "just now",
		yesterday: "Yesterday",
		duration: DurationUnits {
			hour_one: "hour",
			hour_other: "hours",
			minute_one: "minute",
			minute_other: "minutes",
		},
		errors: &[
			("required_field", "This field is required"),
			("invalid_email", "Please enter a valid email address"),
			("payment_failed", "Payment failed. Please try again."),
			("network_error", "Network error. Please check your connection."),
		],
	},
	LocaleResources {
		locale: "th-TH",
		months: [
			"มกราคม",
			"กุมภาพันธ์",
			"มีนาคม",
			"เมษายน",
			"พฤษภาคม",
			"มิถุนายน",
			"กรกฎาคม",
			"สิงหาคม",
			"กันยายน",
			"ตุลาคม",
			"พฤศจิกายน",
			"ธันวาคม",
		],
		days_short: ["อา.", "จ.", "อ.", "พ.", "พฤ.", "ศ.", "ส."],
		days_long: [
			"อาทิตย์",
			"จันทร์",
			"อังคาร",
			"พุธ",
			"พฤหัสบดี",
			"ศุกร์",
			"เสาร์",
		],
		greetings: Greetings {
			morning: "สวัสดีตอนเช้า",
			afternoon: "สวัสดีตอนบ่าย",
			evening: "สวัสดีตอนเย็น",
		},
		just_now: "เมื่อสักครู่",
		yesterday: "เมื่อวาน",
		duration: DurationUnits {
			hour_one: "ชั่วโมง",
			hour_other: "ชั่วโมง",
			minute_one: "นาที",
			minute_other: "นาที",
		},
		errors: &[
			("required_field", "กรุณากรอกข้อมูลในช่องนี้"),
			("invalid_email", "กรุณากรอกอีเมลที่ถูกต้อง"),
			("payment_failed", "การชำระเงินล้มเหลว กรุณาลองใหม่"),
			("network_error", "เกิดข้อผิดพลาดเครือข่าย กรุณาตรวจสอบการเชื่อมต่อ"),
		],
	},
	LocaleResources {
		locale: "ja-JP",
		months: [
			"1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
		],
		days_short: ["日", "月", "火", "水", "木", "金", "土"],
		days_long: [
			"日曜日",
			"月曜日",
			"火曜日",
			"水曜日",
			"木曜日",
			"金曜日",
			"土曜日",
		],
		greetings: Greetings {
			morning: "おはようございます",
			afternoon: "こんにちは",
			evening: "こんばんは",
		},
		just_now: "たった今",
		yesterday: "昨日",
		duration: DurationUnits {
			hour_one: "時間",
			hour_other: "時間",
			minute_one: "分",
			minute_other: "分",
		},
		errors: &[
			("required_field", "この項目は必須です"),
			("invalid_email", "有効なメールアドレスを入力してください"),
			("payment_failed", "お支払いに失敗しました。もう一度お試しください。"),
			("network_error", "ネットワークエラーが発生しました。接続を確認してください。"),
		],
	},
	LocaleResources {
		locale: "zh-CN",
		months: [
			"一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
			"十二月",
		],
		days_short: ["周日", "周一", "周二", "周三", "周四", "周五", "周六"],
		days_long: [
			"星期日",
			"星期一",
			"星期二",
			"星期三",
			"星期四",
			"星期五",
			"星期六",
		],
		greetings: Greetings {
			morning: "早上好",
			afternoon: "下午好",
			evening: "晚上好",
		},
		just_now: "刚刚",
		yesterday: "昨天",
		duration: DurationUnits {
			hour_one: "小时",
			hour_other: "小时",
			minute_one: "分钟",
			minute_other: "分钟",
		},
		errors: &[
			("required_field", "此字段为必填项"),
			("invalid_email", "请输入有效的电子邮件地址"),
			("payment_failed", "付款失败。请重试。"),
			("network_error", "网络错误。请检查您的连接。"),
		],
	},
	LocaleResources {
		locale: "ko-KR",
		months: [
			"1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
		],
		days_short: ["일", "월", "화", "수", "목", "금", "토"],
		days_long: [
			"일요일",
			"월요일",
			"화요일",
			"수요일",
			"목요일",
			"금요일",
			"토요일",
		],
		greetings: Greetings {
			morning: "좋은 아침입니다",
			afternoon: "안녕하세요",
			evening: "좋은 저녁입니다",
		},
		just_now: "방금",
		yesterday: "어제",
		duration: DurationUnits {
			hour_one: "시간",
			hour_other: "시간",
			minute_one: "분",
			minute_other: "분",
		},
		errors: &[
			("required_field", "이 필드는 필수 항목입니다"),
			("invalid_email", "유효한 이메일 주소를 입력해 주세요"),
			("payment_failed", "결제에 실패했습니다. 다시 시도해 주세요."),
			("network_error", "네트워크 오류가 발생했습니다. 연결을 확인해 주세요."),
		],
	},
	LocaleResources {
		locale: "ar-SA",
		months: [
			"يناير",
			"فبراير",
			"مارس",
			"أبريل",
			"مايو",
			"يونيو",
			"يوليو",
			"أغسطس",
			"سبتمبر",
			"أكتوبر",
			"نوفمبر",
			"ديسمبر",
		],
		days_short: [
			"الأحد",
			"الاثنين",
			"الثلاثاء",
			"الأربعاء",
			"الخميس",
			"الجمعة",
			"السبت",
		],
		days_long: [
			"الأحد",
			"الاثنين",
			"الثلاثاء",
			"الأربعاء",
			"الخميس",
			"الجمعة",
			"السبت",
		],
		greetings: Greetings {
			morning: "صباح الخير",
			afternoon: "مساء الخير",
			evening: "مساء الخير",
		},
		just_now: "الآن",
		yesterday: "أمس",
		duration: DurationUnits {
			hour_one: "ساعة",
			hour_other: "ساعات",
			minute_one: "دقيقة",
			minute_other: "دقائق",
		},
		errors: &[
			("required_field", "هذا الحقل مطلوب"),
			("invalid_email", "الرجاء إدخال عنوان بريد إلكتروني صالح"),
			("payment_failed", "فشلت الدفع. يرجى المحاولة مرة أخرى."),
			("network_error", "خطأ في الشبكة. يرجى التحقق من الاتصال."),
		],
	},
	LocaleResources {
		locale: "ms-MY",
		months: [
			"Januari",
			"Februari",
			"Mac",
			"April",
			"Mei",
			"Jun",
			"Julai",
			"Ogos",
			"September",
			"Oktober",
			"November",
			"Disember",
		],
		days_short: ["Ahd", "Isn", "Sel", "Rab", "Kha", "Jum", "Sab"],
		days_long: [
			"Ahad", "Isnin", "Selasa", "Rabu", "Khamis", "Jumaat", "Sabtu",
		],
		greetings: Greetings {
			morning: "Selamat pagi",
			afternoon: "Selamat petang",
			evening: "Selamat malam",
		},
		just_now: "sebentar tadi",
		yesterday: "Semalam",
		duration: DurationUnits {
			hour_one: "jam",
			hour_other: "jam",
			minute_one: "minit",
			minute_other: "minit",
		},
		errors: &[],
	},
	LocaleResources {
		locale: "vi-VN",
		months: [
			"Tháng 1",
			"Tháng 2",
			"Tháng 3",
			"Tháng 4",
			"Tháng 5",
			"Tháng 6",
			"Tháng 7",
			"Tháng 8",
			"Tháng 9",
			"Tháng 10",
			"Tháng 11",
			"Tháng 12",
		],
		days_short: ["CN", "T2", "T3", "T4", "T5", "T6", "T7"],
		days_long: [
			"Chủ Nhật",
			"Thứ Hai",
			"Thứ Ba",
			"Thứ Tư",
			"Thứ Năm",
			"Thứ Sáu",
			"Thứ Bảy",
		],
		greetings: Greetings {
			morning: "Chào buổi sáng",
			afternoon: "Chào buổi chiều",
			evening: "Chào buổi tối",
		},
		just_now: "vừa xong",
		yesterday: "Hôm qua",
		duration: DurationUnits {
			hour_one: "giờ",
			hour_other: "giờ",
			minute_one: "phút",
			minute_other: "phút",
		},
		errors: &[],
	},
];

static INDEX: Lazy<HashMap<&'static str, &'static LocaleResources>> =
	Lazy::new(|| RESOURCES.iter().map(|r| (r.locale, r)).collect());

/// Resources for a locale, falling back to `en-US`.
pub fn resources(locale: &str) -> &'static LocaleResources {
	INDEX
		.get(locale)
		.copied()
		.unwrap_or_else(fallback_resources)
}

fn fallback_resources() -> &'static LocaleResources {
	// en-US is always the first entry of RESOURCES
	&RESOURCES[0]
}

/// Look up an error message, falling back to the `en-US` entry for the key
/// and then to [`GENERIC_ERROR`].
pub fn error_message(key: &str, locale: &str) -> &'static str {
	resources(locale)
		.error_message(key)
		.or_else(|| fallback_resources().error_message(key))
		.unwrap_or(GENERIC_ERROR)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::locale::LOCALES;

	#[test]
	fn test_fallback_entry_is_default_locale() {
		assert_eq!(fallback_resources().locale, DEFAULT_LOCALE);
	}

	#[test]
	fn test_default_locale_defines_every_error_key() {
		let en = fallback_resources();
		for key in ERROR_KEYS {
			assert!(en.error_message(key).is_some(), "en-US missing error key {key}");
		}
	}

	#[test]
	fn test_every_configured_locale_has_resources() {
		for config in LOCALES {
			assert_eq!(resources(config.code).locale, config.code);
		}
	}

	#[test]
	fn test_locale_errors_only_use_known_keys() {
		for res in RESOURCES {
			for (key, _) in res.errors {
				assert!(ERROR_KEYS.contains(key), "{} defines unknown key {key}", res.locale);
			}
		}
	}

	#[test]
	fn test_unknown_locale_falls_back() {
		assert_eq!(resources("fr-FR").locale, "en-US");
		assert_eq!(resources("").months[0], "January");
	}

	#[test]
	fn test_error_message_fallback_chain() {
		assert_eq!(error_message("required_field", "th-TH"), "กรุณากรอกข้อมูลในช่องนี้");
		assert_eq!(error_message("required_field", "ms-MY"), "This field is required");
		assert_eq!(error_message("payment_failed", "fr-FR"), "Payment failed. Please try again.");
		assert_eq!(error_message("no_such_key", "th-TH"), GENERIC_ERROR);
	}
}
