// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::{locale_info, DEFAULT_LOCALE};

/// Resolve the effective locale from a user preference and an app default.
///
/// Resolution order (highest to lowest priority):
/// 1. User's stored locale preference (if supported)
/// 2. Application default locale (if supported)
/// 3. Fallback to `en-US`
///
/// # Example
///
/// ```
/// use phithiai_common_i18n::resolve_locale;
///
/// assert_eq!(resolve_locale(Some("th-TH"), "en-US"), "th-TH");
/// assert_eq!(resolve_locale(None, "ja-JP"), "ja-JP");
/// assert_eq!(resolve_locale(Some("fr-FR"), "de-DE"), "en-US");
/// ```
pub fn resolve_locale(user_locale: Option<&str>, app_default: &str) -> &'static str {
	if let Some(config) = user_locale.and_then(locale_info) {
		return config.code;
	}

	if let Some(config) = locale_info(app_default) {
		return config.code;
	}

	DEFAULT_LOCALE
}
