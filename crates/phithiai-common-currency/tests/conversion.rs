// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{Duration, TimeZone, Utc};
use phithiai_cli_preferences::{FilePreferenceStore, PreferenceStore};
use phithiai_common_currency::fx::{FX_RATES_KEY, FX_RATES_TIMESTAMP_KEY};
use phithiai_common_currency::{
	currency_info, CurrencyCode, CurrencyConverter, StaticRateSource, CURRENCY_PREFERENCE_KEY,
};
use proptest::prelude::*;

fn any_code() -> impl Strategy<Value = CurrencyCode> {
	(0usize..CurrencyCode::ALL.len()).prop_map(|i| CurrencyCode::ALL[i])
}

#[test]
fn preference_and_quotes_survive_restart() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("preferences.json");
	let now = Utc.with_ymd_and_hms(2025, 1, 10, 8, 30, 0).unwrap();

	{
		let mut converter = CurrencyConverter::new(FilePreferenceStore::new(&path));
		converter.set_current_currency(CurrencyCode::Jpy);
		converter
			.refresh_rates_at(&StaticRateSource::default(), now)
			.unwrap();
	}

	let store = FilePreferenceStore::new(&path);
	assert_eq!(store.get(CURRENCY_PREFERENCE_KEY).unwrap().as_deref(), Some("JPY"));
	assert!(store.contains(FX_RATES_KEY).unwrap());
	assert!(store.contains(FX_RATES_TIMESTAMP_KEY).unwrap());

	let converter = CurrencyConverter::new(store);
	assert_eq!(converter.current_currency(), CurrencyCode::Jpy);
	assert!(!converter.is_rate_stale_at(now + Duration::minutes(10)));
	assert_eq!(converter.format_at(1000.0, CurrencyCode::Thb, now), "￥4,200");
}

#[test]
fn corrupt_preference_file_degrades_to_defaults() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("preferences.json");
	std::fs::write(&path, "{broken").unwrap();

	let mut converter = CurrencyConverter::new(FilePreferenceStore::new(&path));
	assert_eq!(converter.current_currency(), CurrencyCode::Thb);

	converter.set_current_currency(CurrencyCode::Eur);
	assert_eq!(converter.current_currency(), CurrencyCode::Eur);

	let reloaded = CurrencyConverter::new(FilePreferenceStore::new(&path));
	assert_eq!(reloaded.current_currency(), CurrencyCode::Eur);
}

#[test]
fn currency_metadata_is_complete() {
	for code in CurrencyCode::ALL {
		let info = currency_info(code);
		assert_eq!(info.code, code);
		assert!(!info.symbol.is_empty());
		assert!(!info.name.is_empty());
		assert!(!info.locale.is_empty());
	}
}

proptest! {
	#[test]
	fn format_always_renders(code in any_code(), from in any_code(), amount in -1e9f64..1e9) {
		let temp_dir = tempfile::tempdir().unwrap();
		let mut converter = CurrencyConverter::new(FilePreferenceStore::new(temp_dir.path().join("p.json")));
		converter.set_current_currency(code);
		let formatted = converter.format(amount, from);
		prop_assert!(formatted.chars().any(|c| c.is_ascii_digit()));
	}
}
