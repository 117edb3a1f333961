// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One source's view of the configuration, before defaults are applied.

use serde::Deserialize;
use std::path::PathBuf;

/// Every field is optional so that layers can be stacked.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
	#[serde(default)]
	pub display: Option<DisplayLayer>,
	#[serde(default)]
	pub rates: Option<RatesLayer>,
	#[serde(default)]
	pub storage: Option<StorageLayer>,
	#[serde(default)]
	pub logging: Option<LoggingLayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisplayLayer {
	#[serde(default)]
	pub locale: Option<String>,
	#[serde(default)]
	pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RatesLayer {
	#[serde(default)]
	pub ttl_minutes: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StorageLayer {
	#[serde(default)]
	pub preferences_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoggingLayer {
	#[serde(default)]
	pub level: Option<String>,
	#[serde(default)]
	pub format: Option<String>,
}

impl ConfigLayer {
	pub fn display_mut(&mut self) -> &mut DisplayLayer {
		self.display.get_or_insert_with(DisplayLayer::default)
	}

	pub fn rates_mut(&mut self) -> &mut RatesLayer {
		self.rates.get_or_insert_with(RatesLayer::default)
	}

	pub fn storage_mut(&mut self) -> &mut StorageLayer {
		self.storage.get_or_insert_with(StorageLayer::default)
	}

	pub fn logging_mut(&mut self) -> &mut LoggingLayer {
		self.logging.get_or_insert_with(LoggingLayer::default)
	}

	/// Overlay `other` onto this layer; fields `other` sets win.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_option(&mut self.display, other.display, DisplayLayer::merge);
		merge_option(&mut self.rates, other.rates, RatesLayer::merge);
		merge_option(&mut self.storage, other.storage, StorageLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

impl DisplayLayer {
	fn merge(&mut self, other: DisplayLayer) {
		if other.locale.is_some() {
			self.locale = other.locale;
		}
		if other.currency.is_some() {
			self.currency = other.currency;
		}
	}
}

impl RatesLayer {
	fn merge(&mut self, other: RatesLayer) {
		if other.ttl_minutes.is_some() {
			self.ttl_minutes = other.ttl_minutes;
		}
	}
}

impl StorageLayer {
	fn merge(&mut self, other: StorageLayer) {
		if other.preferences_file.is_some() {
			self.preferences_file = other.preferences_file;
		}
	}
}

impl LoggingLayer {
	fn merge(&mut self, other: LoggingLayer) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.format.is_some() {
			self.format = other.format;
		}
	}
}
