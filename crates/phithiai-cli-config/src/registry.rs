// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ordered set of configuration sources and the load that folds them.

use tracing::{debug, info, warn};

use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::runtime::PhithiaiConfig;
use crate::sources::{ConfigSource, Precedence};
use crate::validation::validate_config;
use crate::ConfigError;

/// Sources kept sorted by [`Precedence`], lowest first.
///
/// Sources with equal precedence keep their registration order.
#[derive(Default)]
pub struct ConfigRegistry {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, source: Box<dyn ConfigSource>) {
		let at = self
			.sources
			.partition_point(|s| s.precedence() <= source.precedence());
		debug!(source = source.name(), precedence = ?source.precedence(), position = at, "config source registered");
		self.sources.insert(at, source);
	}

	/// Fold every source into one layer, then resolve and validate it.
	///
	/// A file passed explicitly must load. Any other source that fails is
	/// logged and skipped.
	pub fn load(&self, paths: PathsConfig) -> Result<PhithiaiConfig, ConfigError> {
		let mut merged = ConfigLayer::default();
		for source in &self.sources {
			match source.load() {
				Ok(layer) => merged.merge(layer),
				Err(e) if source.precedence() == Precedence::ExplicitFile => return Err(e),
				Err(e) => warn!(source = source.name(), error = %e, "skipping unreadable config source"),
			}
		}

		let config = PhithiaiConfig::from_layer(merged, paths)?;
		validate_config(&config)?;

		info!(
			sources = self.sources.len(),
			locale = %config.display.locale,
			currency = ?config.display.currency,
			ttl_minutes = config.rates.ttl_minutes,
			"configuration ready"
		);
		Ok(config)
	}

	pub fn source_count(&self) -> usize {
		self.sources.len()
	}
}
