// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Preference storage backends.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::error::PreferenceError;

/// On-disk preference file format.
pub type PersistedPreferences = BTreeMap<String, String>;

/// Trait for preference storage backends.
///
/// Implementations store string values keyed by a fixed identifier
/// (e.g., "phithiai-currency").
pub trait PreferenceStore: Send + Sync + std::fmt::Debug {
	/// Read the value stored under `key`.
	fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

	/// Store `value` under `key`, replacing any previous value.
	fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;

	/// Remove the value stored under `key`.
	fn remove(&self, key: &str) -> Result<(), PreferenceError>;

	/// Check if a value exists under `key`.
	fn contains(&self, key: &str) -> Result<bool, PreferenceError> {
		Ok(self.get(key)?.is_some())
	}
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Arc<S> {
	fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
		(**self).get(key)
	}

	fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
		(**self).set(key, value)
	}

	fn remove(&self, key: &str) -> Result<(), PreferenceError> {
		(**self).remove(key)
	}
}

/// File-based preference store with JSON format.
///
/// Preferences are stored in a JSON object with restricted permissions (0600
/// on Unix). Writes go through a temporary file and a rename.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
	path: PathBuf,
}

impl FilePreferenceStore {
	/// Create a new file preference store at the given path.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Get the path to the preference file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Read every stored preference. A missing file is an empty store.
	pub fn read_all(&self) -> Result<PersistedPreferences, PreferenceError> {
		if !self.path.exists() {
			return Ok(PersistedPreferences::new());
		}

		let contents = fs::read_to_string(&self.path)?;
		if contents.trim().is_empty() {
			return Ok(PersistedPreferences::new());
		}
		let prefs: PersistedPreferences = serde_json::from_str(&contents)?;
		Ok(prefs)
	}

	/// Like [`read_all`](Self::read_all), but an unparseable file counts as
	/// empty so the next write replaces it.
	fn read_for_update(&self) -> Result<PersistedPreferences, PreferenceError> {
		match self.read_all() {
			Err(PreferenceError::Serde(error)) => {
				warn!(path = ?self.path, %error, "Preference file is corrupt, starting from an empty store");
				Ok(PersistedPreferences::new())
			}
			other => other,
		}
	}

	fn write_all(&self, prefs: &PersistedPreferences) -> Result<(), PreferenceError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}

		let contents = serde_json::to_string_pretty(prefs)?;

		let temp_path = self.path.with_extension("tmp");
		let mut file = fs::File::create(&temp_path)?;
		file.write_all(contents.as_bytes())?;
		file.sync_all()?;
		drop(file);

		#[cfg(unix)]
		{
			use std::os::unix::fs::PermissionsExt;
			let perms = fs::Permissions::from_mode(0o600);
			if let Err(e) = fs::set_permissions(&temp_path, perms) {
				warn!(path = ?temp_path, error = %e, "Failed to set file permissions to 0600");
			}
		}

		fs::rename(&temp_path, &self.path)?;

		debug!(path = ?self.path, keys = prefs.len(), "Preference file written");
		Ok(())
	}
}

impl PreferenceStore for FilePreferenceStore {
	fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
		Ok(self.read_all()?.remove(key))
	}

	fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
		let mut prefs = self.read_for_update()?;
		prefs.insert(key.to_string(), value.to_string());
		self.write_all(&prefs)
	}

	fn remove(&self, key: &str) -> Result<(), PreferenceError> {
		let mut prefs = self.read_for_update()?;
		if prefs.remove(key).is_none() {
			return Ok(());
		}
		self.write_all(&prefs)
	}
}

/// In-memory preference store for tests and sessions that must not persist.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
	values: RwLock<PersistedPreferences>,
}

impl MemoryPreferenceStore {
	/// Create a new empty in-memory store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a store pre-populated with `entries`.
	pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		let values = entries
			.into_iter()
			.map(|(k, v)| (k.into(), v.into()))
			.collect();
		Self {
			values: RwLock::new(values),
		}
	}
}

fn poisoned<T>(_: T) -> PreferenceError {
	PreferenceError::Unavailable("preference lock poisoned".to_string())
}

impl PreferenceStore for MemoryPreferenceStore {
	fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
		let values = self.values.read().map_err(poisoned)?;
		Ok(values.get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
		let mut values = self.values.write().map_err(poisoned)?;
		values.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), PreferenceError> {
		let mut values = self.values.write().map_err(poisoned)?;
		values.remove(key);
		Ok(())
	}
}
