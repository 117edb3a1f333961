// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Durable client-local preference storage for Phithiai.
//!
//! Preferences are string values under fixed keys, such as the selected
//! display currency or the cached exchange-rate quotes.
//!
//! # Features
//!
//! - **PreferenceStore trait**: Abstract interface for preference backends
//! - **FilePreferenceStore**: JSON file storage with owner-only permissions
//! - **MemoryPreferenceStore**: In-memory storage for tests and ephemeral sessions
//!
//! # Example
//!
//! ```rust,no_run
//! use phithiai_cli_preferences::{FilePreferenceStore, PreferenceStore};
//!
//! let store = FilePreferenceStore::new("/tmp/phithiai/preferences.json");
//! store.set("phithiai-currency", "USD").unwrap();
//! assert_eq!(store.get("phithiai-currency").unwrap().as_deref(), Some("USD"));
//! ```

mod error;
mod store;

pub use error::PreferenceError;
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PersistedPreferences, PreferenceStore};
