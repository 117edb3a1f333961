// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Phithiai CLI - locale formatting and currency conversion
//!
//! Renders dates, numbers and prices the way the ceremony platform does for
//! each supported locale, and converts amounts into the user's selected
//! display currency.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use phithiai_cli_config::{
	load_config,
	runtime::{LogFormat, LogLevel, LoggingConfig},
	CliOverrides,
};
use phithiai_cli_preferences::FilePreferenceStore;
use phithiai_common_currency::{CurrencyConverter, StaticRateSource};
use phithiai_common_i18n::I18nFormatter;

mod currency;
mod fmt_cmd;

use currency::{ConverterCommand, PriceCommand};
use fmt_cmd::FmtCommand;

/// Phithiai - locale formatting and currency conversion
#[derive(Parser, Debug)]
#[command(name = "phithiai", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(long, global = true)]
	config: Option<PathBuf>,

	/// Locale for formatting, e.g. th-TH
	#[arg(long = "locale", global = true)]
	display_locale: Option<String>,

	/// Display currency for this invocation only
	#[arg(long = "currency", global = true)]
	display_currency: Option<String>,

	/// Log level (error, warn, info, debug, trace)
	#[arg(long, global = true)]
	log_level: Option<String>,

	/// Emit logs as JSON
	#[arg(long, global = true)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	#[command(flatten)]
	Converter(ConverterCommand),

	/// Render prices
	Price {
		#[command(subcommand)]
		command: PriceCommand,
	},

	/// Format values for the selected locale
	Fmt {
		#[command(subcommand)]
		command: FmtCommand,
	},
}

impl From<&Args> for CliOverrides {
	fn from(args: &Args) -> Self {
		CliOverrides {
			locale: args.display_locale.clone(),
			currency: args.display_currency.clone(),
			log_level: args.log_level.clone(),
			log_format: args.json_logs.then(|| "json".to_string()),
			config_file: args.config.clone(),
		}
	}
}

fn log_level_to_tracing(level: LogLevel) -> tracing::Level {
	match level {
		LogLevel::Trace => tracing::Level::TRACE,
		LogLevel::Debug => tracing::Level::DEBUG,
		LogLevel::Info => tracing::Level::INFO,
		LogLevel::Warn => tracing::Level::WARN,
		LogLevel::Error => tracing::Level::ERROR,
	}
}

/// Logs go to stderr so command output can be piped.
fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(format!("phithiai={}", log_level_to_tracing(logging.level))));

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

fn main() -> Result<()> {
	let args = Args::parse();

	let config = load_config(CliOverrides::from(&args)).context("failed to load configuration")?;
	init_tracing(&config.logging);
	debug!(locale = %config.display.locale, "configuration loaded");

	let output = match &args.command {
		Command::Fmt { command } => {
			let formatter = I18nFormatter::new(config.display.locale.clone());
			fmt_cmd::run(command, &formatter)?
		}
		Command::Converter(command) => {
			let store = FilePreferenceStore::new(&config.storage.preferences_file);
			let mut converter = CurrencyConverter::with_rate_ttl(store, config.rates.ttl_minutes);
			if let Some(code) = config.display.currency {
				converter.use_session_currency(code);
			}
			currency::run_converter(command, &mut converter, &StaticRateSource::default(), Utc::now())?
		}
		Command::Price { command } => {
			let store = FilePreferenceStore::new(&config.storage.preferences_file);
			let converter = CurrencyConverter::with_rate_ttl(store, config.rates.ttl_minutes);
			currency::run_price(command, &converter, &config.display.locale)?
		}
	};

	println!("{output}");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;
	use phithiai_common_i18n::CurrencyCode;
	use proptest::prelude::*;

	#[test]
	fn test_cli_definition_is_consistent() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_global_flags_become_overrides() {
		let args = Args::try_parse_from([
			"phithiai",
			"convert",
			"1500",
			"--currency",
			"USD",
			"--locale",
			"th-TH",
			"--json-logs",
		])
		.unwrap();
		let overrides = CliOverrides::from(&args);
		assert_eq!(overrides.currency.as_deref(), Some("USD"));
		assert_eq!(overrides.locale.as_deref(), Some("th-TH"));
		assert_eq!(overrides.log_format.as_deref(), Some("json"));
		assert!(overrides.config_file.is_none());
	}

	#[test]
	fn test_negative_amounts_parse() {
		let args = Args::try_parse_from(["phithiai", "convert", "-500", "--from", "usd"]).unwrap();
		match args.command {
			Command::Converter(ConverterCommand::Convert { amount, from, .. }) => {
				assert_eq!(amount, -500.0);
				assert_eq!(from, CurrencyCode::Usd);
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[test]
	fn test_unknown_currency_rejected_at_parse() {
		assert!(Args::try_parse_from(["phithiai", "rate", "THB", "XYZ"]).is_err());
	}

	#[test]
	fn test_fmt_subcommand_parses_hour_cycle() {
		let args = Args::try_parse_from([
			"phithiai",
			"fmt",
			"time",
			"2024-01-05T15:05:00+07:00",
			"--hours",
			"12h",
		])
		.unwrap();
		assert!(matches!(
			args.command,
			Command::Fmt {
				command: FmtCommand::Time { hours: Some(_), .. }
			}
		));
	}

	proptest! {
		#[test]
		fn any_printed_amount_parses_back(amount in -1.0e9f64..1.0e9) {
			let text = amount.to_string();
			let args = Args::try_parse_from(["phithiai", "convert", text.as_str()]).unwrap();
			match args.command {
				Command::Converter(ConverterCommand::Convert { amount: parsed, .. }) => {
					prop_assert_eq!(parsed, amount);
				}
				other => prop_assert!(false, "unexpected command: {:?}", other),
			}
		}
	}
}
