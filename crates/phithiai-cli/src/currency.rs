// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Currency selection, conversion and price rendering commands.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Subcommand;
use phithiai_cli_preferences::PreferenceStore;
use phithiai_common_currency::{
	format_price, format_price_comparison, format_price_range, format_price_with_discount,
	format_price_with_tax, parse_formatted_price, CurrencyConverter, DiscountBreakdown,
	PriceEntry, PriceOptions, RateSource, TaxBreakdown,
};
use phithiai_common_i18n::{currency_info, CurrencyCode, NumberOptions};
use serde_json::json;
use tracing::instrument;

#[derive(Subcommand, Debug)]
pub enum CurrencyAction {
	/// Show the selected display currency
	Get,
	/// Select and remember a display currency
	Set { code: String },
}

/// Commands that go through the currency converter.
#[derive(Subcommand, Debug)]
pub enum ConverterCommand {
	/// List supported currencies
	Currencies {
		#[arg(long)]
		json: bool,
	},
	/// Show or change the display currency
	Currency {
		#[command(subcommand)]
		action: CurrencyAction,
	},
	/// Show the exchange rate between two currencies
	Rate { from: CurrencyCode, to: CurrencyCode },
	/// Convert an amount into the display currency
	Convert {
		#[arg(allow_negative_numbers = true)]
		amount: f64,
		#[arg(long, default_value = "THB")]
		from: CurrencyCode,
		/// Print the raw number instead of a formatted price
		#[arg(long)]
		raw: bool,
	},
	/// Fetch fresh FX quotes
	RefreshRates,
	/// Show cached FX quotes and their age
	Rates {
		#[arg(long)]
		json: bool,
	},
}

/// Price rendering that does not depend on the selected currency.
#[derive(Subcommand, Debug)]
pub enum PriceCommand {
	/// Render a price in its currency's home locale
	Show {
		#[arg(allow_negative_numbers = true)]
		amount: f64,
		currency: CurrencyCode,
		/// Upper bound, renders a range
		#[arg(long, allow_negative_numbers = true)]
		max: Option<f64>,
		/// Locale to render in instead of the currency's home locale
		#[arg(long = "in")]
		in_locale: Option<String>,
		#[arg(long)]
		digits: Option<u8>,
	},
	/// Add VAT to a price
	Tax {
		amount: f64,
		currency: CurrencyCode,
		/// Percent, e.g. 7
		#[arg(long, default_value_t = 7.0)]
		rate: f64,
	},
	/// Apply a percentage discount to a price
	Discount {
		amount: f64,
		currency: CurrencyCode,
		#[arg(long)]
		percent: f64,
	},
	/// Convert prices in several currencies into one for comparison
	Compare {
		/// Prices as AMOUNT:CODE, e.g. 45000:THB
		#[arg(value_parser = parse_price_entry, required = true)]
		prices: Vec<PriceEntry>,
		#[arg(long, default_value = "THB")]
		base: CurrencyCode,
		#[arg(long)]
		json: bool,
	},
	/// Read the amount back out of a price formatted for the selected locale
	Parse { text: String },
}

fn parse_price_entry(s: &str) -> Result<PriceEntry, String> {
	let (amount, code) = s
		.rsplit_once(':')
		.ok_or_else(|| format!("expected AMOUNT:CODE, got {s:?}"))?;
	let amount = amount
		.trim()
		.parse::<f64>()
		.map_err(|e| format!("invalid amount {amount:?}: {e}"))?;
	let currency = code.parse::<CurrencyCode>().map_err(|e| e.to_string())?;
	Ok(PriceEntry {
		amount,
		currency,
		label: None,
	})
}

#[instrument(skip(converter, source), fields(current = %converter.current_currency()))]
pub fn run_converter<S: PreferenceStore>(
	command: &ConverterCommand,
	converter: &mut CurrencyConverter<S>,
	source: &dyn RateSource,
	now: DateTime<Utc>,
) -> Result<String> {
	let output = match command {
		ConverterCommand::Currencies { json } => {
			let current = converter.current_currency();
			let currencies = converter.supported_currencies();
			if *json {
				let entries: Vec<_> = currencies
					.iter()
					.map(|code| {
						let info = currency_info(*code);
						json!({
							"code": code,
							"symbol": info.symbol,
							"name": info.name,
							"flag": info.flag,
							"locale": info.locale,
							"selected": *code == current,
						})
					})
					.collect();
				serde_json::to_string_pretty(&entries)?
			} else {
				currencies
					.iter()
					.map(|code| {
						let info = currency_info(*code);
						let marker = if *code == current { "*" } else { " " };
						format!("{marker} {code} {} {:<4} {}", info.flag, info.symbol, info.name)
					})
					.collect::<Vec<_>>()
					.join("\n")
			}
		}
		ConverterCommand::Currency { action } => match action {
			CurrencyAction::Get => converter.current_currency().to_string(),
			CurrencyAction::Set { code } => {
				let code = converter
					.set_current_currency_str(code)
					.context("cannot change display currency")?;
				format!("Display currency set to {code}")
			}
		},
		ConverterCommand::Rate { from, to } => {
			format!("1 {from} = {} {to}", converter.get_exchange_rate_at(*from, *to, now))
		}
		ConverterCommand::Convert { amount, from, raw } => {
			if *raw {
				converter.convert_at(*amount, *from, now).to_string()
			} else {
				converter.format_at(*amount, *from, now)
			}
		}
		ConverterCommand::RefreshRates => {
			let count = converter
				.refresh_rates_at(source, now)
				.with_context(|| format!("failed to refresh rates from {}", source.name()))?;
			format!("Refreshed {count} rates from {}", source.name())
		}
		ConverterCommand::Rates { json } => {
			if *json {
				serde_json::to_string_pretty(&json!({
					"lastUpdated": converter.last_fx_update(),
					"stale": converter.is_rate_stale_at(now),
					"rates": converter.fx_rates(),
				}))?
			} else {
				let status = match converter.last_fx_update() {
					Some(at) if converter.is_rate_stale_at(now) => {
						format!("Quotes from {} are stale, using built-in rates", at.to_rfc3339())
					}
					Some(at) => format!("Quotes from {}", at.to_rfc3339()),
					None => "No quotes fetched, using built-in rates".to_string(),
				};
				let mut lines = vec![status];
				lines.extend(
					converter
						.fx_rates()
						.iter()
						.map(|(key, quote)| format!("{key} {} ({})", quote.rate, quote.source)),
				);
				lines.join("\n")
			}
		}
	};
	Ok(output)
}

pub fn run_price<S: PreferenceStore>(
	command: &PriceCommand,
	converter: &CurrencyConverter<S>,
	locale: &str,
) -> Result<String> {
	let output = match command {
		PriceCommand::Show {
			amount,
			currency,
			max,
			in_locale,
			digits,
		} => {
			let options = PriceOptions {
				locale: in_locale.as_deref(),
				number: digits.map_or_else(NumberOptions::default, NumberOptions::fraction_digits),
			};
			match max {
				Some(max) => format_price_range(*amount, *max, *currency, &options),
				None => format_price(*amount, *currency, &options),
			}
		}
		PriceCommand::Tax {
			amount,
			currency,
			rate,
		} => {
			let taxed = format_price_with_tax(
				&TaxBreakdown::from_rate(*amount, *rate, *currency),
				&PriceOptions::default(),
			);
			format!("{}\n{}", taxed.formatted, taxed.breakdown)
		}
		PriceCommand::Discount {
			amount,
			currency,
			percent,
		} => {
			let discounted = format_price_with_discount(
				&DiscountBreakdown::from_percentage(*amount, *percent, *currency),
				&PriceOptions::default(),
			);
			format!("{}\n{}", discounted.formatted, discounted.savings)
		}
		PriceCommand::Compare { prices, base, json } => {
			let compared = format_price_comparison(
				prices,
				*base,
				converter.rate_table(),
				&PriceOptions::default(),
			);
			if *json {
				serde_json::to_string_pretty(&compared)?
			} else {
				compared
					.iter()
					.map(|price| {
						let original =
							format_price(price.amount, price.currency, &PriceOptions::default());
						format!("{original} = {}", price.formatted)
					})
					.collect::<Vec<_>>()
					.join("\n")
			}
		}
		PriceCommand::Parse { text } => parse_formatted_price(text, locale).to_string(),
	};
	Ok(output)
}
