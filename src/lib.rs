pub mod cli;
pub mod config;
pub mod core;

use crate::cli::calculator::CalculatorInput;
use crate::core::calculator::WeightUnit;
use crate::core::currency::CurrencyRates;
use crate::core::dataset::DataStore;
use crate::core::history::PriceFilter;
use anyhow::Result;
use tracing::{debug, info};

/// A single user interaction, decoupled from the clap surface in `main`.
pub enum AppCommand {
    Calculator {
        weight: f64,
        unit: WeightUnit,
        /// Falls back to the configured price when not given.
        price_per_gram: Option<f64>,
        /// Falls back to the configured currency when not given.
        currency: Option<String>,
        range: PriceFilter,
    },
    Analysis,
    Dashboard,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("argent starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = DataStore::new(
        &config.datasets.historical_prices,
        &config.datasets.state_purchases,
    );
    let rates = CurrencyRates;

    match command {
        AppCommand::Calculator {
            weight,
            unit,
            price_per_gram,
            currency,
            range,
        } => {
            let input = CalculatorInput {
                weight,
                unit,
                price_per_gram: price_per_gram.unwrap_or(config.price_per_gram),
                currency: currency.unwrap_or(config.currency),
                range,
            };
            cli::calculator::run(&store, &rates, &input)
        }
        AppCommand::Analysis => cli::analysis::run(&store),
        AppCommand::Dashboard => cli::dashboard::run(&store),
    }
}
