use anyhow::Result;
use argent::core::calculator::WeightUnit;
use argent::core::history::{PriceBand, PriceFilter};
use argent::core::log::init_logging;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Grams,
    Kilograms,
}

impl From<UnitArg> for WeightUnit {
    fn from(unit: UnitArg) -> WeightUnit {
        match unit {
            UnitArg::Grams => WeightUnit::Grams,
            UnitArg::Kilograms => WeightUnit::Kilograms,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CurrencyArg {
    Inr,
    Usd,
    Eur,
    Gbp,
}

impl CurrencyArg {
    fn code(self) -> &'static str {
        match self {
            CurrencyArg::Inr => "INR",
            CurrencyArg::Usd => "USD",
            CurrencyArg::Eur => "EUR",
            CurrencyArg::Gbp => "GBP",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RangeArg {
    All,
    Low,
    Mid,
    High,
}

impl From<RangeArg> for PriceFilter {
    fn from(range: RangeArg) -> PriceFilter {
        match range {
            RangeArg::All => PriceFilter::All,
            RangeArg::Low => PriceFilter::Band(PriceBand::Low),
            RangeArg::Mid => PriceFilter::Band(PriceBand::Mid),
            RangeArg::High => PriceFilter::Band(PriceBand::High),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Compute the total cost of a silver purchase
    Cost {
        /// Weight of silver to price
        #[arg(long)]
        weight: f64,
        /// Unit of the weight value
        #[arg(long, value_enum, default_value = "grams")]
        unit: UnitArg,
        /// Price per gram in INR (defaults to the configured price)
        #[arg(long)]
        price_per_gram: Option<f64>,
        /// Display currency (defaults to the configured currency)
        #[arg(long, value_enum)]
        currency: Option<CurrencyArg>,
        /// Historical price range for the trend section
        #[arg(long, value_enum, default_value = "all")]
        range: RangeArg,
    },
    /// Display historical price statistics
    Analysis,
    /// Display state-wise purchase rankings
    Dashboard,
}

impl From<Commands> for argent::AppCommand {
    fn from(cmd: Commands) -> argent::AppCommand {
        match cmd {
            Commands::Cost {
                weight,
                unit,
                price_per_gram,
                currency,
                range,
            } => argent::AppCommand::Calculator {
                weight,
                unit: unit.into(),
                price_per_gram,
                currency: currency.map(|c| c.code().to_string()),
                range: range.into(),
            },
            Commands::Analysis => argent::AppCommand::Analysis,
            Commands::Dashboard => argent::AppCommand::Dashboard,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => argent::cli::setup::setup(),
        Some(cmd) => argent::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
