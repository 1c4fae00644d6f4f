use super::ui;
use crate::core::calculator::{self, WeightUnit};
use crate::core::currency::CurrencyRates;
use crate::core::dataset::DataStore;
use crate::core::history::PriceFilter;
use anyhow::Result;

/// Transient calculator inputs; built per invocation, never persisted.
#[derive(Debug, Clone)]
pub struct CalculatorInput {
    pub weight: f64,
    pub unit: WeightUnit,
    pub price_per_gram: f64,
    pub currency: String,
    pub range: PriceFilter,
}

pub fn run(store: &DataStore, rates: &CurrencyRates, input: &CalculatorInput) -> Result<()> {
    let quote = calculator::total_cost(input.weight, input.unit, input.price_per_gram);
    let converted = rates.convert(quote.cost_inr, &input.currency)?;

    println!(
        "{}\n",
        ui::style_text("Silver Price Calculator", ui::StyleType::Title)
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Weight"),
        ui::header_cell("Cost (INR)"),
        ui::header_cell(&format!("Cost ({})", input.currency)),
    ]);
    table.add_row(vec![
        ui::value_cell(format!("{:.2} g", quote.weight_grams)),
        ui::value_cell(format!("₹ {}", ui::format_amount(quote.cost_inr))),
        ui::value_cell(ui::format_amount(converted)),
    ]);
    println!("{table}");

    display_historical_section(store, input.range)
}

/// Summary and trend of the (filtered) historical series. A missing file
/// or column disables the section with a warning; malformed data fails
/// the command.
fn display_historical_section(store: &DataStore, range: PriceFilter) -> Result<()> {
    let series = match store.price_series() {
        Ok(series) => series,
        Err(issue) if issue.is_recoverable() => {
            ui::print_warning(&issue.to_string());
            return Ok(());
        }
        Err(issue) => return Err(issue.into()),
    };

    ui::print_separator();
    println!(
        "{}",
        ui::style_text("Historical Silver Price", ui::StyleType::Title)
    );
    println!(
        "{}",
        ui::style_text(&format!("Price range: {range}"), ui::StyleType::Subtle)
    );

    let filtered = series.filter(range);
    match filtered.summary() {
        Some(summary) => {
            let mut table = ui::new_styled_table();
            table.set_header(vec![
                ui::header_cell("Average"),
                ui::header_cell("Max"),
                ui::header_cell("Min"),
                ui::header_cell("Records"),
            ]);
            table.add_row(vec![
                ui::value_cell(format!("₹ {}", ui::format_amount(summary.mean))),
                ui::value_cell(format!("₹ {}", ui::format_amount(summary.max))),
                ui::value_cell(format!("₹ {}", ui::format_amount(summary.min))),
                ui::value_cell(summary.count.to_string()),
            ]);
            println!("{table}");
            println!("Trend: {}", ui::sparkline(filtered.prices()));
        }
        None => println!(
            "{}",
            ui::style_text("No records in this price range.", ui::StyleType::Subtle)
        ),
    }
    Ok(())
}
