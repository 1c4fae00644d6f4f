use super::ui;
use crate::core::dataset::{self, DataStore};
use crate::core::history::{PriceBand, PriceSeries};
use anyhow::Result;
use comfy_table::Cell;

/// Rows shown in the data preview table.
const PREVIEW_ROWS: usize = 10;

pub fn run(store: &DataStore) -> Result<()> {
    println!(
        "{}\n",
        ui::style_text("Historical Analysis", ui::StyleType::Title)
    );

    let series = match store.price_series() {
        Ok(series) => series,
        Err(issue) if issue.is_recoverable() => {
            ui::print_warning(&issue.to_string());
            return Ok(());
        }
        Err(issue) => return Err(issue.into()),
    };

    display_summary(&series);
    ui::print_separator();
    display_distribution(&series);
    ui::print_separator();
    display_preview(&series);
    Ok(())
}

fn display_summary(series: &PriceSeries) {
    let Some(summary) = series.summary() else {
        println!(
            "{}",
            ui::style_text("The price series is empty.", ui::StyleType::Subtle)
        );
        return;
    };

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Average Price"),
        ui::header_cell("Max Price"),
        ui::header_cell("Min Price"),
        ui::header_cell("Total Records"),
    ]);
    table.add_row(vec![
        ui::value_cell(format!("₹ {}", ui::format_amount(summary.mean))),
        ui::value_cell(format!("₹ {}", ui::format_amount(summary.max))),
        ui::value_cell(format!("₹ {}", ui::format_amount(summary.min))),
        ui::value_cell(summary.count.to_string()),
    ]);
    println!("{table}");
}

fn display_distribution(series: &PriceSeries) {
    println!(
        "{}\n",
        ui::style_text("Price Distribution", ui::StyleType::Title)
    );
    let counts = series.band_counts();
    let rows = vec![
        (PriceBand::Low.label().to_string(), counts.low as f64),
        (PriceBand::Mid.label().to_string(), counts.mid as f64),
        (PriceBand::High.label().to_string(), counts.high as f64),
    ];
    print!("{}", ui::render_bar_rows(&rows));
}

fn display_preview(series: &PriceSeries) {
    println!("{}\n", ui::style_text("Data Preview", ui::StyleType::Title));
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell(dataset::PRICE_COLUMN),
    ]);
    for (i, price) in series.head(PREVIEW_ROWS).iter().enumerate() {
        table.add_row(vec![
            Cell::new(i.to_string()),
            ui::value_cell(ui::format_amount(*price)),
        ]);
    }
    println!("{table}");
}
