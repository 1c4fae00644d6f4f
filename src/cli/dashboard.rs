use super::ui;
use crate::core::dataset::DataStore;
use crate::core::states::StatePurchase;
use anyhow::Result;
use comfy_table::Cell;

const TOP_STATES: usize = 5;

pub fn run(store: &DataStore) -> Result<()> {
    println!(
        "{}\n",
        ui::style_text("Silver Sales Dashboard", ui::StyleType::Title)
    );

    let table = match store.purchases() {
        Ok(table) => table,
        Err(issue) if issue.is_recoverable() => {
            ui::print_warning(&issue.to_string());
            return Ok(());
        }
        Err(issue) => return Err(issue.into()),
    };

    let top = table.top_n(TOP_STATES);
    println!(
        "{}\n",
        ui::style_text(
            &format!("Top {TOP_STATES} States with Highest Silver Purchases"),
            ui::StyleType::Title
        )
    );
    print!("{}", ui::render_bar_rows(&bar_rows(&top)));
    println!("\n{}", ranking_table(&top));

    ui::print_separator();

    let sorted = table.sorted_descending();
    println!(
        "{}\n",
        ui::style_text("All States Silver Purchases", ui::StyleType::Title)
    );
    println!("{}", ranking_table(&sorted));

    ui::print_separator();
    println!(
        "{}\n",
        ui::style_text("State-wise Distribution", ui::StyleType::Title)
    );
    print!("{}", ui::render_bar_rows(&bar_rows(&sorted)));

    Ok(())
}

fn bar_rows(rows: &[StatePurchase]) -> Vec<(String, f64)> {
    rows.iter()
        .map(|row| (row.state.clone(), row.purchased_kg))
        .collect()
}

fn ranking_table(rows: &[StatePurchase]) -> comfy_table::Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("State"),
        ui::header_cell("Silver Purchased (kg)"),
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.state),
            ui::value_cell(ui::format_amount(row.purchased_kg)),
        ]);
    }
    table
}
