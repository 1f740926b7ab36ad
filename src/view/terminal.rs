use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::fmt::Write;

use crate::renderer::{DisplayModel, EstimateView};

/// Render the display model as terminal text
pub fn render_to_string(model: &DisplayModel) -> String {
    match model {
        DisplayModel::Error { message } => format!("{} {}\n", "Error:".red().bold(), message),
        DisplayModel::Estimate(view) => render_estimate(view),
    }
}

pub fn print(model: &DisplayModel) {
    print!("{}", render_to_string(model));
}

fn render_estimate(view: &EstimateView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "CSSD Requirements".green().bold());
    let summary = &view.summary;
    let _ = writeln!(out, "  {}: {}", "Bed Range".cyan(), summary.bed_range);
    let _ = writeln!(out, "  {}: {} sq ft", "CSSD Area".cyan(), summary.cssd_area);
    let _ = writeln!(out, "  {}: {}", "Autoclave".cyan(), summary.autoclave_model);
    let _ = writeln!(out, "  {}: {}", "Autoclave Qty".cyan(), summary.autoclave_quantity);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{} {}",
        "Equipment".bold(),
        format!("[{}]", view.item_count_label).dimmed()
    );
    let _ = writeln!(out, "{}", equipment_table(view));
    let _ = writeln!(out);

    let _ = writeln!(out, "  {}: {}", "Total Budget".cyan(), view.total_budget_display.bold());
    let _ = writeln!(out, "  {}: {}", "Official Budget".cyan(), view.official_budget_display);

    out
}

fn equipment_table(view: &EstimateView) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan),
        Cell::new("EQUIPMENT").fg(Color::Cyan),
        Cell::new("SPECIFICATION").fg(Color::Cyan),
        Cell::new("QTY").fg(Color::Cyan),
        Cell::new("UNIT PRICE").fg(Color::Cyan),
        Cell::new("TOTAL PRICE").fg(Color::Cyan),
    ]);

    if let Some(placeholder) = &view.placeholder {
        table.add_row(vec![
            Cell::new(""),
            Cell::new(placeholder),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
        ]);
        return table;
    }

    for row in &view.rows {
        let total = if row.calculated {
            Cell::new(&row.total_price).fg(Color::Yellow)
        } else {
            Cell::new(&row.total_price)
        };

        table.add_row(vec![
            Cell::new(row.index),
            Cell::new(&row.name),
            Cell::new(&row.specification),
            Cell::new(&row.quantity).set_alignment(CellAlignment::Center),
            Cell::new(&row.unit_price).set_alignment(CellAlignment::Right),
            total.set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
