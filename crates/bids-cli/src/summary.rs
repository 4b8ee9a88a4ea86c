use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use bids_inventory::InventoryReport;
use bids_model::InventorySummary;

use crate::cli::SummaryFormatArg;

#[derive(Serialize)]
struct JsonSummary<'a> {
    output_path: String,
    row_count: usize,
    missing_cells: usize,
    summary: &'a InventorySummary,
}

pub fn print_summary(report: &InventoryReport, format: SummaryFormatArg) -> serde_json::Result<()> {
    match format {
        SummaryFormatArg::None => {}
        SummaryFormatArg::Json => println!("{}", render_json(report)?),
        SummaryFormatArg::Table => print_tables(report),
    }
    Ok(())
}

pub fn render_json(report: &InventoryReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonSummary {
        output_path: report.output_path.display().to_string(),
        row_count: report.row_count(),
        missing_cells: report.summary.missing_cells(),
        summary: &report.summary,
    })
}

fn print_tables(report: &InventoryReport) {
    let summary = &report.summary;
    println!("Output: {}", report.output_path.display());
    println!("Subjects: {}", report.subjects().len());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Datatype"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &summary.by_datatype {
        table.add_row(vec![
            Cell::new(entry.datatype).fg(Color::Blue),
            Cell::new(entry.rows),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(summary.total_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if summary.subjects.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Subject"),
        header_cell("Present"),
        header_cell("Missing"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for coverage in &summary.subjects {
        table.add_row(vec![
            Cell::new(&coverage.subject).add_attribute(Attribute::Bold),
            count_cell(coverage.present, Color::Green),
            count_cell(coverage.missing, Color::Red),
        ]);
    }
    println!();
    println!("Coverage:");
    println!("{table}");
}

pub fn print_subjects(subjects: &[String]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Subject")]);
    apply_list_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, subject) in subjects.iter().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(subject)]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_list_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
