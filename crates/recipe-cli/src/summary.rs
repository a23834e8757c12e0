use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use recipe_cli::pipeline::RunResult;
use recipe_model::Allergen;

pub fn print_summary(result: &RunResult) {
    let stats = &result.stats;
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Records")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Written"), Cell::new(stats.records)]);
    table.add_row(vec![
        Cell::new("Without cooking time"),
        count_cell(stats.missing_cooking_time, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Missing calories or protein"),
        count_cell(stats.missing_required_nutrition, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("With allergens"),
        Cell::new(stats.with_allergens),
    ]);
    for allergen in Allergen::ALL {
        let count = stats.allergen_counts.get(&allergen).copied().unwrap_or(0);
        table.add_row(vec![Cell::new(format!("  {allergen}")), Cell::new(count)]);
    }
    let mean = stats
        .mean_cooking_time
        .map_or_else(|| "-".to_string(), |minutes| format!("{minutes:.1} min"));
    table.add_row(vec![
        Cell::new("Mean cooking time").add_attribute(Attribute::Bold),
        Cell::new(mean).add_attribute(Attribute::Bold),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
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
        Cell::new(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
