use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fp1_cli::types::{ProfileSummary, RunResult};

pub fn print_summary(result: &RunResult) {
    println!("Settings: {}", result.settings_path.display());
    println!("Catalog: {}", result.catalog_path.display());
    println!("Device: {}", result.device_tag);
    if result.dry_run {
        println!("Output: {} (dry run, nothing written)", result.output_dir.display());
    } else {
        println!("Output: {}", result.output_dir.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Label"),
        header_cell("Film Simulation"),
        header_cell("Grain Size"),
        header_cell("Chrome Blue"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    for (index, profile) in result.profiles.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&profile.label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&profile.film_simulation),
            optional_cell(&profile.grain_effect_size),
            optional_cell(&profile.color_chrome_blue),
            file_cell(profile),
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} profiles", result.profiles.len())).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        overwritten_cell(result.overwritten),
    ]);
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_cell(profile: &ProfileSummary) -> Cell {
    let name = profile
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| profile.path.display().to_string());
    Cell::new(name)
}

fn overwritten_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(format!("{count} overwritten"))
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn optional_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
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
