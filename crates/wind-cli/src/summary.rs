use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wind_cli::check::{DesignBasis, PostcodeCheck};
use wind_cli::report::render_report;
use wind_model::{format_altitude, format_postcode, format_pressure, format_wind_speed};

pub fn print_checks(checks: &[PostcodeCheck], basis: Option<&DesignBasis>) {
    println!("{}", render_report(checks, basis));
    if checks.len() < 2 {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Postcode"),
        header_cell("Altitude"),
        header_cell("Wind"),
        header_cell("Pressure"),
        header_cell("Source"),
        header_cell("Design wind"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for check in checks {
        table.add_row(summary_row(check));
    }
    println!();
    println!("{table}");
}

fn summary_row(check: &PostcodeCheck) -> Vec<Cell> {
    if check.is_invalid() {
        return vec![
            Cell::new(&check.input).fg(Color::Red),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new("invalid").fg(Color::Red),
            dim_cell("-"),
        ];
    }
    let altitude = format_altitude(check.site.altitude).map_or_else(|| dim_cell("n/a"), Cell::new);
    let (speed, pressure, source) = match &check.site.wind {
        Some(wind) => (
            Cell::new(format_wind_speed(wind.speed_ms)),
            Cell::new(format_pressure(wind.pressure_kpa)),
            source_cell(wind.is_dataset()),
        ),
        None => (dim_cell("-"), dim_cell("-"), dim_cell("-")),
    };
    let design = check.design.as_ref().map_or_else(
        || dim_cell("-"),
        |design| Cell::new(format_wind_speed(design.speed_ms)).add_attribute(Attribute::Bold),
    );
    vec![
        Cell::new(format_postcode(&check.input)),
        altitude,
        speed,
        pressure,
        source,
        design,
    ]
}

fn source_cell(is_dataset: bool) -> Cell {
    if is_dataset {
        Cell::new("dataset").fg(Color::Green)
    } else {
        Cell::new("fallback").fg(Color::Yellow)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
