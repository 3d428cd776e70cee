//! Terminal rendering for CLI output.
//!
//! Tables arrive fully formatted as strings; `comfy-table` lays them out and
//! `console` styles the surrounding lines.

use clap::ValueEnum;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::Style;
use insightslib::analytics::{TrendDirection, TrendResult};
use insightslib::format::format_percentage;
use insightslib::{DataTable, TableRow};
use serde::Serialize;

/// Output format selected by `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Table,
    Json,
}

/// Pretty JSON with a trailing newline.
pub fn json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Body cell colored by its text.
fn value_cell(value: &str) -> Cell {
    let cell = Cell::new(value);
    match value {
        "active" => cell.fg(Color::Green),
        "paused" => cell.fg(Color::Yellow),
        "completed" => cell.fg(Color::Blue),
        "draft" => cell.fg(Color::DarkGrey),
        v if v.starts_with(TrendDirection::Up.arrow()) => cell.fg(Color::Green),
        v if v.starts_with(TrendDirection::Down.arrow()) => cell.fg(Color::Red),
        _ => cell,
    }
}

fn body_row(row: &TableRow) -> Vec<Cell> {
    std::iter::once(Cell::new(&row.label))
        .chain(row.values.iter().map(|v| value_cell(v)))
        .collect()
}

fn footer_row(row: &TableRow) -> Vec<Cell> {
    std::iter::once(&row.label)
        .chain(row.values.iter())
        .map(|v| Cell::new(v).add_attribute(Attribute::Bold))
        .collect()
}

fn layout(data: &DataTable) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(data.headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    if !console::colors_enabled() {
        table.force_no_tty();
    }
    for row in &data.rows {
        table.add_row(body_row(row));
    }
    if let Some(footer) = &data.footer {
        table.add_row(footer_row(footer));
    }
    // Label column stays left-aligned
    for index in 1..table.column_count() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Render a table with its optional title and summary line.
pub fn table(data: &DataTable) -> String {
    let mut out = String::new();
    if let Some(title) = &data.title {
        out.push_str(&format!("{}\n", Style::new().bold().apply_to(title)));
    }
    out.push_str(&layout(data).to_string());
    out.push('\n');
    if let Some(summary) = &data.summary {
        out.push_str(&format!("{}\n", Style::new().dim().apply_to(summary)));
    }
    out
}

/// One-line trend summary, e.g. `revenue ↑ 12.5% (30 points)`.
pub fn trend(field: &str, result: &TrendResult, points: usize) -> String {
    let style = match result.direction {
        TrendDirection::Up => Style::new().green(),
        TrendDirection::Down => Style::new().red(),
        TrendDirection::Stable => Style::new().dim(),
    };
    let change = format!(
        "{} {}",
        result.direction.arrow(),
        format_percentage(result.percentage, 1)
    );
    format!(
        "{} {} ({} {})\n",
        Style::new().bold().apply_to(field),
        style.apply_to(change),
        points,
        if points == 1 { "point" } else { "points" }
    )
}

/// Numbered color list.
pub fn palette(colors: &[String]) -> String {
    let width = colors.len().to_string().len();
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| format!("{:>width$}  {color}\n", i + 1))
        .collect()
}
