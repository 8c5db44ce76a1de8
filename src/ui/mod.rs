//! Terminal presentation of boards, status records and the matrix
//!
//! Every renderer returns a `String`; commands decide where it goes. Colour
//! follows `console`'s terminal detection, so piped output is plain text.

mod table;

use std::fmt::Write;

use console::Style;

pub use table::{Cell, TextTable};

use crate::domain::{BoardRecord, StatusCode, StatusTone};
use crate::filter::FilterOptions;
use crate::matrix::Matrix;
use crate::matrix::table::StatusRow;

/// Text shown in place of an empty cell
pub const EMPTY_CELL: &str = "-";

/// Badge style of a status
pub fn status_style(status: &StatusCode) -> Style {
    match status.tone() {
        StatusTone::Blue => Style::new().blue().bold(),
        StatusTone::Green => Style::new().green().bold(),
        StatusTone::Red => Style::new().red().bold(),
        StatusTone::Gray => Style::new().dim(),
    }
}

fn status_cell(status: Option<&StatusCode>) -> Cell {
    match status {
        Some(status) => Cell::styled(status.as_str(), status_style(status)),
        None => Cell::plain(EMPTY_CELL),
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    Cell::plain(value.unwrap_or(EMPTY_CELL))
}

/// Board list, one block per board
pub fn render_boards(boards: &[BoardRecord]) -> String {
    if boards.is_empty() {
        return "No boards found.\n".to_string();
    }

    let label = Style::new().bold();
    let mut out = String::new();
    let _ = writeln!(out, "Boards ({}):", boards.len());
    for board in boards {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", Style::new().bold().yellow().apply_to(&board.product));
        let _ = writeln!(out, "    {} {}", label.apply_to("CPU:"), board.cpu);
        let _ = writeln!(out, "    {} {}", label.apply_to("CPU core:"), board.cpu_core);
        let _ = writeln!(
            out,
            "    {} {}",
            label.apply_to("Directory:"),
            Style::new().dim().apply_to(&board.dir)
        );
    }
    out
}

/// Flat status table
pub fn render_status_table(rows: &[StatusRow]) -> String {
    if rows.is_empty() {
        return "No matching data found.\n".to_string();
    }

    let mut table = TextTable::new(["Board", "System", "Version", "Variant", "Status", "Last Update"]);
    for row in rows {
        let record = &row.record;
        table.push_row(vec![
            Cell::plain(&row.product),
            Cell::plain(&record.system_dir),
            optional_cell(record.system_version.as_deref()),
            optional_cell(record.system_variant.as_deref()),
            status_cell(Some(&record.status)),
            optional_cell(record.last_update.as_deref()),
        ]);
    }
    table.render()
}

/// Board × system grid
pub fn render_matrix(matrix: &Matrix) -> String {
    if matrix.rows.is_empty() {
        return "No matching data found.\n".to_string();
    }

    let headers = std::iter::once("Board".to_string()).chain(matrix.columns.iter().cloned());
    let mut table = TextTable::new(headers);
    for (row, board) in matrix.rows.iter().enumerate() {
        let mut cells = vec![Cell::plain(&board.product)];
        cells.extend((0..matrix.columns.len()).map(|col| status_cell(matrix.cell(row, col))));
        table.push_row(cells);
    }
    table.render()
}

/// Values each filter accepts
pub fn render_options(options: &FilterOptions) -> String {
    let heading = Style::new().bold();
    let mut out = String::new();

    let _ = writeln!(out, "{}", heading.apply_to("Boards:"));
    for option in &options.boards {
        let _ = writeln!(
            out,
            "  {}  {}",
            Style::new().cyan().apply_to(&option.value),
            Style::new().dim().apply_to(&option.label)
        );
    }

    let _ = writeln!(out, "{}", heading.apply_to("Systems:"));
    for option in &options.systems {
        let _ = writeln!(out, "  {}", Style::new().cyan().apply_to(&option.value));
    }

    let _ = writeln!(out, "{}", heading.apply_to("Statuses:"));
    for option in &options.statuses {
        let status = StatusCode::parse(Some(&option.value));
        let _ = writeln!(out, "  {}", status_style(&status).apply_to(&option.value));
    }
    out
}
