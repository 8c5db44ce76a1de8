//! Flat status table: one row per status record.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use super::{SortState, locale_compare};
use crate::domain::{BoardRecord, SystemRecord};
use crate::filter::StatusFilter;

/// Sortable columns of the status table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    Board,
    System,
    Version,
    Variant,
    Status,
    LastUpdate,
}

impl TableColumn {
    pub const ALL: [TableColumn; 6] = [
        TableColumn::Board,
        TableColumn::System,
        TableColumn::Version,
        TableColumn::Variant,
        TableColumn::Status,
        TableColumn::LastUpdate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TableColumn::Board => "board",
            TableColumn::System => "system",
            TableColumn::Version => "version",
            TableColumn::Variant => "variant",
            TableColumn::Status => "status",
            TableColumn::LastUpdate => "last-update",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.name().eq_ignore_ascii_case(name))
    }

    /// Comma-separated list of column names for help text
    pub fn names() -> String {
        Self::ALL.map(TableColumn::name).join(", ")
    }

    /// Sort text of a record in this column. Missing values are empty.
    fn text(self, record: &SystemRecord) -> &str {
        match self {
            TableColumn::Board => &record.board_dir,
            TableColumn::System => &record.system_dir,
            TableColumn::Version => record.system_version.as_deref().unwrap_or(""),
            TableColumn::Variant => record.system_variant.as_deref().unwrap_or(""),
            TableColumn::Status => record.status.as_str(),
            TableColumn::LastUpdate => record.last_update.as_deref().unwrap_or(""),
        }
    }
}

/// A status record with the product name of its board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRow {
    /// Product of the referenced board, or the board directory when the
    /// board is not loaded
    pub product: String,
    #[serde(flatten)]
    pub record: SystemRecord,
}

/// Filter and sort status records into table rows.
///
/// Rows keep record order unless `sort` has keys.
pub fn status_table(
    boards: &[BoardRecord],
    systems: &[SystemRecord],
    filter: &StatusFilter,
    sort: &SortState<TableColumn>,
) -> Vec<StatusRow> {
    let products: HashMap<&str, &str> = boards
        .iter()
        .map(|board| (board.dir.as_str(), board.product.as_str()))
        .collect();

    let mut rows: Vec<StatusRow> = systems
        .iter()
        .filter(|record| filter.matches(record))
        .map(|record| StatusRow {
            product: products
                .get(record.board_dir.as_str())
                .map_or_else(|| record.board_dir.clone(), |p| (*p).to_string()),
            record: record.clone(),
        })
        .collect();

    if !sort.is_empty() {
        rows.sort_by(|a, b| sort.compare(a, b, compare_rows));
    }
    rows
}

fn compare_rows(column: &TableColumn, a: &StatusRow, b: &StatusRow) -> Ordering {
    locale_compare(column.text(&a.record), column.text(&b.record))
}
