//! Systems command implementation
//!
//! Prints one row per status record, optionally filtered and sorted.

use crate::cli::SystemsArgs;
use crate::commands::context::{GlobalOptions, MatrixContext};
use crate::domain::{BoardRecord, SystemRecord};
use crate::error::{MatrixError, Result};
use crate::filter::StatusFilter;
use crate::matrix::table::{TableColumn, status_table};
use crate::matrix::{Direction, SortState};
use crate::ui;

/// Run systems command
pub async fn run(options: &GlobalOptions, args: SystemsArgs) -> Result<()> {
    let sort = sort_state(&args)?;
    let context = MatrixContext::open(options)?;
    let (boards, systems) = context.records().await;
    print!("{}", render(&boards, &systems, &args, &sort)?);
    Ok(())
}

fn sort_state(args: &SystemsArgs) -> Result<SortState<TableColumn>> {
    let Some(name) = args.sort.as_deref() else {
        return Ok(SortState::default());
    };
    let column = TableColumn::from_name(name).ok_or_else(|| MatrixError::UnknownSortColumn {
        column: name.to_string(),
        valid: TableColumn::names(),
    })?;
    let direction = if args.desc {
        Direction::Descending
    } else {
        Direction::Ascending
    };
    Ok(SortState::single(column, direction))
}

fn render(
    boards: &[BoardRecord],
    systems: &[SystemRecord],
    args: &SystemsArgs,
    sort: &SortState<TableColumn>,
) -> Result<String> {
    let rows = status_table(boards, systems, &StatusFilter::from(&args.filter), sort);
    if args.json {
        super::to_json(&rows)
    } else {
        Ok(ui::render_status_table(&rows))
    }
}
