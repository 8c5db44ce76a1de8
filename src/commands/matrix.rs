//! Matrix command implementation

use crate::cli::MatrixArgs;
use crate::commands::context::{GlobalOptions, MatrixContext};
use crate::domain::{BoardRecord, SystemRecord};
use crate::error::{MatrixError, Result};
use crate::filter::{BoardSearch, StatusFilter};
use crate::matrix::{self, Direction, Matrix, MatrixQuery, SortState};
use crate::ui;

/// Run matrix command
pub async fn run(options: &GlobalOptions, args: MatrixArgs) -> Result<()> {
    let context = MatrixContext::open(options)?;
    let (boards, systems) = context.records().await;
    let matrix = build(&boards, &systems, &args)?;
    let out = if args.json {
        super::to_json(&matrix)?
    } else {
        ui::render_matrix(&matrix)
    };
    print!("{out}");
    Ok(())
}

/// Matrix view for the given arguments.
///
/// The sort column is resolved against the columns of the filtered view, so
/// a system hidden by the filters cannot be sorted on.
fn build(boards: &[BoardRecord], systems: &[SystemRecord], args: &MatrixArgs) -> Result<Matrix> {
    let query = MatrixQuery {
        filter: StatusFilter::from(&args.filter),
        search: BoardSearch::new(args.search.as_deref().unwrap_or_default()),
        include_empty: args.all,
        sort: SortState::default(),
    };
    let matrix = matrix::view(boards, systems, &query);

    let Some(name) = args.sort.as_deref() else {
        return Ok(matrix);
    };
    let column = matrix
        .sort_column(name)
        .ok_or_else(|| MatrixError::UnknownSortColumn {
            column: name.to_string(),
            valid: std::iter::once("product")
                .chain(matrix.columns.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(", "),
        })?;
    let direction = if args.desc {
        Direction::Descending
    } else {
        Direction::Ascending
    };
    Ok(matrix.sorted(&SortState::single(column, direction)))
}
