//! Boards command implementation

use crate::cli::BoardsArgs;
use crate::commands::context::{GlobalOptions, MatrixContext};
use crate::domain::BoardRecord;
use crate::error::Result;
use crate::filter::BoardSearch;
use crate::ui;

/// Run boards command
pub async fn run(options: &GlobalOptions, args: BoardsArgs) -> Result<()> {
    let context = MatrixContext::open(options)?;
    let boards = context.boards().await;
    print!("{}", render(&boards, &args)?);
    Ok(())
}

fn render(boards: &[BoardRecord], args: &BoardsArgs) -> Result<String> {
    let search = BoardSearch::new(args.search.as_deref().unwrap_or_default());
    let boards = search.apply(boards);
    if args.json {
        super::to_json(&boards)
    } else {
        Ok(ui::render_boards(&boards))
    }
}
