//! Options command implementation

use crate::cli::OptionsArgs;
use crate::commands::context::{GlobalOptions, MatrixContext};
use crate::error::Result;
use crate::filter::FilterOptions;
use crate::ui;

/// Run options command
pub async fn run(options: &GlobalOptions, args: OptionsArgs) -> Result<()> {
    let context = MatrixContext::open(options)?;
    let (boards, systems) = context.records().await;
    let filter_options = FilterOptions::collect(&boards, &systems);
    let out = if args.json {
        super::to_json(&filter_options)?
    } else {
        ui::render_options(&filter_options)
    };
    print!("{out}");
    Ok(())
}
