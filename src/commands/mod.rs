//! Command implementations for Verforte CLI

pub mod boards;
pub mod completions;
pub mod context;
pub mod matrix;
pub mod options;
pub mod systems;
pub mod version;

use serde::Serialize;

use crate::cli::FilterArgs;
use crate::error::Result;
use crate::filter::StatusFilter;

/// Pretty JSON with a trailing newline
fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

impl From<&FilterArgs> for StatusFilter {
    fn from(args: &FilterArgs) -> Self {
        StatusFilter {
            board: args.board.clone(),
            system: args.system.clone(),
            status: args.status.clone(),
        }
    }
}
