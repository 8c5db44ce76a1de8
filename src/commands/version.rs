//! Version command implementation

use crate::config::MatrixConfig;
use crate::error::Result;

/// Print the version, build profile and the built-in matrix layout.
pub fn run() -> Result<()> {
    print!("{}", render(&MatrixConfig::default()));
    Ok(())
}

fn render(defaults: &MatrixConfig) -> String {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    format!(
        "verforte {version}\n\n\
         Build info:\n  \
         Minimum Rust version: {msrv}\n  \
         Profile: {profile}\n\n\
         Default layout:\n  \
         Board document: <board>/{board}\n  \
         Status documents: <board>/<system>/<file>.{ext}\n  \
         Reserved directories: {reserved}\n",
        version = env!("CARGO_PKG_VERSION"),
        msrv = env!("CARGO_PKG_RUST_VERSION"),
        board = defaults.board_document,
        ext = defaults.extension(),
        reserved = defaults.reserved_dirs.join(", "),
    )
}
