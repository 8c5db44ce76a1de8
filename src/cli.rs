//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Verforte - RISC-V support matrix explorer
///
/// Reads a support matrix repository and reports which systems run on which boards.
#[derive(Parser, Debug)]
#[command(
    name = "verforte",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Explore a RISC-V board and operating system support matrix",
    long_about = "Verforte reads a support matrix repository laid out as \
                  <board>/README.md and <board>/<system>/<file>.md documents, \
                  and presents boards, status records and the board × system matrix.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  verforte boards\n    \
                  verforte systems --board vf2\n    \
                  verforte matrix --status good\n    \
                  verforte matrix --root ./support-matrix --json"
)]
pub struct Cli {
    /// Support matrix root directory
    #[arg(long, short = 'r', global = true, env = "VERFORTE_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file
    #[arg(long, short = 'c', global = true, env = "VERFORTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List boards
    Boards(BoardsArgs),

    /// List status records
    Systems(SystemsArgs),

    /// Show the board × system matrix
    Matrix(MatrixArgs),

    /// Show the values each filter accepts
    Options(OptionsArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Filters shared by the record commands
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Only records of this board directory
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Only records of this system id
    #[arg(long, short = 's')]
    pub system: Option<String>,

    /// Only records with this status (case-insensitive)
    #[arg(long)]
    pub status: Option<String>,
}

/// Arguments for the boards command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all boards:\n    verforte boards\n\n\
                  Search by product or CPU:\n    verforte boards --search jh7110\n\n\
                  Print JSON:\n    verforte boards --json")]
pub struct BoardsArgs {
    /// Case-insensitive search over product, CPU and CPU core
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the systems command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List every status record:\n    verforte systems\n\n\
                  Records of one board:\n    verforte systems --board vf2\n\n\
                  Sort by last update, newest first:\n    verforte systems --sort last-update --desc")]
pub struct SystemsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Sort column (board, system, version, variant, status, last-update)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the matrix command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show boards with at least one status:\n    verforte matrix\n\n\
                  Include boards without any status:\n    verforte matrix --all\n\n\
                  Sort by one system column:\n    verforte matrix --sort Debian --desc")]
pub struct MatrixArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Case-insensitive board search over product, CPU and CPU core
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Keep boards that have no status in any shown column
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Sort column: `product` or a system id
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the options command
#[derive(Parser, Debug)]
pub struct OptionsArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    verforte completions --shell bash > ~/.bash_completion.d/verforte\n\n\
                  Generate zsh completions:\n    verforte completions --shell zsh > ~/.zfunc/_verforte\n\n\
                  Generate fish completions:\n    verforte completions --shell fish > ~/.config/fish/completions/verforte.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
