//! Verforte command line entry point

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use verforte::cli::{Cli, Commands};
use verforte::commands;
use verforte::commands::context::GlobalOptions;

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = GlobalOptions {
        root: cli.root,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Boards(args) => commands::boards::run(&options, args).await,
        Commands::Systems(args) => commands::systems::run(&options, args).await,
        Commands::Matrix(args) => commands::matrix::run(&options, args).await,
        Commands::Options(args) => commands::options::run(&options, args).await,
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
