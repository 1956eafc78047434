//! devupc CLI - UPC++ installation and environment management tool

use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use devupc::commands;

/// devupc - UPC++ installation and environment management tool
#[derive(Debug, Parser)]
#[command(name = "devupc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check out, bootstrap, configure, build, and install UPC++
    Install(commands::install::InstallArgs),

    /// Environment variable management
    Env {
        #[command(subcommand)]
        command: commands::env::EnvCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so that generated shell
    // output on stdout stays cleanly eval-able.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Install(args) => commands::install::run(args),
        Commands::Env { command } => commands::env::run(command),
    }
}
