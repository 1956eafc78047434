//! Environment command implementation

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Subcommand};
use devupc_core::mak::{MakFragment, ShellDialect};
use miette::{IntoDiagnostic, Result};

/// Environment subcommands
#[derive(Debug, Subcommand)]
pub enum EnvCommand {
    /// Output shell declarations for the variables in a makefile fragment
    Shell(ShellArgs),
}

/// Arguments for the shell subcommand
#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Makefile fragment to read (conventionally <prefix>/include/upcxx.mak)
    #[arg(short, long)]
    pub mak: Utf8PathBuf,

    /// Shell dialect (posix, sh, bash, zsh, dash, csh, tcsh)
    #[arg(long, default_value = "posix")]
    pub shell: String,

    /// Installation prefix whose bin directory goes on the search path
    #[arg(long)]
    pub prefix: Option<Utf8PathBuf>,
}

/// Run the env command
pub fn run(command: EnvCommand) -> Result<()> {
    match command {
        EnvCommand::Shell(args) => shell_command(args),
    }
}

/// Translate the fragment and print the environment script
fn shell_command(args: ShellArgs) -> Result<()> {
    let dialect: ShellDialect = args.shell.parse().into_diagnostic()?;

    let prefix = args
        .prefix
        .clone()
        .unwrap_or_else(|| default_prefix(&args.mak));

    let fragment = MakFragment::walk(&args.mak).into_diagnostic()?;
    println!("{}", fragment.render(dialect, &prefix));

    Ok(())
}

/// The fragment conventionally lives at `<prefix>/include/upcxx.mak`, so
/// the default prefix is two directories up from it.
fn default_prefix(mak: &Utf8Path) -> Utf8PathBuf {
    mak.parent()
        .and_then(|p| p.parent())
        .unwrap_or(Utf8Path::new("."))
        .to_path_buf()
}
