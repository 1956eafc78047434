//! Install command implementation

use camino::Utf8PathBuf;
use clap::Args;
use devupc_core::install::{self, InstallOptions, Installer};
use miette::{IntoDiagnostic, Result};

/// Arguments for the install command
#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Git branch of UPC++ to check out
    #[arg(short, long, default_value = "develop")]
    pub branch: String,

    /// Installation path prefix (default: ./upcxx-install-<timestamp>)
    #[arg(short, long)]
    pub prefix: Option<Utf8PathBuf>,

    /// Directory for checking out and building (default: ./upcxx-build-<timestamp>)
    #[arg(long)]
    pub build_dir: Option<Utf8PathBuf>,

    /// Install the multidimensional arrays feature
    #[arg(long)]
    pub md_arrays: bool,

    /// Git branch of the arrays repository
    #[arg(long, default_value = "develop")]
    pub array_branch: String,

    /// GASNet installation path (default: discovered from upcc on PATH)
    #[arg(long)]
    pub gasnet: Option<Utf8PathBuf>,

    /// GASNet conduit name (default: the preset's conduit, then smp)
    #[arg(long)]
    pub conduit: Option<String>,

    /// GASNet thread mode (seq, par, parsync)
    #[arg(long, default_value = "seq")]
    pub thread_mode: String,

    /// Predefined configure options for a known system
    #[arg(long)]
    pub preset: Option<String>,

    /// Print the commands without executing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Run the install command
pub fn run(args: InstallArgs) -> Result<()> {
    let cwd = std::env::current_dir()
        .ok()
        .and_then(|p| Utf8PathBuf::try_from(p).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("."));
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();

    let prefix = args
        .prefix
        .unwrap_or_else(|| cwd.join(format!("upcxx-install-{}", timestamp)));
    let build_dir = args
        .build_dir
        .unwrap_or_else(|| cwd.join(format!("upcxx-build-{}", timestamp)));

    let (configure, preset_conduit) = match args.preset.as_deref() {
        Some(name) => {
            let preset = install::find_preset(name).ok_or_else(|| {
                miette::miette!(
                    "'{}' is not a valid preset (known presets: {})",
                    name,
                    install::known_preset_names().join(", ")
                )
            })?;
            (preset.configure.to_string(), Some(preset.conduit.to_string()))
        }
        None => ("configure".to_string(), None),
    };

    let conduit = args
        .conduit
        .or(preset_conduit)
        .unwrap_or_else(|| "smp".to_string());

    let gasnet_path = match args.gasnet {
        Some(path) => path,
        None => discover_gasnet().ok_or_else(|| {
            miette::miette!(
                "Cannot find Berkeley UPC (upcc) in the default path; pass --gasnet explicitly"
            )
        })?,
    };

    let options = InstallOptions {
        branch: args.branch,
        prefix,
        build_dir,
        md_arrays: args.md_arrays,
        array_branch: args.array_branch,
        gasnet_path,
        conduit,
        thread_mode: args.thread_mode,
        configure,
        dry_run: args.dry_run,
    };

    tracing::debug!(?options, "resolved install options");
    Installer::new(options).run().into_diagnostic()?;

    Ok(())
}

/// Locate GASNet from an existing Berkeley UPC installation: two
/// directories above the upcc binary, under opt/.
fn discover_gasnet() -> Option<Utf8PathBuf> {
    let output = std::process::Command::new("which")
        .arg("upcc")
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let upcc = String::from_utf8(output.stdout).ok()?;
    let upcc = Utf8PathBuf::from(upcc.trim());
    let root = upcc.parent()?.parent()?;
    Some(root.join("opt"))
}
