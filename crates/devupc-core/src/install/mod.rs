//! UPC++ source checkout, bootstrap, configure, make, install
//!
//! This module provides the sequential install pipeline: git checkout of
//! the UPC++ repository (and optionally the multidimensional arrays
//! repository), `./Bootstrap.sh`, configure against a GASNet conduit
//! fragment, `make`, and `make install`.

mod presets;
mod runner;

pub use presets::{find as find_preset, known_names as known_preset_names, Preset, PRESETS};
pub use runner::run_logged;

use camino::{Utf8Path, Utf8PathBuf};
use tokio::process::Command;

use crate::{Error, Result};

/// Git repository for the UPC++ runtime.
pub const UPCXX_REPO: &str = "http://bitbucket.org/upcxx/upcxx";
/// Git repository for the multidimensional arrays feature.
pub const ARRAY_REPO: &str = "http://bitbucket.org/upcxx/upcxx-arrays";

/// Options for one install run.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Git branch of UPC++ to check out
    pub branch: String,
    /// Installation path prefix
    pub prefix: Utf8PathBuf,
    /// Scratch directory for checkout and build
    pub build_dir: Utf8PathBuf,
    /// Also check out and enable the multidimensional arrays feature
    pub md_arrays: bool,
    /// Git branch of the arrays repository
    pub array_branch: String,
    /// GASNet installation path
    pub gasnet_path: Utf8PathBuf,
    /// GASNet conduit name
    pub conduit: String,
    /// GASNet thread mode: seq, par, parsync
    pub thread_mode: String,
    /// configure entry point, including any compiler overrides
    pub configure: String,
    /// Print the commands without executing them
    pub dry_run: bool,
}

/// Sequential installer for the UPC++ source distribution.
pub struct Installer {
    options: InstallOptions,
}

impl Installer {
    /// Create an installer for the given options.
    pub fn new(options: InstallOptions) -> Self {
        Self { options }
    }

    /// Execute the full pipeline: checkout, bootstrap, configure, make,
    /// make install.
    pub fn run(&self) -> Result<()> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                Error::build(format!("Failed to create async runtime: {}", e), "")
            })?;

        rt.block_on(self.run_async())
    }

    async fn run_async(&self) -> Result<()> {
        let src_dir = self.options.build_dir.join("upcxx_src");
        let build_dir = self.options.build_dir.join("build");

        if !self.options.dry_run {
            std::fs::create_dir_all(&self.options.build_dir)?;
        }

        self.checkout(UPCXX_REPO, &self.options.branch, &src_dir)
            .await?;

        if self.options.md_arrays {
            let array_dir = src_dir.join("include").join("upcxx-arrays");
            self.checkout(ARRAY_REPO, &self.options.array_branch, &array_dir)
                .await?;
        }

        self.bootstrap(&src_dir).await?;
        self.configure(&src_dir, &build_dir).await?;
        self.make(&build_dir, None).await?;
        self.make(&build_dir, Some("install")).await?;

        tracing::info!("UPC++ installation completed at {}", self.options.prefix);
        Ok(())
    }

    async fn checkout(&self, repo: &str, branch: &str, dest: &Utf8Path) -> Result<()> {
        tracing::info!("Checking out {} (branch {})", repo, branch);
        let mut cmd = Command::new("git");
        cmd.args(["clone", "-b", branch, repo, dest.as_str()]);
        self.run_step(cmd, "git clone").await.map_err(|e| match e {
            Error::Build { message, help } => Error::Checkout { message, help },
            other => other,
        })
    }

    async fn bootstrap(&self, src_dir: &Utf8Path) -> Result<()> {
        tracing::info!("Bootstrapping in {}", src_dir);
        let mut cmd = Command::new("./Bootstrap.sh");
        cmd.current_dir(src_dir);
        self.run_step(cmd, "bootstrap").await
    }

    async fn configure(&self, src_dir: &Utf8Path, build_dir: &Utf8Path) -> Result<()> {
        let (program, args) = self.configure_command(src_dir);
        tracing::info!("Configuring in {}: {} {}", build_dir, program, args.join(" "));

        if !self.options.dry_run {
            std::fs::create_dir_all(build_dir)?;
        }

        let mut cmd = Command::new(program.as_str());
        cmd.args(&args).current_dir(build_dir);
        self.run_step(cmd, "configure").await
    }

    async fn make(&self, build_dir: &Utf8Path, target: Option<&str>) -> Result<()> {
        let step = match target {
            Some(t) => format!("make {}", t),
            None => "make".to_string(),
        };
        tracing::info!("Running {} in {}", step, build_dir);

        let mut cmd = Command::new("make");
        if let Some(t) = target {
            cmd.arg(t);
        }
        cmd.current_dir(build_dir);
        self.run_step(cmd, &step).await
    }

    async fn run_step(&self, mut cmd: Command, step: &str) -> Result<()> {
        if self.options.dry_run {
            let std_cmd = cmd.as_std();
            let mut line = std_cmd.get_program().to_string_lossy().into_owned();
            for arg in std_cmd.get_args() {
                line.push(' ');
                line.push_str(&arg.to_string_lossy());
            }
            println!("would run: {}", line);
            return Ok(());
        }
        runner::run_logged(&mut cmd, step).await
    }

    /// Assemble the configure program and argument list. The configure
    /// entry point may carry compiler overrides (`configure CC=cc CXX=CC`)
    /// which become leading arguments.
    fn configure_command(&self, src_dir: &Utf8Path) -> (Utf8PathBuf, Vec<String>) {
        let mut words = self.options.configure.split_whitespace();
        let script = words.next().unwrap_or("configure");
        let program = src_dir.join(script);

        let mut args: Vec<String> = words.map(|w| w.to_string()).collect();
        args.push(format!("--with-gasnet={}", self.gasnet_fragment()));
        args.push(format!("--prefix={}", self.options.prefix));
        args.push("--enable-short-names".to_string());
        if self.options.md_arrays {
            args.push("--enable-md-array".to_string());
        }

        (program, args)
    }

    /// Path of the GASNet fragment selecting conduit and thread mode:
    /// `<gasnet>/include/<conduit>-conduit/<conduit>-<mode>.mak`.
    fn gasnet_fragment(&self) -> Utf8PathBuf {
        self.options
            .gasnet_path
            .join("include")
            .join(format!("{}-conduit", self.options.conduit))
            .join(format!(
                "{}-{}.mak",
                self.options.conduit, self.options.thread_mode
            ))
    }
}
