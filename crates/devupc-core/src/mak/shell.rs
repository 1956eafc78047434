//! Shell dialect selection and script rendering

use camino::Utf8Path;

use crate::{Error, Result};

use super::walker::Declaration;

/// Target shell family for script generation, fixed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellDialect {
    Posix,
    Cshell,
}

impl std::str::FromStr for ShellDialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "posix" | "sh" | "bash" | "zsh" | "dash" => Ok(ShellDialect::Posix),
            "csh" | "tcsh" => Ok(ShellDialect::Cshell),
            _ => Err(Error::config(
                format!("Unknown shell dialect: {}", s),
                "Supported dialects: posix (sh, bash, zsh, dash) and csh (tcsh)",
            )),
        }
    }
}

/// Per-dialect output templates consumed by the renderer.
struct DialectSpec {
    /// Leading token on every declaration line
    set_prefix: &'static str,
    /// Whether the zero-initializer preamble is emitted
    zero_init_preamble: bool,
}

const POSIX_SPEC: DialectSpec = DialectSpec {
    set_prefix: "",
    zero_init_preamble: false,
};

const CSHELL_SPEC: DialectSpec = DialectSpec {
    set_prefix: "set ",
    zero_init_preamble: true,
};

impl ShellDialect {
    fn spec(self) -> &'static DialectSpec {
        match self {
            ShellDialect::Posix => &POSIX_SPEC,
            ShellDialect::Cshell => &CSHELL_SPEC,
        }
    }
}

/// Build-flag variables a consumer script may reference. C-shell aborts on
/// any reference to an undefined variable, so each one gets an empty
/// initializer up front, including the per-thread-mode `_SEQ`/`_PAR`
/// variants the fragment may or may not define.
const KNOWN_FLAG_VARS: &[&str] = &[
    "GASNET_CC",
    "GASNET_CXX",
    "GASNET_LD",
    "GASNET_CPPFLAGS",
    "GASNET_CFLAGS",
    "GASNET_CXXFLAGS",
    "GASNET_LDFLAGS",
    "GASNET_LIBS",
    "UPCXX_CXX",
    "UPCXX_CPPFLAGS",
    "UPCXX_CXXFLAGS",
    "UPCXX_LDFLAGS",
    "UPCXX_LDLIBS",
];

const MODE_SUFFIXES: &[&str] = &["", "_SEQ", "_PAR"];

/// Aggregate variables promoted into the environment by the epilogue.
const EXPORTED_VARS: &[&str] = &["UPCXX_LDLIBS", "UPCXX_LDFLAGS", "UPCXX_CXXFLAGS"];

/// Render the full environment script for one dialect: the C-shell
/// preamble if required, one line per declaration in file order, and the
/// fixed epilogue putting `<prefix>/bin` on the search path.
pub fn render(dialect: ShellDialect, declarations: &[Declaration], prefix: &Utf8Path) -> String {
    let spec = dialect.spec();
    let mut out = Vec::new();

    if spec.zero_init_preamble {
        for name in KNOWN_FLAG_VARS {
            for suffix in MODE_SUFFIXES {
                out.push(format!("set {}{}= ", name, suffix));
            }
        }
    }

    for decl in declarations {
        out.push(format!(
            "{}{}=\"{}\"",
            spec.set_prefix, decl.name, decl.value
        ));
    }

    let bin_dir = prefix.join("bin");
    match dialect {
        ShellDialect::Posix => {
            for name in EXPORTED_VARS {
                out.push(format!("export {}", name));
            }
            out.push(format!("export PATH=\"$PATH:{}\"", bin_dir));
        }
        ShellDialect::Cshell => {
            for name in EXPORTED_VARS {
                out.push(format!("setenv {0} \"${0}\"", name));
            }
            out.push(format!("set path = ({} $path)", bin_dir));
        }
    }

    out.join("\n")
}
