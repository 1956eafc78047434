//! Predefined configure invocations for known systems

/// A predefined configure invocation for a known system, pairing the
/// configure entry point (with any compiler overrides) with the platform's
/// default GASNet conduit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub configure: &'static str,
    pub conduit: &'static str,
}

/// Known-system table. The conduit is only a default; `--conduit`
/// overrides it.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "crayxe",
        configure: "cross-configure-crayxe-linux",
        conduit: "gemini",
    },
    Preset {
        name: "crayxc",
        configure: "configure CC=cc CXX=CC",
        conduit: "aries",
    },
    Preset {
        name: "macmpi",
        configure: "configure CC=clang CXX=mpicxx",
        conduit: "mpi",
    },
    Preset {
        name: "mac",
        configure: "configure CC=clang CXX=clang++",
        conduit: "smp",
    },
    Preset {
        name: "linuxmpi",
        configure: "configure CXX=mpicxx",
        conduit: "mpi",
    },
    Preset {
        name: "linux",
        configure: "configure",
        conduit: "smp",
    },
];

/// Look up a preset by name.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// All known preset names, for error messages.
pub fn known_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}
