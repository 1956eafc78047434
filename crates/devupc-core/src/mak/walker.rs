//! Fragment walking and declaration collection

use std::fs::File;
use std::io::{BufRead, BufReader};

use camino::{Utf8Path, Utf8PathBuf};

use crate::{Error, Result};

use super::lines::Reassembler;
use super::parser::{classify, MakItem};
use super::sanitize::sanitize_value;
use super::shell::{render, ShellDialect};

/// One extracted name/value pair destined for emission as an environment
/// variable. The value is already sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

/// Declarations collected from a fragment and everything it includes, in
/// file-encounter order with included files interleaved at their
/// `include` point.
#[derive(Debug, Clone)]
pub struct MakFragment {
    /// Path to the top-level fragment
    pub path: Utf8PathBuf,
    /// Sanitized declarations in emission order
    pub declarations: Vec<Declaration>,
}

impl MakFragment {
    /// Walk a fragment from disk, recursing into `include`d files.
    pub fn walk(path: &Utf8Path) -> Result<Self> {
        let mut declarations = Vec::new();
        walk_into(path, &mut declarations)?;
        Ok(MakFragment {
            path: path.to_path_buf(),
            declarations,
        })
    }

    /// Render the environment script for the collected declarations.
    pub fn render(&self, dialect: ShellDialect, prefix: &Utf8Path) -> String {
        render(dialect, &self.declarations, prefix)
    }
}

/// Process one file through reassembly and classification, appending its
/// declarations to `out`. Include paths resolve against the including
/// file's directory; an unopenable file is fatal.
fn walk_into(path: &Utf8Path, out: &mut Vec<Declaration>) -> Result<()> {
    let file = File::open(path).map_err(|e| {
        Error::mak(
            format!("Failed to open makefile fragment: {}", path),
            e.to_string(),
        )
    })?;

    let base = path.parent().unwrap_or(Utf8Path::new("."));
    let mut reassembler = Reassembler::new();

    for line in BufReader::new(file).lines() {
        let line = line?;
        if let Some(logical) = reassembler.push(&line) {
            handle_line(&logical, base, out)?;
        }
    }
    if let Some(logical) = reassembler.finish() {
        handle_line(&logical, base, out)?;
    }

    Ok(())
}

fn handle_line(logical: &str, base: &Utf8Path, out: &mut Vec<Declaration>) -> Result<()> {
    match classify(logical) {
        Some(MakItem::Assign { name, value }) => {
            let value = sanitize_value(&name, &value);
            out.push(Declaration { name, value });
        }
        Some(MakItem::Include { path }) => {
            let included = resolve_include(base, &path);
            tracing::debug!(fragment = %included, "walking included fragment");
            walk_into(&included, out)?;
        }
        None => {}
    }
    Ok(())
}

fn resolve_include(base: &Utf8Path, path: &str) -> Utf8PathBuf {
    let path = Utf8Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &std::path::Path, name: &str, content: &str) -> Utf8PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        Utf8PathBuf::from_path_buf(path).unwrap()
    }

    #[test]
    fn test_walk_collects_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let mak = write_file(
            dir.path(),
            "upcxx.mak",
            "# header\nUPCXX_CXX = g++\nUPCXX_LDLIBS = -lupcxx\n",
        );

        let fragment = MakFragment::walk(&mak).unwrap();
        assert_eq!(
            fragment.declarations,
            vec![
                Declaration {
                    name: "UPCXX_CXX".to_string(),
                    value: "g++".to_string()
                },
                Declaration {
                    name: "UPCXX_LDLIBS".to_string(),
                    value: "-lupcxx".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_include_interleaves_at_its_position() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "gasnet.mak", "GASNET_CC = cc\n");
        let mak = write_file(
            dir.path(),
            "upcxx.mak",
            "BEFORE = 1\ninclude gasnet.mak\nAFTER = 2\n",
        );

        let names: Vec<String> = MakFragment::walk(&mak)
            .unwrap()
            .declarations
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["BEFORE", "GASNET_CC", "AFTER"]);
    }

    #[test]
    fn test_include_resolves_against_including_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        write_file(dir.path(), "inner.mak", "INNER = yes\n");
        // Top-level fragment lives in sub/, includes ../inner.mak.
        let mak = write_file(
            &dir.path().join("sub"),
            "upcxx.mak",
            "include ../inner.mak\n",
        );

        let fragment = MakFragment::walk(&mak).unwrap();
        assert_eq!(fragment.declarations[0].name, "INNER");
    }

    #[test]
    fn test_continuation_matches_single_line_form() {
        let dir = tempfile::tempdir().unwrap();
        let split = write_file(
            dir.path(),
            "split.mak",
            "LIBS = -la \\\n       -lb\n",
        );
        let joined = write_file(dir.path(), "joined.mak", "LIBS = -la -lb\n");

        let split_decls = MakFragment::walk(&split).unwrap().declarations;
        let joined_decls = MakFragment::walk(&joined).unwrap().declarations;
        assert_eq!(split_decls, joined_decls);
    }

    #[test]
    fn test_values_are_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let mak = write_file(
            dir.path(),
            "upcxx.mak",
            "UPCXX_LDLIBS = $(GASNET_LIBS)   -lupcxx\n",
        );

        let fragment = MakFragment::walk(&mak).unwrap();
        assert_eq!(fragment.declarations[0].value, "${GASNET_LIBS} -lupcxx");
    }

    #[test]
    fn test_missing_top_level_fails() {
        let err = MakFragment::walk(Utf8Path::new("/nonexistent/upcxx.mak")).unwrap_err();
        assert!(matches!(err, Error::Mak { .. }));
    }

    #[test]
    fn test_missing_include_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mak = write_file(dir.path(), "upcxx.mak", "include missing.mak\n");

        let err = MakFragment::walk(&mak).unwrap_err();
        assert!(matches!(err, Error::Mak { .. }));
    }
}
