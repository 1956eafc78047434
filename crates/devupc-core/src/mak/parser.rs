//! Logical line classification

/// One recognized line of a makefile fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MakItem {
    /// `NAME = value` variable assignment
    Assign { name: String, value: String },
    /// `include <path>` directive referencing another fragment
    Include { path: String },
}

/// Classify one logical line.
///
/// Comments, blank lines, and lines matching no recognized syntax yield
/// `None` and are skipped by the caller.
pub fn classify(line: &str) -> Option<MakItem> {
    if line.starts_with('#') {
        tracing::debug!(line, "skipping comment");
        return None;
    }

    // `include <path>` with the token whitespace-separated; longer
    // identifiers such as `includedir` fall through to the assignment
    // case below.
    if let Some(rest) = line.strip_prefix("include") {
        if rest.starts_with(char::is_whitespace) {
            let path: String = rest.chars().filter(|c| !c.is_whitespace()).collect();
            if path.is_empty() {
                return None;
            }
            return Some(MakItem::Include { path });
        }
    }

    let eq = line.find('=')?;

    // The generator pads the `=` with spaces; the character before it is
    // dropped along with every other whitespace character in the name.
    let mut name_chars = line[..eq].chars();
    name_chars.next_back();
    let name: String = name_chars
        .as_str()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if name.is_empty() {
        return None;
    }

    let value = line[eq + 1..].trim_start().to_string();
    Some(MakItem::Assign { name, value })
}
