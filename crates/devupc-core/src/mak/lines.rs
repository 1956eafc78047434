//! Logical line reassembly

/// Joins physical lines continued with a backslash into one logical line.
///
/// A backslash anywhere in the physical line marks a continuation, not
/// only a trailing one; the generated fragments have always been read
/// with this lenient test and it is kept as-is. The marker and any
/// trailing backslash/CR/LF characters are stripped before accumulating.
#[derive(Debug, Default)]
pub struct Reassembler {
    pending: String,
}

impl Reassembler {
    /// Create an empty reassembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one physical line, returning the completed logical line if the
    /// line did not continue.
    pub fn push(&mut self, line: &str) -> Option<String> {
        if line.contains('\\') {
            self.pending
                .push_str(line.trim_end_matches(['\\', '\n', '\r']));
            None
        } else {
            self.pending.push_str(line);
            Some(std::mem::take(&mut self.pending))
        }
    }

    /// Flush a partial accumulation left by a continuation on the final
    /// line of a file. Not an error; the partial line is forwarded as-is.
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending))
        }
    }
}
