//! Value rewriting for shell embedding

/// The one variable whose optimization flags must not leak into the
/// generated environment: consumers splice these flags into their own
/// compile lines, and a baked-in `-O<n>` would override their choice.
const OPT_STRIP_VAR: &str = "UPCXX_CXXFLAGS";

/// Rewrite a raw assignment value so it can sit inside a double-quoted
/// shell string literal.
///
/// Make-style `$(X)` references become `${X}`, double quotes are escaped,
/// whitespace runs collapse to a single space, and `UPCXX_CXXFLAGS` loses
/// any `-O<digit>` token. Total over any input; applying it twice yields
/// the identical value.
pub fn sanitize_value(name: &str, raw: &str) -> String {
    let braced: String = raw
        .chars()
        .map(|c| match c {
            '(' => '{',
            ')' => '}',
            _ => c,
        })
        .collect();
    let collapsed = collapse_whitespace(&escape_quotes(&braced));
    if name == OPT_STRIP_VAR {
        strip_opt_flags(&collapsed)
    } else {
        collapsed
    }
}

/// Escape double quotes that are not already escaped.
fn escape_quotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;
    for c in s.chars() {
        if c == '"' && !escaped {
            out.push('\\');
        }
        out.push(c);
        escaped = c == '\\' && !escaped;
    }
    out
}

/// Collapse every run of whitespace to a single space.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_ws = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(c);
            in_ws = false;
        }
    }
    out
}

/// Remove `-O<digit>` tokens from an already-collapsed value.
fn strip_opt_flags(s: &str) -> String {
    s.split(' ')
        .filter(|token| !is_opt_flag(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_opt_flag(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 3 && bytes[0] == b'-' && bytes[1] == b'O' && bytes[2].is_ascii_digit()
}
