//! Environment variable expansion.
//!
//! Replaces `$NAME` and `${NAME}` references with values from a lookup
//! function. Expansion is a plain text pass over the whole buffer and runs
//! before the payload is decoded, so a variable may supply a whole value
//! (`"upstream-port": ${PORT}`) or a fragment of a string.

/// Look a name up in the process environment.
///
/// Values that are not valid UTF-8 are converted lossily.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
}

/// Expand references using `lookup` to resolve names.
///
/// `None` from the lookup expands to the empty string. Malformed braces
/// (`${}` or an unclosed `${`) are dropped; a `$` that starts no reference
/// is kept as-is.
pub fn expand_with<F>(data: &[u8], lookup: F) -> Vec<u8>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = Vec::with_capacity(data.len());
    let mut start = 0;
    let mut i = 0;

    while i < data.len() {
        if data[i] == b'$' && i + 1 < data.len() {
            out.extend_from_slice(&data[start..i]);
            let (name, consumed) = shell_name(&data[i + 1..]);
            match name {
                Some(name) => {
                    if let Some(value) = lookup(&name) {
                        out.extend_from_slice(value.as_bytes());
                    }
                }
                // Not a reference, keep the dollar sign
                None if consumed == 0 => out.push(b'$'),
                // Bad syntax, swallow it
                None => {}
            }
            i += consumed + 1;
            start = i;
        } else {
            i += 1;
        }
    }

    out.extend_from_slice(&data[start..]);
    out
}

/// Parse the name following a `$`.
///
/// Returns the name (if any) and how many bytes after the `$` it used.
fn shell_name(s: &[u8]) -> (Option<String>, usize) {
    if s[0] == b'{' {
        if s.len() > 2 && is_special(s[1]) && s[2] == b'}' {
            return (Some(ascii(&s[1..2])), 3);
        }
        return match s.iter().skip(1).position(|&b| b == b'}') {
            // "${}"
            Some(0) => (None, 2),
            Some(end) => {
                let name = String::from_utf8_lossy(&s[1..=end]).into_owned();
                (Some(name), end + 2)
            }
            // Unclosed brace, eat the "{" only
            None => (None, 1),
        };
    }

    if is_special(s[0]) {
        return (Some(ascii(&s[..1])), 1);
    }

    let len = s.iter().take_while(|&&b| is_name_byte(b)).count();
    if len == 0 {
        (None, 0)
    } else {
        (Some(ascii(&s[..len])), len)
    }
}

fn ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn is_special(b: u8) -> bool {
    matches!(b, b'*' | b'#' | b'$' | b'@' | b'!' | b'?' | b'-' | b'0'..=b'9')
}

fn is_name_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}
