//! Comment line stripping.

use regex::bytes::Regex;

use crate::error::FilterError;

/// A line is a comment when its first non-blank byte is `#`.
/// Blank here is ASCII space, tab, form feed, CR or LF.
const COMMENT_PATTERN: &str = r"^[\t\n\x0C\r ]*#";

/// Strip comment lines from raw config bytes.
///
/// Carriage returns are removed first, so CRLF files behave like LF files.
/// Non-comment lines (blank ones included) are kept in order and rejoined
/// with `\n`.
///
/// # Errors
///
/// Returns [`FilterError`] if the comment pattern cannot be compiled.
pub fn trim_comments(data: &[u8]) -> Result<Vec<u8>, FilterError> {
    let pattern = Regex::new(COMMENT_PATTERN)?;

    let data: Vec<u8> = data.iter().copied().filter(|&b| b != b'\r').collect();

    let kept: Vec<&[u8]> = data
        .split(|&b| b == b'\n')
        .filter(|line| !pattern.is_match(line))
        .collect();

    Ok(kept.join(&b'\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trim(input: &str) -> String {
        String::from_utf8(trim_comments(input.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn test_removes_comment_lines() {
        assert_eq!(trim("# comment\n{}\n"), "{}\n");
        assert_eq!(trim("#no leading space\n   # indented\n\t#tab\n{}"), "{}");
    }

    #[test]
    fn test_hash_inside_line_is_kept() {
        assert_eq!(trim("a#b\n"), "a#b\n");
        assert_eq!(trim(r#"{"password": "p#ss"}"#), r#"{"password": "p#ss"}"#);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(trim("\n   \n{}\n\n"), "\n   \n{}\n\n");
    }

    #[test]
    fn test_only_comments_leaves_blank() {
        assert_eq!(trim("   # x=1\n\n"), "\n");
        assert_eq!(trim("# only"), "");
    }

    #[test]
    fn test_crlf_is_normalized() {
        assert_eq!(trim("# c\r\n{\r\n}\r\n"), "{\n}\n");
        // Lone CR is dropped rather than treated as a line break
        assert_eq!(trim("a\rb"), "ab");
    }

    #[test]
    fn test_idempotent() {
        let input = "# head\n{\n  # inner\n  \"method\": \"plain\" # tail\n}\n\n";
        let once = trim(input);
        assert_eq!(trim(&once), once);
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        let input = b"\xff\xfe\n# c\n\xc3";
        let out = trim_comments(input).unwrap();
        assert_eq!(out, b"\xff\xfe\n\xc3".to_vec());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(trim(""), "");
    }
}
