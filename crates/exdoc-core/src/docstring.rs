//! Docstring extraction and cleanup
//!
//! A script's docstring is the text between the first two `"""` markers.
//! Cleanup rewrites Markdown-style inline code (single backticks around an
//! identifier) into reStructuredText inline literals (double backticks).

use std::sync::OnceLock;

use regex::Regex;

use crate::error::DocstringError;

/// Marker that opens and closes a documentation block
pub const DOCSTRING_DELIMITER: &str = "\"\"\"";

/// Return the text strictly between the first and second `"""` markers.
///
/// The slice is returned verbatim, including leading and trailing newlines.
pub fn extract_docstring(script_text: &str) -> Result<&str, DocstringError> {
    let mut segments = script_text.split(DOCSTRING_DELIMITER);
    // The first segment is whatever precedes the opening marker
    segments.next();

    match (segments.next(), segments.next()) {
        (Some(docstring), Some(_)) => Ok(docstring),
        _ => Err(DocstringError::MissingDelimiter {
            found: script_text.matches(DOCSTRING_DELIMITER).count(),
        }),
    }
}

fn backquoted_identifier() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"`(?P<identifier>[A-Za-z_]+)`").expect("identifier pattern is a valid regex")
    })
}

/// Convert a raw docstring into reStructuredText.
///
/// Every `` `identifier` `` becomes ``` ``identifier`` ``` and trailing
/// whitespace is dropped. Not idempotent: a second pass doubles the
/// backticks again, so call it once per extracted docstring.
pub fn clean_docstring(docstring: &str) -> String {
    let cleaned = backquoted_identifier().replace_all(docstring, "``${identifier}``");
    cleaned.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_docstring_between_first_two_markers() {
        let script = "# header\n\"\"\" Say hello.\n\nMore detail.\n\"\"\"\nprint('hi')\n";
        assert_eq!(
            extract_docstring(script).unwrap(),
            " Say hello.\n\nMore detail.\n"
        );
    }

    #[test]
    fn test_extract_docstring_ignores_later_blocks() {
        let script = "\"\"\"first\"\"\"\ndef f():\n    \"\"\"second\"\"\"\n";
        assert_eq!(extract_docstring(script).unwrap(), "first");
    }

    #[test]
    fn test_extract_docstring_empty_block() {
        assert_eq!(extract_docstring("\"\"\"\"\"\"").unwrap(), "");
    }

    #[test]
    fn test_extract_docstring_missing_delimiters() {
        assert_eq!(
            extract_docstring("print('no docs')"),
            Err(DocstringError::MissingDelimiter { found: 0 })
        );
        assert_eq!(
            extract_docstring("\"\"\" unterminated"),
            Err(DocstringError::MissingDelimiter { found: 1 })
        );
    }

    #[test]
    fn test_clean_docstring_doubles_backticks() {
        let cleaned = clean_docstring("Uses `Atom` and `my_member` here.");
        assert_eq!(cleaned, "Uses ``Atom`` and ``my_member`` here.");
    }

    #[test]
    fn test_clean_docstring_leaves_non_identifiers() {
        // Digits, dots and spaces are outside the identifier class
        let text = "Call `f(x)` or `a.b` or `two words` or `x2`.";
        assert_eq!(clean_docstring(text), text);
    }

    #[test]
    fn test_clean_docstring_strips_trailing_whitespace_only() {
        assert_eq!(clean_docstring("\n  Body text.  \n\n"), "\n  Body text.");
    }

    #[test]
    fn test_clean_docstring_is_not_idempotent() {
        let once = clean_docstring("See `Foo`.");
        let twice = clean_docstring(&once);
        assert_eq!(once, "See ``Foo``.");
        assert_eq!(twice, "See ```Foo```.");
        assert_ne!(once, twice);
    }
}
