//! Name and path derivation for scripts and their pages

use std::path::{Path, PathBuf};

/// Script name: the file name truncated at its first `.`.
///
/// `my.example.py` yields `my`, not `my.example`.
pub fn script_name(script_path: &Path) -> String {
    let file_name = script_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    file_name.split('.').next().unwrap_or_default().to_string()
}

/// Page title: underscores become spaces, then title case is applied.
pub fn script_title(script_name: &str) -> String {
    title_case(&script_name.replace('_', " "))
}

/// Title case in the usual scripting-language sense: a cased character
/// is uppercased when it follows an uncased one and lowercased otherwise.
pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && previous_cased {
            output.extend(c.to_lowercase());
        } else if cased {
            output.extend(c.to_uppercase());
        } else {
            output.push(c);
        }
        previous_cased = cased;
    }

    output
}

/// Path of the script starting at the first occurrence of `anchor`, with
/// backslashes normalized to forward slashes.
///
/// The search runs over the whole absolute path, so a parent directory
/// that merely contains the anchor text wins. Without any occurrence the
/// whole normalized path is returned.
pub fn relative_script_path(script_path: &Path, anchor: &str) -> String {
    let full = script_path.to_string_lossy().into_owned();
    let start = full.find(anchor).unwrap_or(0);
    full[start..].replace('\\', "/")
}

/// Output file name: `<prefix><script_name>.<extension>`.
pub fn output_file_name(prefix: &str, script_name: &str, extension: &str) -> String {
    format!("{}{}.{}", prefix, script_name, extension)
}

/// Output file path inside the docs directory.
pub fn output_path(docs_path: &Path, prefix: &str, script_name: &str, extension: &str) -> PathBuf {
    docs_path.join(output_file_name(prefix, script_name, extension))
}
