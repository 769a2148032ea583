//! reStructuredText page template

use std::fmt::Write;

use crate::config::GeneratorConfig;

/// Heading underline width used by both section headings
const RULE_WIDTH: usize = 79;

/// The fixed example page layout.
///
/// Only the wording that names the toolchain is adjustable; the page
/// structure (warning comment, heading, body, download tip, source
/// listing) is always the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    /// Command shown in the run instruction, e.g. `python`
    pub interpreter: String,
    /// Script file extension shown in the run instruction
    pub extension: String,
    /// Highlight language of the literalinclude block
    pub language: String,
    /// Project name used in the source listing heading
    pub project: String,
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

impl PageTemplate {
    /// Build the template from the wording settings of a config
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            interpreter: config.interpreter.clone(),
            extension: config.script_extension.clone(),
            language: config.language.clone(),
            project: config.project.clone(),
        }
    }

    /// Fill the template.
    ///
    /// `path` is the script path relative to the repository root; the page
    /// reaches it through `../../../`. The result starts with a blank line,
    /// which the driver strips before writing.
    pub fn render(&self, title: &str, name: &str, path: &str, docstring_rst: &str) -> String {
        let rule_major = "=".repeat(RULE_WIDTH);
        let rule_minor = "-".repeat(RULE_WIDTH);
        let mut output = String::new();

        // Auto-generation warning
        writeln!(output).unwrap();
        writeln!(output, "..").unwrap();
        writeln!(output, "  NOTE: This RST file was generated by `make examples`.").unwrap();
        writeln!(output, "  Do not edit it directly.").unwrap();
        writeln!(output, "  See the exdoc generator (crates/exdoc-cli).").unwrap();
        writeln!(output).unwrap();

        // Heading and body
        writeln!(output, "{} Example", title).unwrap();
        writeln!(output, "{}", rule_major).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "{}", docstring_rst).unwrap();
        writeln!(output).unwrap();

        // Download tip
        writeln!(output, ".. TIP:: To see this example in action, download it from").unwrap();
        writeln!(output, " :download:`{} <../../../{}>`", name, path).unwrap();
        writeln!(output, " and run::").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "   $ {} {}.{}", self.interpreter, name, self.extension).unwrap();
        writeln!(output).unwrap();

        // Source listing
        writeln!(output, "Example {} Code", self.project).unwrap();
        writeln!(output, "{}", rule_minor).unwrap();
        writeln!(output, ".. literalinclude:: ../../../{}", path).unwrap();
        writeln!(output, "    :language: {}", self.language).unwrap();

        output
    }
}

/// Render a page with the default template.
pub fn render(title: &str, name: &str, path: &str, docstring_rst: &str) -> String {
    PageTemplate::default().render(title, name, path, docstring_rst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_all_sections() {
        let page = render("Foo Bar", "foo_bar", "examples/foo_bar.py", "Some text.");

        assert!(page.contains("\nFoo Bar Example\n"));
        assert!(page.contains("\nSome text.\n"));
        assert!(page.contains(":download:`foo_bar <../../../examples/foo_bar.py>`"));
        assert!(page.contains("$ python foo_bar.py"));
        assert!(page.contains(".. literalinclude:: ../../../examples/foo_bar.py"));
        assert!(page.contains("    :language: python"));
        assert!(page.contains("Example Atom Code"));
    }

    #[test]
    fn test_render_layout() {
        let page = render("Hello", "hello", "examples/hello.py", "Say hello.");
        let lines: Vec<&str> = page.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "..");
        assert!(lines[2].contains("generated by"));
        assert_eq!(lines[6], "Hello Example");
        assert_eq!(lines[7], "=".repeat(79));
        assert_eq!(lines[9], "Say hello.");
        assert!(lines[11].starts_with(".. TIP::"));
        assert!(page.ends_with("    :language: python\n"));
    }

    #[test]
    fn test_render_heading_underline_follows_title() {
        let page = render("Foo Bar", "foo_bar", "examples/foo_bar.py", "Body");
        let heading = page.find("Foo Bar Example\n").unwrap();
        let after = &page[heading + "Foo Bar Example\n".len()..];
        assert!(after.starts_with(&"=".repeat(79)));
    }

    #[test]
    fn test_default_template_matches_default_config() {
        let template = PageTemplate::default();
        assert_eq!(template, PageTemplate::from_config(&GeneratorConfig::default()));
        assert_eq!(template.interpreter, "python");
        assert_eq!(template.extension, "py");
        assert_eq!(template.project, "Atom");
    }

    #[test]
    fn test_render_custom_wording() {
        let template = PageTemplate {
            interpreter: "python3".to_string(),
            extension: "py".to_string(),
            language: "py3".to_string(),
            project: "Enaml".to_string(),
        };
        let page = template.render("Demo", "demo", "examples/demo.py", "Demo.");

        assert!(page.contains("$ python3 demo.py"));
        assert!(page.contains(":language: py3"));
        assert!(page.contains("Example Enaml Code"));
    }
}
