//! Directory walker and per-script page generation
//!
//! Scripts are processed one at a time in walk order. The first failure
//! aborts the run; pages already written stay on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::config::GeneratorConfig;
use crate::docstring::{clean_docstring, extract_docstring};
use crate::error::GenerateError;
use crate::naming;
use crate::render::PageTemplate;

/// Generates one documentation page per example script.
#[derive(Debug, Clone)]
pub struct Generator {
    docs_path: PathBuf,
    config: GeneratorConfig,
    template: PageTemplate,
}

impl Generator {
    /// Create a generator writing into `docs_path` with the default config
    pub fn new(docs_path: impl Into<PathBuf>) -> Self {
        Self::with_config(docs_path, GeneratorConfig::default())
    }

    /// Create a generator with an explicit config
    pub fn with_config(docs_path: impl Into<PathBuf>, config: GeneratorConfig) -> Self {
        let template = PageTemplate::from_config(&config);
        Self {
            docs_path: docs_path.into(),
            config,
            template,
        }
    }

    /// Directory the pages are written to
    pub fn docs_path(&self) -> &Path {
        &self.docs_path
    }

    /// Script tree root: `base_path` joined onto the docs directory and
    /// canonicalized when it exists.
    pub fn base_path(&self) -> PathBuf {
        let joined = self.docs_path.join(&self.config.base_path);
        match joined.canonicalize() {
            Ok(resolved) => resolved,
            Err(_) => joined,
        }
    }

    /// Find every candidate script under the base path.
    ///
    /// A candidate is any file whose name ends with the configured script
    /// extension; file contents are not inspected. Unreadable entries are
    /// skipped with a warning.
    pub fn discover(&self) -> Vec<PathBuf> {
        let base_path = self.base_path();
        let suffix = self.config.script_suffix();
        debug!("Scanning '{}' for '*{}' scripts", base_path.display(), suffix);

        let mut scripts = Vec::new();
        for entry in WalkDir::new(&base_path).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry under '{}': {}", base_path.display(), err);
                    continue;
                }
            };

            let is_candidate = entry.path().is_file()
                && entry.file_name().to_string_lossy().ends_with(&suffix);
            if is_candidate {
                scripts.push(entry.into_path());
            }
        }

        scripts
    }

    /// Path of the page generated for `script_path`
    pub fn output_path_for(&self, script_path: &Path) -> PathBuf {
        naming::output_path(
            &self.docs_path,
            &self.config.output_prefix,
            &naming::script_name(script_path),
            &self.config.output_extension,
        )
    }

    /// Generate the page for a single script and return where it was written.
    ///
    /// A progress line naming the script goes to `progress` before the
    /// script is read.
    pub fn generate_example_doc<W: Write>(
        &self,
        script_path: &Path,
        progress: &mut W,
    ) -> Result<PathBuf, GenerateError> {
        let script_name = naming::script_name(script_path);
        writeln!(progress, "generating doc for {}", script_name).map_err(GenerateError::Progress)?;

        let script_title = naming::script_title(&script_name);
        let rst_path = self.output_path_for(script_path);
        let relative_script_path =
            naming::relative_script_path(script_path, &self.config.path_anchor);

        let script_text = fs::read_to_string(script_path).map_err(|source| GenerateError::Read {
            path: script_path.to_path_buf(),
            source,
        })?;
        let script_text = normalize_newlines(&script_text);

        let docstring = extract_docstring(&script_text).map_err(|source| {
            GenerateError::Docstring {
                path: script_path.to_path_buf(),
                source,
            }
        })?;
        let docstring_rst = clean_docstring(docstring);

        let page = self.template.render(
            &script_title,
            &script_name,
            &relative_script_path,
            &docstring_rst,
        );

        debug!("Writing '{}'", rst_path.display());
        fs::write(&rst_path, page.trim_start().as_bytes()).map_err(|source| {
            GenerateError::Write {
                path: rst_path.clone(),
                source,
            }
        })?;

        Ok(rst_path)
    }

    /// Generate pages for every discovered script.
    ///
    /// Returns the written paths in processing order.
    pub fn generate_all<W: Write>(&self, progress: &mut W) -> Result<Vec<PathBuf>, GenerateError> {
        let scripts = self.discover();
        if scripts.is_empty() {
            warn!("No example scripts found under '{}'", self.base_path().display());
        }

        let mut generated = Vec::with_capacity(scripts.len());
        for script in &scripts {
            generated.push(self.generate_example_doc(script, progress)?);
        }

        Ok(generated)
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Generate pages for every script under `base_path` (relative to
/// `docs_path`) with the default settings, reporting progress on stdout.
pub fn generate_all(
    docs_path: impl Into<PathBuf>,
    base_path: impl Into<PathBuf>,
) -> Result<Vec<PathBuf>, GenerateError> {
    let config = GeneratorConfig {
        base_path: base_path.into(),
        ..GeneratorConfig::default()
    };
    let generator = Generator::with_config(docs_path, config);
    generator.generate_all(&mut std::io::stdout().lock())
}
