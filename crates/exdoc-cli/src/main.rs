//! exdoc CLI - generate reStructuredText pages for example scripts

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

use exdoc_core::{Generator, GeneratorConfig, CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "exdoc")]
#[command(version = exdoc_core::VERSION)]
#[command(about = "Generate documentation pages for example scripts", long_about = None)]
struct Cli {
    /// Directory the pages are written to; the script tree is resolved
    /// relative to it
    #[arg(long, default_value = "docs/source/examples")]
    docs_dir: PathBuf,

    /// Script tree root relative to the docs directory (overrides the config)
    #[arg(long)]
    base: Option<PathBuf>,

    /// Config file (defaults to exdoc.toml in the docs directory, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// List the pages that would be generated without reading or writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let generator = Generator::with_config(&cli.docs_dir, config);

    log::debug!(
        "Docs directory '{}', script tree '{}'",
        generator.docs_path().display(),
        generator.base_path().display()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.dry_run {
        return list_pages(&generator, &mut out);
    }

    generator
        .generate_all(&mut out)
        .context("Failed to generate example documentation")?;

    Ok(())
}

/// Resolve the config: explicit file, then `<docs-dir>/exdoc.toml`, then defaults
fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match config_path(cli) {
        Some(path) => {
            log::debug!("Loading config from '{}'", path.display());
            GeneratorConfig::from_path(&path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(base) = &cli.base {
        config.base_path.clone_from(base);
    }

    Ok(config)
}

fn config_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.config {
        return Some(path.clone());
    }

    let default = cli.docs_dir.join(CONFIG_FILE);
    default.is_file().then_some(default)
}

/// Print `script -> page` for every candidate
fn list_pages(generator: &Generator, out: &mut impl Write) -> Result<()> {
    let scripts = generator.discover();
    for script in &scripts {
        writeln!(
            out,
            "{} -> {}",
            display_relative(script, &generator.base_path()),
            generator.output_path_for(script).display()
        )?;
    }
    writeln!(out, "{} example(s) found", scripts.len())?;
    Ok(())
}

fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
