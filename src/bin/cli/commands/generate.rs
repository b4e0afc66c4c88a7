//! Generation command implementation.
//!
//! Layers configuration (defaults, YAML file, CLI flags) and then writes,
//! prints, or checks the operations reference.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::cli::args::{Cli, OutputFormat};
use opdocs::{DocGenConfig, OperationCatalog};

/// Run the generator according to the parsed command line.
pub fn generate_command(cli: Cli) -> anyhow::Result<()> {
    let cli_root = cli.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let file_config = find_config_file(&cli.config, &cli_root)?;
    let root = resolve_root(cli.root.as_deref(), file_config.as_ref())?;

    let mut config = file_config.unwrap_or_default();
    config.root = root;
    apply_cli_overrides(&mut config, &cli);
    apply_format_output(&mut config, &cli);
    config
        .validate()
        .context("Invalid opdocs configuration")?;
    debug!(?config, "resolved configuration");

    if cli.check {
        return check_command(&config, cli.format);
    }

    if cli.stdout {
        let catalog = opdocs::build_catalog(&config)?;
        print!("{}", render(&catalog, &config, cli.format)?);
        return Ok(());
    }

    let output = match cli.format {
        OutputFormat::Markdown => opdocs::run_generation(&config)?.output,
        OutputFormat::Json => {
            let catalog = opdocs::build_catalog(&config)?;
            let output = config.resolved_output();
            opdocs::write_document(&output, &render(&catalog, &config, cli.format)?)?;
            output
        }
    };
    println!("Documentation generated in {}", output.display());
    Ok(())
}

/// Compare a fresh rendering with the document on disk.
fn check_command(config: &DocGenConfig, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = opdocs::build_catalog(config)?;
    let expected = render(&catalog, config, format)?;
    let output = config.resolved_output();

    if !opdocs::check_document(&output, &expected)? {
        anyhow::bail!(
            "{} is out of date; run opdocs to regenerate it",
            output.display()
        );
    }
    println!("{} is up to date", output.display());
    Ok(())
}

fn render(
    catalog: &OperationCatalog,
    config: &DocGenConfig,
    format: OutputFormat,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Markdown => opdocs::render_markdown(catalog, config),
        OutputFormat::Json => {
            let mut json = opdocs::render_json(catalog)?;
            json.push('\n');
            json
        }
    })
}

/// Load the explicit config file, or `.opdocs.yml`/`.opdocs.yaml` from the root.
pub fn find_config_file(
    explicit_path: &Option<PathBuf>,
    root: &Path,
) -> anyhow::Result<Option<DocGenConfig>> {
    let implicit_config = DocGenConfig::find_implicit_file(root);

    match explicit_path.clone().or(implicit_config) {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration file");
            let mut config = DocGenConfig::from_yaml_file(&path)
                .with_context(|| format!("Failed to load opdocs config {}", path.display()))?;
            // A relative `root:` is relative to the file that declares it.
            if config.root.is_relative() {
                if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    config.root = dir.join(&config.root);
                }
            }
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

/// Resolve and validate the project root.
pub fn resolve_root(
    cli_root: Option<&Path>,
    file_config: Option<&DocGenConfig>,
) -> anyhow::Result<PathBuf> {
    let root = match cli_root {
        Some(root) => root.to_path_buf(),
        None => file_config
            .map(|c| c.root.clone())
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let root_path = std::fs::canonicalize(&root)
        .with_context(|| format!("Failed to resolve project root {}", root.display()))?;

    if !root_path.is_dir() {
        anyhow::bail!("Project root must be a directory: {}", root_path.display());
    }

    Ok(root_path)
}

/// Apply command-line overrides on top of file/default configuration.
pub fn apply_cli_overrides(config: &mut DocGenConfig, cli: &Cli) {
    if let Some(dir) = &cli.operations_dir {
        config.operations_dir = dir.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(extension) = &cli.extension {
        config.extension = extension.clone();
    }
    if let Some(marker) = &cli.test_marker {
        config.test_marker = marker.clone();
    }
    for pattern in &cli.ignore {
        if !pattern.trim().is_empty() {
            config.ignore.push(pattern.clone());
        }
    }
}

/// Keep JSON runs away from the Markdown document unless `--output` says otherwise.
pub fn apply_format_output(config: &mut DocGenConfig, cli: &Cli) {
    if cli.format == OutputFormat::Json && cli.output.is_none() {
        config.output = config.output.with_extension("json");
    }
}
