//! CLI command implementations

pub mod bucket;
pub mod ranges;

use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::reports::OutputFormat;
use std::path::{Path, PathBuf};

/// Resolve output format from CLI argument or config default
fn resolve_format(cli_format: &Option<String>, app_config: &AppConfig) -> AppResult<OutputFormat> {
    cli_format
        .as_deref()
        .unwrap_or(&app_config.output.default_format)
        .parse()
}

/// Write output to file with safe directory creation
fn write_output_to_file(path: &Path, content: &str, description: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    println!("{} written to: {}", description, path.display());
    Ok(())
}

/// Print console output, or write file formats to `output_path` /
/// `<plots_dir>/<default_stem>.<ext>`
fn emit_output(
    formatted_output: &str,
    format: OutputFormat,
    output_path: &Option<PathBuf>,
    default_stem: &str,
    description: &str,
    app_config: &AppConfig,
) -> AppResult<()> {
    if let Some(path) = output_path {
        write_output_to_file(path, formatted_output, description)
    } else if format.writes_file_by_default() {
        let default_path = app_config
            .output
            .plots_dir
            .join(format!("{}.{}", default_stem, format.extension()));
        write_output_to_file(&default_path, formatted_output, description)
    } else {
        print!("{}", formatted_output);
        Ok(())
    }
}
