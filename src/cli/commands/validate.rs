use anyhow::Result;
use log::debug;
use std::io::Write;
use std::path::Path;

use crate::cli::{ annotations, report, ValidateCli };
use crate::errors::PropsError;
use crate::implementations::{ load_properties_from_json, PropertyValidator };

/// Validate a properties file; returns the process exit status.
///
/// Everything, fatal load errors included, goes to `out` so the CI runner
/// picks up the annotations.
pub fn execute<O: Write>(args: &ValidateCli, out: &mut O) -> Result<i32> {
    let validator = match PropertyValidator::from_config_file(&args.config) {
        Ok(validator) => validator,
        Err(e) => {
            writeln!(out, "{}", config_error_line(&args.config, &e))?;
            return Ok(e.exit_code());
        }
    };

    let properties = match load_properties_from_json(&args.properties_file) {
        Ok(properties) => properties,
        Err(e) => {
            writeln!(out, "{}", properties_error_line(&args.properties_file, &e))?;
            return Ok(e.exit_code());
        }
    };

    if properties.is_empty() {
        writeln!(out, "{}", annotations::warning("No properties found in input file"))?;
    }

    let results = validator.validate_all(&properties);
    if let Ok(json) = serde_json::to_string(&results) {
        debug!("Validation report: {}", json);
    }

    report::write_report(out, &results, &properties, validator.rules())?;

    let exit_code = results.exit_code();
    writeln!(out, "{}", annotations::debug(format!("Exiting with code {}", exit_code)))?;
    Ok(exit_code)
}

fn config_error_line(path: &Path, error: &PropsError) -> String {
    match error {
        PropsError::FileNotFound(_) =>
            annotations::error(format!("Configuration file '{}' not found", path.display())),
        PropsError::Yaml { source, .. } =>
            annotations::error(format!("Invalid YAML in configuration file: {}", source)),
        other =>
            annotations::error(
                format!("Failed to load configuration file '{}': {}", path.display(), other)
            ),
    }
}

fn properties_error_line(path: &Path, error: &PropsError) -> String {
    match error {
        PropsError::FileNotFound(_) =>
            annotations::error(format!("Properties file '{}' not found", path.display())),
        PropsError::Json { source, .. } =>
            annotations::error(format!("Invalid JSON in properties file: {}", source)),
        other =>
            annotations::error(
                format!("Failed to load properties file '{}': {}", path.display(), other)
            ),
    }
}
