use anyhow::Result;
use log::debug;
use std::fs;
use std::io::Write;

use crate::cli::{ ui, ExtractCli };
use crate::errors::PropsError;
use crate::implementations::{ extract_from_file, render };

/// Extract properties and emit them; returns the process exit status
pub fn execute<O: Write, E: Write>(args: &ExtractCli, out: &mut O, err: &mut E) -> Result<i32> {
    if args.verbose {
        ui::print_verbose(
            err,
            &format!("Extracting properties from: {}", args.yaml_file.display())
        )?;
    }

    let properties = match extract_from_file(&args.yaml_file) {
        Ok(properties) => properties,
        Err(e) => {
            report_load_error(err, &e)?;
            return Ok(e.exit_code());
        }
    };

    if properties.is_empty() {
        ui::print_notice(err, "No properties found in additionalProperties section")?;
        return Ok(0);
    }

    if args.verbose {
        ui::print_verbose(err, &format!("Found {} properties", properties.len()))?;
    }

    let content = render(&properties, args.format)?;

    match &args.output {
        Some(path) => {
            debug!("Writing {} output to {}", args.format, path.display());
            if let Err(e) = fs::write(path, &content) {
                ui::print_error(err, &format!("Failed to write {}: {}", path.display(), e))?;
                return Ok(1);
            }
            ui::print_success(out, &format!("Properties written to: {}", path.display()))?;
        }
        None => {
            writeln!(out, "{}", content)?;
        }
    }

    Ok(0)
}

fn report_load_error<E: Write>(err: &mut E, error: &PropsError) -> std::io::Result<()> {
    match error {
        PropsError::Yaml { source, .. } => {
            ui::print_failure(err, &format!("Error parsing YAML file: {}", source))
        }
        other => ui::print_error(err, &other.to_string()),
    }
}
