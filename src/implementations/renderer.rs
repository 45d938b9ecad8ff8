use anyhow::{ Context, Result };

use crate::cli::OutputFormat;
use crate::models::PropertySet;

/// Render properties in the requested format.
///
/// `env` and `github` lines are written as-is: values containing `=` or
/// newlines are not escaped.
pub fn render(properties: &PropertySet, format: OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Json =>
            serde_json::to_string_pretty(properties).context("Failed to render json output")?,
        OutputFormat::Env => key_value_lines(properties, |name| name.to_uppercase(), "="),
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(properties).context("Failed to render yaml output")?;
            yaml.trim_end().to_string()
        }
        OutputFormat::Github => key_value_lines(properties, |name| name.to_lowercase(), "="),
        OutputFormat::Console => key_value_lines(properties, |name| name.to_string(), ": "),
    };
    Ok(content)
}

fn key_value_lines<F>(properties: &PropertySet, key: F, separator: &str) -> String
    where F: Fn(&str) -> String
{
    properties
        .iter()
        .map(|(name, value)| format!("{}{}{}", key(name), separator, value))
        .collect::<Vec<_>>()
        .join("\n")
}
