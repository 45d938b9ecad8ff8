use std::io::{ self, Write };

use crate::cli::annotations;
use crate::models::{ PropertySet, RuleSet, ValidationReport };

pub const REPORT_TITLE: &str = "Property Validation Report";

/// Write the annotated validation report, summary line included
pub fn write_report<W: Write>(
    out: &mut W,
    report: &ValidationReport,
    properties: &PropertySet,
    rules: &RuleSet
) -> io::Result<()> {
    writeln!(out, "{}", annotations::group(REPORT_TITLE))?;

    if report.overall_valid {
        writeln!(out, "✅ VALIDATION PASSED")?;
    } else {
        writeln!(out, "❌ VALIDATION FAILED")?;
    }

    writeln!(out)?;
    writeln!(out, "Extracted Properties ({}):", properties.len())?;
    for (name, value) in properties.iter() {
        writeln!(out, "   {}: {}", name, value)?;
    }

    if !report.property_results.is_empty() {
        writeln!(out)?;
        writeln!(out, "Property Validation Results:")?;
        for result in &report.property_results {
            let status = if result.valid { "✅" } else { "❌" };
            let value = properties.get(&result.name).unwrap_or("N/A");
            writeln!(out, "   {} {}: {}", status, result.name, value)?;
        }
    }

    for name in &report.unknown_properties {
        let value = properties.get(name).unwrap_or("N/A");
        writeln!(
            out,
            "{}",
            annotations::warning(
                format!("Unknown property '{}' with value '{}' (not in validation rules)", name, value)
            )
        )?;
    }

    for name in &report.missing_required {
        let valid_values = rules
            .get(name)
            .map(|rule| rule.describe_valid_values())
            .unwrap_or_else(|| "[]".to_string());
        writeln!(
            out,
            "{}",
            annotations::error(
                format!("Missing required property '{}'. Valid values are: {}", name, valid_values)
            )
        )?;
    }

    for error in &report.errors {
        writeln!(out, "{}", annotations::error(error))?;
    }

    writeln!(out, "{}", annotations::end_group())?;

    if report.overall_valid {
        writeln!(out, "{}", annotations::notice("Property validation completed successfully"))?;
    } else {
        writeln!(
            out,
            "{}",
            annotations::error(
                format!("Property validation failed with {} error(s)", report.error_count())
            )
        )?;
    }

    Ok(())
}
