use log::{ debug, info };
use serde_json::Value;
use std::path::Path;

use crate::config::ValidationConfig;
use crate::errors::{ read_document, PropsError, PropsResult };
use crate::models::{ PropertyResult, PropertySet, RuleSet, ValidationReport };

/// Checks extracted properties against a rule set
#[derive(Debug, Clone)]
pub struct PropertyValidator {
    rules: RuleSet,
}

impl PropertyValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { rules: config.validation_rules }
    }

    pub fn from_config_file(path: &Path) -> PropsResult<Self> {
        Ok(Self::new(ValidationConfig::from_file(path)?))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Check one property against its rule
    pub fn validate_property(&self, name: &str, value: &str) -> PropertyResult {
        let rule = match self.rules.get(name) {
            Some(rule) => rule,
            None => {
                return PropertyResult::failed(
                    name,
                    format!("Property '{}' is not defined in validation rules", name)
                );
            }
        };

        if !rule.accepts(value) {
            return PropertyResult::failed(
                name,
                format!(
                    "Property '{}' has invalid value '{}'. Valid values are: {}",
                    name,
                    value,
                    rule.describe_valid_values()
                )
            );
        }

        PropertyResult::passed(name)
    }

    /// Check required rules, then every property present. Unknown
    /// properties are recorded but never fail the run.
    pub fn validate_all(&self, properties: &PropertySet) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (name, rule) in self.rules.iter() {
            if rule.required && !properties.contains(name) {
                debug!("Required property '{}' is missing", name);
                report.missing_required.push(name.to_string());
                report.overall_valid = false;
            }
        }

        for (name, value) in properties.iter() {
            if self.rules.get(name).is_none() {
                report.unknown_properties.push(name.to_string());
                continue;
            }

            let result = self.validate_property(name, value);
            if let Some(error) = &result.error {
                report.overall_valid = false;
                report.errors.push(error.clone());
            }
            report.property_results.push(result);
        }

        info!(
            "Validation finished: valid={}, errors={}, unknown={}",
            report.overall_valid,
            report.error_count(),
            report.unknown_properties.len()
        );
        report
    }
}

/// Load the properties file written by the extractor's json format
pub fn load_properties_from_json(path: &Path) -> PropsResult<PropertySet> {
    let contents = read_document(path)?;
    properties_from_json_str(&contents).map_err(|source| PropsError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a JSON properties document. Any top-level shape other than an
/// object yields an empty set.
pub fn properties_from_json_str(contents: &str) -> Result<PropertySet, serde_json::Error> {
    let document: Value = serde_json::from_str(contents)?;
    Ok(properties_from_json_value(document))
}

pub fn properties_from_json_value(document: Value) -> PropertySet {
    match document {
        Value::Object(map) => map
            .into_iter()
            .map(|(name, value)| (name, json_text(value)))
            .collect(),
        other => {
            debug!("Properties document is not an object: {}", other);
            PropertySet::new()
        }
    }
}

fn json_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
