use log::debug;
use serde::Deserialize;
use std::path::Path;

use crate::errors::{ read_document, PropsError, PropsResult };
use crate::models::property::yaml_scalar_text;
use crate::models::rule::{ RuleSet, ValidationRule };

/// Rule document looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "property-validation-config.yaml";

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    validation_rules: Option<serde_yaml::Mapping>,
}

/// Validator configuration loaded from a rule document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    pub validation_rules: RuleSet,
}

impl ValidationConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> PropsResult<Self> {
        let contents = read_document(path)?;
        let config = Self::from_yaml_str(&contents).map_err(|source| PropsError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded {} validation rule(s) from {}",
            config.validation_rules.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse a rule document. An empty document or one without
    /// `validation_rules` declares no rules.
    pub fn from_yaml_str(contents: &str) -> Result<Self, serde_yaml::Error> {
        let raw: Option<RawConfig> = serde_yaml::from_str(contents)?;
        let mapping = raw.and_then(|r| r.validation_rules).unwrap_or_default();

        let mut rules = RuleSet::new();
        for (key, value) in mapping {
            let name = match yaml_scalar_text(&key) {
                Some(name) => name,
                None => {
                    return Err(<serde_yaml::Error as serde::de::Error>::custom(
                        format!("validation rule names must be scalars, found {:?}", key)
                    ));
                }
            };
            let rule: ValidationRule = if value.is_null() {
                ValidationRule::default()
            } else {
                serde_yaml::from_value(value)?
            };
            rules.insert(name, rule);
        }

        Ok(Self { validation_rules: rules })
    }
}
