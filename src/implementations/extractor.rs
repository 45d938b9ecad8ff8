use log::{ debug, info };
use serde_yaml::Value;
use std::path::Path;

use crate::errors::{ read_document, PropsError, PropsResult };
use crate::models::property::{ yaml_scalar_text, PropertySet };

/// Keys leading from the document root to the property records
pub const PROPERTIES_PATH: [&str; 2] = ["data", "additionalProperties"];

/// Extract additional properties from an `api.yaml` file
pub fn extract_from_file(path: &Path) -> PropsResult<PropertySet> {
    info!("Reading API definition from {}", path.display());
    let contents = read_document(path)?;
    extract_from_str(&contents).map_err(|source| PropsError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

pub fn extract_from_str(contents: &str) -> Result<PropertySet, serde_yaml::Error> {
    let document: Value = serde_yaml::from_str(contents)?;
    Ok(extract_from_document(&document))
}

/// Walk `data.additionalProperties` and collect every well-formed record.
///
/// Anything that does not have the expected shape contributes nothing:
/// a missing path gives an empty set and a malformed record is skipped.
pub fn extract_from_document(document: &Value) -> PropertySet {
    let mut properties = PropertySet::new();

    let mut node = document;
    for key in PROPERTIES_PATH {
        match node.get(key) {
            Some(next) => {
                node = next;
            }
            None => {
                debug!("Document has no '{}' section", key);
                return properties;
            }
        }
    }

    let records = match node.as_sequence() {
        Some(records) => records,
        None => {
            debug!("additionalProperties is not a sequence");
            return properties;
        }
    };

    for (index, record) in records.iter().enumerate() {
        match record_entry(record) {
            Some((name, value)) => {
                if properties.insert(name.clone(), value).is_some() {
                    debug!("Property '{}' appears more than once, keeping the last value", name);
                }
            }
            None => debug!("Skipping malformed additionalProperties record #{}", index),
        }
    }

    properties
}

fn record_entry(record: &Value) -> Option<(String, String)> {
    let name = yaml_scalar_text(record.get("name")?)?;
    let value = match record.get("value")? {
        Value::Null => String::new(),
        other => yaml_scalar_text(other)?,
    };
    if name.is_empty() {
        return None;
    }
    Some((name, value))
}
