use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::fs;
use tempfile::tempdir;

use super::setup;
use crate::cli::OutputFormat;
use crate::config::ValidationConfig;
use crate::errors::PropsError;
use crate::implementations::{
    extract_from_file,
    extract_from_str,
    properties_from_json_str,
    render,
    PropertyValidator,
};
use crate::models::PropertySet;

const API_YAML: &str = r#"
type: api
version: v4.2.0
data:
  name: PizzaShackAPI
  context: /pizzashack
  additionalProperties:
    - name: environment
      value: prod
      display: true
    - name: Tier
      value: gold
      display: false
    - name: owner-team
      value: payments
"#;

fn sample_properties() -> PropertySet {
    extract_from_str(API_YAML).unwrap()
}

#[test]
fn extracts_every_well_formed_record_in_order() {
    setup();
    let properties = sample_properties();

    let entries: Vec<_> = properties.iter().collect();
    assert_eq!(
        entries,
        vec![("environment", "prod"), ("Tier", "gold"), ("owner-team", "payments")]
    );
}

#[test]
fn records_missing_a_key_are_skipped() {
    let yaml = r#"
data:
  additionalProperties:
    - name: kept
      value: yes-it-is
    - name: no-value
    - value: no-name
    - just-a-string
    - name: nested
      value: [a, b]
    - name: nulled
      value:
"#;
    let properties = extract_from_str(yaml).unwrap();
    let entries: Vec<_> = properties.iter().collect();
    assert_eq!(entries, vec![("kept", "yes-it-is"), ("nulled", "")]);
}

#[test]
fn blank_value_is_kept_and_fails_validation() {
    let yaml = "data:\n  additionalProperties:\n    - name: owner\n      value:\n    - name: env\n      value: prod\n";
    let properties = extract_from_str(yaml).unwrap();
    assert_eq!(properties.len(), 2);
    assert_eq!(properties.get("owner"), Some(""));

    let rules = "validation_rules:\n  owner:\n    required: true\n    valid_values: [payments]\n";
    let validator = PropertyValidator::new(ValidationConfig::from_yaml_str(rules).unwrap());
    let report = validator.validate_all(&properties);

    assert!(!report.overall_valid);
    assert!(report.missing_required.is_empty());
    assert_eq!(
        report.errors,
        vec!["Property 'owner' has invalid value ''. Valid values are: [payments]"]
    );
}

#[test]
fn scalar_values_are_kept_as_text() {
    let yaml = "data:\n  additionalProperties:\n    - name: port\n      value: 8080\n    - name: public\n      value: true\n";
    let properties = extract_from_str(yaml).unwrap();
    assert_eq!(properties.get("port"), Some("8080"));
    assert_eq!(properties.get("public"), Some("true"));
}

#[test]
fn duplicate_names_collapse_to_last_value() {
    let yaml = r#"
data:
  additionalProperties:
    - name: env
      value: dev
    - name: region
      value: eu
    - name: env
      value: prod
"#;
    let properties = extract_from_str(yaml).unwrap();
    assert_eq!(properties.len(), 2);
    assert_eq!(properties.get("env"), Some("prod"));
}

#[test]
fn missing_or_misshapen_sections_yield_empty_set() {
    for yaml in [
        "",
        "type: api\n",
        "data:\n  name: NoProps\n",
        "data:\n  additionalProperties: not-a-list\n",
        "data: [1, 2]\n",
        "- just\n- a\n- list\n",
    ] {
        let properties = extract_from_str(yaml).unwrap();
        assert!(properties.is_empty(), "expected no properties for {:?}", yaml);
    }
}

#[test]
fn malformed_yaml_is_an_error() {
    assert!(extract_from_str("data: [unclosed").is_err());
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    match extract_from_file(&path) {
        Err(PropsError::FileNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn unparsable_file_is_reported_as_yaml_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("api.yaml");
    fs::write(&path, "data:\n  additionalProperties: [\n").unwrap();
    assert!(matches!(extract_from_file(&path), Err(PropsError::Yaml { .. })));
}

#[test]
fn json_output_decodes_to_the_same_properties() {
    let properties = sample_properties();
    let json = render(&properties, OutputFormat::Json).unwrap();

    assert!(json.starts_with("{\n  \"environment\": \"prod\""));
    assert_eq!(properties_from_json_str(&json).unwrap(), properties);
}

#[test]
fn env_and_github_share_the_same_keys() {
    let properties = sample_properties();
    let env = render(&properties, OutputFormat::Env).unwrap();
    let github = render(&properties, OutputFormat::Github).unwrap();

    assert_eq!(env, "ENVIRONMENT=prod\nTIER=gold\nOWNER-TEAM=payments");
    assert_eq!(github, "environment=prod\ntier=gold\nowner-team=payments");

    let upper_keys = |text: &str| -> BTreeSet<String> {
        text.lines()
            .map(|line| line.split('=').next().unwrap_or_default().to_uppercase())
            .collect()
    };
    assert_eq!(upper_keys(&env), upper_keys(&github));
}

#[test]
fn env_values_are_not_escaped() {
    let properties: PropertySet = [("query", "a=b"), ("note", "line1\nline2")].into_iter().collect();
    let env = render(&properties, OutputFormat::Env).unwrap();
    assert_eq!(env, "QUERY=a=b\nNOTE=line1\nline2");
}

#[test]
fn console_and_yaml_formats() {
    let properties = sample_properties();

    let console = render(&properties, OutputFormat::Console).unwrap();
    assert_eq!(console, "environment: prod\nTier: gold\nowner-team: payments");

    let yaml = render(&properties, OutputFormat::Yaml).unwrap();
    let decoded: serde_yaml::Mapping = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded.get("Tier").and_then(|v| v.as_str()), Some("gold"));
    assert!(!yaml.ends_with('\n'));
}
