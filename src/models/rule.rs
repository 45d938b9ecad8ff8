use serde::de::{ self, Deserializer };
use serde::{ Deserialize, Serialize };

use super::property::yaml_scalar_text;

/// Constraints declared for one property name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Whether the property must be present
    #[serde(default)]
    pub required: bool,

    /// Accepted values. An empty list accepts nothing.
    #[serde(default, deserialize_with = "scalar_list")]
    pub valid_values: Vec<String>,
}

impl ValidationRule {
    pub fn accepts(&self, value: &str) -> bool {
        self.valid_values.iter().any(|v| v == value)
    }

    /// Accepted values as `[a, b, c]`
    pub fn describe_valid_values(&self) -> String {
        format!("[{}]", self.valid_values.join(", "))
    }
}

// Accepts `null`, or a sequence of scalars (numbers and booleans become text).
fn scalar_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let values = Option::<Vec<serde_yaml::Value>>::deserialize(deserializer)?;
    values
        .unwrap_or_default()
        .iter()
        .map(|v| {
            yaml_scalar_text(v).ok_or_else(||
                <D::Error as de::Error>::custom(format!("valid_values entries must be scalars, found {:?}", v))
            )
        })
        .collect()
}

/// Rules keyed by property name, in rule-document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<(String, ValidationRule)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, rule: ValidationRule) {
        let name = name.into();
        match self.rules.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => {
                *existing = rule;
            }
            None => self.rules.push((name, rule)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ValidationRule> {
        self.rules
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rule)| rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_valid_values_are_read_as_text() {
        let rule: ValidationRule = serde_yaml::from_str("required: true\nvalid_values: [1, \"two\", false]").unwrap();
        assert!(rule.required);
        assert_eq!(rule.valid_values, vec!["1", "two", "false"]);
        assert!(rule.accepts("1"));
    }

    #[test]
    fn missing_fields_default_to_optional_and_empty() {
        let rule: ValidationRule = serde_yaml::from_str("{}").unwrap();
        assert_eq!(rule, ValidationRule::default());
        assert_eq!(rule.describe_valid_values(), "[]");
    }

    #[test]
    fn nested_valid_values_are_rejected() {
        let result: Result<ValidationRule, _> = serde_yaml::from_str("valid_values: [[a]]");
        assert!(result.is_err());
    }
}
