use serde::Serialize;

/// Outcome of checking one rule-known property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyResult {
    pub name: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PropertyResult {
    pub fn passed(name: impl Into<String>) -> Self {
        Self { name: name.into(), valid: true, error: None }
    }

    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self { name: name.into(), valid: false, error: Some(error.into()) }
    }
}

/// Everything a validation run found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub overall_valid: bool,
    pub property_results: Vec<PropertyResult>,
    pub missing_required: Vec<String>,
    pub unknown_properties: Vec<String>,
    pub errors: Vec<String>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            overall_valid: true,
            property_results: Vec::new(),
            missing_required: Vec::new(),
            unknown_properties: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value-check failures plus missing required properties
    pub fn error_count(&self) -> usize {
        self.errors.len() + self.missing_required.len()
    }

    pub fn exit_code(&self) -> i32 {
        if self.overall_valid { 0 } else { 1 }
    }

    pub fn result_for(&self, name: &str) -> Option<&PropertyResult> {
        self.property_results.iter().find(|r| r.name == name)
    }
}
