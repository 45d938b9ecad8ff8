pub mod models;
pub mod errors;
pub mod config;
pub mod implementations;
pub mod cli;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ ValidationConfig, DEFAULT_CONFIG_FILE };
pub use errors::{ PropsError, PropsResult };
pub use implementations::{
    extract_from_file,
    extract_from_str,
    load_properties_from_json,
    render,
    PropertyValidator,
};
pub use models::{
    property::{ Property, PropertySet },
    rule::{ RuleSet, ValidationRule },
    report::{ PropertyResult, ValidationReport },
};
pub use cli::OutputFormat;
