pub mod property;
pub mod rule;
pub mod report;

// Re-export common model types
pub use property::{ Property, PropertySet };
pub use rule::{ RuleSet, ValidationRule };
pub use report::{ PropertyResult, ValidationReport };
