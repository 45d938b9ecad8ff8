pub mod extractor;
pub mod renderer;
pub mod validator;

pub use extractor::{ extract_from_document, extract_from_file, extract_from_str };
pub use renderer::render;
pub use validator::{ load_properties_from_json, properties_from_json_str, PropertyValidator };
