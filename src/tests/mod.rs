mod extractor_tests;

use log::info;

// Initialize logging once per test binary
pub(crate) fn setup() {
    match env_logger::builder().is_test(true).try_init() {
        Ok(_) => {
            info!("Logger initialized");
        }
        Err(_) => {
            // Logger already initialized, which is fine
        }
    }
}
