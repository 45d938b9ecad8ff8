use clap::{ Parser, ValueEnum };
use log::info;
use std::fmt;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

pub mod annotations;
pub mod commands;
pub mod report;
pub mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "extract-properties",
    about = "Extract properties from WSO2 APIM api.yaml file",
    version,
    long_about = None
)]
pub struct ExtractCli {
    /// Path to the api.yaml file
    pub yaml_file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Parser, Debug)]
#[command(
    name = "validate-properties",
    about = "Validate API properties against configured rules",
    version,
    long_about = None
)]
pub struct ValidateCli {
    /// Path to validation configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// JSON file containing extracted properties
    #[arg(long)]
    pub properties_file: PathBuf,

    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

/// Serialization used by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Env,
    Yaml,
    Github,
    Console,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Env => "env",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Github => "github",
            OutputFormat::Console => "console",
        };
        f.write_str(name)
    }
}

/// Logs go to stderr so they never mix with rendered output
pub fn setup_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();

    info!("Logger initialized with level: {}", log_level);
}
