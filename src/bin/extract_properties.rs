use std::io::{ self, Write };
use std::process;

use anyhow::Result;
use apim_props::cli::{ self, commands, ExtractCli };
use clap::Parser;

fn main() -> Result<()> {
    let args = ExtractCli::parse();
    cli::setup_logging(&args.log_level);

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let exit_code = commands::extract::execute(&args, &mut stdout, &mut stderr)?;

    stdout.flush()?;
    stderr.flush()?;
    process::exit(exit_code);
}
