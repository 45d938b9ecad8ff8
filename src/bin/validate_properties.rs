use std::io::{ self, Write };
use std::process;

use anyhow::Result;
use apim_props::cli::{ self, commands, ValidateCli };
use clap::Parser;

fn main() -> Result<()> {
    let args = ValidateCli::parse();
    cli::setup_logging(&args.log_level);

    let mut stdout = io::stdout().lock();
    let exit_code = commands::validate::execute(&args, &mut stdout)?;

    stdout.flush()?;
    process::exit(exit_code);
}
