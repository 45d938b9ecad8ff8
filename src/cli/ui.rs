use colored::*;
use std::io::{ self, Write };

/// Print an error message
pub fn print_error<W: Write>(err: &mut W, message: &str) -> io::Result<()> {
    writeln!(err, "{} {}", "Error:".red().bold(), message)
}

/// Print a notice that does not change the exit status
pub fn print_notice<W: Write>(err: &mut W, message: &str) -> io::Result<()> {
    writeln!(err, "{}", message.yellow())
}

/// Print verbose progress
pub fn print_verbose<W: Write>(err: &mut W, message: &str) -> io::Result<()> {
    writeln!(err, "{}", message.dimmed())
}

/// Print a success message
pub fn print_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.green())
}

/// Print a failure line that carries its own wording
pub fn print_failure<W: Write>(err: &mut W, message: &str) -> io::Result<()> {
    writeln!(err, "{}", message.red())
}
