use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Read a text file, convert it to uppercase and save it as `modified_<FILE>`
#[derive(Parser, Debug)]
#[command(name = "upcase-file", author, version, about)]
pub struct Cli {
    /// File to read; when omitted the name is prompted for on stdin
    #[arg(value_name = "FILE")]
    pub file: Option<String>,
    /// Directory that relative file names are resolved against
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,
    /// Increase log verbosity (repeat for more)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
