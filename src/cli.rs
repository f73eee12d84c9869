//! Command-line interface implementation for bru2md.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::DEFAULT_OUTPUT_DIR;

/// Command-line arguments structure for bru2md.
#[derive(Parser, Debug)]
#[command(author, version, about = "Convert a Bruno API collection to Markdown documentation.", long_about = None)]
pub struct Args {
    /// Path to the root directory of the Bruno collection
    #[arg(value_name = "COLLECTION_PATH")]
    pub collection_path: PathBuf,

    /// Directory where the Markdown files will be written
    #[arg(short, long, value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Returns the command used to print usage when required arguments are missing.
pub fn usage() -> clap::Command {
    Args::command().help_template(
        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
    )
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                if let Err(io_error) = usage().print_help() {
                    eprintln!("Failed to print usage: {io_error}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
