//! DAR CLI - Convert HAR captures to DAR and inspect DAR files.
//!
//! Subcommands:
//! - `convert`: stamp a HAR capture with `renders`/`result` and write it as DAR
//! - `validate`: list every structural defect of a DAR file
//! - `info`: print the summary of a DAR file

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "dar")]
#[command(author, version, about = "Convert HAR captures to DAR and validate DAR files", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a HAR file to a DAR file
    Convert {
        /// Path to the source .har file
        input: PathBuf,

        /// Path of the .dar file to write
        output: PathBuf,
    },

    /// Validate a DAR file against the schema
    Validate {
        /// Path to the .dar file
        path: PathBuf,

        /// Output as JSON (for machine consumption)
        #[arg(long)]
        json: bool,
    },

    /// Show a summary of a DAR file
    Info {
        /// Path to the .dar file
        path: PathBuf,

        /// Output as JSON (for machine consumption)
        #[arg(long)]
        json: bool,
    },
}

/// Exit status for usage errors of `dar validate`.
const VALIDATE_USAGE_EXIT_CODE: i32 = 1;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_on_usage_error(err),
    };
    logging::init(cli.verbose);

    match cli.command {
        Commands::Convert { input, output } => commands::convert::run(&input, &output),
        Commands::Validate { path, json } => commands::validate::run(&path, json),
        Commands::Info { path, json } => commands::info::run(&path, json),
    }
}

/// Print a parse error and exit. `validate` usage errors exit with status 1;
/// everything else keeps clap's status (0 for help/version).
fn exit_on_usage_error(err: clap::Error) -> ! {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );

    let args = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
    if !informational && invoked_subcommand(args).as_deref() == Some("validate") {
        let _ = err.print();
        process::exit(VALIDATE_USAGE_EXIT_CODE);
    }

    err.exit()
}

/// First non-flag argument after the program name.
fn invoked_subcommand<I: IntoIterator<Item = String>>(args: I) -> Option<String> {
    args.into_iter().skip(1).find(|a| !a.starts_with('-'))
}
