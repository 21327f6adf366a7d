//! promptdiff CLI
//!
//! Command-line front end for comparing prompt versions

use clap::{Parser, Subcommand};
use promptdiff_core::logging_facility::{self, Profile};

mod commands;
mod source;

#[derive(Debug, Parser)]
#[command(name = "promptdiff")]
#[command(about = "promptdiff - compare versions of structured prompt documents", long_about = None)]
struct Cli {
    /// Logging profile: development (readable) or production (JSON); RUST_LOG overrides the filter
    #[arg(long, global = true, default_value = "development")]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two YAML/JSON documents
    Compare(commands::compare::CompareArgs),
    /// Compare two versions stored in a directory by id
    Versions(commands::versions::VersionsArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Versions(args) => commands::versions::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
