//! Compare command
//!
//! Usage: promptdiff compare <OLD> <NEW> [--old-id <ID>] [--new-id <ID>] [--format <FORMAT>]

use crate::commands::output::{render, OutputArgs};
use crate::source::load_version;
use clap::Args;
use promptdiff_core::{compare_versions, ExError};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Older document (.yaml, .yml, or .json)
    pub old: PathBuf,

    /// Newer document
    pub new: PathBuf,

    /// Label for the old version (default: file stem)
    #[arg(long)]
    pub old_id: Option<String>,

    /// Label for the new version (default: file stem)
    #[arg(long)]
    pub new_id: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let old = load_version(&args.old, args.old_id.as_deref())
        .map_err(|e| ExError::from(e).with_op("load_version"))?;
    let new = load_version(&args.new, args.new_id.as_deref())
        .map_err(|e| ExError::from(e).with_op("load_version"))?;

    let report = compare_versions(&old, &new).map_err(|e| ExError::from(e).with_op("compare"))?;
    println!("{}", render(&report, args.output.format)?);
    Ok(())
}
