//! Versions command
//!
//! Usage: promptdiff versions <OLD_ID> <NEW_ID> [--dir <DIR>] [--format <FORMAT>]

use crate::commands::output::{render, OutputArgs};
use crate::source::DirVersionSource;
use clap::Args;
use promptdiff_core::{compare_versions, ExError, VersionSource};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct VersionsArgs {
    /// Id of the older version
    pub old_id: String,

    /// Id of the newer version
    pub new_id: String,

    /// Directory holding `<id>.yaml`, `<id>.yml`, or `<id>.json` files
    #[arg(long, default_value = ".promptdiff/versions")]
    pub dir: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: VersionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = DirVersionSource::new(&args.dir);
    let old = source
        .get_version(&args.old_id)
        .map_err(|e| ExError::from(e).with_op("get_version"))?;
    let new = source
        .get_version(&args.new_id)
        .map_err(|e| ExError::from(e).with_op("get_version"))?;

    let report = compare_versions(&old, &new).map_err(|e| ExError::from(e).with_op("compare"))?;
    println!("{}", render(&report, args.output.format)?);
    Ok(())
}
