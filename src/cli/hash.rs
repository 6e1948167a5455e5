//! `hash` subcommand.

use std::fs;

use anyhow::{Context, Result};

use asset_uri::hash::DigestSpec;

use super::HashArgs;

pub fn run(args: &HashArgs) -> Result<()> {
    println!("{}", digest_file(args)?);
    Ok(())
}

fn digest_file(args: &HashArgs) -> Result<String> {
    let length = args.length.map(|n| n.to_string());
    let spec = DigestSpec::parse(
        Some(args.algorithm.as_str()),
        Some(args.digest.as_str()),
        length.as_deref(),
    )?;

    let contents = fs::read(&args.file)
        .with_context(|| format!("failed to read `{}`", args.file.display()))?;
    Ok(spec.render(&contents)?)
}
