//! `resolve` subcommand.

use std::path::Path;

use anyhow::{Context, Result};

use asset_uri::config::{AssetConfig, AssetOptions, OutputPath};
use asset_uri::utils::path::normalize_lexical;
use asset_uri::{AssetRequest, ResolvedUri, debug, log, resolve};

use super::ResolveArgs;

/// Resolve every file and print one line per file to stdout.
///
/// Files whose extension is not configured are echoed unchanged.
pub fn run(config: &AssetConfig, args: &ResolveArgs, cwd: &Path) -> Result<()> {
    let options = apply_overrides(config.options.clone(), args);

    let mut copies = 0;
    let mut inlined = 0;

    for file in &args.files {
        let absolute = normalize_lexical(&cwd.join(file));

        if !options.accepts(&absolute) {
            debug!("resolve"; "skipping {} (extension not configured)", file.display());
            println!("{}", file.display());
            continue;
        }

        let resolved = resolve(&AssetRequest::new(&absolute, &config.root, &options))
            .with_context(|| format!("failed to resolve `{}`", file.display()))?;

        match &resolved {
            ResolvedUri::Inline(_) => inlined += 1,
            ResolvedUri::Reference { written, .. } => copies += written.len(),
        }
        println!("{resolved}");
    }

    if args.files.len() > 1 {
        log!("resolve"; "{} files, {} inlined, {} copies written", args.files.len(), inlined, copies);
    }
    Ok(())
}

fn apply_overrides(mut options: AssetOptions, args: &ResolveArgs) -> AssetOptions {
    if let Some(name) = &args.name {
        options.name.clone_from(name);
    }
    if let Some(public_path) = &args.public_path {
        options.public_path.clone_from(public_path);
    }
    if let Some(context) = &args.context {
        options.context.clone_from(context);
    }
    if let Some(limit) = args.limit {
        options.limit = limit;
    }
    if args.no_output {
        options.output_path = OutputPath::Disabled;
    } else if !args.output_path.is_empty() {
        options.output_path = OutputPath::Dirs(args.output_path.clone());
    }
    options
}
